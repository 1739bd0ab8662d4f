use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use kira_oncoparam::batch::compute_batch;
use kira_oncoparam::cli::{BatchArgs, Cli, Commands, CompareArgs, PanelCommand, RunArgs};
use kira_oncoparam::config::{HeuristicProfile, ModelConfig};
use kira_oncoparam::ctx::Ctx;
use kira_oncoparam::io;
use kira_oncoparam::pipeline::{Pipeline, Stage};
use kira_oncoparam::pipeline::stage0_scaffold::Stage0Scaffold;
use kira_oncoparam::pipeline::stage1_input::Stage1Input;
use kira_oncoparam::pipeline::stage7_timecourse::Stage7Timecourse;
use kira_oncoparam::pipeline::stage8_output::Stage8Output;
use kira_oncoparam::registry::BiomarkerPanel;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ModelConfig::builtin().context("failed to load built-in registry")?;

    match cli.command {
        Commands::Run(args) => handle_run(args, config)?,
        Commands::Batch(args) => handle_batch(args, config)?,
        Commands::Compare(args) => handle_compare(args, config)?,
        Commands::Panel(args) => match args.command {
            PanelCommand::Show(show) => {
                print_panel(&config, show.panel.into());
            }
        },
        Commands::Validate(args) => {
            let mut ctx = Ctx::new(
                args.input,
                PathBuf::from("."),
                args.panel.into(),
                config,
                false,
                false,
                env!("CARGO_PKG_VERSION"),
            );
            let pipeline = Pipeline::new(vec![Box::new(Stage1Input::new())]);
            pipeline.run(&mut ctx)?;
            print_validate_summary(&ctx);
        }
    }

    Ok(())
}

fn handle_run(args: RunArgs, config: ModelConfig) -> Result<()> {
    let mut ctx = Ctx::new(
        args.input,
        args.out,
        args.panel.into(),
        config,
        args.json,
        args.tsv,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.heuristics_path = args.heuristics;

    let pipeline = Pipeline::new(full_stages());
    pipeline.run(&mut ctx)?;

    print_summary(&ctx)
}

fn handle_batch(args: BatchArgs, config: ModelConfig) -> Result<()> {
    let config = match &args.heuristics {
        Some(path) => config.with_heuristics(HeuristicProfile::from_json_file(path)?),
        None => config,
    };
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;
    let records = io::cohort::read_cohort(&args.input)?;
    let results = compute_batch(&config, &records, args.panel.into(), args.threads)?;
    let out_path = args.out.join("cohort.tsv");
    io::cohort::write_cohort_tsv(&out_path, &results)?;

    let corrected = results
        .iter()
        .filter(|r| !r.output.violations.is_empty())
        .count();
    println!("kira-oncoparam batch ok");
    println!("patients: {}", results.len());
    println!("with constraint corrections: {}", corrected);
    println!("output: {}", out_path.display());
    Ok(())
}

fn handle_compare(args: CompareArgs, config: ModelConfig) -> Result<()> {
    if args.input.len() < 2 {
        anyhow::bail!("compare requires at least 2 --input values");
    }
    let panel: BiomarkerPanel = args.panel.into();
    let ordered_inputs = order_timecourse_inputs(&args.input);

    let mut master_ctx = Ctx::new(
        ordered_inputs[0].clone(),
        args.out.clone(),
        panel,
        config.clone(),
        true,
        false,
        env!("CARGO_PKG_VERSION"),
    );
    master_ctx.timecourse = true;

    for input in ordered_inputs {
        let label = label_from_path(&input);
        let out_dir = master_ctx.output.out_dir.join(&label);
        let mut ctx = Ctx::new(
            input,
            out_dir,
            panel,
            config.clone(),
            true,
            false,
            env!("CARGO_PKG_VERSION"),
        );
        ctx.heuristics_path = args.heuristics.clone();
        let pipeline = Pipeline::new(full_stages());
        pipeline.run(&mut ctx)?;
        master_ctx.warnings.extend(
            ctx.warnings
                .iter()
                .map(|w| format!("{}: {}", label, w)),
        );
        master_ctx.timepoints.push(ctx.timepoint(label)?);
    }

    let pipeline = Pipeline::new(vec![
        Box::new(Stage7Timecourse::new()),
        Box::new(Stage8Output::new()),
    ]);
    pipeline.run(&mut master_ctx)?;
    print_timecourse_summary(&master_ctx);
    Ok(())
}

fn full_stages() -> Vec<Box<dyn Stage>> {
    let mut stages: Vec<Box<dyn Stage>> = vec![Box::new(Stage0Scaffold::new())];
    stages.extend(Pipeline::compute_stages());
    stages.push(Box::new(Stage8Output::new()));
    stages
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) {
    println!("kira-oncoparam validate ok");
    if let Some(resolved) = &ctx.resolved {
        println!("measured: {}", resolved.measured_count());
    }
    if let Some(qc) = &ctx.qc {
        println!("confidence: {:.1}%", qc.confidence);
        println!("critical alerts: {}", qc.critical_alerts.len());
    }
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}

fn print_panel(config: &ModelConfig, panel: BiomarkerPanel) {
    let members = config.registry.members_of(panel);
    println!(
        "panel {} ({} biomarkers, registry {}):",
        panel.key(),
        members.len(),
        config.registry.version
    );
    for spec in members {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            spec.key(),
            spec.category.key(),
            spec.label,
            spec.unit,
            spec.normal_range
        );
    }
}

fn order_timecourse_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let indexed: Option<Vec<(u64, PathBuf)>> = inputs
        .iter()
        .map(|p| time_index(&label_from_path(p)).map(|t| (t, p.clone())))
        .collect();
    match indexed {
        Some(mut indexed) => {
            indexed.sort_by_key(|(t, _)| *t);
            indexed.into_iter().map(|(_, p)| p).collect()
        }
        None => inputs.to_vec(),
    }
}

/// Numeric index of the last `_T<digits>` token in a label.
fn time_index(label: &str) -> Option<u64> {
    label.rmatch_indices("_T").find_map(|(pos, _)| {
        let digits: String = label[pos + 2..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    })
}

fn label_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("input");
    name.trim_end_matches(".gz")
        .trim_end_matches(".json")
        .trim_end_matches(".tsv")
        .to_string()
}

fn print_timecourse_summary(ctx: &Ctx) {
    if let Some(tc) = &ctx.timecourse_result {
        println!("timepoints: {}", tc.labels.join(" -> "));
        for c in &tc.comparisons {
            println!(
                "{} -> {}: improved={} worsened={} unchanged={} changed={}",
                c.from,
                c.to,
                c.counts.improved,
                c.counts.worsened,
                c.counts.unchanged,
                c.counts.changed
            );
        }
        println!(
            "overall: improved={} worsened={} unchanged={} changed={}",
            tc.overall.improved, tc.overall.worsened, tc.overall.unchanged, tc.overall.changed
        );
        println!("output: {}", ctx.output.comparison_path.display());
    }
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
