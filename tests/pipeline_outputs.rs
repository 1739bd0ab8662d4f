use std::fs;
use std::path::Path;

use kira_oncoparam::config::ModelConfig;
use kira_oncoparam::ctx::Ctx;
use kira_oncoparam::pipeline::stage0_scaffold::Stage0Scaffold;
use kira_oncoparam::pipeline::stage7_timecourse::Stage7Timecourse;
use kira_oncoparam::pipeline::stage8_output::Stage8Output;
use kira_oncoparam::pipeline::{Pipeline, Stage};
use kira_oncoparam::registry::BiomarkerPanel;
use kira_oncoparam::schema::v1::{ComparisonV1, OncoParamV1};
use tempfile::TempDir;

fn all_stages() -> Vec<Box<dyn Stage>> {
    let mut stages: Vec<Box<dyn Stage>> = vec![Box::new(Stage0Scaffold::new())];
    stages.extend(Pipeline::compute_stages());
    stages.push(Box::new(Stage8Output::new()));
    stages
}

fn run_pipeline(input: &Path, out: &Path, panel: BiomarkerPanel) -> Ctx {
    let config = ModelConfig::builtin().unwrap();
    let mut ctx = Ctx::new(
        input.to_path_buf(),
        out.to_path_buf(),
        panel,
        config,
        true,
        true,
        "0.0.0-test",
    );
    Pipeline::new(all_stages()).run(&mut ctx).unwrap();
    ctx
}

#[test]
fn json_report_contents() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("patient.tsv");
    fs::write(&input, "ca153\t120\ncd8\t640\nglucose\t101\n").unwrap();
    let out = tmp.path().join("out");
    let ctx = run_pipeline(&input, &out, BiomarkerPanel::Full);

    let content = fs::read_to_string(&ctx.output.json_path).unwrap();
    let report: OncoParamV1 = serde_json::from_str(&content).unwrap();
    assert_eq!(report.tool, "kira-oncoparam");
    assert_eq!(report.schema_version, "v1");
    assert_eq!(report.input_meta.panel, "full");
    assert_eq!(report.input_meta.measured, 3);
    assert_eq!(report.input_meta.imputed, 44);
    assert_eq!(report.input_meta.imputed_keys.len(), 44);
    assert_eq!(report.biomarkers.len(), 47);
    assert_eq!(report.scores.len(), 21);
    assert!(report.scores.contains_key("G"));
    assert_eq!(report.parameters.len(), 37);
    assert_eq!(report.parameters[0].key, "lambda1");
    assert_eq!(report.parameters[0].group, "growth");
    assert!(report.parameters.iter().all(|p| p.coverage.is_none()));
    assert!(report.parameters.iter().all(|p| p.lo <= p.value && p.value <= p.hi));
    assert_eq!(report.risk_flags.len(), 14);

    let qc = report.qc.unwrap();
    assert_eq!(qc.critical_alerts.len(), 1);
    assert!(qc.critical_alerts[0].contains("CA 15-3"));
    assert!(report.assessment.is_some());
}

#[test]
fn core_panel_reports_coverage() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("patient.json");
    fs::write(&input, r#"{"ca153": 22, "tk1": 1.1, "ctdna": 0.4}"#).unwrap();
    let out = tmp.path().join("out");
    let ctx = run_pipeline(&input, &out, BiomarkerPanel::Core);

    assert!(
        ctx.warnings
            .iter()
            .any(|w| w.contains("'ctdna' is not part of the core panel"))
    );
    let report: OncoParamV1 =
        serde_json::from_str(&fs::read_to_string(&ctx.output.json_path).unwrap()).unwrap();
    assert_eq!(report.input_meta.panel, "core");
    assert!(report.parameters.iter().all(|p| p.coverage.is_some()));
    let alpha = report.parameters.iter().find(|p| p.key == "alphaA").unwrap();
    assert_eq!(alpha.coverage.as_deref(), Some("imputed_only"));
}

#[test]
fn tsv_table_contents() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("patient.tsv");
    fs::write(&input, "albumin\t3.1\n").unwrap();
    let out = tmp.path().join("out");
    let ctx = run_pipeline(&input, &out, BiomarkerPanel::Full);

    let content = fs::read_to_string(&ctx.output.tsv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "parameter\tsymbol\tvalue\tlo\thi\tcoverage");
    assert_eq!(lines.len(), 38);
    let k: Vec<&str> = lines[5].split('\t').collect();
    assert_eq!(k[0], "K");
    assert_eq!(k[2], "900.000000");
    assert_eq!(k[5], "-");
}

#[test]
fn comparison_written_for_timepoints() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let config = ModelConfig::builtin().unwrap();

    let mut master = Ctx::new(
        tmp.path().join("T0.tsv"),
        out.clone(),
        BiomarkerPanel::Full,
        config.clone(),
        true,
        false,
        "0.0.0-test",
    );
    master.timecourse = true;

    for (label, body) in [("T0", "ca153\t40\n"), ("T1", "ca153\t22\n")] {
        let input = tmp.path().join(format!("{label}.tsv"));
        fs::write(&input, body).unwrap();
        let ctx = run_pipeline(&input, &out.join(label), BiomarkerPanel::Full);
        master.timepoints.push(ctx.timepoint(label.to_string()).unwrap());
    }

    let stages: Vec<Box<dyn Stage>> = vec![
        Box::new(Stage7Timecourse::new()),
        Box::new(Stage8Output::new()),
    ];
    Pipeline::new(stages).run(&mut master).unwrap();

    let comparison: ComparisonV1 =
        serde_json::from_str(&fs::read_to_string(&master.output.comparison_path).unwrap())
            .unwrap();
    assert_eq!(comparison.timepoints, vec!["T0", "T1"]);
    assert_eq!(comparison.comparisons.len(), 1);
    assert_eq!(comparison.comparisons[0].summary.improved, 1);
    assert_eq!(comparison.overall.unchanged, 46);
    let ca153 = comparison.comparisons[0]
        .biomarkers
        .iter()
        .find(|b| b.key == "ca153")
        .unwrap();
    assert_eq!(ca153.trend, "improved");
    assert!(!master.output.json_path.exists());
}

#[test]
fn timecourse_stage_needs_two_timepoints() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("T0.tsv");
    fs::write(&input, "ca153\t40\n").unwrap();
    let out = tmp.path().join("out");

    let mut master = Ctx::new(
        input.clone(),
        out.clone(),
        BiomarkerPanel::Full,
        ModelConfig::builtin().unwrap(),
        true,
        false,
        "0.0.0-test",
    );
    master.timecourse = true;
    let ctx = run_pipeline(&input, &out.join("T0"), BiomarkerPanel::Full);
    master.timepoints.push(ctx.timepoint("T0".to_string()).unwrap());

    let stages: Vec<Box<dyn Stage>> = vec![Box::new(Stage7Timecourse::new())];
    let err = Pipeline::new(stages).run(&mut master).unwrap_err();
    assert!(format!("{err:#}").contains("at least 2 timepoints"));
    assert!(master.timecourse_result.is_none());
}
