use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::registry::BiomarkerPanel;

#[derive(Debug, Parser)]
#[command(
    name = "kira-oncoparam",
    version,
    about = "Derive oncology model parameters from a blood biomarker panel"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Batch(BatchArgs),
    Compare(CompareArgs),
    Panel(PanelArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Measurement file (TSV, JSON, optionally .gz)")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, value_enum, default_value_t = PanelArg::Full)]
    pub panel: PanelArg,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, help = "JSON file overriding heuristic coefficients")]
    pub heuristics: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    #[arg(long, help = "Cohort TSV (patient_id column plus one column per biomarker)")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, value_enum, default_value_t = PanelArg::Full)]
    pub panel: PanelArg,

    #[arg(long, default_value_t = 0, help = "Number of threads (0 = auto)")]
    pub threads: usize,

    #[arg(long, help = "JSON file overriding heuristic coefficients")]
    pub heuristics: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    #[arg(long, num_args = 1.., help = "Measurement files in time order (repeatable)")]
    pub input: Vec<PathBuf>,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, value_enum, default_value_t = PanelArg::Full)]
    pub panel: PanelArg,

    #[arg(long, help = "JSON file overriding heuristic coefficients")]
    pub heuristics: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PanelArgs {
    #[command(subcommand)]
    pub command: PanelCommand,
}

#[derive(Debug, Subcommand)]
pub enum PanelCommand {
    Show(PanelShowArgs),
}

#[derive(Debug, Args)]
pub struct PanelShowArgs {
    #[arg(long, value_enum, default_value_t = PanelArg::Full)]
    pub panel: PanelArg,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Measurement file (TSV, JSON, optionally .gz)")]
    pub input: PathBuf,

    #[arg(long, value_enum, default_value_t = PanelArg::Full)]
    pub panel: PanelArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PanelArg {
    Full,
    Optimized,
    Core,
}

impl From<PanelArg> for BiomarkerPanel {
    fn from(arg: PanelArg) -> Self {
        match arg {
            PanelArg::Full => BiomarkerPanel::Full,
            PanelArg::Optimized => BiomarkerPanel::Optimized,
            PanelArg::Core => BiomarkerPanel::Core,
        }
    }
}
