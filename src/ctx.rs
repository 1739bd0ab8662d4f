use std::path::PathBuf;

use crate::config::ModelConfig;
use crate::input::{CompleteBiomarkerVector, MeasurementSet, QcReport, ResolvedMeasurements};
use crate::registry::BiomarkerPanel;
use crate::schema::v1::OncoParamV1;
use crate::scores::{
    CompositeScoreSet, ConstraintViolation, ParameterCoverage, ParameterSet, ResistanceRisk,
    RiskFlag, StabilityAssessment, TimecourseResult, Timepoint,
};

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
    pub comparison_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub panel: BiomarkerPanel,
    pub config: ModelConfig,
    pub heuristics_path: Option<PathBuf>,
    pub timecourse: bool,
    pub write_json: bool,
    pub write_tsv: bool,
    pub warnings: Vec<String>,
    pub measurements: Option<MeasurementSet>,
    pub resolved: Option<ResolvedMeasurements>,
    pub qc: Option<QcReport>,
    pub biomarkers: Option<CompleteBiomarkerVector>,
    pub scores: Option<CompositeScoreSet>,
    pub parameters: Option<ParameterSet>,
    pub violations: Vec<ConstraintViolation>,
    pub stability: Option<StabilityAssessment>,
    pub resistance_risk: Option<ResistanceRisk>,
    pub risk_flags: Vec<RiskFlag>,
    pub coverage: Vec<ParameterCoverage>,
    pub timepoints: Vec<Timepoint>,
    pub timecourse_result: Option<TimecourseResult>,
    pub output: OutputPaths,
    pub report: OncoParamV1,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        out_dir: PathBuf,
        panel: BiomarkerPanel,
        config: ModelConfig,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("oncoparam.json");
        let tsv_path = out_dir.join("oncoparam.tsv");
        let comparison_path = out_dir.join("comparison.json");
        let report = OncoParamV1::empty(tool_version, panel.key());
        Self {
            input,
            panel,
            config,
            heuristics_path: None,
            timecourse: false,
            write_json,
            write_tsv,
            warnings: Vec::new(),
            measurements: None,
            resolved: None,
            qc: None,
            biomarkers: None,
            scores: None,
            parameters: None,
            violations: Vec::new(),
            stability: None,
            resistance_risk: None,
            risk_flags: Vec::new(),
            coverage: Vec::new(),
            timepoints: Vec::new(),
            timecourse_result: None,
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
                comparison_path,
            },
            report,
        }
    }

    /// Snapshot of this run as one point of a longitudinal comparison.
    pub fn timepoint(&self, label: String) -> anyhow::Result<Timepoint> {
        let biomarkers = self
            .biomarkers
            .clone()
            .ok_or_else(|| anyhow::anyhow!("biomarkers missing"))?;
        let parameters = self
            .parameters
            .clone()
            .ok_or_else(|| anyhow::anyhow!("parameters missing"))?;
        Ok(Timepoint {
            label,
            biomarkers,
            parameters,
        })
    }
}
