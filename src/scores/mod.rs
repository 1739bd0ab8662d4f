pub mod composite;
pub mod constraints;
pub mod coverage;
pub mod formula;
pub mod names;
pub mod params;
pub mod risk;
pub mod stability;
pub mod timecourse;

use std::ops::Index;

use crate::input::CompleteBiomarkerVector;
use crate::scores::names::{PARAMETER_COUNT, Parameter, SCORE_COUNT, Score};

#[derive(Debug, Clone, PartialEq)]
pub struct CompositeScoreSet {
    values: [f64; SCORE_COUNT],
}

impl CompositeScoreSet {
    pub fn from_values(values: [f64; SCORE_COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, score: Score) -> f64 {
        self.values[score.index()]
    }

    pub fn values(&self) -> &[f64; SCORE_COUNT] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (Score, f64)> + '_ {
        Score::ALL.iter().map(|&s| (s, self.get(s)))
    }
}

impl Index<Score> for CompositeScoreSet {
    type Output = f64;

    fn index(&self, score: Score) -> &f64 {
        &self.values[score.index()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    values: [f64; PARAMETER_COUNT],
}

impl ParameterSet {
    pub fn from_values(values: [f64; PARAMETER_COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, parameter: Parameter) -> f64 {
        self.values[parameter.index()]
    }

    pub fn values(&self) -> &[f64; PARAMETER_COUNT] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        Parameter::ALL.iter().map(|&p| (p, self.get(p)))
    }
}

impl Index<Parameter> for ParameterSet {
    type Output = f64;

    fn index(&self, parameter: Parameter) -> &f64 {
        &self.values[parameter.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterValue {
    pub parameter: Parameter,
    pub value: f64,
}

/// A repaired invariant. Not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintViolation {
    pub constraint: String,
    pub description: String,
    pub original: Vec<ParameterValue>,
    pub corrected: Vec<ParameterValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageClass {
    CoreDriven,
    PartlyCore,
    ImputedOnly,
}

impl CoverageClass {
    pub fn key(self) -> &'static str {
        match self {
            Self::CoreDriven => "core_driven",
            Self::PartlyCore => "partly_core",
            Self::ImputedOnly => "imputed_only",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterCoverage {
    pub parameter: Parameter,
    pub measured: usize,
    pub total: usize,
    pub class: CoverageClass,
}

#[derive(Debug, Clone)]
pub struct RiskFlag {
    pub name: String,
    pub fired: bool,
    pub threshold: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilityStatus {
    Stable,
    Marginal,
    Unstable,
}

impl StabilityStatus {
    pub fn key(self) -> &'static str {
        match self {
            Self::Stable => "STABLE",
            Self::Marginal => "MARGINAL",
            Self::Unstable => "UNSTABLE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StabilityCheck {
    pub name: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StabilityAssessment {
    pub checks: Vec<StabilityCheck>,
    pub score: f64,
    pub status: StabilityStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceRisk {
    pub value: f64,
    pub level: RiskLevel,
}

/// One measurement occasion in a longitudinal comparison.
#[derive(Debug, Clone)]
pub struct Timepoint {
    pub label: String,
    pub biomarkers: CompleteBiomarkerVector,
    pub parameters: ParameterSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improved,
    Worsened,
    Unchanged,
    Changed,
}

impl Trend {
    pub fn key(self) -> &'static str {
        match self {
            Self::Improved => "improved",
            Self::Worsened => "worsened",
            Self::Unchanged => "unchanged",
            Self::Changed => "changed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BiomarkerChange {
    pub key: String,
    pub previous: f64,
    pub current: f64,
    pub delta: f64,
    pub pct_change: f64,
    pub trend: Trend,
    pub interpretation: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrendCounts {
    pub improved: usize,
    pub worsened: usize,
    pub unchanged: usize,
    pub changed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDelta {
    pub parameter: Parameter,
    pub previous: f64,
    pub current: f64,
    pub delta: f64,
}

#[derive(Debug, Clone)]
pub struct TimepointComparison {
    pub from: String,
    pub to: String,
    pub biomarkers: Vec<BiomarkerChange>,
    pub parameters: Vec<ParameterDelta>,
    pub counts: TrendCounts,
}

#[derive(Debug, Clone)]
pub struct TimecourseResult {
    pub labels: Vec<String>,
    pub comparisons: Vec<TimepointComparison>,
    /// First time point against the last.
    pub overall: TrendCounts,
}
