use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub source: Option<String>,
    pub panel: String,
    pub measured: u64,
    pub imputed: u64,
    pub imputed_keys: Vec<String>,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiomarkerEntry {
    pub key: String,
    pub value: f64,
    pub imputed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterEntry {
    pub key: String,
    pub symbol: String,
    pub group: String,
    pub value: f64,
    pub lo: f64,
    pub hi: f64,
    pub heuristic: bool,
    pub coverage: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterValue {
    pub parameter: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintViolation {
    pub constraint: String,
    pub description: String,
    pub original: Vec<ParameterValue>,
    pub corrected: Vec<ParameterValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Qc {
    pub warnings: Vec<String>,
    pub critical_alerts: Vec<String>,
    pub completeness: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub stability: String,
    pub stability_score: f64,
    pub resistance_risk: String,
    pub resistance_risk_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFlag {
    pub name: String,
    pub fired: bool,
    pub threshold: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OncoParamV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub biomarkers: Vec<BiomarkerEntry>,
    pub scores: BTreeMap<String, f64>,
    pub parameters: Vec<ParameterEntry>,
    pub constraint_violations: Vec<ConstraintViolation>,
    pub qc: Option<Qc>,
    pub assessment: Option<Assessment>,
    pub risk_flags: Vec<RiskFlag>,
}

impl OncoParamV1 {
    pub fn empty(tool_version: &str, panel: &str) -> Self {
        Self {
            tool: "kira-oncoparam".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                source: None,
                panel: panel.to_string(),
                measured: 0,
                imputed: 0,
                imputed_keys: Vec::new(),
                confidence: None,
            },
            biomarkers: Vec::new(),
            scores: BTreeMap::new(),
            parameters: Vec::new(),
            constraint_violations: Vec::new(),
            qc: None,
            assessment: None,
            risk_flags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiomarkerChange {
    pub key: String,
    pub previous: f64,
    pub current: f64,
    pub delta: f64,
    pub pct_change: f64,
    pub trend: String,
    pub interpretation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDelta {
    pub key: String,
    pub previous: f64,
    pub current: f64,
    pub delta: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendCounts {
    pub improved: u64,
    pub worsened: u64,
    pub unchanged: u64,
    pub changed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimepointComparison {
    pub from: String,
    pub to: String,
    pub summary: TrendCounts,
    pub biomarkers: Vec<BiomarkerChange>,
    pub parameters: Vec<ParameterDelta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub timepoints: Vec<String>,
    pub comparisons: Vec<TimepointComparison>,
    pub overall: TrendCounts,
}
