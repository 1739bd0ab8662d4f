pub mod impute;
pub mod qc;
pub mod reader;

use std::collections::BTreeMap;

use crate::error::OncoError;
use crate::registry::{BIOMARKER_COUNT, Biomarker};

pub use impute::{CompleteBiomarkerVector, impute};
pub use qc::{QcReport, assess_quality};
pub use reader::{parse_measurements_json, parse_measurements_tsv, read_measurements};

/// Largest absolute value accepted from measurement files. Every score is a
/// bounded-coefficient sum of inputs, so values up to this magnitude keep
/// all outputs finite.
pub const MAX_MEASUREMENT_MAGNITUDE: f64 = 1e12;

/// Raw caller input: biomarker key to measured value. Absent keys are missing.
pub type MeasurementSet = BTreeMap<String, f64>;

/// Measurements keyed by [`Biomarker`] after key validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMeasurements {
    values: [Option<f64>; BIOMARKER_COUNT],
}

impl ResolvedMeasurements {
    pub fn new() -> Self {
        Self {
            values: [None; BIOMARKER_COUNT],
        }
    }

    pub fn set(&mut self, biomarker: Biomarker, value: f64) {
        self.values[biomarker.index()] = Some(value);
    }

    pub fn get(&self, biomarker: Biomarker) -> Option<f64> {
        self.values[biomarker.index()]
    }

    pub fn measured_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Biomarker, f64)> + '_ {
        Biomarker::ALL
            .iter()
            .filter_map(|&b| self.get(b).map(|v| (b, v)))
    }
}

impl Default for ResolvedMeasurements {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates every key; the first unknown key (in key order) is reported.
pub fn resolve(measurements: &MeasurementSet) -> Result<ResolvedMeasurements, OncoError> {
    let mut resolved = ResolvedMeasurements::new();
    for (key, &value) in measurements {
        let biomarker = Biomarker::from_key(key)
            .ok_or_else(|| OncoError::UnknownBiomarker(key.clone()))?;
        resolved.set(biomarker, value);
    }
    Ok(resolved)
}
