use std::ops::Index;

use crate::input::ResolvedMeasurements;
use crate::registry::{BIOMARKER_COUNT, Biomarker, BiomarkerPanel, Registry};

/// One value for each of the 47 biomarkers.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteBiomarkerVector {
    values: [f64; BIOMARKER_COUNT],
    imputed: [bool; BIOMARKER_COUNT],
    pub panel: BiomarkerPanel,
}

impl CompleteBiomarkerVector {
    pub fn value(&self, biomarker: Biomarker) -> f64 {
        self.values[biomarker.index()]
    }

    pub fn is_imputed(&self, biomarker: Biomarker) -> bool {
        self.imputed[biomarker.index()]
    }

    pub fn values(&self) -> &[f64; BIOMARKER_COUNT] {
        &self.values
    }

    pub fn imputed_keys(&self) -> Vec<&'static str> {
        Biomarker::ALL
            .iter()
            .filter(|b| self.is_imputed(**b))
            .map(|b| b.key())
            .collect()
    }

    pub fn imputed_count(&self) -> usize {
        self.imputed.iter().filter(|i| **i).count()
    }
}

impl Index<Biomarker> for CompleteBiomarkerVector {
    type Output = f64;

    fn index(&self, biomarker: Biomarker) -> &f64 {
        &self.values[biomarker.index()]
    }
}

/// Fills every absent biomarker with its registry reference value.
///
/// Imputation does not depend on the panel: a Core request and a Full request
/// with the same measurements produce the same vector. The panel is carried
/// along for reporting only.
pub fn impute(
    registry: &Registry,
    measurements: &ResolvedMeasurements,
    panel: BiomarkerPanel,
) -> CompleteBiomarkerVector {
    let mut values = [0.0; BIOMARKER_COUNT];
    let mut imputed = [false; BIOMARKER_COUNT];
    for biomarker in Biomarker::ALL {
        let idx = biomarker.index();
        match measurements.get(biomarker) {
            Some(v) => values[idx] = v,
            None => {
                values[idx] = registry.reference_value(biomarker);
                imputed[idx] = true;
            }
        }
    }
    CompleteBiomarkerVector {
        values,
        imputed,
        panel,
    }
}
