use tracing::debug;

use crate::config::ModelConfig;
use crate::error::OncoError;
use crate::input::{self, CompleteBiomarkerVector, MeasurementSet};
use crate::registry::BiomarkerPanel;
use crate::scores::composite::SCORE_FORMULAS;
use crate::scores::constraints::enforce_constraints;
use crate::scores::formula::{evaluate_parameters, evaluate_scores};
use crate::scores::params::PARAMETER_FORMULAS;
use crate::scores::{CompositeScoreSet, ConstraintViolation, ParameterSet};

#[derive(Debug, Clone)]
pub struct ComputeOutput {
    pub biomarkers: CompleteBiomarkerVector,
    pub scores: CompositeScoreSet,
    pub parameters: ParameterSet,
    pub violations: Vec<ConstraintViolation>,
}

/// Registry lookup, imputation, composite scores, parameters and constraint
/// repair in one pass.
///
/// Fails only on an unknown biomarker key. Deterministic: identical inputs give
/// bit-identical outputs. Values are expected finite and within
/// [`input::MAX_MEASUREMENT_MAGNITUDE`], which the file readers enforce.
pub fn compute(
    config: &ModelConfig,
    measurements: &MeasurementSet,
    panel: BiomarkerPanel,
) -> Result<ComputeOutput, OncoError> {
    let resolved = input::resolve(measurements)?;
    let biomarkers = input::impute(&config.registry, &resolved, panel);
    Ok(compute_from_vector(config, biomarkers))
}

pub fn compute_from_vector(config: &ModelConfig, biomarkers: CompleteBiomarkerVector) -> ComputeOutput {
    let scores = evaluate_scores(SCORE_FORMULAS, &biomarkers, &config.heuristics);
    let mut parameters =
        evaluate_parameters(PARAMETER_FORMULAS, &biomarkers, &scores, &config.heuristics);
    let violations = enforce_constraints(&mut parameters);
    debug!(
        imputed = biomarkers.imputed_count(),
        violations = violations.len(),
        "compute_done"
    );
    ComputeOutput {
        biomarkers,
        scores: CompositeScoreSet::from_values(scores),
        parameters: ParameterSet::from_values(parameters),
        violations,
    }
}
