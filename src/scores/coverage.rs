use std::collections::BTreeSet;

use crate::registry::{Biomarker, BiomarkerPanel, Registry};
use crate::scores::composite::SCORE_FORMULAS;
use crate::scores::formula::FormulaInput;
use crate::scores::names::{Parameter, Score};
use crate::scores::params::PARAMETER_FORMULAS;
use crate::scores::{CoverageClass, ParameterCoverage};

/// Biomarkers a parameter ultimately reads, through scores and earlier
/// parameters.
pub fn leaf_biomarkers(parameter: Parameter) -> BTreeSet<Biomarker> {
    let mut leaves = BTreeSet::new();
    collect(FormulaInput::Parameter(parameter), &mut leaves);
    leaves
}

fn collect(input: FormulaInput, leaves: &mut BTreeSet<Biomarker>) {
    match input {
        FormulaInput::Biomarker(b) => {
            leaves.insert(b);
        }
        FormulaInput::Score(s) => {
            for next in score_inputs(s) {
                collect(*next, leaves);
            }
        }
        FormulaInput::Parameter(p) => {
            for next in parameter_inputs(p) {
                collect(*next, leaves);
            }
        }
    }
}

fn score_inputs(score: Score) -> &'static [FormulaInput] {
    SCORE_FORMULAS
        .iter()
        .find(|f| f.score == score)
        .map(|f| f.inputs)
        .unwrap_or(&[])
}

fn parameter_inputs(parameter: Parameter) -> &'static [FormulaInput] {
    PARAMETER_FORMULAS
        .iter()
        .find(|f| f.parameter == parameter)
        .map(|f| f.inputs)
        .unwrap_or(&[])
}

pub fn classify(measured: usize, total: usize) -> CoverageClass {
    if measured == 0 || total == 0 {
        CoverageClass::ImputedOnly
    } else if measured * 3 >= total * 2 {
        CoverageClass::CoreDriven
    } else {
        CoverageClass::PartlyCore
    }
}

/// How much of each parameter's input a panel measures.
pub fn panel_coverage(registry: &Registry, panel: BiomarkerPanel) -> Vec<ParameterCoverage> {
    Parameter::ALL
        .iter()
        .map(|&parameter| {
            let leaves = leaf_biomarkers(parameter);
            let measured = leaves
                .iter()
                .filter(|b| registry.contains(panel, **b))
                .count();
            ParameterCoverage {
                parameter,
                measured,
                total: leaves.len(),
                class: classify(measured, leaves.len()),
            }
        })
        .collect()
}
