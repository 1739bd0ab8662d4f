use crate::scores::names::Parameter;
use crate::scores::{ParameterSet, StabilityAssessment, StabilityCheck, StabilityStatus};

const STABLE_MIN: f64 = 0.67;
const MARGINAL_MIN: f64 = 0.33;

/// Heuristic three-point stability check on the final parameters.
pub fn assess_stability(parameters: &ParameterSet) -> StabilityAssessment {
    let lambda1 = parameters[Parameter::Lambda1];
    let checks = vec![
        StabilityCheck {
            name: "growth_hierarchy".to_string(),
            passed: lambda1 > parameters[Parameter::Lambda2],
        },
        StabilityCheck {
            name: "immune_control".to_string(),
            passed: parameters[Parameter::Beta1] * 1000.0 > lambda1,
        },
        StabilityCheck {
            name: "carrying_capacity".to_string(),
            passed: parameters[Parameter::K] > 1000.0,
        },
    ];
    let passed = checks.iter().filter(|c| c.passed).count();
    let score = passed as f64 / checks.len() as f64;
    let status = if score >= STABLE_MIN {
        StabilityStatus::Stable
    } else if score >= MARGINAL_MIN {
        StabilityStatus::Marginal
    } else {
        StabilityStatus::Unstable
    };
    StabilityAssessment {
        checks,
        score,
        status,
    }
}
