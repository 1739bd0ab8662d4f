use tracing::warn;

use crate::math::Bounds;
use crate::scores::names::{PARAMETER_COUNT, Parameter};
use crate::scores::{ConstraintViolation, ParameterValue};

const GROWTH_ORDER: [(Parameter, Parameter, &str); 3] = [
    (Parameter::Lambda1, Parameter::Lambda2, "λ₁ must be > λ₂"),
    (Parameter::Lambda2, Parameter::LambdaR1, "λ₂ must be > λ_R1"),
    (Parameter::LambdaR1, Parameter::LambdaR2, "λ_R1 must be > λ_R2"),
];

const EFFECTIVENESS: [Parameter; 4] = [
    Parameter::EtaE,
    Parameter::EtaC,
    Parameter::EtaH,
    Parameter::EtaI,
];

const ORDERING_FACTOR: f64 = 0.99;

/// Checks cross-parameter invariants and repairs violations in place.
///
/// Repairs run in a fixed order (growth ordering, effectiveness, immune
/// killing, mutation rates) and each one is recorded. Never fails.
pub fn enforce_constraints(values: &mut [f64; PARAMETER_COUNT]) -> Vec<ConstraintViolation> {
    let mut violations = Vec::new();

    for (larger, smaller, description) in GROWTH_ORDER {
        let hi = values[larger.index()];
        let lo = values[smaller.index()];
        if hi <= lo {
            let corrected = hi * ORDERING_FACTOR;
            values[smaller.index()] = corrected;
            violations.push(ConstraintViolation {
                constraint: "growth_ordering".to_string(),
                description: description.to_string(),
                original: vec![pv(larger, hi), pv(smaller, lo)],
                corrected: vec![pv(smaller, corrected)],
            });
        }
    }

    for eta in EFFECTIVENESS {
        reclamp(
            values,
            eta,
            Bounds::new(0.1, 0.95),
            "effectiveness_bounds",
            "0.1 ≤ η ≤ 0.95",
            &mut violations,
        );
    }

    reclamp(
        values,
        Parameter::Beta1,
        Bounds::new(0.001, 0.1),
        "immune_killing_floor",
        "β₁ must be ≥ 0.001",
        &mut violations,
    );
    reclamp(
        values,
        Parameter::OmegaR1,
        Parameter::OmegaR1.bounds(),
        "mutation_rate_cap",
        "ω_R1 must be ≤ 0.01",
        &mut violations,
    );
    reclamp(
        values,
        Parameter::OmegaR2,
        Parameter::OmegaR2.bounds(),
        "mutation_rate_cap",
        "ω_R2 must be ≤ 0.008",
        &mut violations,
    );

    for v in &violations {
        warn!(
            constraint = %v.constraint,
            description = %v.description,
            "constraint_repaired"
        );
    }
    violations
}

fn reclamp(
    values: &mut [f64; PARAMETER_COUNT],
    parameter: Parameter,
    bounds: Bounds,
    constraint: &str,
    description: &str,
    violations: &mut Vec<ConstraintViolation>,
) {
    let value = values[parameter.index()];
    if bounds.contains(value) {
        return;
    }
    let corrected = bounds.clamp(value);
    values[parameter.index()] = corrected;
    violations.push(ConstraintViolation {
        constraint: constraint.to_string(),
        description: description.to_string(),
        original: vec![pv(parameter, value)],
        corrected: vec![pv(parameter, corrected)],
    });
}

fn pv(parameter: Parameter, value: f64) -> ParameterValue {
    ParameterValue { parameter, value }
}
