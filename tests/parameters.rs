use std::fs;

use kira_oncoparam::config::{HeuristicProfile, ModelConfig};
use kira_oncoparam::input::MeasurementSet;
use kira_oncoparam::registry::BiomarkerPanel;
use kira_oncoparam::scores::formula::{FormulaInput, check_table_order};
use kira_oncoparam::scores::names::{PARAMETER_COUNT, Parameter, ParameterGroup};
use kira_oncoparam::scores::params::PARAMETER_FORMULAS;
use kira_oncoparam::{OncoError, compute};
use tempfile::TempDir;

fn reference_run(config: &ModelConfig) -> kira_oncoparam::ComputeOutput {
    compute(config, &MeasurementSet::new(), BiomarkerPanel::Full).unwrap()
}

#[test]
fn parameter_table_covers_every_parameter_in_order() {
    assert_eq!(PARAMETER_FORMULAS.len(), PARAMETER_COUNT);
    for (i, f) in PARAMETER_FORMULAS.iter().enumerate() {
        assert_eq!(f.parameter, Parameter::ALL[i]);
    }
    check_table_order(
        PARAMETER_FORMULAS,
        |f| FormulaInput::Parameter(f.parameter),
        |f| f.inputs,
    )
    .unwrap();
}

#[test]
fn reference_patient_parameters() {
    let config = ModelConfig::builtin().unwrap();
    let out = reference_run(&config);
    let p = &out.parameters;
    let lambda_r1 = 0.4 * 0.0775 * 0.5416667 / 4.0;
    let expected = [
        (Parameter::Lambda1, 0.0775),
        (Parameter::Lambda2, 0.0496484),
        (Parameter::LambdaR1, lambda_r1),
        (Parameter::LambdaR2, 0.99 * lambda_r1),
        (Parameter::K, 900.0),
        (Parameter::Beta1, 0.0066667),
        (Parameter::Beta2, 0.15),
        (Parameter::Phi1, 0.11375),
        (Parameter::Phi2, 0.01675),
        (Parameter::Phi3, 0.0333333),
        (Parameter::DeltaI, 0.1166667),
        (Parameter::OmegaR1, 0.000111111),
        (Parameter::OmegaR2, 0.0001),
        (Parameter::EtaE, 0.4752778),
        (Parameter::EtaC, 0.9480990),
        (Parameter::EtaH, 0.5136068),
        (Parameter::EtaI, 0.1597222),
        (Parameter::Kel, 0.0666667),
        (Parameter::KMetabolism, 0.06),
        (Parameter::KClearance, 0.3),
        (Parameter::AlphaA, 0.05),
        (Parameter::DeltaA, 0.15),
        (Parameter::KappaQ, 0.00825),
        (Parameter::LambdaQ, 0.010375),
        (Parameter::KappaS, 0.0086667),
        (Parameter::DeltaS, 0.05),
        (Parameter::Gamma, 0.00075),
        (Parameter::DeltaP, 0.08),
        (Parameter::Mu, 0.01125),
        (Parameter::Nu, 0.000277778),
        (Parameter::DeltaG, 0.00925),
        (Parameter::KappaM, 0.0116667),
        (Parameter::DeltaM, 0.0066667),
        (Parameter::KappaH, 0.001),
        (Parameter::DeltaH, 0.1),
        (Parameter::Rho1, 0.9),
        (Parameter::Rho2, 0.4015625),
    ];
    for (param, value) in expected {
        assert!(
            (p[param] - value).abs() < 1e-6,
            "{} = {}, expected {}",
            param.key(),
            p[param],
            value
        );
    }
}

#[test]
fn every_parameter_within_bounds() {
    let config = ModelConfig::builtin().unwrap();
    let out = reference_run(&config);
    for (param, value) in out.parameters.iter() {
        let b = param.bounds();
        assert!(b.lo <= value && value <= b.hi, "{} out of bounds", param.key());
    }
}

#[test]
fn groups_and_heuristic_marking() {
    assert_eq!(Parameter::Lambda1.group(), ParameterGroup::Growth);
    assert_eq!(Parameter::EtaI.group(), ParameterGroup::Treatment);
    assert_eq!(Parameter::Rho2.group(), ParameterGroup::ImmuneSensitivity);
    let heuristic: Vec<&str> = Parameter::ALL
        .iter()
        .filter(|p| p.is_heuristic())
        .map(|p| p.key())
        .collect();
    assert_eq!(
        heuristic,
        ["mu", "nu", "deltaG", "kappaM", "deltaM", "kappaH", "deltaH", "rho1", "rho2"]
    );
    assert_eq!(Parameter::from_key("lambdaR2"), Some(Parameter::LambdaR2));
    assert_eq!(Parameter::LambdaR2.symbol(), "λ_R2");
}

#[test]
fn heuristic_profile_override_changes_only_heuristics() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("heuristics.json");
    fs::write(&path, r#"{"mu_base": 0.02, "rho1_base": 0.6}"#).unwrap();
    let profile = HeuristicProfile::from_json_file(&path).unwrap();
    assert!((profile.nu_base - 0.002).abs() < 1e-12);

    let base = ModelConfig::builtin().unwrap();
    let tuned = ModelConfig::builtin().unwrap().with_heuristics(profile);
    let a = reference_run(&base);
    let b = reference_run(&tuned);

    assert!((b.parameters[Parameter::Mu] - 0.0225).abs() < 1e-9);
    assert!((b.parameters[Parameter::Rho1] - 0.75).abs() < 1e-9);
    for param in Parameter::ALL.iter().filter(|p| !p.is_heuristic()) {
        assert_eq!(a.parameters[*param], b.parameters[*param]);
    }
}

#[test]
fn heuristic_profile_rejects_unknown_fields() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("heuristics.json");
    fs::write(&path, r#"{"mu_bsae": 0.02}"#).unwrap();
    assert!(HeuristicProfile::from_json_file(&path).is_err());
}

#[test]
fn heuristic_profile_rejects_non_finite() {
    let profile = HeuristicProfile {
        delta_h_base: f64::INFINITY,
        ..HeuristicProfile::default_v1()
    };
    let err = profile.validate().unwrap_err();
    assert!(matches!(err, OncoError::Heuristics(ref m) if m.contains("delta_h_base")));
}
