use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use kira_oncoparam::config::ModelConfig;
use kira_oncoparam::input::{MAX_MEASUREMENT_MAGNITUDE, MeasurementSet};
use kira_oncoparam::registry::{Biomarker, BiomarkerPanel};
use kira_oncoparam::scores::names::Parameter;
use kira_oncoparam::{ComputeOutput, OncoError, compute};

fn random_patient(rng: &mut StdRng, config: &ModelConfig) -> MeasurementSet {
    let mut set = MeasurementSet::new();
    for b in Biomarker::ALL {
        if rng.random_range(0.0..1.0) < 0.2 {
            continue;
        }
        let reference = config.registry.reference_value(b);
        let v = rng.random_range(-(reference + 10.0)..(reference * 4.0 + 10.0));
        set.insert(b.key().to_string(), v);
    }
    set
}

fn assert_invariants(out: &ComputeOutput) {
    for (param, value) in out.parameters.iter() {
        let b = param.bounds();
        assert!(value.is_finite(), "{} not finite", param.key());
        assert!(b.lo <= value && value <= b.hi, "{} = {} out of bounds", param.key(), value);
    }
    let p = &out.parameters;
    assert!(p[Parameter::Lambda1] > p[Parameter::Lambda2]);
    assert!(p[Parameter::Lambda2] > p[Parameter::LambdaR1]);
    assert!(p[Parameter::LambdaR1] > p[Parameter::LambdaR2]);
    for eta in [Parameter::EtaE, Parameter::EtaC, Parameter::EtaH, Parameter::EtaI] {
        assert!((0.1..=0.95).contains(&p[eta]));
    }
    assert!(p[Parameter::Beta1] >= 0.001);
    for (_, v) in out.scores.iter() {
        assert!(v.is_finite());
    }
}

#[test]
fn random_patients_respect_invariants() {
    let config = ModelConfig::builtin().unwrap();
    let mut rng = StdRng::seed_from_u64(0x0c0);
    for _ in 0..500 {
        let patient = random_patient(&mut rng, &config);
        let out = compute(&config, &patient, BiomarkerPanel::Full).unwrap();
        assert_invariants(&out);
    }
}

#[test]
fn compute_is_deterministic() {
    let config = ModelConfig::builtin().unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let patient = random_patient(&mut rng, &config);
    let a = compute(&config, &patient, BiomarkerPanel::Full).unwrap();
    let b = compute(&config, &patient, BiomarkerPanel::Full).unwrap();
    assert_eq!(a.biomarkers, b.biomarkers);
    assert_eq!(a.scores, b.scores);
    assert_eq!(a.parameters, b.parameters);
    assert_eq!(a.violations, b.violations);
}

#[test]
fn panel_does_not_change_the_numbers() {
    let config = ModelConfig::builtin().unwrap();
    let mut patient = MeasurementSet::new();
    patient.insert("ca153".to_string(), 42.0);
    patient.insert("cd8".to_string(), 450.0);
    patient.insert("glucose".to_string(), 130.0);
    let full = compute(&config, &patient, BiomarkerPanel::Full).unwrap();
    let core = compute(&config, &patient, BiomarkerPanel::Core).unwrap();
    assert_eq!(full.parameters, core.parameters);
    assert_eq!(core.biomarkers.panel, BiomarkerPanel::Core);
    assert_eq!(core.biomarkers.imputed_count(), 44);
}

#[test]
fn unknown_key_is_rejected() {
    let config = ModelConfig::builtin().unwrap();
    let mut patient = MeasurementSet::new();
    patient.insert("ca153".to_string(), 20.0);
    patient.insert("ca125".to_string(), 35.0);
    let err = compute(&config, &patient, BiomarkerPanel::Full).unwrap_err();
    assert!(matches!(err, OncoError::UnknownBiomarker(ref k) if k == "ca125"));
}

#[test]
fn zero_organ_labs_stay_finite() {
    let config = ModelConfig::builtin().unwrap();
    let mut patient = MeasurementSet::new();
    for key in ["alt", "ast", "creatinine", "bun", "bilirubin"] {
        patient.insert(key.to_string(), 0.0);
    }
    let out = compute(&config, &patient, BiomarkerPanel::Full).unwrap();
    assert_invariants(&out);
}

#[test]
fn extreme_glucose_stays_bounded() {
    let config = ModelConfig::builtin().unwrap();
    for glucose in [0.0, 10000.0] {
        let mut patient = MeasurementSet::new();
        patient.insert("glucose".to_string(), glucose);
        let out = compute(&config, &patient, BiomarkerPanel::Full).unwrap();
        assert_invariants(&out);
    }
}

#[test]
fn all_zero_patient_stays_bounded() {
    let config = ModelConfig::builtin().unwrap();
    let patient: MeasurementSet = Biomarker::ALL
        .iter()
        .map(|b| (b.key().to_string(), 0.0))
        .collect();
    let out = compute(&config, &patient, BiomarkerPanel::Full).unwrap();
    assert_eq!(out.biomarkers.imputed_count(), 0);
    assert_invariants(&out);
}

#[test]
fn negative_inputs_stay_bounded() {
    let config = ModelConfig::builtin().unwrap();
    for value in [-0.5, -50.0, -1e6] {
        let patient: MeasurementSet = Biomarker::ALL
            .iter()
            .map(|b| (b.key().to_string(), value))
            .collect();
        let out = compute(&config, &patient, BiomarkerPanel::Full).unwrap();
        assert_invariants(&out);
    }

    let mut patient = MeasurementSet::new();
    for key in ["alt", "ast", "creatinine", "bun", "bilirubin", "glucose"] {
        patient.insert(key.to_string(), -1.0);
    }
    let out = compute(&config, &patient, BiomarkerPanel::Full).unwrap();
    assert_invariants(&out);
}

#[test]
fn largest_accepted_values_stay_finite() {
    let config = ModelConfig::builtin().unwrap();
    for value in [MAX_MEASUREMENT_MAGNITUDE, -MAX_MEASUREMENT_MAGNITUDE] {
        let patient: MeasurementSet = Biomarker::ALL
            .iter()
            .map(|b| (b.key().to_string(), value))
            .collect();
        let out = compute(&config, &patient, BiomarkerPanel::Full).unwrap();
        assert_invariants(&out);
    }
}
