use kira_oncoparam::input::{ResolvedMeasurements, assess_quality};
use kira_oncoparam::registry::Biomarker;

fn measured(values: &[(Biomarker, f64)]) -> ResolvedMeasurements {
    let mut r = ResolvedMeasurements::new();
    for (b, v) in values {
        r.set(*b, *v);
    }
    r
}

#[test]
fn empty_input_has_floor_confidence() {
    let qc = assess_quality(&ResolvedMeasurements::new());
    assert!(qc.warnings.is_empty());
    assert!(qc.critical_alerts.is_empty());
    assert_eq!(qc.completeness, 0.0);
    assert!((qc.confidence - 30.0).abs() < 1e-12);
}

#[test]
fn critical_values_raise_alerts() {
    let qc = assess_quality(&measured(&[
        (Biomarker::Ca153, 150.0),
        (Biomarker::Cd8, 150.0),
        (Biomarker::Creatinine, 4.0),
    ]));
    assert_eq!(qc.critical_alerts.len(), 3);
    assert!(qc.critical_alerts[0].starts_with("CA 15-3 extremely elevated (150 U/mL)"));
    assert!(qc.critical_alerts[1].contains("CD8+ severely low"));
    assert!(qc.critical_alerts[2].contains("kidney dysfunction"));
    assert_eq!(qc.warnings, vec!["CA 15-3 elevated (150 U/mL, normal <25)".to_string()]);
}

#[test]
fn glucose_window_and_non_positive_values() {
    let qc = assess_quality(&measured(&[(Biomarker::Glucose, 200.0)]));
    assert_eq!(qc.warnings.len(), 1);
    assert!(qc.warnings[0].starts_with("Glucose abnormal"));

    let qc = assess_quality(&measured(&[(Biomarker::Glucose, 180.0)]));
    assert!(qc.warnings.is_empty());

    let qc = assess_quality(&measured(&[(Biomarker::Glucose, 0.0), (Biomarker::Cd8, 0.0)]));
    assert!(qc.warnings.is_empty());
    assert!(qc.critical_alerts.is_empty());
    assert_eq!(qc.completeness, 0.0);
}

#[test]
fn confidence_weights_key_markers() {
    let key = [
        Biomarker::Ca153,
        Biomarker::Cea,
        Biomarker::Cd8,
        Biomarker::Cd4,
        Biomarker::Albumin,
        Biomarker::Glucose,
        Biomarker::Lactate,
        Biomarker::Creatinine,
        Biomarker::Alt,
        Biomarker::Pik3ca,
    ];
    let values: Vec<(Biomarker, f64)> = key.iter().map(|b| (*b, 20.0)).collect();
    let qc = assess_quality(&measured(&values));
    assert!((qc.key_marker_fraction - 1.0).abs() < 1e-12);
    let expected = (10.0 / 47.0 * 0.4 + 0.6) * 100.0;
    assert!((qc.confidence - expected).abs() < 1e-9);

    let all: Vec<(Biomarker, f64)> = Biomarker::ALL.iter().map(|b| (*b, 1.0)).collect();
    let qc = assess_quality(&measured(&all));
    assert!((qc.completeness - 1.0).abs() < 1e-12);
    assert!((qc.confidence - 95.0).abs() < 1e-12);
}
