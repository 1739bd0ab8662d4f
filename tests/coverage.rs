use kira_oncoparam::registry::{Biomarker, BiomarkerPanel, load_builtin};
use kira_oncoparam::scores::CoverageClass;
use kira_oncoparam::scores::coverage::{classify, leaf_biomarkers, panel_coverage};
use kira_oncoparam::scores::names::{PARAMETER_COUNT, Parameter};

#[test]
fn classify_thresholds() {
    assert_eq!(classify(0, 0), CoverageClass::ImputedOnly);
    assert_eq!(classify(0, 4), CoverageClass::ImputedOnly);
    assert_eq!(classify(1, 3), CoverageClass::PartlyCore);
    assert_eq!(classify(2, 3), CoverageClass::CoreDriven);
    assert_eq!(classify(5, 5), CoverageClass::CoreDriven);
}

#[test]
fn leaves_follow_scores_and_parameters() {
    let k = leaf_biomarkers(Parameter::K);
    assert_eq!(
        k.into_iter().collect::<Vec<_>>(),
        vec![
            Biomarker::Ca153,
            Biomarker::Ca2729,
            Biomarker::Cea,
            Biomarker::Ctdna,
            Biomarker::Ctc
        ]
    );

    let lambda2 = leaf_biomarkers(Parameter::Lambda2);
    assert!(lambda2.contains(&Biomarker::Tk1));
    assert!(lambda2.contains(&Biomarker::Pgr));
    assert_eq!(lambda2.len(), 7);

    let stress = leaf_biomarkers(Parameter::KappaS);
    assert!(stress.contains(&Biomarker::Ldh));
}

#[test]
fn core_panel_coverage() {
    let registry = load_builtin().unwrap();
    let coverage = panel_coverage(&registry, BiomarkerPanel::Core);
    assert_eq!(coverage.len(), PARAMETER_COUNT);

    let find = |p: Parameter| coverage.iter().find(|c| c.parameter == p).unwrap();
    let k = find(Parameter::K);
    assert_eq!((k.measured, k.total), (2, 5));
    assert_eq!(k.class, CoverageClass::PartlyCore);
    assert_eq!(find(Parameter::Lambda1).class, CoverageClass::CoreDriven);
    assert_eq!(find(Parameter::AlphaA).class, CoverageClass::ImputedOnly);
}

#[test]
fn full_panel_measures_everything() {
    let registry = load_builtin().unwrap();
    for c in panel_coverage(&registry, BiomarkerPanel::Full) {
        assert_eq!(c.measured, c.total, "{}", c.parameter.key());
        assert_eq!(c.class, CoverageClass::CoreDriven);
    }
}
