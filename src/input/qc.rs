use crate::input::ResolvedMeasurements;
use crate::math::clamp;
use crate::registry::{BIOMARKER_COUNT, Biomarker};

const KEY_MARKERS: [Biomarker; 10] = [
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

#[derive(Debug, Clone, PartialEq)]
pub struct QcReport {
    pub warnings: Vec<String>,
    pub critical_alerts: Vec<String>,
    /// Fraction of the 47 biomarkers measured with a positive value.
    pub completeness: f64,
    /// Fraction of the key markers measured with a positive value.
    pub key_marker_fraction: f64,
    /// Model confidence in percent, within [30, 95].
    pub confidence: f64,
}

/// Checks measured values against critical and reference limits.
///
/// Only measured positive values are inspected; imputed values never raise
/// an alert.
pub fn assess_quality(measurements: &ResolvedMeasurements) -> QcReport {
    let mut warnings = Vec::new();
    let mut critical_alerts = Vec::new();

    for (biomarker, value) in measurements.iter() {
        if value <= 0.0 {
            continue;
        }
        match biomarker {
            Biomarker::Ca153 if value > 100.0 => critical_alerts.push(format!(
                "CA 15-3 extremely elevated ({value} U/mL) - immediate clinical correlation needed"
            )),
            Biomarker::Cd8 if value < 200.0 => critical_alerts.push(format!(
                "CD8+ severely low ({value} cells/μL) - immunocompromised state"
            )),
            Biomarker::Creatinine if value > 3.0 => critical_alerts.push(format!(
                "Creatinine severely elevated ({value} mg/dL) - kidney dysfunction"
            )),
            _ => {}
        }
        match biomarker {
            Biomarker::Ca153 if value > 25.0 => {
                warnings.push(format!("CA 15-3 elevated ({value} U/mL, normal <25)"))
            }
            Biomarker::Glucose if !(70.0..=180.0).contains(&value) => {
                warnings.push(format!("Glucose abnormal ({value} mg/dL, normal 70-140)"))
            }
            _ => {}
        }
    }

    let filled = measurements.iter().filter(|(_, v)| *v > 0.0).count();
    let completeness = filled as f64 / BIOMARKER_COUNT as f64;
    let key_filled = KEY_MARKERS
        .iter()
        .filter(|b| measurements.get(**b).is_some_and(|v| v > 0.0))
        .count();
    let key_marker_fraction = key_filled as f64 / KEY_MARKERS.len() as f64;
    let confidence = clamp(
        (completeness * 0.4 + key_marker_fraction * 0.6) * 100.0,
        30.0,
        95.0,
    );

    QcReport {
        warnings,
        critical_alerts,
        completeness,
        key_marker_fraction,
        confidence,
    }
}
