use crate::input::CompleteBiomarkerVector;
use crate::registry::Biomarker;
use crate::scores::names::{Parameter, Score};
use crate::scores::{CompositeScoreSet, ParameterSet, ResistanceRisk, RiskFlag, RiskLevel};

const HIGH_RISK: f64 = 0.01;
const MODERATE_RISK: f64 = 0.005;

/// `(ω_R1 + ω_R2)(2 − G)`, graded high / moderate / low.
pub fn resistance_risk(parameters: &ParameterSet, scores: &CompositeScoreSet) -> ResistanceRisk {
    let value = (parameters[Parameter::OmegaR1] + parameters[Parameter::OmegaR2])
        * (2.0 - scores[Score::GenomicStability]);
    let level = if value > HIGH_RISK {
        RiskLevel::High
    } else if value > MODERATE_RISK {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };
    ResistanceRisk { value, level }
}

pub fn compute_risk_flags(
    parameters: &ParameterSet,
    biomarkers: &CompleteBiomarkerVector,
) -> Vec<RiskFlag> {
    let p = |param: Parameter| parameters[param];
    vec![
        flag_hormone_therapy_low(p(Parameter::EtaE)),
        flag_chemo_poor(p(Parameter::EtaC)),
        flag_immunotherapy_favorable(p(Parameter::EtaI), p(Parameter::Beta1)),
        flag_hormone_resistance_high(p(Parameter::OmegaR1)),
        flag_mdr_resistance_elevated(p(Parameter::OmegaR2)),
        flag_weak_immune(p(Parameter::Beta1)),
        flag_high_growth(p(Parameter::Lambda1)),
        flag_enhanced_monitoring(
            p(Parameter::OmegaR1),
            p(Parameter::OmegaR2),
            p(Parameter::Lambda1),
        ),
        flag_organ_dosing_attention(
            biomarkers[Biomarker::Creatinine],
            biomarkers[Biomarker::Alt],
        ),
        flag_hormone_therapy_high(p(Parameter::EtaE)),
        flag_chemo_good(p(Parameter::EtaC)),
        flag_her2_therapy_favorable(p(Parameter::EtaH)),
        flag_her2_therapy_moderate(p(Parameter::EtaH)),
        flag_strong_immune(p(Parameter::Beta1)),
    ]
}

fn flag_hormone_therapy_low(eta_e: f64) -> RiskFlag {
    RiskFlag {
        name: "hormone_therapy_low".to_string(),
        fired: eta_e < 0.4,
        threshold: "etaE < 0.4".to_string(),
        details: Some(format!("etaE={:.4}", eta_e)),
    }
}

fn flag_chemo_poor(eta_c: f64) -> RiskFlag {
    RiskFlag {
        name: "chemo_poor".to_string(),
        fired: eta_c < 0.4,
        threshold: "etaC < 0.4".to_string(),
        details: Some(format!("etaC={:.4}", eta_c)),
    }
}

fn flag_immunotherapy_favorable(eta_i: f64, beta1: f64) -> RiskFlag {
    RiskFlag {
        name: "immunotherapy_favorable".to_string(),
        fired: eta_i >= 0.6 && beta1 >= 0.02,
        threshold: "etaI >= 0.6, beta1 >= 0.02".to_string(),
        details: Some(format!("etaI={:.4}, beta1={:.4}", eta_i, beta1)),
    }
}

fn flag_hormone_resistance_high(omega_r1: f64) -> RiskFlag {
    RiskFlag {
        name: "hormone_resistance_high".to_string(),
        fired: omega_r1 > 0.005,
        threshold: "omegaR1 > 0.005".to_string(),
        details: Some(format!("omegaR1={:.6}", omega_r1)),
    }
}

fn flag_mdr_resistance_elevated(omega_r2: f64) -> RiskFlag {
    RiskFlag {
        name: "mdr_resistance_elevated".to_string(),
        fired: omega_r2 > 0.004,
        threshold: "omegaR2 > 0.004".to_string(),
        details: Some(format!("omegaR2={:.6}", omega_r2)),
    }
}

fn flag_weak_immune(beta1: f64) -> RiskFlag {
    RiskFlag {
        name: "weak_immune".to_string(),
        fired: beta1 < 0.01,
        threshold: "beta1 < 0.01".to_string(),
        details: Some(format!("beta1={:.4}", beta1)),
    }
}

fn flag_high_growth(lambda1: f64) -> RiskFlag {
    RiskFlag {
        name: "high_growth".to_string(),
        fired: lambda1 > 0.1,
        threshold: "lambda1 > 0.1".to_string(),
        details: Some(format!("lambda1={:.4}", lambda1)),
    }
}

fn flag_enhanced_monitoring(omega_r1: f64, omega_r2: f64, lambda1: f64) -> RiskFlag {
    RiskFlag {
        name: "enhanced_monitoring".to_string(),
        fired: omega_r1 > 0.003 || omega_r2 > 0.003 || lambda1 > 0.08,
        threshold: "omegaR1 > 0.003 or omegaR2 > 0.003 or lambda1 > 0.08".to_string(),
        details: Some(format!(
            "omegaR1={:.6}, omegaR2={:.6}, lambda1={:.4}",
            omega_r1, omega_r2, lambda1
        )),
    }
}

fn flag_organ_dosing_attention(creatinine: f64, alt: f64) -> RiskFlag {
    RiskFlag {
        name: "organ_dosing_attention".to_string(),
        fired: creatinine > 1.5 || alt > 60.0,
        threshold: "creatinine > 1.5 or alt > 60".to_string(),
        details: Some(format!("creatinine={:.2}, alt={:.1}", creatinine, alt)),
    }
}

fn flag_hormone_therapy_high(eta_e: f64) -> RiskFlag {
    RiskFlag {
        name: "hormone_therapy_high".to_string(),
        fired: eta_e >= 0.7,
        threshold: "etaE >= 0.7".to_string(),
        details: Some(format!("etaE={:.4}", eta_e)),
    }
}

fn flag_chemo_good(eta_c: f64) -> RiskFlag {
    RiskFlag {
        name: "chemo_good".to_string(),
        fired: eta_c >= 0.65,
        threshold: "etaC >= 0.65".to_string(),
        details: Some(format!("etaC={:.4}", eta_c)),
    }
}

fn flag_her2_therapy_favorable(eta_h: f64) -> RiskFlag {
    RiskFlag {
        name: "her2_therapy_favorable".to_string(),
        fired: eta_h >= 0.7,
        threshold: "etaH >= 0.7".to_string(),
        details: Some(format!("etaH={:.4}", eta_h)),
    }
}

// Lower tier only; a favorable etaH does not also count as moderate.
fn flag_her2_therapy_moderate(eta_h: f64) -> RiskFlag {
    RiskFlag {
        name: "her2_therapy_moderate".to_string(),
        fired: (0.4..0.7).contains(&eta_h),
        threshold: "0.4 <= etaH < 0.7".to_string(),
        details: Some(format!("etaH={:.4}", eta_h)),
    }
}

fn flag_strong_immune(beta1: f64) -> RiskFlag {
    RiskFlag {
        name: "strong_immune".to_string(),
        fired: beta1 > 0.05,
        threshold: "beta1 > 0.05".to_string(),
        details: Some(format!("beta1={:.4}", beta1)),
    }
}
