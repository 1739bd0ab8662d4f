use crate::registry::Biomarker as Bm;
use crate::scores::formula::FormulaInput::{Biomarker as B, Parameter as P, Score as S};
use crate::scores::formula::{Env, ParameterFormula};
use crate::scores::names::{Parameter, Score};

fn f_receptor(e: &Env<'_>) -> f64 {
    (e.b(Bm::Esr1Protein) / 6.0).min(1.0)
}

fn f_metabolism(e: &Env<'_>) -> f64 {
    (e.s(Score::Liver) + e.s(Score::Cyp2d6) + e.s(Score::General)) / 3.0
}

fn f_resist_hormone(e: &Env<'_>) -> f64 {
    1.0 - (0.6 * (e.b(Bm::Esr1Mutations) / 8.0) + 0.4 * e.s(Score::Genetic)).min(0.9)
}

fn f_her2(e: &Env<'_>) -> f64 {
    (e.b(Bm::Her2Circ) / 5.0).min(1.0) * (1.0 - 0.6 * e.b(Bm::Her2Mutations) / 10.0)
}

fn f_pdl1(e: &Env<'_>) -> f64 {
    (e.b(Bm::Pdl1Ctc) / 3.0).min(1.0)
}

/// All 37 parameters in evaluation order. Each result is clamped to
/// [`Parameter::bounds`] before the next formula runs.
pub static PARAMETER_FORMULAS: &[ParameterFormula] = &[
    // growth
    ParameterFormula {
        parameter: Parameter::Lambda1,
        inputs: &[S(Score::Prolif)],
        eval: |e| 0.04 * (1.0 + 1.5 * e.s(Score::Prolif)),
    },
    ParameterFormula {
        parameter: Parameter::Lambda2,
        inputs: &[P(Parameter::Lambda1), S(Score::Resist1)],
        eval: |e| 0.6 * e.p(Parameter::Lambda1) * (1.0 + 0.5 * e.s(Score::Resist1)),
    },
    ParameterFormula {
        parameter: Parameter::LambdaR1,
        inputs: &[P(Parameter::Lambda1), S(Score::Resist1)],
        eval: |e| 0.4 * e.p(Parameter::Lambda1) * e.s(Score::Resist1),
    },
    ParameterFormula {
        parameter: Parameter::LambdaR2,
        inputs: &[P(Parameter::Lambda1), S(Score::Resist2)],
        eval: |e| 0.25 * e.p(Parameter::Lambda1) * (1.0 - 0.3 * e.s(Score::Resist2)),
    },
    ParameterFormula {
        parameter: Parameter::K,
        inputs: &[S(Score::Tumor)],
        eval: |e| e.s(Score::Tumor) * 2000.0,
    },
    // immune
    ParameterFormula {
        parameter: Parameter::Beta1,
        inputs: &[S(Score::Immune), S(Score::Suppress)],
        eval: |e| 0.02 * e.s(Score::Immune) * (1.0 - e.s(Score::Suppress)),
    },
    ParameterFormula {
        parameter: Parameter::Beta2,
        inputs: &[S(Score::Suppress)],
        eval: |e| 0.05 + 0.15 * e.s(Score::Suppress),
    },
    ParameterFormula {
        parameter: Parameter::Phi1,
        inputs: &[S(Score::Activation)],
        eval: |e| 0.05 + 0.1 * e.s(Score::Activation),
    },
    ParameterFormula {
        parameter: Parameter::Phi2,
        inputs: &[S(Score::Tumor)],
        eval: |e| 0.01 + 0.03 * (e.s(Score::Tumor) / 2.0),
    },
    ParameterFormula {
        parameter: Parameter::Phi3,
        inputs: &[B(Bm::Il10)],
        eval: |e| 0.02 + 0.08 * (e.b(Bm::Il10) / 15.0),
    },
    ParameterFormula {
        parameter: Parameter::DeltaI,
        inputs: &[S(Score::Stress)],
        eval: |e| 0.05 + 0.1 * e.s(Score::Stress),
    },
    // resistance evolution
    ParameterFormula {
        parameter: Parameter::OmegaR1,
        inputs: &[S(Score::Genetic), S(Score::Stress)],
        eval: |e| 0.002 * e.s(Score::Genetic) * e.s(Score::Stress),
    },
    ParameterFormula {
        parameter: Parameter::OmegaR2,
        inputs: &[S(Score::Genetic), S(Score::Stress)],
        eval: |e| 0.001 * e.s(Score::Genetic) * e.s(Score::Stress),
    },
    // treatment effectiveness
    ParameterFormula {
        parameter: Parameter::EtaE,
        inputs: &[
            B(Bm::Esr1Protein),
            B(Bm::Esr1Mutations),
            S(Score::Liver),
            S(Score::Cyp2d6),
            S(Score::General),
            S(Score::Genetic),
        ],
        eval: |e| f_receptor(e) * f_metabolism(e) * f_resist_hormone(e),
    },
    ParameterFormula {
        parameter: Parameter::EtaC,
        inputs: &[S(Score::General), S(Score::Organs), S(Score::Resist2)],
        eval: |e| e.s(Score::General) * e.s(Score::Organs) * (1.0 - 0.7 * e.s(Score::Resist2)),
    },
    ParameterFormula {
        parameter: Parameter::EtaH,
        inputs: &[B(Bm::Her2Circ), B(Bm::Her2Mutations), S(Score::Organs), S(Score::Resist2)],
        eval: |e| f_her2(e) * e.s(Score::Organs) * (1.0 - 0.5 * e.s(Score::Resist2)),
    },
    ParameterFormula {
        parameter: Parameter::EtaI,
        inputs: &[B(Bm::Pdl1Ctc), S(Score::ImmuneContext), S(Score::General)],
        eval: |e| f_pdl1(e) * e.s(Score::ImmuneContext) * e.s(Score::General),
    },
    // pharmacokinetics
    ParameterFormula {
        parameter: Parameter::Kel,
        inputs: &[S(Score::Clearance)],
        eval: |e| 0.1 / e.s(Score::Clearance),
    },
    ParameterFormula {
        parameter: Parameter::KMetabolism,
        inputs: &[S(Score::Liver)],
        eval: |e| 0.05 * e.s(Score::Liver),
    },
    ParameterFormula {
        parameter: Parameter::KClearance,
        inputs: &[S(Score::Clearance)],
        eval: |e| 0.2 * e.s(Score::Clearance),
    },
    // microenvironment
    ParameterFormula {
        parameter: Parameter::AlphaA,
        inputs: &[B(Bm::Vegf), B(Bm::Ang2)],
        eval: |e| 0.02 * (1.0 + e.b(Bm::Vegf) / 400.0) * (1.0 + e.b(Bm::Ang2) / 3000.0),
    },
    ParameterFormula {
        parameter: Parameter::DeltaA,
        inputs: &[S(Score::Clearance)],
        eval: |e| 0.1 * e.s(Score::Clearance),
    },
    ParameterFormula {
        parameter: Parameter::KappaQ,
        inputs: &[S(Score::Quiescence)],
        eval: |e| 0.005 + 0.02 * e.s(Score::Quiescence),
    },
    ParameterFormula {
        parameter: Parameter::LambdaQ,
        inputs: &[S(Score::Quiescence)],
        eval: |e| 0.002 + 0.01 * (1.0 - e.s(Score::Quiescence)),
    },
    ParameterFormula {
        parameter: Parameter::KappaS,
        inputs: &[S(Score::Stress)],
        eval: |e| 0.002 + 0.01 * e.s(Score::Stress),
    },
    ParameterFormula {
        parameter: Parameter::DeltaS,
        inputs: &[S(Score::Immune)],
        eval: |e| 0.05 * e.s(Score::Immune),
    },
    ParameterFormula {
        parameter: Parameter::Gamma,
        inputs: &[S(Score::Metastatic)],
        eval: |e| 0.002 * e.s(Score::Metastatic),
    },
    ParameterFormula {
        parameter: Parameter::DeltaP,
        inputs: &[S(Score::Immune)],
        eval: |e| 0.05 + 0.03 * e.s(Score::Immune),
    },
    // genetic and metabolic (heuristic)
    ParameterFormula {
        parameter: Parameter::Mu,
        inputs: &[S(Score::Genetic)],
        eval: |e| e.h.mu_base * (1.0 + e.h.mu_genetic_gain * e.s(Score::Genetic)),
    },
    ParameterFormula {
        parameter: Parameter::Nu,
        inputs: &[S(Score::Genetic), S(Score::Stress)],
        eval: |e| e.h.nu_base * e.s(Score::Genetic) * (1.0 + e.s(Score::Stress)),
    },
    ParameterFormula {
        parameter: Parameter::DeltaG,
        inputs: &[B(Bm::Brca), S(Score::GenomicStability)],
        eval: |e| {
            let repair_loss = (e.b(Bm::Brca) / 2.0).min(e.h.delta_g_brca_cap);
            e.h.delta_g_base * (1.0 - repair_loss) * e.s(Score::GenomicStability)
        },
    },
    ParameterFormula {
        parameter: Parameter::KappaM,
        inputs: &[B(Bm::BetaHydroxybutyrate), S(Score::Metabolic)],
        eval: |e| {
            let ketone = (1.0 - e.b(Bm::BetaHydroxybutyrate) / 2.0).max(e.h.kappa_m_ketone_floor);
            e.h.kappa_m_base * e.s(Score::Metabolic) * ketone
        },
    },
    ParameterFormula {
        parameter: Parameter::DeltaM,
        inputs: &[S(Score::Metabolic)],
        eval: |e| e.h.delta_m_base * (1.0 - e.h.delta_m_metabolic_gain * e.s(Score::Metabolic)),
    },
    ParameterFormula {
        parameter: Parameter::KappaH,
        inputs: &[S(Score::Tumor)],
        eval: |e| e.h.kappa_h_base * (e.s(Score::Tumor) - e.h.kappa_h_tumor_threshold).max(0.0),
    },
    ParameterFormula {
        parameter: Parameter::DeltaH,
        inputs: &[S(Score::Clearance)],
        eval: |e| e.h.delta_h_base * (1.0 + e.s(Score::Clearance)),
    },
    // immune sensitivity (heuristic)
    ParameterFormula {
        parameter: Parameter::Rho1,
        inputs: &[S(Score::Immune)],
        eval: |e| e.h.rho1_base + e.h.rho1_immune_gain * e.s(Score::Immune),
    },
    ParameterFormula {
        parameter: Parameter::Rho2,
        inputs: &[S(Score::Resist2)],
        eval: |e| e.h.rho2_base - e.h.rho2_resistance_gain * e.s(Score::Resist2),
    },
];
