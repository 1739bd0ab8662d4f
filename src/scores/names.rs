use crate::math::Bounds;

pub const SCORE_COUNT: usize = 21;
pub const PARAMETER_COUNT: usize = 37;

/// Intermediate composite scores, organ factors and the acidity term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    Tumor,
    Prolif,
    Immune,
    Suppress,
    GenomicStability,
    Genetic,
    Metabolic,
    Stress,
    Quiescence,
    Activation,
    Resist1,
    Resist2,
    Metastatic,
    Liver,
    Kidney,
    Clearance,
    Organs,
    Cyp2d6,
    General,
    ImmuneContext,
    AlphaAcid,
}

impl Score {
    pub const ALL: [Score; SCORE_COUNT] = [
        Self::Tumor,
        Self::Prolif,
        Self::Immune,
        Self::Suppress,
        Self::GenomicStability,
        Self::Genetic,
        Self::Metabolic,
        Self::Stress,
        Self::Quiescence,
        Self::Activation,
        Self::Resist1,
        Self::Resist2,
        Self::Metastatic,
        Self::Liver,
        Self::Kidney,
        Self::Clearance,
        Self::Organs,
        Self::Cyp2d6,
        Self::General,
        Self::ImmuneContext,
        Self::AlphaAcid,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Tumor => "s_tumor",
            Self::Prolif => "s_prolif",
            Self::Immune => "s_immune",
            Self::Suppress => "s_suppress",
            Self::GenomicStability => "G",
            Self::Genetic => "s_genetic",
            Self::Metabolic => "s_metabolic",
            Self::Stress => "s_stress",
            Self::Quiescence => "s_quiescence",
            Self::Activation => "s_activation",
            Self::Resist1 => "f_resist1",
            Self::Resist2 => "f_resist2",
            Self::Metastatic => "f_metastatic",
            Self::Liver => "f_liver",
            Self::Kidney => "f_kidney",
            Self::Clearance => "f_clearance",
            Self::Organs => "f_organs",
            Self::Cyp2d6 => "f_CYP2D6",
            Self::General => "f_general",
            Self::ImmuneContext => "f_immune_ctx",
            Self::AlphaAcid => "alpha_acid",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParameterGroup {
    Growth,
    Immune,
    Resistance,
    Treatment,
    Pharmacokinetic,
    Microenvironment,
    GeneticMetabolic,
    ImmuneSensitivity,
}

impl ParameterGroup {
    pub fn key(self) -> &'static str {
        match self {
            Self::Growth => "growth",
            Self::Immune => "immune",
            Self::Resistance => "resistance",
            Self::Treatment => "treatment",
            Self::Pharmacokinetic => "pharmacokinetic",
            Self::Microenvironment => "microenvironment",
            Self::GeneticMetabolic => "genetic_metabolic",
            Self::ImmuneSensitivity => "immune_sensitivity",
        }
    }
}

/// The 37 model parameters, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Parameter {
    Lambda1,
    Lambda2,
    LambdaR1,
    LambdaR2,
    K,
    Beta1,
    Beta2,
    Phi1,
    Phi2,
    Phi3,
    DeltaI,
    OmegaR1,
    OmegaR2,
    EtaE,
    EtaC,
    EtaH,
    EtaI,
    Kel,
    KMetabolism,
    KClearance,
    AlphaA,
    DeltaA,
    KappaQ,
    LambdaQ,
    KappaS,
    DeltaS,
    Gamma,
    DeltaP,
    Mu,
    Nu,
    DeltaG,
    KappaM,
    DeltaM,
    KappaH,
    DeltaH,
    Rho1,
    Rho2,
}

impl Parameter {
    pub const ALL: [Parameter; PARAMETER_COUNT] = [
        Self::Lambda1,
        Self::Lambda2,
        Self::LambdaR1,
        Self::LambdaR2,
        Self::K,
        Self::Beta1,
        Self::Beta2,
        Self::Phi1,
        Self::Phi2,
        Self::Phi3,
        Self::DeltaI,
        Self::OmegaR1,
        Self::OmegaR2,
        Self::EtaE,
        Self::EtaC,
        Self::EtaH,
        Self::EtaI,
        Self::Kel,
        Self::KMetabolism,
        Self::KClearance,
        Self::AlphaA,
        Self::DeltaA,
        Self::KappaQ,
        Self::LambdaQ,
        Self::KappaS,
        Self::DeltaS,
        Self::Gamma,
        Self::DeltaP,
        Self::Mu,
        Self::Nu,
        Self::DeltaG,
        Self::KappaM,
        Self::DeltaM,
        Self::KappaH,
        Self::DeltaH,
        Self::Rho1,
        Self::Rho2,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Lambda1 => "lambda1",
            Self::Lambda2 => "lambda2",
            Self::LambdaR1 => "lambdaR1",
            Self::LambdaR2 => "lambdaR2",
            Self::K => "K",
            Self::Beta1 => "beta1",
            Self::Beta2 => "beta2",
            Self::Phi1 => "phi1",
            Self::Phi2 => "phi2",
            Self::Phi3 => "phi3",
            Self::DeltaI => "deltaI",
            Self::OmegaR1 => "omegaR1",
            Self::OmegaR2 => "omegaR2",
            Self::EtaE => "etaE",
            Self::EtaC => "etaC",
            Self::EtaH => "etaH",
            Self::EtaI => "etaI",
            Self::Kel => "kel",
            Self::KMetabolism => "k_metabolism",
            Self::KClearance => "k_clearance",
            Self::AlphaA => "alphaA",
            Self::DeltaA => "deltaA",
            Self::KappaQ => "kappaQ",
            Self::LambdaQ => "lambdaQ",
            Self::KappaS => "kappaS",
            Self::DeltaS => "deltaS",
            Self::Gamma => "gamma",
            Self::DeltaP => "deltaP",
            Self::Mu => "mu",
            Self::Nu => "nu",
            Self::DeltaG => "deltaG",
            Self::KappaM => "kappaM",
            Self::DeltaM => "deltaM",
            Self::KappaH => "kappaH",
            Self::DeltaH => "deltaH",
            Self::Rho1 => "rho1",
            Self::Rho2 => "rho2",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Lambda1 => "λ₁",
            Self::Lambda2 => "λ₂",
            Self::LambdaR1 => "λ_R1",
            Self::LambdaR2 => "λ_R2",
            Self::K => "K",
            Self::Beta1 => "β₁",
            Self::Beta2 => "β₂",
            Self::Phi1 => "φ₁",
            Self::Phi2 => "φ₂",
            Self::Phi3 => "φ₃",
            Self::DeltaI => "δ_I",
            Self::OmegaR1 => "ω_R1",
            Self::OmegaR2 => "ω_R2",
            Self::EtaE => "η_E",
            Self::EtaC => "η_C",
            Self::EtaH => "η_H",
            Self::EtaI => "η_I",
            Self::Kel => "k_el",
            Self::KMetabolism => "k_metabolism",
            Self::KClearance => "k_clearance",
            Self::AlphaA => "α_A",
            Self::DeltaA => "δ_A",
            Self::KappaQ => "κ_Q",
            Self::LambdaQ => "λ_Q",
            Self::KappaS => "κ_S",
            Self::DeltaS => "δ_S",
            Self::Gamma => "γ",
            Self::DeltaP => "δ_P",
            Self::Mu => "μ",
            Self::Nu => "ν",
            Self::DeltaG => "δ_G",
            Self::KappaM => "κ_M",
            Self::DeltaM => "δ_M",
            Self::KappaH => "κ_H",
            Self::DeltaH => "δ_H",
            Self::Rho1 => "ρ₁",
            Self::Rho2 => "ρ₂",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.key() == key)
    }

    pub fn bounds(self) -> Bounds {
        let (lo, hi) = match self {
            Self::Lambda1 => (0.01, 0.15),
            Self::Lambda2 => (0.005, 0.1),
            Self::LambdaR1 => (0.003, 0.05),
            Self::LambdaR2 => (0.001, 0.03),
            Self::K => (100.0, 15000.0),
            Self::Beta1 => (0.001, 0.1),
            Self::Beta2 => (0.01, 0.5),
            Self::Phi1 => (0.01, 0.2),
            Self::Phi2 => (0.005, 0.1),
            Self::Phi3 => (0.005, 0.15),
            Self::DeltaI => (0.02, 0.3),
            Self::OmegaR1 => (0.0001, 0.01),
            Self::OmegaR2 => (0.0001, 0.008),
            Self::EtaE | Self::EtaC | Self::EtaH | Self::EtaI => (0.1, 0.95),
            Self::Kel => (0.05, 0.3),
            Self::KMetabolism => (0.02, 0.2),
            Self::KClearance => (0.1, 0.5),
            Self::AlphaA => (0.001, 0.1),
            Self::DeltaA => (0.05, 0.2),
            Self::KappaQ => (0.001, 0.05),
            Self::LambdaQ => (0.0005, 0.02),
            Self::KappaS => (0.001, 0.04),
            Self::DeltaS => (0.02, 0.1),
            Self::Gamma => (0.0001, 0.01),
            Self::DeltaP => (0.02, 0.1),
            Self::Mu => (0.001, 0.05),
            Self::Nu => (0.0001, 0.01),
            Self::DeltaG => (0.001, 0.05),
            Self::KappaM => (0.001, 0.1),
            Self::DeltaM => (0.001, 0.05),
            Self::KappaH => (0.001, 0.1),
            Self::DeltaH => (0.01, 0.1),
            Self::Rho1 => (0.6, 0.9),
            Self::Rho2 => (0.3, 0.6),
        };
        Bounds::new(lo, hi)
    }

    /// Heuristic parameters draw their coefficients from the
    /// [`crate::config::HeuristicProfile`].
    pub fn is_heuristic(self) -> bool {
        self.index() >= Self::Mu.index()
    }

    pub fn group(self) -> ParameterGroup {
        match self {
            Self::Lambda1 | Self::Lambda2 | Self::LambdaR1 | Self::LambdaR2 | Self::K => {
                ParameterGroup::Growth
            }
            Self::Beta1 | Self::Beta2 | Self::Phi1 | Self::Phi2 | Self::Phi3 | Self::DeltaI => {
                ParameterGroup::Immune
            }
            Self::OmegaR1 | Self::OmegaR2 => ParameterGroup::Resistance,
            Self::EtaE | Self::EtaC | Self::EtaH | Self::EtaI => ParameterGroup::Treatment,
            Self::Kel | Self::KMetabolism | Self::KClearance => ParameterGroup::Pharmacokinetic,
            Self::AlphaA
            | Self::DeltaA
            | Self::KappaQ
            | Self::LambdaQ
            | Self::KappaS
            | Self::DeltaS
            | Self::Gamma
            | Self::DeltaP => ParameterGroup::Microenvironment,
            Self::Mu
            | Self::Nu
            | Self::DeltaG
            | Self::KappaM
            | Self::DeltaM
            | Self::KappaH
            | Self::DeltaH => ParameterGroup::GeneticMetabolic,
            Self::Rho1 | Self::Rho2 => ParameterGroup::ImmuneSensitivity,
        }
    }
}
