use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::OncoError;
use crate::registry::{self, Registry};

/// Coefficients of the heuristic parameters (μ, ν, δ_G, κ_M, δ_M, κ_H, δ_H,
/// ρ₁, ρ₂). Clamp bounds are not part of the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeuristicProfile {
    pub mu_base: f64,
    pub mu_genetic_gain: f64,
    pub nu_base: f64,
    pub delta_g_base: f64,
    pub delta_g_brca_cap: f64,
    pub kappa_m_base: f64,
    pub kappa_m_ketone_floor: f64,
    pub delta_m_base: f64,
    pub delta_m_metabolic_gain: f64,
    pub kappa_h_base: f64,
    pub kappa_h_tumor_threshold: f64,
    pub delta_h_base: f64,
    pub rho1_base: f64,
    pub rho1_immune_gain: f64,
    pub rho2_base: f64,
    pub rho2_resistance_gain: f64,
}

impl HeuristicProfile {
    pub fn default_v1() -> Self {
        Self {
            mu_base: 0.01,
            mu_genetic_gain: 1.5,
            nu_base: 0.002,
            delta_g_base: 0.01,
            delta_g_brca_cap: 0.5,
            kappa_m_base: 0.02,
            kappa_m_ketone_floor: 0.5,
            delta_m_base: 0.01,
            delta_m_metabolic_gain: 0.5,
            kappa_h_base: 0.02,
            kappa_h_tumor_threshold: 0.5,
            delta_h_base: 0.05,
            rho1_base: 0.75,
            rho1_immune_gain: 0.15,
            rho2_base: 0.45,
            rho2_resistance_gain: 0.15,
        }
    }

    /// Loads a JSON profile; absent fields keep their v1 defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read heuristics {}", path.display()))?;
        let profile: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse heuristics {}", path.display()))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), OncoError> {
        let fields = [
            ("mu_base", self.mu_base),
            ("mu_genetic_gain", self.mu_genetic_gain),
            ("nu_base", self.nu_base),
            ("delta_g_base", self.delta_g_base),
            ("delta_g_brca_cap", self.delta_g_brca_cap),
            ("kappa_m_base", self.kappa_m_base),
            ("kappa_m_ketone_floor", self.kappa_m_ketone_floor),
            ("delta_m_base", self.delta_m_base),
            ("delta_m_metabolic_gain", self.delta_m_metabolic_gain),
            ("kappa_h_base", self.kappa_h_base),
            ("kappa_h_tumor_threshold", self.kappa_h_tumor_threshold),
            ("delta_h_base", self.delta_h_base),
            ("rho1_base", self.rho1_base),
            ("rho1_immune_gain", self.rho1_immune_gain),
            ("rho2_base", self.rho2_base),
            ("rho2_resistance_gain", self.rho2_resistance_gain),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(OncoError::Heuristics(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}

impl Default for HeuristicProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

/// Immutable model configuration shared by every computation.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub registry: Registry,
    pub heuristics: HeuristicProfile,
}

impl ModelConfig {
    pub fn builtin() -> Result<Self, OncoError> {
        Ok(Self {
            registry: registry::load_builtin()?,
            heuristics: HeuristicProfile::default_v1(),
        })
    }

    pub fn with_heuristics(mut self, heuristics: HeuristicProfile) -> Self {
        self.heuristics = heuristics;
        self
    }
}
