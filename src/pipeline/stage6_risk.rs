use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::registry::BiomarkerPanel;
use crate::scores::coverage::panel_coverage;
use crate::scores::risk::{compute_risk_flags, resistance_risk};
use crate::scores::stability::assess_stability;

pub struct Stage6Risk;

impl Stage6Risk {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Risk {
    fn name(&self) -> &'static str {
        "stage6_risk"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let parameters = ctx
            .parameters
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("parameters missing"))?;
        let scores = ctx
            .scores
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("composite scores missing"))?;
        let biomarkers = ctx
            .biomarkers
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("biomarker vector missing"))?;

        let stability = assess_stability(parameters);
        let risk = resistance_risk(parameters, scores);
        let flags = compute_risk_flags(parameters, biomarkers);
        let coverage = if ctx.panel == BiomarkerPanel::Full {
            Vec::new()
        } else {
            panel_coverage(&ctx.config.registry, ctx.panel)
        };

        info!(
            stability = stability.status.key(),
            resistance_risk = risk.level.key(),
            "risk_flags_ready"
        );
        ctx.stability = Some(stability);
        ctx.resistance_risk = Some(risk);
        ctx.risk_flags = flags;
        ctx.coverage = coverage;
        Ok(())
    }
}
