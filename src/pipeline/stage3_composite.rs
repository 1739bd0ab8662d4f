use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::CompositeScoreSet;
use crate::scores::composite::SCORE_FORMULAS;
use crate::scores::formula::evaluate_scores;

pub struct Stage3Composite;

impl Stage3Composite {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Composite {
    fn name(&self) -> &'static str {
        "stage3_composite"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let biomarkers = ctx
            .biomarkers
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("biomarker vector missing"))?;
        let values = evaluate_scores(SCORE_FORMULAS, biomarkers, &ctx.config.heuristics);
        ctx.scores = Some(CompositeScoreSet::from_values(values));
        info!("composite_scores_ready");
        Ok(())
    }
}
