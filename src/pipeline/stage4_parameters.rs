use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::ParameterSet;
use crate::scores::formula::evaluate_parameters;
use crate::scores::params::PARAMETER_FORMULAS;

pub struct Stage4Parameters;

impl Stage4Parameters {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Parameters {
    fn name(&self) -> &'static str {
        "stage4_parameters"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let biomarkers = ctx
            .biomarkers
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("biomarker vector missing"))?;
        let scores = ctx
            .scores
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("composite scores missing"))?;
        let values = evaluate_parameters(
            PARAMETER_FORMULAS,
            biomarkers,
            scores.values(),
            &ctx.config.heuristics,
        );
        ctx.parameters = Some(ParameterSet::from_values(values));
        info!("parameters_ready");
        Ok(())
    }
}
