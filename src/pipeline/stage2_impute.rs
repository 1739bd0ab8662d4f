use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::input::impute;
use crate::pipeline::Stage;

pub struct Stage2Impute;

impl Stage2Impute {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Impute {
    fn name(&self) -> &'static str {
        "stage2_impute"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let resolved = ctx
            .resolved
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("measurements missing"))?;
        let vector = impute(&ctx.config.registry, resolved, ctx.panel);
        info!(imputed = vector.imputed_count(), "biomarkers_imputed");
        ctx.report.input_meta.imputed = vector.imputed_count() as u64;
        ctx.report.input_meta.imputed_keys =
            vector.imputed_keys().into_iter().map(String::from).collect();
        ctx.biomarkers = Some(vector);
        Ok(())
    }
}
