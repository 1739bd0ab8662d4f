use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::timecourse::compute_timecourse;

pub struct Stage7Timecourse;

impl Stage7Timecourse {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage7Timecourse {
    fn name(&self) -> &'static str {
        "stage7_timecourse"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.timecourse {
            return Ok(());
        }
        let result = compute_timecourse(&ctx.config.registry, ctx.timepoints.clone())?;
        ctx.timecourse_result = Some(result);
        info!("timecourse_ready");
        Ok(())
    }
}
