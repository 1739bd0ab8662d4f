use anyhow::Result;
use std::fs;
use tracing::info;

use crate::config::HeuristicProfile;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage0Scaffold;

impl Stage0Scaffold {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Scaffold {
    fn name(&self) -> &'static str {
        "stage0_scaffold"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        fs::create_dir_all(&ctx.output.out_dir)?;
        info!(
            out_dir = %ctx.output.out_dir.display(),
            "output_dir_ready"
        );

        if let Some(path) = &ctx.heuristics_path {
            let profile = HeuristicProfile::from_json_file(path)?;
            info!(heuristics = %path.display(), "heuristics_loaded");
            ctx.config.heuristics = profile;
        }

        ctx.report.input_meta.source = Some(ctx.input.display().to_string());
        ctx.report.input_meta.panel = ctx.panel.key().to_string();
        Ok(())
    }
}
