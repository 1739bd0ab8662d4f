use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_input;
pub mod stage2_impute;
pub mod stage3_composite;
pub mod stage4_parameters;
pub mod stage5_constraints;
pub mod stage6_risk;
pub mod stage7_timecourse;
pub mod stage8_output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Input through risk assessment, without writing anything.
    pub fn compute_stages() -> Vec<Box<dyn Stage>> {
        vec![
            Box::new(stage1_input::Stage1Input::new()),
            Box::new(stage2_impute::Stage2Impute::new()),
            Box::new(stage3_composite::Stage3Composite::new()),
            Box::new(stage4_parameters::Stage4Parameters::new()),
            Box::new(stage5_constraints::Stage5Constraints::new()),
            Box::new(stage6_risk::Stage6Risk::new()),
        ]
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!(
            panel = ctx.panel.key(),
            registry = %ctx.config.registry.version,
            "model configuration selected"
        );
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
