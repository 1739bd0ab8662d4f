use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::input::{self, assess_quality};
use crate::pipeline::Stage;
use crate::registry::BiomarkerPanel;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let measurements = input::read_measurements(&ctx.input)?;
        let resolved = input::resolve(&measurements)?;
        info!(
            input = %ctx.input.display(),
            measured = resolved.measured_count(),
            "measurements_loaded"
        );

        if ctx.panel != BiomarkerPanel::Full {
            for (biomarker, _) in resolved.iter() {
                if !ctx.config.registry.contains(ctx.panel, biomarker) {
                    ctx.warnings.push(format!(
                        "biomarker '{}' is not part of the {} panel; measured value used",
                        biomarker.key(),
                        ctx.panel.key()
                    ));
                }
            }
        }

        let qc = assess_quality(&resolved);
        for alert in &qc.critical_alerts {
            warn!(alert = %alert, "critical_value");
        }
        ctx.warnings.extend(qc.critical_alerts.iter().cloned());
        ctx.warnings.extend(qc.warnings.iter().cloned());

        ctx.report.input_meta.measured = resolved.measured_count() as u64;
        ctx.report.input_meta.confidence = Some(qc.confidence);
        ctx.measurements = Some(measurements);
        ctx.resolved = Some(resolved);
        ctx.qc = Some(qc);
        Ok(())
    }
}
