use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::ParameterSet;
use crate::scores::constraints::enforce_constraints;

pub struct Stage5Constraints;

impl Stage5Constraints {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Constraints {
    fn name(&self) -> &'static str {
        "stage5_constraints"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let parameters = ctx
            .parameters
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("parameters missing"))?;
        let mut values = *parameters.values();
        let violations = enforce_constraints(&mut values);
        info!(violations = violations.len(), "constraints_enforced");
        ctx.parameters = Some(ParameterSet::from_values(values));
        ctx.violations = violations;
        Ok(())
    }
}
