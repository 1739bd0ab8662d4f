use anyhow::{Context, Result};
use tracing::info;

#[cfg(feature = "mt")]
use rayon::prelude::*;

use crate::compute::{ComputeOutput, compute};
use crate::config::ModelConfig;
use crate::input::MeasurementSet;
use crate::registry::BiomarkerPanel;

/// One patient row of a cohort table.
#[derive(Debug, Clone)]
pub struct CohortRecord {
    pub patient_id: String,
    pub measurements: MeasurementSet,
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub patient_id: String,
    pub output: ComputeOutput,
}

/// Computes every record independently. Output order follows input order.
///
/// `threads == 0` lets rayon pick the pool size.
pub fn compute_batch(
    config: &ModelConfig,
    records: &[CohortRecord],
    panel: BiomarkerPanel,
    threads: usize,
) -> Result<Vec<BatchResult>> {
    let run_one = |record: &CohortRecord| -> Result<BatchResult> {
        let output = compute(config, &record.measurements, panel)
            .with_context(|| format!("patient '{}'", record.patient_id))?;
        Ok(BatchResult {
            patient_id: record.patient_id.clone(),
            output,
        })
    };

    #[cfg(feature = "mt")]
    let results = {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build thread pool: {}", e))?;
        pool.install(|| records.par_iter().map(run_one).collect::<Result<Vec<_>>>())?
    };

    #[cfg(not(feature = "mt"))]
    let results = {
        let _ = threads;
        records.iter().map(run_one).collect::<Result<Vec<_>>>()?
    };

    info!(patients = results.len(), "batch_computed");
    Ok(results)
}
