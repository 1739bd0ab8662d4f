use anyhow::{Result, bail};

use crate::input::CompleteBiomarkerVector;
use crate::registry::{Biomarker, BiomarkerSpec, Direction, Registry};
use crate::scores::names::Parameter;
use crate::scores::{
    BiomarkerChange, ParameterDelta, ParameterSet, TimecourseResult, Timepoint,
    TimepointComparison, Trend, TrendCounts,
};

const UNCHANGED_EPS: f64 = 1e-6;

pub fn compute_timecourse(registry: &Registry, timepoints: Vec<Timepoint>) -> Result<TimecourseResult> {
    if timepoints.len() < 2 {
        bail!("comparison requires at least 2 timepoints");
    }

    let mut comparisons = Vec::with_capacity(timepoints.len() - 1);
    for win in timepoints.windows(2) {
        let a = &win[0];
        let b = &win[1];
        let biomarkers = compare_biomarkers(registry, &a.biomarkers, &b.biomarkers);
        let counts = trend_counts(&biomarkers);
        comparisons.push(TimepointComparison {
            from: a.label.clone(),
            to: b.label.clone(),
            biomarkers,
            parameters: parameter_deltas(&a.parameters, &b.parameters),
            counts,
        });
    }

    let first = &timepoints[0];
    let last = &timepoints[timepoints.len() - 1];
    let overall = trend_counts(&compare_biomarkers(
        registry,
        &first.biomarkers,
        &last.biomarkers,
    ));

    Ok(TimecourseResult {
        labels: timepoints.iter().map(|t| t.label.clone()).collect(),
        comparisons,
        overall,
    })
}

/// Per-biomarker change from `previous` to `current`, in registry order.
pub fn compare_biomarkers(
    registry: &Registry,
    previous: &CompleteBiomarkerVector,
    current: &CompleteBiomarkerVector,
) -> Vec<BiomarkerChange> {
    Biomarker::ALL
        .iter()
        .map(|&b| compare_one(registry.get(b), previous[b], current[b]))
        .collect()
}

fn compare_one(spec: &BiomarkerSpec, prev: f64, cur: f64) -> BiomarkerChange {
    let delta = cur - prev;
    let pct_change = if prev != 0.0 {
        100.0 * delta / prev
    } else if cur != 0.0 {
        100.0
    } else {
        0.0
    };

    let (trend, interpretation) = if delta.abs() < UNCHANGED_EPS {
        (Trend::Unchanged, "No significant change".to_string())
    } else {
        match spec.direction {
            Direction::LowerBetter if delta < 0.0 => {
                (Trend::Improved, "Decrease (favorable)".to_string())
            }
            Direction::LowerBetter => (Trend::Worsened, "Increase (unfavorable)".to_string()),
            Direction::HigherBetter if delta > 0.0 => {
                (Trend::Improved, "Increase (favorable)".to_string())
            }
            Direction::HigherBetter => (Trend::Worsened, "Decrease (unfavorable)".to_string()),
            Direction::Target => {
                let target = spec.reference_value;
                if (cur - target).abs() < (prev - target).abs() {
                    (Trend::Improved, format!("Closer to target ({target})"))
                } else {
                    (Trend::Worsened, "Further from target".to_string())
                }
            }
            Direction::Neutral => (Trend::Changed, format!("Δ = {:+.2}", delta)),
        }
    };

    BiomarkerChange {
        key: spec.key().to_string(),
        previous: prev,
        current: cur,
        delta,
        pct_change,
        trend,
        interpretation,
    }
}

pub fn trend_counts(changes: &[BiomarkerChange]) -> TrendCounts {
    let mut counts = TrendCounts::default();
    for c in changes {
        match c.trend {
            Trend::Improved => counts.improved += 1,
            Trend::Worsened => counts.worsened += 1,
            Trend::Unchanged => counts.unchanged += 1,
            Trend::Changed => counts.changed += 1,
        }
    }
    counts
}

pub fn parameter_deltas(previous: &ParameterSet, current: &ParameterSet) -> Vec<ParameterDelta> {
    Parameter::ALL
        .iter()
        .map(|&p| ParameterDelta {
            parameter: p,
            previous: previous[p],
            current: current[p],
            delta: current[p] - previous[p],
        })
        .collect()
}
