use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::registry::Biomarker;
use crate::schema::v1::{
    Assessment, BiomarkerChange, BiomarkerEntry, ComparisonV1, ConstraintViolation, InputMeta,
    OncoParamV1, ParameterDelta, ParameterEntry, ParameterValue, Qc, RiskFlag,
    TimepointComparison, TrendCounts,
};
use crate::scores;
use crate::scores::names::Parameter;

pub fn build_report(ctx: &Ctx) -> Result<OncoParamV1> {
    let biomarkers = ctx
        .biomarkers
        .as_ref()
        .context("biomarker vector missing")?;
    let scores = ctx.scores.as_ref().context("composite scores missing")?;
    let parameters = ctx.parameters.as_ref().context("parameters missing")?;

    let input_meta = InputMeta {
        source: ctx.report.input_meta.source.clone(),
        panel: ctx.panel.key().to_string(),
        measured: (Biomarker::ALL.len() - biomarkers.imputed_count()) as u64,
        imputed: biomarkers.imputed_count() as u64,
        imputed_keys: biomarkers
            .imputed_keys()
            .into_iter()
            .map(String::from)
            .collect(),
        confidence: ctx.qc.as_ref().map(|q| q.confidence),
    };

    let biomarker_entries = Biomarker::ALL
        .iter()
        .map(|&b| BiomarkerEntry {
            key: b.key().to_string(),
            value: biomarkers[b],
            imputed: biomarkers.is_imputed(b),
        })
        .collect::<Vec<_>>();

    let score_map = scores
        .iter()
        .map(|(s, v)| (s.key().to_string(), v))
        .collect();

    let parameter_entries = parameters
        .iter()
        .map(|(p, value)| {
            let bounds = p.bounds();
            ParameterEntry {
                key: p.key().to_string(),
                symbol: p.symbol().to_string(),
                group: p.group().key().to_string(),
                value,
                lo: bounds.lo,
                hi: bounds.hi,
                heuristic: p.is_heuristic(),
                coverage: coverage_key(ctx, p),
            }
        })
        .collect::<Vec<_>>();

    let constraint_violations = ctx
        .violations
        .iter()
        .map(|v| ConstraintViolation {
            constraint: v.constraint.clone(),
            description: v.description.clone(),
            original: v.original.iter().map(to_schema_value).collect(),
            corrected: v.corrected.iter().map(to_schema_value).collect(),
        })
        .collect::<Vec<_>>();

    let qc = ctx.qc.as_ref().map(|q| Qc {
        warnings: q.warnings.clone(),
        critical_alerts: q.critical_alerts.clone(),
        completeness: q.completeness,
    });

    let assessment = match (&ctx.stability, &ctx.resistance_risk) {
        (Some(stability), Some(risk)) => Some(Assessment {
            stability: stability.status.key().to_string(),
            stability_score: stability.score,
            resistance_risk: risk.level.key().to_string(),
            resistance_risk_value: risk.value,
        }),
        _ => None,
    };

    let risk_flags = ctx
        .risk_flags
        .iter()
        .map(|f| RiskFlag {
            name: f.name.clone(),
            fired: f.fired,
            threshold: Some(f.threshold.clone()),
            details: f.details.clone(),
        })
        .collect::<Vec<_>>();

    Ok(OncoParamV1 {
        tool: "kira-oncoparam".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        input_meta,
        biomarkers: biomarker_entries,
        scores: score_map,
        parameters: parameter_entries,
        constraint_violations,
        qc,
        assessment,
        risk_flags,
    })
}

fn coverage_key(ctx: &Ctx, parameter: Parameter) -> Option<String> {
    ctx.coverage
        .iter()
        .find(|c| c.parameter == parameter)
        .map(|c| c.class.key().to_string())
}

fn to_schema_value(v: &scores::ParameterValue) -> ParameterValue {
    ParameterValue {
        parameter: v.parameter.key().to_string(),
        value: v.value,
    }
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    super::write_json(path, &report)
}

pub fn build_comparison(ctx: &Ctx) -> Result<ComparisonV1> {
    let tc = ctx
        .timecourse_result
        .as_ref()
        .context("comparison result missing")?;
    Ok(ComparisonV1 {
        tool: "kira-oncoparam".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        timepoints: tc.labels.clone(),
        comparisons: tc
            .comparisons
            .iter()
            .map(|c| TimepointComparison {
                from: c.from.clone(),
                to: c.to.clone(),
                summary: to_schema_counts(&c.counts),
                biomarkers: c
                    .biomarkers
                    .iter()
                    .map(|b| BiomarkerChange {
                        key: b.key.clone(),
                        previous: b.previous,
                        current: b.current,
                        delta: b.delta,
                        pct_change: b.pct_change,
                        trend: b.trend.key().to_string(),
                        interpretation: b.interpretation.clone(),
                    })
                    .collect(),
                parameters: c
                    .parameters
                    .iter()
                    .map(|d| ParameterDelta {
                        key: d.parameter.key().to_string(),
                        previous: d.previous,
                        current: d.current,
                        delta: d.delta,
                    })
                    .collect(),
            })
            .collect(),
        overall: to_schema_counts(&tc.overall),
    })
}

fn to_schema_counts(c: &scores::TrendCounts) -> TrendCounts {
    TrendCounts {
        improved: c.improved as u64,
        worsened: c.worsened as u64,
        unchanged: c.unchanged as u64,
        changed: c.changed as u64,
    }
}

pub fn write_comparison(path: &Path, ctx: &Ctx) -> Result<()> {
    let comparison = build_comparison(ctx)?;
    super::write_json(path, &comparison)
}
