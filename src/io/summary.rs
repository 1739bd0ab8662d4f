use anyhow::Result;

use crate::ctx::Ctx;
use crate::scores::names::Parameter;

const HEADLINE: [Parameter; 6] = [
    Parameter::Lambda1,
    Parameter::K,
    Parameter::Beta1,
    Parameter::EtaE,
    Parameter::EtaC,
    Parameter::EtaI,
];

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let biomarkers = ctx
        .biomarkers
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("biomarker vector missing"))?;
    let parameters = ctx
        .parameters
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("parameters missing"))?;

    let imputed = biomarkers.imputed_count();
    let measured = biomarkers.values().len() - imputed;

    let mut out = String::new();
    out.push_str(&format!("kira-oncoparam v{}\n", version));
    out.push_str(&format!(
        "Input: {} measured, {} imputed, panel={}\n",
        measured,
        imputed,
        ctx.panel.key()
    ));
    if let Some(qc) = &ctx.qc {
        out.push_str(&format!("Confidence: {:.1}%\n", qc.confidence));
    }

    let headline: Vec<String> = HEADLINE
        .iter()
        .map(|&p| format!("{}={:.4}", p.key(), parameters[p]))
        .collect();
    out.push_str(&format!("Parameters: {}\n", headline.join(" ")));

    if let Some(stability) = &ctx.stability {
        out.push_str(&format!(
            "Stability: {} ({:.2})\n",
            stability.status.key(),
            stability.score
        ));
    }
    if let Some(risk) = &ctx.resistance_risk {
        out.push_str(&format!(
            "Resistance risk: {} ({:.6})\n",
            risk.level.key(),
            risk.value
        ));
    }

    if ctx.violations.is_empty() {
        out.push_str("Constraints: ok\n");
    } else {
        let names: Vec<&str> = ctx
            .violations
            .iter()
            .map(|v| v.description.as_str())
            .collect();
        out.push_str(&format!("Constraints corrected: {}\n", names.join(", ")));
    }

    let fired: Vec<String> = ctx
        .risk_flags
        .iter()
        .filter(|f| f.fired)
        .map(|f| f.name.clone())
        .collect();
    if fired.is_empty() {
        out.push_str("Flags: none\n");
    } else {
        out.push_str(&format!("Flags: {}\n", fired.join(", ")));
    }

    Ok(out)
}
