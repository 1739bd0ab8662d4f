use std::io::{BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::batch::{BatchResult, CohortRecord};
use crate::error::OncoError;
use crate::input::MeasurementSet;
use crate::input::reader::parse_value;
use crate::io::open_maybe_gz;
use crate::scores::names::Parameter;
use crate::scores::risk::resistance_risk;
use crate::scores::stability::assess_stability;

pub fn read_cohort(path: &Path) -> Result<Vec<CohortRecord>> {
    let mut reader = open_maybe_gz(path)
        .with_context(|| format!("failed to open cohort {}", path.display()))?;
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .with_context(|| format!("failed to read cohort {}", path.display()))?;
    Ok(parse_cohort_tsv(&content, &path.display().to_string())?)
}

/// Wide table: `patient_id<TAB>key...` header, one patient per row, empty
/// cell = not measured. Column names are checked later by `compute`.
pub fn parse_cohort_tsv(content: &str, origin: &str) -> Result<Vec<CohortRecord>, OncoError> {
    let mut header: Option<Vec<String>> = None;
    let mut records = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').map(str::trim).collect();
        if header.is_none() {
            if parts.first().copied() != Some("patient_id") {
                return Err(OncoError::parse(
                    origin,
                    line_no,
                    "header must start with 'patient_id'",
                ));
            }
            let columns: Vec<String> = parts[1..].iter().map(|s| s.to_string()).collect();
            for (i, key) in columns.iter().enumerate() {
                if columns[..i].contains(key) {
                    return Err(OncoError::parse(
                        origin,
                        line_no,
                        format!("duplicate column '{key}'"),
                    ));
                }
            }
            header = Some(columns);
            continue;
        }
        let Some(columns) = header.as_ref() else {
            continue;
        };
        if parts.len() > columns.len() + 1 {
            return Err(OncoError::parse(
                origin,
                line_no,
                format!("expected at most {} columns", columns.len() + 1),
            ));
        }
        let patient_id = parts[0];
        if patient_id.is_empty() {
            return Err(OncoError::parse(origin, line_no, "empty patient_id"));
        }
        let mut measurements = MeasurementSet::new();
        for (key, raw) in columns.iter().zip(parts[1..].iter()) {
            if raw.is_empty() {
                continue;
            }
            measurements.insert(key.clone(), parse_value(raw, origin, line_no)?);
        }
        records.push(CohortRecord {
            patient_id: patient_id.to_string(),
            measurements,
        });
    }

    Ok(records)
}

pub fn write_cohort_tsv(path: &Path, results: &[BatchResult]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    let mut header = vec!["patient_id".to_string(), "imputed".to_string()];
    header.extend(Parameter::ALL.iter().map(|p| p.key().to_string()));
    header.extend(
        ["violations", "stability", "resistance_risk"]
            .iter()
            .map(|s| s.to_string()),
    );
    writeln!(w, "{}", header.join("\t"))?;

    for r in results {
        let out = &r.output;
        let stability = assess_stability(&out.parameters);
        let risk = resistance_risk(&out.parameters, &out.scores);
        let mut row = vec![
            r.patient_id.clone(),
            out.biomarkers.imputed_count().to_string(),
        ];
        row.extend(out.parameters.iter().map(|(_, v)| format!("{:.6}", v)));
        row.push(out.violations.len().to_string());
        row.push(stability.status.key().to_string());
        row.push(risk.level.key().to_string());
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()?;
    Ok(())
}
