use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::OncoError;
use crate::input::{MAX_MEASUREMENT_MAGNITUDE, MeasurementSet};
use crate::io::open_maybe_gz;

/// Reads a measurement file: JSON object when the name ends in `.json` or
/// `.json.gz`, two-column TSV otherwise.
pub fn read_measurements(path: &Path) -> Result<MeasurementSet> {
    let mut reader = open_maybe_gz(path)
        .with_context(|| format!("failed to open measurements {}", path.display()))?;
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .with_context(|| format!("failed to read measurements {}", path.display()))?;

    let origin = path.display().to_string();
    let set = if is_json(path) {
        parse_measurements_json(&content, &origin)?
    } else {
        parse_measurements_tsv(&content, &origin)?
    };
    Ok(set)
}

fn is_json(path: &Path) -> bool {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    name.ends_with(".json") || name.ends_with(".json.gz")
}

/// `biomarker<TAB>value` rows; `#` comments and blank lines are skipped, an
/// empty value means "not measured".
pub fn parse_measurements_tsv(content: &str, origin: &str) -> Result<MeasurementSet, OncoError> {
    let mut set = MeasurementSet::new();
    let mut seen_data = false;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').map(str::trim).collect();
        if parts.len() > 2 {
            return Err(OncoError::parse(
                origin,
                line_no,
                "malformed TSV (expected 2 columns)",
            ));
        }
        let key = parts[0];
        let raw = parts.get(1).copied().unwrap_or_default();
        if !seen_data && key.eq_ignore_ascii_case("biomarker") {
            seen_data = true;
            continue;
        }
        seen_data = true;
        if key.is_empty() {
            return Err(OncoError::parse(origin, line_no, "empty biomarker key"));
        }
        if raw.is_empty() {
            continue;
        }
        let value = parse_value(raw, origin, line_no)?;
        insert_unique(&mut set, key, value, origin, line_no)?;
    }

    Ok(set)
}

/// Flat JSON object of `key: number`; `null` and `""` mean "not measured".
pub fn parse_measurements_json(content: &str, origin: &str) -> Result<MeasurementSet, OncoError> {
    let root: Value = serde_json::from_str(content)
        .map_err(|e| OncoError::parse(origin, e.line(), format!("invalid JSON: {e}")))?;
    let object = root
        .as_object()
        .ok_or_else(|| OncoError::parse(origin, 1, "expected a JSON object"))?;

    let mut set = MeasurementSet::new();
    for (key, raw) in object {
        let value = match raw {
            Value::Null => continue,
            Value::Number(n) => {
                let value = n.as_f64().ok_or_else(|| {
                    OncoError::parse(origin, 0, format!("invalid number for '{key}'"))
                })?;
                check_magnitude(value, &n.to_string(), origin, 0)?
            }
            Value::String(s) if s.trim().is_empty() => continue,
            Value::String(s) => parse_value(s.trim(), origin, 0)?,
            _ => {
                return Err(OncoError::parse(
                    origin,
                    0,
                    format!("value for '{key}' must be a number"),
                ));
            }
        };
        insert_unique(&mut set, key, value, origin, 0)?;
    }
    Ok(set)
}

pub(crate) fn parse_value(raw: &str, origin: &str, line_no: usize) -> Result<f64, OncoError> {
    let value: f64 = raw
        .parse()
        .map_err(|_| OncoError::parse(origin, line_no, format!("invalid value '{raw}'")))?;
    if !value.is_finite() {
        return Err(OncoError::parse(
            origin,
            line_no,
            format!("non-finite value '{raw}'"),
        ));
    }
    check_magnitude(value, raw, origin, line_no)
}

fn check_magnitude(value: f64, raw: &str, origin: &str, line_no: usize) -> Result<f64, OncoError> {
    if value.abs() > MAX_MEASUREMENT_MAGNITUDE {
        return Err(OncoError::parse(
            origin,
            line_no,
            format!("value '{raw}' exceeds {MAX_MEASUREMENT_MAGNITUDE:e} in magnitude"),
        ));
    }
    Ok(value)
}

fn insert_unique(
    set: &mut MeasurementSet,
    key: &str,
    value: f64,
    origin: &str,
    line_no: usize,
) -> Result<(), OncoError> {
    if set.insert(key.to_string(), value).is_some() {
        return Err(OncoError::parse(
            origin,
            line_no,
            format!("duplicate biomarker '{key}'"),
        ));
    }
    Ok(())
}
