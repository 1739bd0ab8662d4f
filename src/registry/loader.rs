use std::collections::HashSet;

use crate::error::OncoError;
use crate::registry::{
    BIOMARKER_COUNT, Biomarker, BiomarkerPanel, BiomarkerSpec, Category, Direction, PanelSet,
};

const COLUMNS: usize = 8;

pub fn load_builtin_v1() -> Result<Vec<BiomarkerSpec>, OncoError> {
    let content = include_str!("../../assets/registry/biomarkers_v1.tsv");
    let specs = parse_registry_tsv(content, "built-in v1")?;
    validate_specs(&specs)?;
    Ok(specs)
}

/// Parses registry rows into specs ordered by [`Biomarker`] index.
///
/// Row order in the file only determines `position` (form order within a
/// category); lookup always goes through the enum index.
pub fn parse_registry_tsv(content: &str, origin: &str) -> Result<Vec<BiomarkerSpec>, OncoError> {
    let mut slots: Vec<Option<BiomarkerSpec>> = vec![None; BIOMARKER_COUNT];
    let mut position = 0usize;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').map(str::trim).collect();
        if parts.len() != COLUMNS {
            return Err(OncoError::parse(
                origin,
                line_no,
                format!("malformed TSV (expected {COLUMNS} columns)"),
            ));
        }
        let key = parts[0];
        if key.is_empty() || parts[1].is_empty() {
            return Err(OncoError::parse(origin, line_no, "empty field in TSV"));
        }
        let biomarker = Biomarker::from_key(key)
            .ok_or_else(|| OncoError::parse(origin, line_no, format!("unknown key '{key}'")))?;
        let category = Category::from_key(parts[2]).ok_or_else(|| {
            OncoError::parse(origin, line_no, format!("invalid category '{}'", parts[2]))
        })?;
        let reference_value: f64 = parts[4].parse().map_err(|_| {
            OncoError::parse(origin, line_no, format!("invalid reference '{}'", parts[4]))
        })?;
        if !reference_value.is_finite() {
            return Err(OncoError::parse(origin, line_no, "reference must be finite"));
        }
        let panels = parse_panels(parts[6], origin, line_no)?;
        let direction = Direction::from_key(parts[7]).ok_or_else(|| {
            OncoError::parse(origin, line_no, format!("invalid direction '{}'", parts[7]))
        })?;

        let slot = &mut slots[biomarker.index()];
        if slot.is_some() {
            return Err(OncoError::parse(
                origin,
                line_no,
                format!("duplicate key '{key}'"),
            ));
        }
        *slot = Some(BiomarkerSpec {
            biomarker,
            label: parts[1].to_string(),
            category,
            unit: parts[3].to_string(),
            reference_value,
            normal_range: parts[5].to_string(),
            panels,
            direction,
            position,
        });
        position += 1;
    }

    let mut specs = Vec::with_capacity(BIOMARKER_COUNT);
    for (biomarker, slot) in Biomarker::ALL.iter().zip(slots) {
        match slot {
            Some(spec) => specs.push(spec),
            None => {
                return Err(OncoError::Registry(format!(
                    "{origin}: missing row for '{}'",
                    biomarker.key()
                )));
            }
        }
    }
    Ok(specs)
}

fn parse_panels(field: &str, origin: &str, line_no: usize) -> Result<PanelSet, OncoError> {
    let mut set = PanelSet::default();
    for token in field.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let panel = BiomarkerPanel::from_key(token).ok_or_else(|| {
            OncoError::parse(origin, line_no, format!("invalid panel '{token}'"))
        })?;
        set.insert(panel);
    }
    if !set.contains(BiomarkerPanel::Full) {
        return Err(OncoError::parse(
            origin,
            line_no,
            "every biomarker must belong to the full panel",
        ));
    }
    Ok(set)
}

fn validate_specs(specs: &[BiomarkerSpec]) -> Result<(), OncoError> {
    let keys: HashSet<&str> = specs.iter().map(|s| s.key()).collect();
    if keys.len() != BIOMARKER_COUNT {
        return Err(OncoError::Registry(format!(
            "expected {BIOMARKER_COUNT} unique keys, found {}",
            keys.len()
        )));
    }
    for panel in BiomarkerPanel::ALL {
        let size = specs.iter().filter(|s| s.panels.contains(panel)).count();
        if size != panel.expected_size() {
            return Err(OncoError::Registry(format!(
                "panel '{}' has {size} members, expected {}",
                panel.key(),
                panel.expected_size()
            )));
        }
    }
    Ok(())
}
