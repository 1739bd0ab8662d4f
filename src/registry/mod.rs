mod biomarker;
mod loader;

use crate::error::OncoError;

pub use biomarker::{BIOMARKER_COUNT, Biomarker};
pub use loader::{load_builtin_v1, parse_registry_tsv};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Tumor,
    Immune,
    Resistance,
    Metabolic,
    Organ,
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Self::Tumor => "tumor",
            Self::Immune => "immune",
            Self::Resistance => "resistance",
            Self::Metabolic => "metabolic",
            Self::Organ => "organ",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "tumor" => Some(Self::Tumor),
            "immune" => Some(Self::Immune),
            "resistance" => Some(Self::Resistance),
            "metabolic" => Some(Self::Metabolic),
            "organ" => Some(Self::Organ),
            _ => None,
        }
    }
}

/// Which way a change in the biomarker counts as clinical improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LowerBetter,
    HigherBetter,
    /// Closer to the reference value is better.
    Target,
    Neutral,
}

impl Direction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "lower" => Some(Self::LowerBetter),
            "higher" => Some(Self::HigherBetter),
            "target" => Some(Self::Target),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiomarkerPanel {
    Full,
    Optimized,
    Core,
}

impl BiomarkerPanel {
    pub const ALL: [BiomarkerPanel; 3] = [Self::Full, Self::Optimized, Self::Core];

    pub fn key(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Optimized => "optimized",
            Self::Core => "core",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.key() == key)
    }

    pub fn expected_size(self) -> usize {
        match self {
            Self::Full => BIOMARKER_COUNT,
            Self::Optimized => 25,
            Self::Core => 15,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::Full => 0b001,
            Self::Optimized => 0b010,
            Self::Core => 0b100,
        }
    }
}

/// Set of panels a biomarker belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelSet(u8);

impl PanelSet {
    pub fn insert(&mut self, panel: BiomarkerPanel) {
        self.0 |= panel.bit();
    }

    pub fn contains(self, panel: BiomarkerPanel) -> bool {
        self.0 & panel.bit() != 0
    }
}

#[derive(Debug, Clone)]
pub struct BiomarkerSpec {
    pub biomarker: Biomarker,
    pub label: String,
    pub category: Category,
    pub unit: String,
    pub reference_value: f64,
    pub normal_range: String,
    pub panels: PanelSet,
    pub direction: Direction,
    /// Row position in the source table, used for form ordering.
    pub position: usize,
}

impl BiomarkerSpec {
    pub fn key(&self) -> &'static str {
        self.biomarker.key()
    }
}

/// Immutable catalogue of the 47 biomarkers, indexed by [`Biomarker`].
#[derive(Debug, Clone)]
pub struct Registry {
    pub version: String,
    specs: Vec<BiomarkerSpec>,
}

impl Registry {
    pub(crate) fn from_specs(version: &str, specs: Vec<BiomarkerSpec>) -> Self {
        Self {
            version: version.to_string(),
            specs,
        }
    }

    pub fn lookup(&self, key: &str) -> Result<&BiomarkerSpec, OncoError> {
        Biomarker::from_key(key)
            .map(|b| self.get(b))
            .ok_or_else(|| OncoError::UnknownBiomarker(key.to_string()))
    }

    pub fn get(&self, biomarker: Biomarker) -> &BiomarkerSpec {
        &self.specs[biomarker.index()]
    }

    pub fn reference_value(&self, biomarker: Biomarker) -> f64 {
        self.get(biomarker).reference_value
    }

    pub fn iter(&self) -> impl Iterator<Item = &BiomarkerSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn contains(&self, panel: BiomarkerPanel, biomarker: Biomarker) -> bool {
        self.get(biomarker).panels.contains(panel)
    }

    /// Panel members ordered by category, then by declared position.
    pub fn members_of(&self, panel: BiomarkerPanel) -> Vec<&BiomarkerSpec> {
        let mut members: Vec<&BiomarkerSpec> = self
            .specs
            .iter()
            .filter(|s| s.panels.contains(panel))
            .collect();
        members.sort_by_key(|s| (s.category, s.position));
        members
    }
}

pub fn load_builtin() -> Result<Registry, OncoError> {
    let specs = load_builtin_v1()?;
    Ok(Registry::from_specs("v1", specs))
}
