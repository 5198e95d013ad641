use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// One weighted entry in a harvest table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedSlot {
    /// Id of the thing this slot yields (usually a reagent id).
    #[serde(default)]
    pub reference: String,
    /// Relative weight. Missing or zero counts as 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl WeightedSlot {
    /// Create a slot with an explicit weight.
    pub fn new(reference: impl Into<String>, weight: u32) -> Self {
        Self {
            reference: reference.into(),
            weight: Some(weight),
        }
    }

    /// The weight used for rolling, never below 1.
    pub fn effective_weight(&self) -> u32 {
        self.weight.unwrap_or(1).max(1)
    }

    /// Returns true if the slot points at something.
    pub fn is_valid(&self) -> bool {
        !self.reference.trim().is_empty()
    }
}

fn default_drop_rate() -> f64 {
    100.0
}

/// A named table of weighted slots that harvesting rolls against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestTable {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Chance, in percent, that a single roll yields anything.
    #[serde(default = "default_drop_rate")]
    pub drop_rate: f64,
    /// The weighted entries, in roll order.
    #[serde(default)]
    pub slots: Vec<WeightedSlot>,
}

impl HarvestTable {
    /// Create an empty table that always drops.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            drop_rate: default_drop_rate(),
            slots: Vec::new(),
        }
    }

    /// Set the drop rate in percent.
    pub fn with_drop_rate(mut self, drop_rate: f64) -> Self {
        self.drop_rate = drop_rate;
        self
    }

    /// Append a slot.
    pub fn with_slot(mut self, reference: impl Into<String>, weight: u32) -> Self {
        self.slots.push(WeightedSlot::new(reference, weight));
        self
    }

    /// Sum of effective weights over valid slots.
    pub fn total_weight(&self) -> u64 {
        self.slots
            .iter()
            .filter(|s| s.is_valid())
            .map(|s| u64::from(s.effective_weight()))
            .sum()
    }
}

/// Storage for harvest tables.
///
/// The mechanics engine never persists anything itself; callers own table
/// lifetime through an implementation of this trait.
pub trait TableStore {
    /// Look up a table by id.
    fn get(&self, id: &str) -> Option<&HarvestTable>;

    /// Insert or replace a table, returning the previous one.
    fn insert(&mut self, table: HarvestTable) -> Option<HarvestTable>;

    /// Remove a table by id.
    fn remove(&mut self, id: &str) -> Option<HarvestTable>;

    /// All table ids.
    fn ids(&self) -> Vec<String>;
}

/// An in-memory [`TableStore`] that can be loaded from and saved to JSON.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableStore {
    tables: BTreeMap<String, HarvestTable>,
}

impl MemoryTableStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of tables, rejecting duplicate ids.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let tables: Vec<HarvestTable> = serde_json::from_str(json)?;
        let mut store = Self::new();
        for table in tables {
            let id = table.id.clone();
            if store.insert(table).is_some() {
                return Err(CoreError::DuplicateTable(id));
            }
        }
        Ok(store)
    }

    /// Read and parse a table file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize every table as a pretty-printed JSON array.
    pub fn to_json(&self) -> CoreResult<String> {
        let tables: Vec<&HarvestTable> = self.tables.values().collect();
        Ok(serde_json::to_string_pretty(&tables)?)
    }

    /// Write every table to a file.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of stored tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no tables are stored.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl TableStore for MemoryTableStore {
    fn get(&self, id: &str) -> Option<&HarvestTable> {
        self.tables.get(id)
    }

    fn insert(&mut self, table: HarvestTable) -> Option<HarvestTable> {
        self.tables.insert(table.id.clone(), table)
    }

    fn remove(&mut self, id: &str) -> Option<HarvestTable> {
        self.tables.remove(id)
    }

    fn ids(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }
}
