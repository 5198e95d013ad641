use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::IpSums;
use crate::error::{CoreError, CoreResult};

/// An alchemical ingredient and the influence it contributes to a brew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reagent {
    /// Stable identifier used to look the reagent up.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Fixed per-category contribution.
    #[serde(default)]
    pub ip: IpSums,
}

impl Reagent {
    /// Create a reagent.
    pub fn new(id: impl Into<String>, name: impl Into<String>, ip: IpSums) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ip,
        }
    }
}

/// Lookup of reagents by id, preserving load order for listing.
#[derive(Debug, Clone, Default)]
pub struct ReagentCatalog {
    reagents: Vec<Reagent>,
    by_id: HashMap<String, usize>,
}

impl ReagentCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(reagents: Vec<Reagent>) -> CoreResult<Self> {
        let mut by_id = HashMap::with_capacity(reagents.len());
        for (index, reagent) in reagents.iter().enumerate() {
            if by_id.insert(reagent.id.clone(), index).is_some() {
                return Err(CoreError::DuplicateReagent(reagent.id.clone()));
            }
        }
        Ok(Self { reagents, by_id })
    }

    /// Parse a catalog from a JSON array of reagents.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let reagents: Vec<Reagent> = serde_json::from_str(json)?;
        Self::new(reagents)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Look up a reagent by id.
    pub fn get(&self, id: &str) -> Option<&Reagent> {
        self.by_id.get(id).map(|&index| &self.reagents[index])
    }

    /// All reagents in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Reagent> {
        self.reagents.iter()
    }

    /// Number of reagents.
    pub fn len(&self) -> usize {
        self.reagents.len()
    }

    /// Returns true if the catalog has no reagents.
    pub fn is_empty(&self) -> bool {
        self.reagents.is_empty()
    }
}
