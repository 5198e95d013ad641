//! Configuration for crafting sessions.

use std::path::Path;

use al_core::{Category, CoreError};
use serde::{Deserialize, Serialize};

use crate::error::MechResult;
use crate::harvest::check_drop_rate;

/// Defaults applied to brews and harvests when the caller does not
/// override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraftConfig {
    /// RNG seed for reproducible rolls.
    pub seed: u64,
    /// Drop rate override in percent. `None` uses each table's own rate.
    pub drop_rate: Option<f64>,
    /// Number of attempts per harvest.
    pub harvest_count: u32,
    /// Category to force on brews.
    pub preferred: Option<Category>,
}

impl Default for CraftConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            drop_rate: None,
            harvest_count: 1,
            preferred: None,
        }
    }
}

impl CraftConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> MechResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(CoreError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings that have a restricted range.
    pub fn validate(&self) -> MechResult<()> {
        match self.drop_rate {
            Some(rate) => check_drop_rate(rate),
            None => Ok(()),
        }
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> MechResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Override the drop rate for every harvest, in percent.
    pub fn with_drop_rate(mut self, drop_rate: f64) -> Self {
        self.drop_rate = Some(drop_rate);
        self
    }

    /// Set the number of attempts per harvest.
    pub fn with_harvest_count(mut self, count: u32) -> Self {
        self.harvest_count = count;
        self
    }

    /// Force a category on brews.
    pub fn with_preferred(mut self, category: Category) -> Self {
        self.preferred = Some(category);
        self
    }
}
