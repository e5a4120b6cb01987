//! Inventory configuration
//!
//! # Sources (later wins)
//!
//! 1. Built-in defaults
//! 2. JSON file passed to [`InventoryConfig::load`]
//! 3. Environment: `SATCHEL_BASE_CAPACITY`, `SATCHEL_AUTO_SORT`
//!
//! # Example File
//!
//! ```json
//! {
//!   "base_capacity": 80,
//!   "auto_sort": "name",
//!   "sockets": { "weapon": "hand_r" }
//! }
//! ```

use crate::equipment::EquipSlot;
use crate::error::ConfigError;
use crate::sort::SortMethod;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Carrier socket names passed to the scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocketNames {
    pub backpack: String,
    pub weapon: String,
    pub cosmetic: String,
    /// Where dropped and ejected items appear
    pub drop: String,
}

impl SocketNames {
    /// Socket an equip slot attaches to
    pub fn for_slot(&self, slot: EquipSlot) -> &str {
        match slot {
            EquipSlot::Backpack => &self.backpack,
            EquipSlot::Weapon => &self.weapon,
            EquipSlot::Cosmetic => &self.cosmetic,
        }
    }
}

impl Default for SocketNames {
    fn default() -> Self {
        Self {
            backpack: "BackpackSocket".to_string(),
            weapon: "WeaponSocket".to_string(),
            cosmetic: "CosmeticSocket".to_string(),
            drop: "ItemSpawnSocket".to_string(),
        }
    }
}

/// Complete inventory configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Carrying capacity without equipment bonuses
    pub base_capacity: u32,
    /// Sort applied after every successful stack pickup
    pub auto_sort: Option<SortMethod>,
    /// Carrier sockets
    pub sockets: SocketNames,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            base_capacity: 50,
            auto_sort: None,
            sockets: SocketNames::default(),
        }
    }
}

impl InventoryConfig {
    /// Load configuration from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let config = Self::load_from_file(path)?;
                log::info!("Loaded inventory config from {}", path.display());
                config
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply `SATCHEL_*` overrides from a key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("SATCHEL_BASE_CAPACITY") {
            match value.trim().parse() {
                Ok(capacity) => {
                    self.base_capacity = capacity;
                    log::info!("Base capacity from env: {}", capacity);
                }
                Err(_) => log::warn!("Ignoring SATCHEL_BASE_CAPACITY={:?}", value),
            }
        }

        if let Some(value) = lookup("SATCHEL_AUTO_SORT") {
            if value.trim().eq_ignore_ascii_case("none") {
                self.auto_sort = None;
            } else {
                match value.parse() {
                    Ok(method) => {
                        self.auto_sort = Some(method);
                        log::info!("Auto sort from env: {}", method);
                    }
                    Err(e) => log::warn!("Ignoring SATCHEL_AUTO_SORT: {}", e),
                }
            }
        }
    }

    /// Reject values the inventory cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_capacity == 0 {
            return Err(ConfigError::Invalid("base_capacity must be positive".into()));
        }
        Ok(())
    }
}
