use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u64 = 1;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct HomehubConfig {
    /// Shown in the dashboard header, e.g. "The Smiths".
    pub household_name: String,
    pub debug_logging: bool,
}

impl Default for HomehubConfig {
    fn default() -> Self {
        Self {
            household_name: "HomeHub".to_string(),
            debug_logging: false,
        }
    }
}
