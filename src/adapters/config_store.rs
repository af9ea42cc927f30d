//! Configuration store adapter.
//!
//! Implements [`ConfigPort`] over a postcard-encoded blob. The backend
//! here is an in-memory map (host/sim); a flash-backed build swaps the
//! map for the gateway's key-value partition behind the same trait.
//! All fields are range-checked before persistence — invalid values are
//! rejected, not clamped.

use std::cell::RefCell;
use std::collections::HashMap;

use log::info;

use crate::app::ports::ConfigPort;
use crate::config::SystemConfig;
use crate::error::ConfigError;

const CONFIG_KEY: &str = "syscfg";

pub struct MemConfigStore {
    store: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemConfigStore {
    pub fn new() -> Self {
        Self {
            store: RefCell::new(HashMap::new()),
        }
    }
}

impl Default for MemConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_config(cfg: &SystemConfig) -> Result<(), ConfigError> {
    if !(500..=60_000).contains(&cfg.sample_interval_ms) {
        return Err(ConfigError::ValidationFailed(
            "sample_interval_ms must be 500–60000",
        ));
    }
    if !(1200..=115_200).contains(&cfg.serial_baud) {
        return Err(ConfigError::ValidationFailed(
            "serial_baud must be 1200–115200",
        ));
    }
    if cfg.default_slot_name.trim().is_empty() {
        return Err(ConfigError::ValidationFailed(
            "default_slot_name must not be blank",
        ));
    }
    if !(4..=64).contains(&cfg.max_name_len) {
        return Err(ConfigError::ValidationFailed("max_name_len must be 4–64"));
    }
    if cfg.plant_store_path.is_empty() {
        return Err(ConfigError::ValidationFailed(
            "plant_store_path must not be empty",
        ));
    }
    Ok(())
}

impl ConfigPort for MemConfigStore {
    fn load(&self) -> Result<SystemConfig, ConfigError> {
        if let Some(bytes) = self.store.borrow().get(CONFIG_KEY) {
            let cfg: SystemConfig =
                postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupted)?;
            info!("config store: loaded stored config");
            Ok(cfg)
        } else {
            info!("config store: no stored config, using defaults");
            Ok(SystemConfig::default())
        }
    }

    fn save(&self, config: &SystemConfig) -> Result<(), ConfigError> {
        validate_config(config)?;
        let bytes = postcard::to_allocvec(config).map_err(|_| ConfigError::IoError)?;
        self.store.borrow_mut().insert(CONFIG_KEY.to_string(), bytes);
        info!("config store: config saved");
        Ok(())
    }
}
