//! System configuration parameters
//!
//! All tunable parameters for the GreenLink pair. Values can be
//! overridden via the config store; the defaults mirror the deployed
//! hardware (9600-baud software serial, 2-second sampling).

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Telemetry link ---
    /// Sensor-node sampling / transmission period (milliseconds)
    pub sample_interval_ms: u32,
    /// Serial link baud rate
    pub serial_baud: u32,

    // --- Registry ---
    /// Name given to slot 0 when the plant store is absent or empty
    pub default_slot_name: String,
    /// Maximum accepted plant-name length (characters, after trim)
    pub max_name_len: usize,

    // --- Persistence ---
    /// Path of the line-oriented plant store
    pub plant_store_path: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Link
            sample_interval_ms: 2000, // 2-second cycle
            serial_baud: 9600,

            // Registry
            default_slot_name: "Primary Pot".to_string(),
            max_name_len: 32,

            // Persistence
            plant_store_path: "plants.csv".to_string(),
        }
    }
}
