//! Port traits — the hexagonal boundary between domain logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ GatewayService (domain)
//! ```
//!
//! Driven adapters (sensors, the serial link, the plant store, event
//! sinks) implement these traits. The domain consumes them via generics
//! and never touches hardware or the filesystem directly.

use crate::config::SystemConfig;
use crate::error::{ConfigError, SensorError, StoreError};

// ───────────────────────────────────────────────────────────────
// Climate sensor port (sensor node: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// The opaque reading provider on the sensor node.
///
/// Each accessor returns `Err(SensorError::Unavailable)` on a sensor
/// fault; the sampler substitutes a neutral default rather than
/// omitting the field, so frames always carry five fields.
pub trait ClimateSensorPort {
    /// Air temperature in degrees Celsius.
    fn read_temperature_c(&mut self) -> Result<f32, SensorError>;

    /// Relative air humidity in percent.
    fn read_humidity_pct(&mut self) -> Result<f32, SensorError>;

    /// Soil moisture in percent (0–100), already mapped from the raw
    /// analog value.
    fn read_soil_pct(&mut self) -> Result<u8, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Frame transmit port (sensor node: domain → serial link)
// ───────────────────────────────────────────────────────────────

/// Outbound half of the serial link.
///
/// No acknowledgment, no retry, no backpressure: a momentarily full
/// channel may block the caller, but the node never buffers unsent
/// frames.
pub trait FrameTxPort {
    /// Write one encoded frame to the link.
    fn write(&mut self, frame: &[u8]);
}

// ───────────────────────────────────────────────────────────────
// Plant store port (gateway: domain ↔ durable storage)
// ───────────────────────────────────────────────────────────────

/// Durable, line-oriented storage of slot names.
///
/// The whole store is rewritten on every structural mutation; soil
/// values are never persisted.
pub trait PlantStorePort {
    /// Read all persisted names in slot order. A missing store is not
    /// an error — it returns an empty list ("use default single slot").
    fn load(&self) -> Result<Vec<String>, StoreError>;

    /// Fully rewrite the store with the given names, slot 0 first.
    fn save(&mut self, names: &[&str]) -> Result<(), StoreError>;
}

// ───────────────────────────────────────────────────────────────
// Configuration port (gateway ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists system configuration.
///
/// Implementations MUST validate ranges before persisting; invalid
/// values are rejected with [`ConfigError::ValidationFailed`], not
/// silently clamped.
pub trait ConfigPort {
    /// Load configuration, or [`SystemConfig::default()`] when none is
    /// stored.
    fn load(&self) -> Result<SystemConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &SystemConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / dashboard push)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go — serial log, a
/// dashboard push channel, a test recorder.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
