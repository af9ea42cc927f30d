//! Gateway service — the hexagonal core.
//!
//! [`GatewayService`] owns the frame decoder, the plant registry and the
//! latest climate reading — the explicit context object that replaces
//! ambient globals. All I/O flows through port traits injected at call
//! sites, making the whole service testable with mock adapters.
//!
//! ```text
//!  serial bytes ──▶ ┌───────────────────────────┐ ──▶ EventSink
//!                   │      GatewayService        │
//!  AdminCommand ──▶ │  Decoder · Registry        │ ──▶ PlantStorePort
//!                   └───────────────────────────┘
//! ```
//!
//! Ownership is single-threaded: one cooperative control loop drains the
//! link and services at most one admin command per pass. An embedding
//! with real threads must put the whole service behind one mutex or a
//! single-consumer channel.

use log::{info, warn};

use crate::config::SystemConfig;
use crate::error::{Error, RegistryError, Result};
use crate::link::{FrameDecoder, Reading};
use crate::registry::PlantRegistry;

use super::commands::AdminCommand;
use super::events::{AppEvent, DashboardSnapshot};
use super::ports::{EventSink, PlantStorePort};

// ───────────────────────────────────────────────────────────────
// GatewayService
// ───────────────────────────────────────────────────────────────

/// The gateway core: decoder, registry and climate state.
pub struct GatewayService {
    config: SystemConfig,
    decoder: FrameDecoder,
    registry: PlantRegistry,
    /// Latest decoded reading; stays at the last value indefinitely if
    /// the sender stalls (staleness shows only as absent updates).
    climate: Reading,
}

impl GatewayService {
    /// Construct the service with a single default slot.
    ///
    /// Call [`load_registry`](Self::load_registry) next to replace the
    /// default with the persisted slot list.
    pub fn new(config: SystemConfig) -> Self {
        let registry = PlantRegistry::with_default(&config.default_slot_name);
        Self {
            config,
            decoder: FrameDecoder::new(),
            registry,
            climate: Reading::ZERO,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Load the persisted slot list at startup.
    ///
    /// A missing or empty store means "single default slot". A store
    /// read error is logged and degrades to the default — never fatal.
    pub fn load_registry(&mut self, store: &impl PlantStorePort, sink: &mut impl EventSink) {
        match store.load() {
            Ok(names) => {
                self.registry = PlantRegistry::from_names(names, &self.config.default_slot_name);
                info!("registry: loaded {} slot(s)", self.registry.len());
            }
            Err(e) => {
                warn!("registry: store load failed ({e}), using default slot");
                self.registry = PlantRegistry::with_default(&self.config.default_slot_name);
            }
        }
        sink.emit(&AppEvent::Started {
            slots: self.registry.len(),
        });
    }

    // ── Link ingestion ────────────────────────────────────────

    /// Drain one chunk of inbound serial bytes through the decoder.
    ///
    /// Every completed frame is applied atomically — climate state and
    /// slot 0's soil value change together, before the next byte is
    /// processed. Returns the number of readings applied.
    pub fn ingest(&mut self, bytes: &[u8], sink: &mut impl EventSink) -> usize {
        let mut applied = 0;
        for &byte in bytes {
            if let Some(reading) = self.decoder.push(byte) {
                self.apply_reading(reading, sink);
                applied += 1;
            }
        }
        applied
    }

    fn apply_reading(&mut self, reading: Reading, sink: &mut impl EventSink) {
        self.climate = reading;
        self.registry.update_live_soil(reading.soil_pct);
        sink.emit(&AppEvent::ReadingApplied(reading));
    }

    // ── Admin command handling ────────────────────────────────

    /// Service one admin request: validate, mutate the registry, then
    /// fully rewrite the plant store.
    ///
    /// Precondition failures leave both memory and store untouched. A
    /// store failure after a successful mutation surfaces as
    /// `Error::Store` with the in-memory change kept — the two
    /// reconverge on the next successful mutation or on reload.
    pub fn handle_command(
        &mut self,
        cmd: AdminCommand,
        store: &mut impl PlantStorePort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        match cmd {
            AdminCommand::CreatePlant { name } => {
                self.check_name_len(&name)?;
                let index = self.registry.create(&name)?;
                info!("registry: created slot {index} '{}'", name.trim());
                sink.emit(&AppEvent::PlantCreated {
                    index,
                    name: name.trim().to_string(),
                });
            }
            AdminCommand::RenamePlant { index, name } => {
                self.check_name_len(&name)?;
                self.registry.rename(index, &name)?;
                info!("registry: renamed slot {index} to '{}'", name.trim());
                sink.emit(&AppEvent::PlantRenamed {
                    index,
                    name: name.trim().to_string(),
                });
            }
            AdminCommand::DeletePlant { index } => {
                self.registry.delete(index)?;
                info!("registry: deleted slot {index}");
                sink.emit(&AppEvent::PlantDeleted { index });
            }
            AdminCommand::ResetPlants => {
                self.registry.reset();
                info!("registry: reset to single slot");
                sink.emit(&AppEvent::RegistryReset);
            }
        }
        self.persist(store, sink)
    }

    /// Rewrite the whole plant store from the current registry.
    fn persist(&self, store: &mut impl PlantStorePort, sink: &mut impl EventSink) -> Result<()> {
        let names: Vec<&str> = self.registry.names().collect();
        match store.save(&names) {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("registry: store rewrite failed ({e}); memory and store diverge until next save");
                sink.emit(&AppEvent::PersistenceFailed(e));
                Err(Error::Store(e))
            }
        }
    }

    fn check_name_len(&self, name: &str) -> Result<()> {
        if name.trim().chars().count() > self.config.max_name_len {
            return Err(RegistryError::InvalidName.into());
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build the dashboard view: ordered slot list plus latest climate.
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot::build(
            &self.registry,
            self.climate,
            self.decoder.frames_decoded(),
            self.decoder.frames_discarded(),
        )
    }

    /// Latest decoded climate reading.
    pub fn climate(&self) -> Reading {
        self.climate
    }

    pub fn registry(&self) -> &PlantRegistry {
        &self.registry
    }

    /// Live configuration (for RPC read-back or the sim loop).
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }
}
