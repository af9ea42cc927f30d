//! Outbound application events and the dashboard snapshot.
//!
//! The [`GatewayService`](super::service::GatewayService) emits
//! [`AppEvent`]s through the [`EventSink`](super::ports::EventSink)
//! port; the [`DashboardSnapshot`] is the read side of the admin
//! interface, consumed by the external dashboard view (a pure function
//! of this data).

use serde::Serialize;

use crate::error::StoreError;
use crate::link::Reading;
use crate::registry::{LIVE_SLOT, PlantRegistry};

/// Structured events emitted by the gateway core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The gateway started; carries the number of loaded slots.
    Started { slots: usize },

    /// A decoded reading was applied to climate state and slot 0.
    ReadingApplied(Reading),

    /// A new manual slot was appended.
    PlantCreated { index: usize, name: String },

    /// A slot was renamed in place.
    PlantRenamed { index: usize, name: String },

    /// A slot was removed; later indices shifted down.
    PlantDeleted { index: usize },

    /// Every slot except slot 0 was removed.
    RegistryReset,

    /// The durable rewrite failed; in-memory state already changed.
    PersistenceFailed(StoreError),
}

/// One slot as presented to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub index: usize,
    pub name: String,
    pub soil_pct: u8,
    /// Only slot 0 is backed by a physical sensor; the rest render as
    /// disconnected placeholders.
    pub live: bool,
}

/// Point-in-time view of the registry plus latest climate reading —
/// the admin read operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub climate: Reading,
    pub plants: Vec<SlotView>,
    /// Monotonic frame counter; an embedder can watch it for staleness.
    pub frames_decoded: u32,
    pub frames_discarded: u32,
}

impl DashboardSnapshot {
    pub(crate) fn build(
        registry: &PlantRegistry,
        climate: Reading,
        frames_decoded: u32,
        frames_discarded: u32,
    ) -> Self {
        let plants = registry
            .slots()
            .iter()
            .enumerate()
            .map(|(index, slot)| SlotView {
                index,
                name: slot.name.clone(),
                soil_pct: slot.soil_pct,
                live: index == LIVE_SLOT,
            })
            .collect();
        Self {
            climate,
            plants,
            frames_decoded,
            frames_discarded,
        }
    }
}
