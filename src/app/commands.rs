//! Inbound admin commands.
//!
//! The four mutating operations the external dashboard/admin view can
//! request. The control loop services at most one per pass; the
//! [`GatewayService`](super::service::GatewayService) validates, applies
//! and persists each one.
//!
//! Indices are positional and resolved against the registry length at
//! call time — a client that held an index across a delete must
//! re-resolve it from a fresh snapshot.

/// Commands that external adapters can send into the gateway core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    /// Append a new manual plant slot.
    CreatePlant { name: String },

    /// Rename an existing slot in place (slot 0 included).
    RenamePlant { index: usize, name: String },

    /// Delete a slot; later indices shift down by one.
    DeletePlant { index: usize },

    /// Remove every slot except slot 0.
    ResetPlants,
}
