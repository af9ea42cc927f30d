//! Plant registry — ordered, named slots with positional identity.
//!
//! Slot 0 is reserved: it is the only slot whose soil value is updated
//! from incoming readings, and it can be renamed but never deleted, so
//! the registry is never empty. Slots ≥ 1 are manual placeholders whose
//! soil value stays at its creation default.
//!
//! An index is a *position*, not a durable identifier: deleting slot `i`
//! shifts every later slot down by one, so any client holding an index
//! across a mutation must re-resolve it against the current list.
//! (A stable per-slot id would be safer by construction; the positional
//! contract is kept deliberately to match the deployed admin interface.)
//!
//! The registry is pure in-memory state. Persistence — the full rewrite
//! of the name store after each structural mutation — is orchestrated by
//! [`GatewayService`](crate::app::service::GatewayService).

use serde::Serialize;

use crate::error::RegistryError;

/// Index of the slot bound to the live soil sensor.
pub const LIVE_SLOT: usize = 0;

/// One registry entry: a named plant and its last-known soil moisture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub name: String,
    /// Runtime-only; never persisted, reset to 0 on reload.
    pub soil_pct: u8,
}

/// The ordered collection of all slots. Insertion order is display order.
#[derive(Debug, Clone)]
pub struct PlantRegistry {
    slots: Vec<Slot>,
}

impl PlantRegistry {
    /// Registry with the single default slot (first boot / empty store).
    pub fn with_default(default_name: &str) -> Self {
        Self {
            slots: vec![Slot {
                name: default_name.to_string(),
                soil_pct: 0,
            }],
        }
    }

    /// Rebuild from persisted names. Names are trimmed and blank entries
    /// skipped; if nothing usable remains the default slot is used. Soil
    /// values always start at 0 — they are runtime-only.
    pub fn from_names<I, S>(names: I, default_name: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let slots: Vec<Slot> = names
            .into_iter()
            .filter_map(|n| {
                let trimmed = n.as_ref().trim();
                (!trimmed.is_empty()).then(|| Slot {
                    name: trimmed.to_string(),
                    soil_pct: 0,
                })
            })
            .collect();

        if slots.is_empty() {
            Self::with_default(default_name)
        } else {
            Self { slots }
        }
    }

    // ── Mutating operations ───────────────────────────────────

    /// Append a new manual slot. Returns its index.
    pub fn create(&mut self, name: &str) -> Result<usize, RegistryError> {
        let name = valid_name(name)?;
        self.slots.push(Slot {
            name: name.to_string(),
            soil_pct: 0,
        });
        Ok(self.slots.len() - 1)
    }

    /// Rename a slot in place. Slot 0 may be renamed, never deleted.
    pub fn rename(&mut self, index: usize, new_name: &str) -> Result<(), RegistryError> {
        let new_name = valid_name(new_name)?;
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(RegistryError::IndexOutOfRange)?;
        slot.name = new_name.to_string();
        Ok(())
    }

    /// Remove a slot, shifting every later index down by one.
    pub fn delete(&mut self, index: usize) -> Result<(), RegistryError> {
        if index == LIVE_SLOT {
            return Err(RegistryError::ProtectedSlot);
        }
        if index >= self.slots.len() {
            return Err(RegistryError::IndexOutOfRange);
        }
        self.slots.remove(index);
        Ok(())
    }

    /// Remove every slot except slot 0. Succeeds even when already
    /// at length 1 (no-op).
    pub fn reset(&mut self) {
        self.slots.truncate(1);
    }

    /// Overwrite slot 0's soil value from an incoming reading.
    /// Never persisted, never fails.
    pub fn update_live_soil(&mut self, soil_pct: u8) {
        self.slots[LIVE_SLOT].soil_pct = soil_pct;
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        // Invariant: never true.
        self.slots.is_empty()
    }

    /// Slot names in display order, for the persistence rewrite.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.name.as_str())
    }
}

/// Trim and validate a slot name.
fn valid_name(name: &str) -> Result<&str, RegistryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RegistryError::InvalidName);
    }
    Ok(trimmed)
}
