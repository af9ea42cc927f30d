//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (serial console in production, stderr in the sim). A
//! future dashboard push channel would implement the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { slots } => {
                info!("START | {slots} slot(s) loaded");
            }
            AppEvent::ReadingApplied(r) => {
                info!(
                    "READING | T={:.1}\u{00b0}C | H={:.0}% | soil={}%",
                    r.temperature_c, r.humidity_pct, r.soil_pct,
                );
            }
            AppEvent::PlantCreated { index, name } => {
                info!("PLANT | created #{index} '{name}'");
            }
            AppEvent::PlantRenamed { index, name } => {
                info!("PLANT | renamed #{index} to '{name}'");
            }
            AppEvent::PlantDeleted { index } => {
                info!("PLANT | deleted #{index}");
            }
            AppEvent::RegistryReset => {
                info!("PLANT | registry reset");
            }
            AppEvent::PersistenceFailed(e) => {
                warn!("STORE | rewrite failed: {e}");
            }
        }
    }
}
