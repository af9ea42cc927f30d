//! Shared mock adapters for the integration suite.

use greenlink::app::events::AppEvent;
use greenlink::app::ports::{ClimateSensorPort, EventSink, FrameTxPort};
use greenlink::error::SensorError;

// ── Event recorder ────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn applied_readings(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::ReadingApplied(_)))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Scripted climate provider ─────────────────────────────────

/// Fixed readings, with optional air-sensor fault injection.
pub struct ScriptedClimate {
    pub temperature_c: f32,
    pub humidity_pct: f32,
    pub soil_pct: u8,
    pub air_fault: bool,
}

impl ClimateSensorPort for ScriptedClimate {
    fn read_temperature_c(&mut self) -> Result<f32, SensorError> {
        if self.air_fault {
            Err(SensorError::Unavailable)
        } else {
            Ok(self.temperature_c)
        }
    }

    fn read_humidity_pct(&mut self) -> Result<f32, SensorError> {
        if self.air_fault {
            Err(SensorError::Unavailable)
        } else {
            Ok(self.humidity_pct)
        }
    }

    fn read_soil_pct(&mut self) -> Result<u8, SensorError> {
        Ok(self.soil_pct)
    }
}

// ── In-memory serial channel ──────────────────────────────────

pub struct ChannelTx(pub Vec<u8>);

impl FrameTxPort for ChannelTx {
    fn write(&mut self, frame: &[u8]) {
        self.0.extend_from_slice(frame);
    }
}
