//! Sensor-node subsystem — climate sampling and frame transmission.
//!
//! The node side of the link: sample the climate provider, apply the
//! fault-substitution policy, encode exactly one frame and hand it to
//! the transmit port. Runs once per sampling period with no
//! acknowledgment, retry or buffering of unsent frames.

pub mod soil;

use log::warn;

use crate::app::ports::{ClimateSensorPort, FrameTxPort};
use crate::link::frame::{ENCODED_FRAME_CAP, Reading, encode_frame};

/// Read every climate value and fold faults into a neutral reading.
///
/// An unavailable temperature or humidity becomes `0.0` and a failed
/// soil read becomes `0` — the frame shape is always five fields, so the
/// gateway never has to handle a short frame from a healthy sender.
pub fn sample_climate(sensor: &mut impl ClimateSensorPort) -> Reading {
    let temperature_c = sensor.read_temperature_c().unwrap_or_else(|e| {
        warn!("sensor: temperature {e}, substituting 0.0");
        0.0
    });
    let humidity_pct = sensor.read_humidity_pct().unwrap_or_else(|e| {
        warn!("sensor: humidity {e}, substituting 0.0");
        0.0
    });
    let soil_pct = sensor.read_soil_pct().unwrap_or_else(|e| {
        warn!("sensor: soil {e}, substituting 0");
        0
    });
    Reading {
        temperature_c,
        humidity_pct,
        soil_pct,
    }
}

/// The sensor node's transmit loop body.
///
/// Owns the encode buffer so the per-tick path performs no allocation.
pub struct SensorNode {
    frame_buf: heapless::String<ENCODED_FRAME_CAP>,
}

impl SensorNode {
    pub fn new() -> Self {
        Self {
            frame_buf: heapless::String::new(),
        }
    }

    /// One sampling period: read, encode, transmit one frame.
    ///
    /// Returns the reading that was sent.
    pub fn tick(
        &mut self,
        sensor: &mut impl ClimateSensorPort,
        tx: &mut impl FrameTxPort,
    ) -> Reading {
        let reading = sample_climate(sensor);
        if encode_frame(&reading, &mut self.frame_buf).is_some() {
            tx.write(self.frame_buf.as_bytes());
        } else {
            // Unreachable for in-range readings; skip the cycle.
            warn!("sensor: frame encode overflow, skipping transmission");
        }
        reading
    }
}

impl Default for SensorNode {
    fn default() -> Self {
        Self::new()
    }
}
