//! GreenLink host simulator.
//!
//! Wires both nodes together over an in-memory serial channel so the
//! whole telemetry path can be exercised without hardware: a scripted
//! climate sensor drives the encoder, the byte stream (with injected
//! noise and a truncated frame) feeds the gateway, and a few admin
//! commands mutate the registry. The final dashboard snapshot is
//! printed as JSON.
//!
//! ```text
//! ScriptedClimate ─▶ SensorNode ─▶ [Vec<u8> channel] ─▶ GatewayService
//!                                                          │
//!                         FilePlantStore ◀─ admin commands ┘
//! ```

use anyhow::Result;
use log::info;

use greenlink::adapters::config_store::MemConfigStore;
use greenlink::adapters::log_sink::LogEventSink;
use greenlink::adapters::plant_store::FilePlantStore;
use greenlink::app::commands::AdminCommand;
use greenlink::app::ports::{ClimateSensorPort, ConfigPort, FrameTxPort};
use greenlink::app::service::GatewayService;
use greenlink::error::SensorError;
use greenlink::sensors::{SensorNode, soil};

// ── Simulated peripherals ─────────────────────────────────────

/// Deterministic climate script; step 3 simulates a DHT dropout.
struct ScriptedClimate {
    step: usize,
}

impl ClimateSensorPort for ScriptedClimate {
    fn read_temperature_c(&mut self) -> Result<f32, SensorError> {
        if self.step == 3 {
            return Err(SensorError::Unavailable);
        }
        Ok(21.0 + self.step as f32 * 0.7)
    }

    fn read_humidity_pct(&mut self) -> Result<f32, SensorError> {
        if self.step == 3 {
            return Err(SensorError::Unavailable);
        }
        Ok(55.0 + self.step as f32)
    }

    fn read_soil_pct(&mut self) -> Result<u8, SensorError> {
        // Slowly drying probe.
        let raw = 400 + (self.step as u16) * 60;
        Ok(soil::percent_from_raw(raw))
    }
}

/// In-memory stand-in for the point-to-point serial channel.
struct ChannelTx<'a>(&'a mut Vec<u8>);

impl FrameTxPort for ChannelTx<'_> {
    fn write(&mut self, frame: &[u8]) {
        self.0.extend_from_slice(frame);
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("GreenLink sim v{}", env!("CARGO_PKG_VERSION"));

    // Config from the (empty) store — defaults on first boot.
    let config = MemConfigStore::new().load()?;

    let mut store = FilePlantStore::new(
        std::env::temp_dir().join(format!("greenlink-sim-{}.csv", std::process::id())),
    );
    let mut sink = LogEventSink::new();

    let mut gateway = GatewayService::new(config);
    gateway.load_registry(&store, &mut sink);

    let mut node = SensorNode::new();
    let mut sensor = ScriptedClimate { step: 0 };
    let mut channel: Vec<u8> = Vec::new();

    // A couple of manual slots, as a gardener would add them.
    for cmd in [
        AdminCommand::CreatePlant {
            name: "Fern".to_string(),
        },
        AdminCommand::CreatePlant {
            name: "Cactus".to_string(),
        },
    ] {
        gateway.handle_command(cmd, &mut store, &mut sink)?;
    }

    // Six sampling periods. The channel is deliberately abused: boot
    // noise before the first frame and a power-glitch truncation before
    // the fifth, to show the decoder resynchronising.
    for step in 0..6 {
        sensor.step = step;

        if step == 0 {
            channel.extend_from_slice(b"\xffBOOT ok\r\n");
        }
        if step == 4 {
            channel.extend_from_slice(b"<19.2,4"); // sender reset mid-frame
        }

        node.tick(&mut sensor, &mut ChannelTx(&mut channel));

        // Gateway loop pass: drain whatever is on the wire.
        let applied = gateway.ingest(&channel, &mut sink);
        info!("loop pass {step}: applied {applied} reading(s)");
        channel.clear();
    }

    // Rename the live slot, then drop the cactus.
    gateway.handle_command(
        AdminCommand::RenamePlant {
            index: 0,
            name: "Greenhouse Monstera".to_string(),
        },
        &mut store,
        &mut sink,
    )?;
    gateway.handle_command(AdminCommand::DeletePlant { index: 2 }, &mut store, &mut sink)?;

    println!("{}", serde_json::to_string_pretty(&gateway.snapshot())?);

    std::fs::remove_file(store.path()).ok();
    Ok(())
}
