//! Whole-link flows: SensorNode → serial bytes → GatewayService.

use greenlink::app::events::AppEvent;
use greenlink::app::service::GatewayService;
use greenlink::config::SystemConfig;
use greenlink::sensors::SensorNode;

use super::mocks::{ChannelTx, RecordingSink, ScriptedClimate};

fn gateway() -> (GatewayService, RecordingSink) {
    (
        GatewayService::new(SystemConfig::default()),
        RecordingSink::new(),
    )
}

#[test]
fn node_to_gateway_round_trip() {
    let (mut svc, mut sink) = gateway();
    let mut node = SensorNode::new();
    let mut sensor = ScriptedClimate {
        temperature_c: 23.52,
        humidity_pct: 61.4,
        soil_pct: 42,
        air_fault: false,
    };
    let mut channel = ChannelTx(Vec::new());

    node.tick(&mut sensor, &mut channel);
    assert_eq!(svc.ingest(&channel.0, &mut sink), 1);

    let climate = svc.climate();
    // Wire precision: one decimal for temperature, whole humidity.
    assert!((climate.temperature_c - 23.5).abs() < 1e-5);
    assert!((climate.humidity_pct - 61.0).abs() < 1e-5);
    assert_eq!(climate.soil_pct, 42);
    assert_eq!(svc.registry().slots()[0].soil_pct, 42);
}

#[test]
fn air_sensor_fault_arrives_as_neutral_zeros() {
    let (mut svc, mut sink) = gateway();
    let mut node = SensorNode::new();
    let mut sensor = ScriptedClimate {
        temperature_c: 23.5,
        humidity_pct: 61.0,
        soil_pct: 37,
        air_fault: true,
    };
    let mut channel = ChannelTx(Vec::new());

    node.tick(&mut sensor, &mut channel);
    assert_eq!(channel.0, b"<0.0,0,37,0,0>");

    svc.ingest(&channel.0, &mut sink);
    assert_eq!(svc.climate().temperature_c, 0.0);
    assert_eq!(svc.climate().humidity_pct, 0.0);
    // Soil still flows through a faulted air sensor.
    assert_eq!(svc.registry().slots()[0].soil_pct, 37);
}

#[test]
fn several_periods_accumulate_on_the_wire() {
    let (mut svc, mut sink) = gateway();
    let mut node = SensorNode::new();
    let mut channel = ChannelTx(Vec::new());

    // Gateway offline for three periods; frames pile up on the wire and
    // are drained in one loop pass.
    for soil in [10u8, 20, 30] {
        let mut sensor = ScriptedClimate {
            temperature_c: 20.0,
            humidity_pct: 50.0,
            soil_pct: soil,
            air_fault: false,
        };
        node.tick(&mut sensor, &mut channel);
    }

    assert_eq!(svc.ingest(&channel.0, &mut sink), 3);
    assert_eq!(sink.applied_readings(), 3);
    // The last period's reading is what the dashboard shows.
    assert_eq!(svc.registry().slots()[0].soil_pct, 30);
}

#[test]
fn interrupted_sender_costs_exactly_one_reading() {
    let (mut svc, mut sink) = gateway();

    // Sender browns out mid-frame, reboots, sends cleanly.
    let mut wire = Vec::new();
    wire.extend_from_slice(b"<21.0,55,4"); // truncated
    wire.extend_from_slice(b"\x00\x00");   // brown-out garbage
    wire.extend_from_slice(b"<22.0,56,44,0,0>");

    assert_eq!(svc.ingest(&wire, &mut sink), 1);
    let reading = sink
        .events
        .iter()
        .find_map(|e| match e {
            AppEvent::ReadingApplied(r) => Some(*r),
            _ => None,
        })
        .unwrap();
    assert_eq!(reading.temperature_c, 22.0);
    assert_eq!(reading.soil_pct, 44);
}
