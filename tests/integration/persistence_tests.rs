//! Persistence flows against the real file store: mutations survive a
//! reboot, soil values do not.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use greenlink::adapters::plant_store::FilePlantStore;
use greenlink::app::commands::AdminCommand;
use greenlink::app::service::GatewayService;
use greenlink::config::SystemConfig;

use super::mocks::RecordingSink;

struct TempGuard(PathBuf);
impl Drop for TempGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn temp_store() -> (FilePlantStore, TempGuard) {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "greenlink-it-{}-{n}.csv",
        std::process::id()
    ));
    (FilePlantStore::new(&path), TempGuard(path))
}

fn boot(store: &FilePlantStore) -> (GatewayService, RecordingSink) {
    let mut svc = GatewayService::new(SystemConfig::default());
    let mut sink = RecordingSink::new();
    svc.load_registry(store, &mut sink);
    (svc, sink)
}

#[test]
fn registry_round_trips_across_reboot() {
    let (mut store, _guard) = temp_store();

    // First boot: empty store, add two plants, push a live reading.
    let (mut svc, mut sink) = boot(&store);
    for name in ["Fern", "Cactus"] {
        svc.handle_command(
            AdminCommand::CreatePlant {
                name: name.to_string(),
            },
            &mut store,
            &mut sink,
        )
        .unwrap();
    }
    svc.ingest(b"<23.5,61,42,0,0>", &mut sink);
    assert_eq!(svc.registry().slots()[0].soil_pct, 42);

    // "Reboot": a fresh service loading the same file.
    let (svc2, _sink2) = boot(&store);
    let names: Vec<&str> = svc2.registry().names().collect();
    assert_eq!(names, vec!["Primary Pot", "Fern", "Cactus"]);
    // Soil values are runtime-only and come back as 0.
    assert!(svc2.registry().slots().iter().all(|s| s.soil_pct == 0));
}

#[test]
fn rename_and_delete_survive_reboot() {
    let (mut store, _guard) = temp_store();

    let (mut svc, mut sink) = boot(&store);
    for name in ["B", "C", "D"] {
        svc.handle_command(
            AdminCommand::CreatePlant {
                name: name.to_string(),
            },
            &mut store,
            &mut sink,
        )
        .unwrap();
    }
    svc.handle_command(
        AdminCommand::RenamePlant {
            index: 0,
            name: "Monstera".to_string(),
        },
        &mut store,
        &mut sink,
    )
    .unwrap();
    svc.handle_command(AdminCommand::DeletePlant { index: 2 }, &mut store, &mut sink)
        .unwrap();

    let (svc2, _sink2) = boot(&store);
    let names: Vec<&str> = svc2.registry().names().collect();
    assert_eq!(names, vec!["Monstera", "B", "D"]);
}

#[test]
fn reset_survives_reboot() {
    let (mut store, _guard) = temp_store();

    let (mut svc, mut sink) = boot(&store);
    for name in ["B", "C", "D"] {
        svc.handle_command(
            AdminCommand::CreatePlant {
                name: name.to_string(),
            },
            &mut store,
            &mut sink,
        )
        .unwrap();
    }
    svc.handle_command(AdminCommand::ResetPlants, &mut store, &mut sink)
        .unwrap();

    let (svc2, _sink2) = boot(&store);
    let names: Vec<&str> = svc2.registry().names().collect();
    assert_eq!(names, vec!["Primary Pot"]);
}

#[test]
fn hand_edited_store_with_blank_lines_loads_cleanly() {
    let (store, _guard) = temp_store();
    std::fs::write(store.path(), "Primary Pot\n\n  Fern \n\n").unwrap();

    let (svc, _sink) = boot(&store);
    let names: Vec<&str> = svc.registry().names().collect();
    assert_eq!(names, vec!["Primary Pot", "Fern"]);
}
