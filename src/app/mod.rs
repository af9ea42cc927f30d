//! Application core — pure domain logic, zero I/O.
//!
//! The gateway's business rules: frame ingestion, the plant registry,
//! and the admin operations. All interaction with the outside world
//! happens through **port traits** defined in [`ports`], keeping this
//! layer fully testable without a serial link, a filesystem, or real
//! sensors.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
