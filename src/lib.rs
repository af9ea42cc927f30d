//! GreenLink gateway library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection: the serial frame codec, the plant registry and the
//! gateway service that ties them together. Hardware, filesystem and
//! logging all sit behind port traits in [`app::ports`], so every
//! module here is testable on the host.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod link;
pub mod registry;
pub mod sensors;

pub mod adapters;
