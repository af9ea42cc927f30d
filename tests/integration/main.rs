//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a slice of the
//! system against mock or real-file adapters. All tests run on the
//! host with no hardware.

mod link_flow_tests;
mod mocks;
mod persistence_tests;
