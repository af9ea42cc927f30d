//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements      | Connects to                  |
//! |----------------|-----------------|------------------------------|
//! | `plant_store`  | PlantStorePort  | Line-oriented flash file     |
//! | `config_store` | ConfigPort      | Postcard blob / in-memory    |
//! | `log_sink`     | EventSink       | Serial log output            |

pub mod config_store;
pub mod log_sink;
pub mod plant_store;
