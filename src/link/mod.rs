//! Serial telemetry link.
//!
//! Delimiter-framed ASCII protocol between the sensor node and the
//! gateway.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      Link Stack                            │
//! │                                                            │
//! │  sensor node                       gateway                 │
//! │  ┌──────────┐   ┌──────────┐   ┌──────────────────────┐    │
//! │  │ Sampler  │──▶│  frame   │──▶│  codec (FrameDecoder)│    │
//! │  │          │   │ (encode) │   │  → GatewayService    │    │
//! │  └──────────┘   └──────────┘   └──────────────────────┘    │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! There are no sequence numbers and no checksums: ordering and
//! integrity rely solely on the `<`/`>` delimiter framing.

pub mod codec;
pub mod frame;

pub use codec::FrameDecoder;
pub use frame::{Reading, encode_frame, parse_frame};
