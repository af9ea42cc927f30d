//! Frame wire format.
//!
//! One reading per frame, ASCII text:
//!
//! ```text
//! <temp,hum,soil,reserved2,reserved3>      e.g.  <23.5,61,42,0,0>
//! ```
//!
//! Temperature carries one decimal digit; humidity and soil are whole
//! numbers. The two reserved fields are placeholders for future soil
//! sensors and are always the literal `0`. Field values are numeric
//! only, so the delimiters never need escaping under a correct sender.

use core::fmt::Write as _;

use heapless::String;
use serde::Serialize;

/// Frame start marker.
pub const FRAME_START: u8 = b'<';
/// Frame end marker.
pub const FRAME_END: u8 = b'>';
/// Field separator within a frame.
pub const FIELD_SEP: char = ',';

/// Fields per frame: temperature, humidity, soil, two reserved.
pub const FRAME_FIELDS: usize = 5;

/// Capacity of the encode buffer. Worst case is well under this
/// (`<-999.9,100,100,0,0>` is 21 bytes).
pub const ENCODED_FRAME_CAP: usize = 64;

/// One sampled tuple of air temperature, air humidity and soil moisture.
///
/// Produced once per sampling period, superseded by the next reading,
/// never persisted. A sensor fault on the node is substituted with `0.0`
/// before encoding, so a decoded `Reading` always has concrete values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    /// Air temperature in degrees Celsius.
    pub temperature_c: f32,
    /// Relative air humidity in percent.
    pub humidity_pct: f32,
    /// Soil moisture in percent (0–100).
    pub soil_pct: u8,
}

impl Reading {
    /// The neutral reading used before the first frame arrives.
    pub const ZERO: Self = Self {
        temperature_c: 0.0,
        humidity_pct: 0.0,
        soil_pct: 0,
    };
}

/// Encode one reading into a delimited frame.
///
/// Clears `out` and writes the full frame into it. Returns the number of
/// bytes written, or `None` if the buffer is too small (cannot happen for
/// in-range sensor values with [`ENCODED_FRAME_CAP`]).
pub fn encode_frame(reading: &Reading, out: &mut String<ENCODED_FRAME_CAP>) -> Option<usize> {
    out.clear();
    write!(
        out,
        "<{:.1},{:.0},{},0,0>",
        reading.temperature_c, reading.humidity_pct, reading.soil_pct
    )
    .ok()?;
    Some(out.len())
}

/// Parse the delimiter-stripped payload of one frame.
///
/// Permissive by design: a missing or non-numeric field parses as `0`
/// rather than rejecting the frame, matching the low-stakes domain.
/// Soil is clamped to 0–100. Extra fields beyond the reserved pair are
/// ignored.
pub fn parse_frame(payload: &str) -> Reading {
    let mut fields = payload.split(FIELD_SEP);

    // `f32::from_str` accepts "inf" and "NaN"; a real sender only emits
    // finite decimals, so non-finite text is garbage like any other.
    let parse_finite = |f: &str| f.trim().parse::<f32>().ok().filter(|v| v.is_finite());

    let temperature_c = fields.next().and_then(parse_finite).unwrap_or(0.0);
    let humidity_pct = fields.next().and_then(parse_finite).unwrap_or(0.0);
    let soil_pct = fields
        .next()
        .and_then(|f| f.trim().parse::<i32>().ok())
        .map_or(0, |v| v.clamp(0, 100) as u8);

    Reading {
        temperature_c,
        humidity_pct,
        soil_pct,
    }
}
