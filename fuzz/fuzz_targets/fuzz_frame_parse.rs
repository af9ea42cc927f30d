//! Fuzz target: `parse_frame`
//!
//! Feeds arbitrary UTF-8 payloads to the permissive field parser. It
//! must never panic and must always produce an in-range reading, since
//! malformed fields degrade to zero rather than to an error.
//!
//! cargo fuzz run fuzz_frame_parse

#![no_main]

use greenlink::link::parse_frame;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|payload: &str| {
    let reading = parse_frame(payload);
    assert!(reading.soil_pct <= 100);
    assert!(reading.temperature_c.is_finite());
    assert!(reading.humidity_pct.is_finite());
});
