//! Fuzz target: `FrameDecoder`
//!
//! Drives arbitrary byte sequences into the streaming frame decoder and
//! asserts that it never panics and that every reading it yields stays
//! inside the wire ranges, whatever noise surrounds it.
//!
//! cargo fuzz run fuzz_frame_decoder

#![no_main]

use greenlink::link::FrameDecoder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = FrameDecoder::new();

    decoder.feed(data, |reading| {
        assert!(reading.soil_pct <= 100, "soil above wire range");
        assert!(reading.temperature_c.is_finite());
        assert!(reading.humidity_pct.is_finite());
    });

    // After a reset the decoder must accept bytes cleanly again.
    decoder.reset();
    decoder.feed(data, |_| {});
});
