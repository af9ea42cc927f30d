//! Streaming frame decoder.
//!
//! Reconstructs discrete frames from an unbuffered, arbitrarily-chunked
//! serial byte stream. A single `read` from the link may deliver part of
//! a frame, several frames concatenated, or pure line noise; the decoder
//! accumulates bytes and yields one parsed [`Reading`] per complete
//! frame.
//!
//! Resynchronisation needs no timeout: a start marker seen at any point
//! (including mid-frame) discards the accumulator and restarts, so a
//! truncated frame costs exactly one reading and the stream recovers on
//! the next sender cycle.

use log::{debug, warn};

use super::frame::{FRAME_END, FRAME_START, Reading, parse_frame};

/// Accumulator capacity. Valid frames are ~20 bytes; anything that grows
/// past this is a runaway sender or noise and forces a resync.
pub const MAX_FRAME_LEN: usize = 128;

/// Decoder state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecoderState {
    /// No frame in progress; non-marker bytes are line noise.
    Idle,
    /// Start marker seen, collecting payload bytes.
    Accumulating,
}

/// Streaming frame decoder with a single persistent accumulator.
pub struct FrameDecoder {
    state: DecoderState,
    buf: heapless::Vec<u8, MAX_FRAME_LEN>,
    frames_decoded: u32,
    frames_discarded: u32,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self {
            state: DecoderState::Idle,
            buf: heapless::Vec::new(),
            frames_decoded: 0,
            frames_discarded: 0,
        }
    }

    /// Advance the state machine by one byte.
    ///
    /// Returns `Some(Reading)` exactly when `byte` completes a frame.
    /// The caller must apply the reading before feeding the next byte so
    /// that climate state and registry updates stay atomic with respect
    /// to the stream.
    pub fn push(&mut self, byte: u8) -> Option<Reading> {
        match byte {
            FRAME_START => {
                // Restart unconditionally; a partial accumulation means
                // the previous frame was truncated or interrupted.
                if self.state == DecoderState::Accumulating && !self.buf.is_empty() {
                    self.frames_discarded += 1;
                    debug!("link: discarding {} byte partial frame", self.buf.len());
                }
                self.buf.clear();
                self.state = DecoderState::Accumulating;
                None
            }
            FRAME_END => {
                if self.state == DecoderState::Idle {
                    // Stray terminator outside any frame — noise.
                    return None;
                }
                let reading = match core::str::from_utf8(&self.buf) {
                    Ok(payload) => Some(parse_frame(payload)),
                    Err(_) => {
                        self.frames_discarded += 1;
                        warn!("link: dropping non-UTF-8 frame payload");
                        None
                    }
                };
                self.buf.clear();
                self.state = DecoderState::Idle;
                if reading.is_some() {
                    self.frames_decoded += 1;
                }
                reading
            }
            other => {
                if self.state == DecoderState::Accumulating && self.buf.push(other).is_err() {
                    // Sender never closed the frame; bound memory and
                    // wait for the next start marker.
                    self.frames_discarded += 1;
                    warn!("link: accumulator overflow, resyncing");
                    self.buf.clear();
                    self.state = DecoderState::Idle;
                }
                None
            }
        }
    }

    /// Feed a chunk of bytes, invoking `sink` for every completed frame.
    pub fn feed(&mut self, data: &[u8], mut sink: impl FnMut(Reading)) {
        for &byte in data {
            if let Some(reading) = self.push(byte) {
                sink(reading);
            }
        }
    }

    /// Reset decoder state (e.g. after the link is re-opened).
    pub fn reset(&mut self) {
        self.buf.clear();
        self.state = DecoderState::Idle;
    }

    /// Frames successfully decoded since construction.
    pub fn frames_decoded(&self) -> u32 {
        self.frames_decoded
    }

    /// Partial or oversized frames discarded since construction.
    pub fn frames_discarded(&self) -> u32 {
        self.frames_discarded
    }
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(decoder: &mut FrameDecoder, bytes: &[u8]) -> Vec<Reading> {
        let mut out = Vec::new();
        decoder.feed(bytes, |r| out.push(r));
        out
    }

    #[test]
    fn decodes_clean_frame() {
        let mut d = FrameDecoder::new();
        let got = collect(&mut d, b"<23.5,61,42,0,0>");
        assert_eq!(got, vec![Reading {
            temperature_c: 23.5,
            humidity_pct: 61.0,
            soil_pct: 42
        }]);
        assert_eq!(d.frames_decoded(), 1);
    }

    #[test]
    fn decodes_byte_at_a_time() {
        let mut d = FrameDecoder::new();
        let mut got = Vec::new();
        for &b in b"<1.0,2,3,0,0>".iter() {
            if let Some(r) = d.push(b) {
                got.push(r);
            }
        }
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].soil_pct, 3);
    }

    #[test]
    fn decodes_two_frames_in_one_chunk() {
        let mut d = FrameDecoder::new();
        let got = collect(&mut d, b"<1.0,2,3,0,0><4.0,5,6,0,0>");
        assert_eq!(got.len(), 2);
        assert_eq!(got[1].soil_pct, 6);
    }

    #[test]
    fn truncated_frame_resyncs_on_next_start() {
        let mut d = FrameDecoder::new();
        let got = collect(&mut d, b"<12.3,55<20.1,40,33,0,0>");
        assert_eq!(got, vec![Reading {
            temperature_c: 20.1,
            humidity_pct: 40.0,
            soil_pct: 33
        }]);
        assert_eq!(d.frames_discarded(), 1);
    }

    #[test]
    fn noise_outside_frames_is_ignored() {
        let mut d = FrameDecoder::new();
        let got = collect(&mut d, b"garbage\r\n>>,,12.9 noise");
        assert!(got.is_empty());
        assert_eq!(d.frames_decoded(), 0);
    }

    #[test]
    fn noise_around_a_valid_frame() {
        let mut d = FrameDecoder::new();
        let got = collect(&mut d, b"\xff\xfe junk<7.0,8,9,0,0>trailing");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].soil_pct, 9);
    }

    #[test]
    fn overflow_forces_resync_then_recovers() {
        let mut d = FrameDecoder::new();
        let mut stream = vec![b'<'];
        stream.extend(std::iter::repeat_n(b'9', MAX_FRAME_LEN + 10));
        stream.extend_from_slice(b"<5.5,50,25,0,0>");
        let got = collect(&mut d, &stream);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].soil_pct, 25);
        assert_eq!(d.frames_discarded(), 1);
    }

    #[test]
    fn empty_frame_yields_zero_reading() {
        let mut d = FrameDecoder::new();
        let got = collect(&mut d, b"<>");
        assert_eq!(got, vec![Reading::ZERO]);
    }

    #[test]
    fn reset_drops_partial_state() {
        let mut d = FrameDecoder::new();
        d.feed(b"<12.3,4", |_| {});
        d.reset();
        // The terminator after reset must not emit the stale payload.
        let got = collect(&mut d, b"5,0,0>");
        assert!(got.is_empty());
    }
}
