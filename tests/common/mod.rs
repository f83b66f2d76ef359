/*
    FluxFox
    https://github.com/dbalsom/fluxfox

    Copyright 2024-2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    tests/common/mod.rs

    Common support routines for tests
*/
#![allow(dead_code)]

use bit_vec::BitVec;
use fluxfox_linecode::{prelude::*, push_raw_word, SYNC_MARKER_WORD};

pub const GAP_BYTE: u8 = 0x4E;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn random_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|_| rand::random::<u8>()).collect()
}

pub fn random_bits(len: usize) -> Vec<bool> {
    (0..len).map(|_| rand::random::<bool>()).collect()
}

/// Build an MFM track fragment the way a controller would write an address field:
/// a 0x4E gap, a run of 0x00 sync bytes, `marker_ct` raw sync markers, then `payload`.
/// Returns the bitstream and the bit index where the payload begins.
pub fn build_mfm_field(gap_len: usize, marker_ct: usize, payload: &[u8]) -> (BitVec, usize) {
    let mut codec = LineCodec::new(LineEncoding::Mfm);

    let mut lead_in = vec![GAP_BYTE; gap_len];
    lead_in.extend(vec![0x00; 12]);
    let mut bits = codec.encode_buf(&lead_in);

    for _ in 0..marker_ct {
        push_raw_word(&mut bits, SYNC_MARKER_WORD as u32, 16);
    }
    let payload_start = bits.len();

    // The marker decodes as 0xA1, so the payload follows a 1 bit.
    let mut codec = LineCodec::with_state(LineEncoding::Mfm, CodecState::new().with_last_bit(true));
    let payload_bits = codec.encode_buf(payload);
    bits.extend(payload_bits.iter());

    (bits, payload_start)
}

/// Copy `len` bits starting at `start` into a new [BitVec].
pub fn slice_bits(bits: &BitVec, start: usize, len: usize) -> BitVec {
    bits.iter().skip(start).take(len).collect()
}
