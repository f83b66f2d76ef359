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

    src/bitstream.rs

    Buffer-level helpers that drive a LineCodec over a BitVec.

*/

use crate::{codec::LineCodec, types::DecodedBit, ENCODED_BYTE_LEN};
use bit_vec::BitVec;

/// Append the low `width` bits of `raw` to `bits`, most significant bit first.
pub fn push_raw_word(bits: &mut BitVec, raw: u32, width: usize) {
    for bit_pos in (0..width.min(32)).rev() {
        bits.push(raw & (1 << bit_pos) != 0);
    }
}

impl LineCodec {
    /// Encode a buffer of data into a new [BitVec], one byte at a time. Bitcells are stored in
    /// the order they would be written, clock bit first.
    pub fn encode_buf(&mut self, data: &[u8]) -> BitVec {
        let mut bits = BitVec::with_capacity(data.len() * ENCODED_BYTE_LEN);
        for &byte in data {
            let raw = self.encode_byte(byte);
            push_raw_word(&mut bits, raw as u32, ENCODED_BYTE_LEN);
        }
        bits
    }

    /// Decode a [BitVec] of bitcells by feeding each one through the single-bit decoder.
    /// Data bits are packed most significant bit first. A trailing partial byte is discarded.
    pub fn decode_bits(&mut self, bits: &BitVec) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(bits.len() / ENCODED_BYTE_LEN);
        let mut byte = 0u8;
        let mut bit_ct = 0;

        for bit in bits.iter() {
            if let DecodedBit::Data(value) = self.decode_bit(bit) {
                byte = (byte << 1) | value as u8;
                bit_ct += 1;
                if bit_ct == 8 {
                    bytes.push(byte);
                    byte = 0;
                    bit_ct = 0;
                }
            }
        }

        if bit_ct > 0 {
            log::trace!("decode_bits(): discarding {} trailing data bits", bit_ct);
        }
        bytes
    }

    /// Drive the sync marker detector over `bits` starting at bit index `start`.
    /// Returns the index of the first bitcell after the marker, which is where the clock bit of
    /// the next encoded byte begins. The detector is left complete; call [LineCodec::reset_sync]
    /// before searching for the next marker.
    pub fn find_sync(&mut self, bits: &BitVec, start: usize) -> Option<usize> {
        for (i, bit) in bits.iter().enumerate().skip(start) {
            if self.feed_sync_bit(bit) {
                log::debug!("find_sync(): found sync marker ending at bit {}", i);
                return Some(i + 1);
            }
        }
        log::trace!("find_sync(): no sync marker found after bit {}", start);
        None
    }
}
