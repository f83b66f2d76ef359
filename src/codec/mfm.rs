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

    src/codec/mfm.rs

    MFM encoding rules.

*/

//! MFM writes a clock bit only between two 0 data bits:
//!
//! | previous bit | bit | bitcells |
//! |--------------|-----|----------|
//! | any          | 1   | `01`     |
//! | 0            | 0   | `10`     |
//! | 1            | 0   | `00`     |
//!
//! Block encoders scan from the most significant bit down, each bit using the
//! one above it as its previous bit and the most significant bit using the
//! bit carried in from the previous call. Since the clock for bit `k` is just
//! `!(d[k] | d[k + 1])`, the whole clock word can be computed at once and
//! interleaved with the data bits.

use crate::{
    codec::interleave::{distribute_u16, distribute_u4, distribute_u8},
    types::BitCode,
};

/// Encode a single data bit, given the previously encoded data bit.
#[inline]
pub fn encode_bit(bit: bool, previous: bool) -> BitCode {
    if bit {
        // 1 is always encoded as 01
        BitCode::from_bits(0b01)
    }
    else if !previous {
        // 0 is encoded as 10 if previous bit was 0
        BitCode::from_bits(0b10)
    }
    else {
        BitCode::from_bits(0b00)
    }
}

/// Encode the low nibble of `nibble` into 8 bitcells, given the previously encoded data bit.
#[inline]
pub fn encode_nibble(nibble: u8, previous: bool) -> u8 {
    let data = nibble & 0x0F;
    let above = (data >> 1) | ((previous as u8) << 3);
    let clocks = !(data | above) & 0x0F;
    distribute_u4(data) | (distribute_u4(clocks) << 1)
}

/// Encode a byte into 16 bitcells, given the previously encoded data bit.
#[inline]
pub fn encode_u8(byte: u8, previous: bool) -> u16 {
    let above = (byte >> 1) | ((previous as u8) << 7);
    let clocks = !(byte | above);
    distribute_u8(byte) | (distribute_u8(clocks) << 1)
}

/// Encode a u16 into 32 bitcells, given the previously encoded data bit.
#[inline]
pub fn encode_u16(word: u16, previous: bool) -> u32 {
    let above = (word >> 1) | ((previous as u16) << 15);
    let clocks = !(word | above);
    distribute_u16(word) | (distribute_u16(clocks) << 1)
}
