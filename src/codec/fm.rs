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

    src/codec/fm.rs

    FM encoding rules. Every clock bit is 1, so FM needs no history and a
    block can be encoded by laying the data bits over a constant clock
    pattern.

*/

use crate::{
    codec::interleave::{distribute_u16, distribute_u4, distribute_u8, CLOCK_BITS_U16, CLOCK_BITS_U32, CLOCK_BITS_U8},
    types::BitCode,
};

/// Encode a single data bit. The clock bit is always set.
#[inline]
pub fn encode_bit(bit: bool) -> BitCode {
    BitCode::new(true, bit)
}

/// Encode the low nibble of `nibble` into 8 bitcells.
#[inline]
pub fn encode_nibble(nibble: u8) -> u8 {
    CLOCK_BITS_U8 | distribute_u4(nibble)
}

/// Encode a byte into 16 bitcells.
#[inline]
pub fn encode_u8(byte: u8) -> u16 {
    CLOCK_BITS_U16 | distribute_u8(byte)
}

/// Encode a u16 into 32 bitcells.
#[inline]
pub fn encode_u16(word: u16) -> u32 {
    CLOCK_BITS_U32 | distribute_u16(word)
}
