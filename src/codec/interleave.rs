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
*/

//! Bit interleaving helpers shared by the FM and MFM block codecs.
//!
//! An encoded word holds data bits in the even positions and clock bits in the
//! odd positions: logical bit `k` lives at physical bit `2k`, and its clock bit
//! at `2k + 1`. Distributing spreads a logical value into the even positions;
//! compressing gathers the even positions back into a logical value and drops
//! the odd ones.

pub(crate) const DATA_BITS_U8: u8 = 0x55;
pub(crate) const DATA_BITS_U16: u16 = 0x5555;
pub(crate) const DATA_BITS_U32: u32 = 0x5555_5555;

pub(crate) const CLOCK_BITS_U8: u8 = 0xAA;
pub(crate) const CLOCK_BITS_U16: u16 = 0xAAAA;
pub(crate) const CLOCK_BITS_U32: u32 = 0xAAAA_AAAA;

/// Distribute the low nibble of `x` into the even bit positions of a byte.
#[inline]
pub(crate) fn distribute_u4(x: u8) -> u8 {
    let mut e = x & 0x0F;
    e = (e | (e << 2)) & 0x33;
    e = (e | (e << 1)) & DATA_BITS_U8;
    e
}

/// Distribute a byte into the even bit positions of a u16.
#[inline]
pub(crate) fn distribute_u8(x: u8) -> u16 {
    let mut e = x as u16;
    e = (e | (e << 4)) & 0x0F0F;
    e = (e | (e << 2)) & 0x3333;
    e = (e | (e << 1)) & DATA_BITS_U16;
    e
}

/// Distribute a u16 into the even bit positions of a u32.
#[inline]
pub(crate) fn distribute_u16(x: u16) -> u32 {
    let mut e = x as u32;
    e = (e | (e << 8)) & 0x00FF_00FF;
    e = (e | (e << 4)) & 0x0F0F_0F0F;
    e = (e | (e << 2)) & 0x3333_3333;
    e = (e | (e << 1)) & DATA_BITS_U32;
    e
}

/// Compress the even bit positions of a byte into a nibble.
#[inline]
pub(crate) fn compress_u8(x: u8) -> u8 {
    let mut e = x & DATA_BITS_U8;
    e = (e | (e >> 1)) & 0x33;
    e = (e | (e >> 2)) & 0x0F;
    e
}

/// Compress the even bit positions of a u16 into a byte.
#[inline]
pub(crate) fn compress_u16(x: u16) -> u8 {
    let mut e = x & DATA_BITS_U16;
    e = (e | (e >> 1)) & 0x3333;
    e = (e | (e >> 2)) & 0x0F0F;
    e = (e | (e >> 4)) & 0x00FF;
    e as u8
}

/// Compress the even bit positions of a u32 into a u16.
#[inline]
pub(crate) fn compress_u32(x: u32) -> u16 {
    let mut e = x & DATA_BITS_U32;
    e = (e | (e >> 1)) & 0x3333_3333;
    e = (e | (e >> 2)) & 0x0F0F_0F0F;
    e = (e | (e >> 4)) & 0x00FF_00FF;
    e = (e | (e >> 8)) & 0x0000_FFFF;
    e as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribute_positions() {
        // Logical bit k must land on physical bit 2k.
        for k in 0..4 {
            assert_eq!(distribute_u4(1 << k), 1 << (2 * k));
        }
        for k in 0..8 {
            assert_eq!(distribute_u8(1 << k), 1 << (2 * k));
        }
        for k in 0..16 {
            assert_eq!(distribute_u16(1 << k), 1 << (2 * k));
        }
        assert_eq!(distribute_u4(0xFF), DATA_BITS_U8);
        assert_eq!(distribute_u8(0xFF), DATA_BITS_U16);
        assert_eq!(distribute_u16(0xFFFF), DATA_BITS_U32);
    }

    #[test]
    fn test_compress_ignores_clock_positions() {
        assert_eq!(compress_u8(CLOCK_BITS_U8), 0);
        assert_eq!(compress_u16(CLOCK_BITS_U16), 0);
        assert_eq!(compress_u32(CLOCK_BITS_U32), 0);
        assert_eq!(compress_u8(0xFF), 0x0F);
        assert_eq!(compress_u16(0xFFFF), 0xFF);
        assert_eq!(compress_u32(!0), 0xFFFF);
    }

    #[test]
    fn test_compress_inverts_distribute() {
        for x in 0..=u8::MAX {
            assert_eq!(compress_u16(distribute_u8(x)), x);
            assert_eq!(compress_u8(distribute_u4(x)), x & 0x0F);
        }
        for x in [0x0000u16, 0x0001, 0x8000, 0x1234, 0xA5A5, 0xFFFF] {
            assert_eq!(compress_u32(distribute_u16(x)), x);
        }
    }
}
