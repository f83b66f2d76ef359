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

    structs.rs

    Defines common structs
*/
use crate::types::DecodeFlags;
use bit_vec::BitVec;
use std::{
    fmt,
    fmt::{Display, Formatter},
};

/// A [BitCode] is the pair of bitcells produced by encoding a single data bit.
/// The clock bit is held in bit 1 and the data bit in bit 0, so the pair reads in the order it is
/// written to the medium.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitCode(u8);

impl BitCode {
    pub const CLOCK: u8 = 0b10;
    pub const DATA: u8 = 0b01;

    #[inline]
    pub fn new(clock: bool, data: bool) -> Self {
        BitCode(((clock as u8) << 1) | data as u8)
    }

    /// Create a [BitCode] from its packed form. Only the two low bits are kept.
    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        BitCode(bits & (Self::CLOCK | Self::DATA))
    }

    #[inline]
    pub fn bits(&self) -> u8 {
        self.0
    }

    #[inline]
    pub fn clock(&self) -> bool {
        self.0 & Self::CLOCK != 0
    }

    #[inline]
    pub fn data(&self) -> bool {
        self.0 & Self::DATA != 0
    }

    /// Append this pair to a [BitVec], clock bit first.
    pub fn push_to(&self, bits: &mut BitVec) {
        bits.push(self.clock());
        bits.push(self.data());
    }
}

impl From<BitCode> for u8 {
    fn from(code: BitCode) -> Self {
        code.0
    }
}

impl Display for BitCode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:02b}", self.0)
    }
}

/// The result of feeding one physical bit to the single-bit decoder.
/// Clock bits carry no value and are not validated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecodedBit {
    Clock,
    Data(bool),
}

impl DecodedBit {
    #[inline]
    pub fn is_data(&self) -> bool {
        matches!(self, DecodedBit::Data(_))
    }

    /// Return the decoded value. Clock bits decode as `false`.
    #[inline]
    pub fn value(&self) -> bool {
        match self {
            DecodedBit::Clock => false,
            DecodedBit::Data(value) => *value,
        }
    }

    pub fn flags(&self) -> DecodeFlags {
        match self {
            DecodedBit::Clock => DecodeFlags::empty(),
            DecodedBit::Data(false) => DecodeFlags::DATA,
            DecodedBit::Data(true) => DecodeFlags::DATA | DecodeFlags::VALUE,
        }
    }
}

impl From<DecodeFlags> for DecodedBit {
    fn from(flags: DecodeFlags) -> Self {
        if flags.contains(DecodeFlags::DATA) {
            DecodedBit::Data(flags.contains(DecodeFlags::VALUE))
        }
        else {
            DecodedBit::Clock
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitcode_parts() {
        let code = BitCode::new(true, false);
        assert_eq!(code.bits(), 0b10);
        assert!(code.clock());
        assert!(!code.data());
        assert_eq!(code.to_string(), "10");

        let code = BitCode::from_bits(0xFD);
        assert_eq!(code.bits(), 0b01);
        assert!(!code.clock());
        assert!(code.data());
    }

    #[test]
    fn test_bitcode_push_order() {
        let mut bits = BitVec::new();
        BitCode::new(true, false).push_to(&mut bits);
        BitCode::new(false, true).push_to(&mut bits);
        assert_eq!(bits.iter().collect::<Vec<_>>(), vec![true, false, false, true]);
    }

    #[test]
    fn test_decoded_bit_flags() {
        assert_eq!(DecodedBit::Clock.flags().bits(), 0b00);
        assert_eq!(DecodedBit::Data(false).flags().bits(), 0b10);
        assert_eq!(DecodedBit::Data(true).flags().bits(), 0b11);

        for decoded in [DecodedBit::Clock, DecodedBit::Data(false), DecodedBit::Data(true)] {
            assert_eq!(DecodedBit::from(decoded.flags()), decoded);
        }
        // A value without the data flag is still a clock bit.
        assert_eq!(DecodedBit::from(DecodeFlags::VALUE), DecodedBit::Clock);
        assert!(!DecodedBit::Clock.value());
    }
}
