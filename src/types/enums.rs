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

    enums.rs

    Defines common enum types
*/
use crate::LineCodecError;
use std::{
    fmt,
    fmt::{Display, Formatter},
};

/// The line code used to modulate a bit stream.
/// * Fm: Frequency Modulation. Every data bit is preceded by a clock bit of 1. Used by older 8"
///   diskettes and single density controllers.
/// * Mfm: Modified Frequency Modulation. A clock bit of 1 is only written between two 0 data bits.
///   Used by almost all 5.25" and 3.5" diskettes.
#[repr(u8)]
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineEncoding {
    #[doc = "Frequency Modulation encoding."]
    Fm = 0,
    #[default]
    #[doc = "Modified Frequency Modulation encoding."]
    Mfm = 1,
}

/// Convert a raw mode value into a [LineEncoding]. 0 selects FM and 1 selects MFM, matching the
/// mode constants used by hardware drivers.
impl TryFrom<u8> for LineEncoding {
    type Error = LineCodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LineEncoding::Fm),
            1 => Ok(LineEncoding::Mfm),
            _ => Err(LineCodecError::InvalidMode(value)),
        }
    }
}

impl From<LineEncoding> for u8 {
    fn from(encoding: LineEncoding) -> Self {
        encoding as u8
    }
}

impl Display for LineEncoding {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LineEncoding::Fm => write!(f, "FM"),
            LineEncoding::Mfm => write!(f, "MFM"),
        }
    }
}

/// Which half of a clock/data bitcell pair a physical bit belongs to.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitPhase {
    Clock,
    #[default]
    Data,
}

impl BitPhase {
    /// Return the phase of the bitcell that follows this one.
    #[inline]
    pub fn next(self) -> BitPhase {
        match self {
            BitPhase::Clock => BitPhase::Data,
            BitPhase::Data => BitPhase::Clock,
        }
    }
}

impl From<BitPhase> for bool {
    fn from(phase: BitPhase) -> Self {
        match phase {
            BitPhase::Clock => false,
            BitPhase::Data => true,
        }
    }
}

impl From<bool> for BitPhase {
    fn from(phase: bool) -> Self {
        match phase {
            false => BitPhase::Clock,
            true => BitPhase::Data,
        }
    }
}

impl Display for BitPhase {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BitPhase::Clock => write!(f, "Clock"),
            BitPhase::Data => write!(f, "Data"),
        }
    }
}
