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

//! # fluxfox_linecode
//!
//! A small library for modulating and demodulating FM and MFM line codes, the
//! self-clocking two-bitcells-per-bit encodings used by floppy and tape
//! controllers.
//!
//! Every logical data bit is recorded as a pair of bitcells, a clock bit
//! followed by a data bit. FM always writes a clock bit. MFM only writes a
//! clock bit between two consecutive 0 data bits, so the encoder must carry
//! one bit of history across calls.
//!
//! A [LineCodec] owns one channel's worth of state: the selected
//! [LineEncoding], the previously encoded bit, the clock/data phase of the
//! single-bit decoder, and the progress of the sync marker detector. The same
//! transitions are available as pure functions on [CodecState] for callers
//! that prefer to thread state explicitly.
//!
//! ```
//! use fluxfox_linecode::{LineCodec, LineEncoding};
//!
//! let mut codec = LineCodec::new(LineEncoding::Mfm);
//! let raw = codec.encode_byte(0x4E);
//! assert_eq!(codec.decode_word16(raw), 0x4E);
//! ```
//!
//! No checks are done on decoded input. Clock bits are discarded, so a stream
//! that was never bit-synchronized simply decodes to garbage.

mod bitstream;
pub mod codec;
pub mod sync_marker;
pub mod types;

use thiserror::Error;

/// The number of bitcells produced when encoding one byte.
pub const ENCODED_BYTE_LEN: usize = 16;
/// The number of bitcells produced when encoding one 16-bit word.
pub const ENCODED_WORD_LEN: usize = 32;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LineCodecError {
    #[error("Invalid line encoding mode: {0}")]
    InvalidMode(u8),
}

pub use crate::{
    bitstream::push_raw_word,
    codec::{CodecState, LineCodec},
    sync_marker::{SyncState, SYNC_MARK, SYNC_MARKER_WORD},
    types::{BitCode, BitPhase, DecodeFlags, DecodedBit, LineEncoding},
};

pub mod prelude {
    pub use crate::{
        codec::{CodecState, LineCodec},
        sync_marker::SyncState,
        types::{BitCode, BitPhase, DecodeFlags, DecodedBit, LineEncoding},
        LineCodecError,
    };
}
