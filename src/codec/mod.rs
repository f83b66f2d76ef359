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

//! The [codec](crate::codec) module holds the bit and block level FM/MFM
//! rules, and the state that ties them to a single channel.
//!
//! A [CodecState] is a plain value. Each transition consumes the state and
//! returns the new state alongside its result, so a caller can keep a stream's
//! history wherever it likes. [LineCodec] pairs a state with a [LineEncoding]
//! and exposes the same operations through `&mut self`.

pub mod fm;
mod interleave;
pub mod mfm;

use crate::{
    sync_marker::SyncState,
    types::{BitCode, BitPhase, DecodedBit, LineEncoding},
    LineCodecError,
};

/// The history carried between calls on one bit stream.
///
/// * `last_bit` is the last data bit encoded or decoded. MFM uses it to choose the next clock bit.
/// * `last_phase` is the phase of the last bitcell seen by the single-bit decoder.
/// * `sync` is the progress of the sync marker detector.
///
/// The default state has `last_bit` set, `last_phase` at [BitPhase::Data] so that the first decoded
/// bit is a clock bit, and no sync progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodecState {
    last_bit: bool,
    last_phase: BitPhase,
    sync: SyncState,
}

impl Default for CodecState {
    fn default() -> Self {
        CodecState {
            last_bit: true,
            last_phase: BitPhase::Data,
            sync: SyncState::default(),
        }
    }
}

impl CodecState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this state with `last_bit` replaced. Useful when resuming encoding after a
    /// field of known content, such as a sync marker that ends in a 1 bit.
    pub fn with_last_bit(self, last_bit: bool) -> Self {
        CodecState { last_bit, ..self }
    }

    #[inline]
    pub fn last_bit(&self) -> bool {
        self.last_bit
    }

    #[inline]
    pub fn last_phase(&self) -> BitPhase {
        self.last_phase
    }

    #[inline]
    pub fn sync(&self) -> SyncState {
        self.sync
    }

    pub fn encode_bit(self, encoding: LineEncoding, bit: bool) -> (BitCode, CodecState) {
        let code = match encoding {
            LineEncoding::Fm => fm::encode_bit(bit),
            LineEncoding::Mfm => mfm::encode_bit(bit, self.last_bit),
        };
        (code, self.with_last_bit(bit))
    }

    /// Encode the low nibble of `nibble` into 8 bitcells. The upper nibble is ignored.
    pub fn encode_nibble(self, encoding: LineEncoding, nibble: u8) -> (u8, CodecState) {
        let raw = match encoding {
            LineEncoding::Fm => fm::encode_nibble(nibble),
            LineEncoding::Mfm => mfm::encode_nibble(nibble, self.last_bit),
        };
        (raw, self.with_last_bit(nibble & 0x01 != 0))
    }

    pub fn encode_byte(self, encoding: LineEncoding, byte: u8) -> (u16, CodecState) {
        let raw = match encoding {
            LineEncoding::Fm => fm::encode_u8(byte),
            LineEncoding::Mfm => mfm::encode_u8(byte, self.last_bit),
        };
        (raw, self.with_last_bit(byte & 0x01 != 0))
    }

    pub fn encode_word(self, encoding: LineEncoding, word: u16) -> (u32, CodecState) {
        let raw = match encoding {
            LineEncoding::Fm => fm::encode_u16(word),
            LineEncoding::Mfm => mfm::encode_u16(word, self.last_bit),
        };
        (raw, self.with_last_bit(word & 0x0001 != 0))
    }

    /// Feed one bitcell to the single-bit decoder. Bitcells alternate between clock and data,
    /// starting with a clock bit after a reset. Clock bits are discarded without validation.
    pub fn decode_bit(self, bit: bool) -> (DecodedBit, CodecState) {
        match self.last_phase {
            BitPhase::Data => (
                DecodedBit::Clock,
                CodecState {
                    last_phase: BitPhase::Clock,
                    ..self
                },
            ),
            BitPhase::Clock => (
                DecodedBit::Data(bit),
                CodecState {
                    last_bit: bit,
                    last_phase: BitPhase::Data,
                    ..self
                },
            ),
        }
    }

    /// Decode 8 bitcells into the low nibble of the result.
    pub fn decode_byte(self, raw: u8) -> (u8, CodecState) {
        let nibble = interleave::compress_u8(raw);
        (nibble, self.with_last_bit(nibble & 0x01 != 0))
    }

    pub fn decode_word16(self, raw: u16) -> (u8, CodecState) {
        let byte = interleave::compress_u16(raw);
        (byte, self.with_last_bit(byte & 0x01 != 0))
    }

    pub fn decode_word32(self, raw: u32) -> (u16, CodecState) {
        let word = interleave::compress_u32(raw);
        (word, self.with_last_bit(word & 0x0001 != 0))
    }

    /// Feed one raw bitcell to the sync marker detector.
    pub fn feed_sync_bit(self, bit: bool) -> (bool, CodecState) {
        let (detected, sync) = self.sync.feed(bit);
        (detected, CodecState { sync, ..self })
    }
}

/// A [LineCodec] encodes and decodes one physical channel, such as a single read/write head.
/// Concurrent streams each need their own [LineCodec].
///
/// Changing the [LineEncoding] always resets the codec's history.
#[derive(Clone, Debug, Default)]
pub struct LineCodec {
    encoding: LineEncoding,
    state: CodecState,
}

impl LineCodec {
    pub fn new(encoding: LineEncoding) -> Self {
        LineCodec {
            encoding,
            state: CodecState::default(),
        }
    }

    /// Create a [LineCodec] that resumes from a previously saved [CodecState].
    pub fn with_state(encoding: LineEncoding, state: CodecState) -> Self {
        LineCodec { encoding, state }
    }

    #[inline]
    pub fn encoding(&self) -> LineEncoding {
        self.encoding
    }

    #[inline]
    pub fn state(&self) -> CodecState {
        self.state
    }

    /// Select a new [LineEncoding]. Codec and detector state is reset even if the encoding is
    /// unchanged.
    pub fn set_encoding(&mut self, encoding: LineEncoding) {
        log::debug!("LineCodec::set_encoding(): {} -> {}", self.encoding, encoding);
        self.encoding = encoding;
        self.reset();
    }

    /// Select a new encoding from a raw mode value. 0 selects FM and 1 selects MFM.
    /// Any other value is rejected and leaves the codec untouched.
    pub fn set_encoding_raw(&mut self, mode: u8) -> Result<(), LineCodecError> {
        let encoding = LineEncoding::try_from(mode)?;
        self.set_encoding(encoding);
        Ok(())
    }

    /// Restore the default history without changing the encoding.
    pub fn reset(&mut self) {
        log::trace!("LineCodec::reset()");
        self.state = CodecState::default();
    }

    /// Reset only the sync marker detector, leaving encoder and decoder history intact.
    pub fn reset_sync(&mut self) {
        self.state.sync = SyncState::default();
    }

    pub fn encode_bit(&mut self, bit: bool) -> BitCode {
        let (code, state) = self.state.encode_bit(self.encoding, bit);
        self.state = state;
        code
    }

    pub fn encode_nibble(&mut self, nibble: u8) -> u8 {
        let (raw, state) = self.state.encode_nibble(self.encoding, nibble);
        self.state = state;
        raw
    }

    pub fn encode_byte(&mut self, byte: u8) -> u16 {
        let (raw, state) = self.state.encode_byte(self.encoding, byte);
        self.state = state;
        raw
    }

    pub fn encode_word(&mut self, word: u16) -> u32 {
        let (raw, state) = self.state.encode_word(self.encoding, word);
        self.state = state;
        raw
    }

    pub fn decode_bit(&mut self, bit: bool) -> DecodedBit {
        let (decoded, state) = self.state.decode_bit(bit);
        self.state = state;
        decoded
    }

    pub fn decode_byte(&mut self, raw: u8) -> u8 {
        let (nibble, state) = self.state.decode_byte(raw);
        self.state = state;
        nibble
    }

    pub fn decode_word16(&mut self, raw: u16) -> u8 {
        let (byte, state) = self.state.decode_word16(raw);
        self.state = state;
        byte
    }

    pub fn decode_word32(&mut self, raw: u32) -> u16 {
        let (word, state) = self.state.decode_word32(raw);
        self.state = state;
        word
    }

    /// Feed one raw bitcell to the sync marker detector. Returns `true` only on the bit that
    /// completes the marker. After that the detector ignores input until reset.
    pub fn feed_sync_bit(&mut self, bit: bool) -> bool {
        let (detected, state) = self.state.feed_sync_bit(bit);
        self.state = state;
        detected
    }
}
