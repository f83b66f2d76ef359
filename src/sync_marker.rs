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

    src/sync_marker.rs

    A streaming detector for the MFM address mark sync pattern.

*/

//! The detector recognizes the raw bitcell pattern `0x4489`, the `0xA1` sync
//! byte with its missing clock bit. The leading 0 of the word carries no
//! information and is not matched, so the detector looks for the remaining 15
//! bitcells in [SYNC_MARK].
//!
//! Progress is tracked in a [SyncState]. On a mismatch the detector falls back
//! along a fixed table. The table is tuned to this pattern's self-overlap and
//! is not a general failure function; it is applied exactly as written.

/// The raw MFM encoding of the `0xA1` sync byte with a missing clock bit.
pub const SYNC_MARKER_WORD: u16 = 0x4489;
/// The number of bitcells matched by the detector.
pub const SYNC_MARK_LEN: usize = 15;
/// The bitcells matched by the detector, in stream order. The first bit of [SYNC_MARKER_WORD] is omitted.
pub const SYNC_MARK: [bool; SYNC_MARK_LEN] = [
    true, false, false, false, true, false, false, true, false, false, false, true, false, false, true,
];

/// Progress value of a detector that has seen the complete marker.
pub const SYNC_COMPLETE: u8 = SYNC_MARK_LEN as u8;

#[derive(Copy, Clone, Debug)]
struct SyncTransition {
    expect:  bool,
    on_miss: u8,
}

impl SyncTransition {
    const fn new(expect: bool, on_miss: u8) -> Self {
        SyncTransition { expect, on_miss }
    }
}

/// Transitions indexed by the current progress. A match always advances by one.
#[rustfmt::skip]
const SYNC_TABLE: [SyncTransition; SYNC_MARK_LEN] = [
    SyncTransition::new(true,  0),  // 0
    SyncTransition::new(false, 1),  // 1
    SyncTransition::new(false, 1),  // 2
    SyncTransition::new(false, 1),  // 3
    SyncTransition::new(true,  0),  // 4
    SyncTransition::new(false, 1),  // 5
    SyncTransition::new(false, 1),  // 6
    SyncTransition::new(true,  4),  // 7
    SyncTransition::new(false, 1),  // 8
    SyncTransition::new(false, 1),  // 9
    SyncTransition::new(false, 1),  // 10
    SyncTransition::new(true,  0),  // 11
    SyncTransition::new(false, 1),  // 12
    SyncTransition::new(false, 1),  // 13
    SyncTransition::new(true,  4),  // 14
];

/// The progress of the sync marker detector, from 0 (nothing matched) to [SYNC_COMPLETE].
/// Once complete the detector ignores further input until it is reset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncState {
    progress: u8,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.progress == SYNC_COMPLETE
    }

    /// Feed one raw bitcell to the detector.
    /// Returns `true` only for the bit that completes the marker, along with the new state.
    pub fn feed(self, bit: bool) -> (bool, SyncState) {
        if self.is_complete() {
            return (false, self);
        }

        let transition = &SYNC_TABLE[self.progress as usize];
        if bit == transition.expect {
            let next = SyncState {
                progress: self.progress + 1,
            };
            let detected = next.is_complete();
            if detected {
                log::debug!("SyncState::feed(): sync marker detected");
            }
            (detected, next)
        }
        else {
            if self.progress > transition.on_miss + 1 {
                log::trace!(
                    "SyncState::feed(): lost sync match at {}, falling back to {}",
                    self.progress,
                    transition.on_miss
                );
            }
            (
                false,
                SyncState {
                    progress: transition.on_miss,
                },
            )
        }
    }
}
