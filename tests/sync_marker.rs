mod common;

use crate::common::{build_mfm_field, init, random_bits, slice_bits};
use bit_vec::BitVec;
use fluxfox_linecode::{prelude::*, push_raw_word, SYNC_MARK, SYNC_MARKER_WORD};

#[test]
fn test_marker_sequence() {
    init();
    let mut codec = LineCodec::new(LineEncoding::Mfm);
    let bits = [1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1];

    for (i, &bit) in bits.iter().enumerate() {
        let detected = codec.feed_sync_bit(bit != 0);
        assert_eq!(detected, i == 15, "bit {}", i);
    }
}

#[test]
fn test_zero_stream() {
    init();
    let mut codec = LineCodec::new(LineEncoding::Mfm);
    for _ in 0..20 {
        assert!(!codec.feed_sync_bit(false));
    }
    assert_eq!(codec.state().sync().progress(), 0);
}

#[test]
fn test_detector_is_mode_independent() {
    for encoding in [LineEncoding::Fm, LineEncoding::Mfm] {
        let mut codec = LineCodec::new(encoding);
        let hits: Vec<bool> = SYNC_MARK.iter().map(|&b| codec.feed_sync_bit(b)).collect();
        assert!(hits[SYNC_MARK.len() - 1]);
        assert_eq!(hits.iter().filter(|&&h| h).count(), 1);
    }
}

#[test]
fn test_reset_clears_progress() {
    let mut codec = LineCodec::new(LineEncoding::Mfm);
    for &bit in &SYNC_MARK[..10] {
        codec.feed_sync_bit(bit);
    }
    assert_eq!(codec.state().sync().progress(), 10);

    codec.reset();
    assert_eq!(codec.state().sync().progress(), 0);

    // Mode change clears it too
    for &bit in &SYNC_MARK[..10] {
        codec.feed_sync_bit(bit);
    }
    codec.set_encoding(LineEncoding::Fm);
    assert_eq!(codec.state().sync().progress(), 0);
}

#[test]
fn test_marker_after_noise() {
    init();
    for _ in 0..50 {
        let mut codec = LineCodec::new(LineEncoding::Mfm);
        for bit in random_bits(256) {
            codec.feed_sync_bit(bit);
        }

        // Noise may or may not have completed a marker; re-arm and present a gap and marker.
        codec.reset_sync();
        let mut bits = BitVec::new();
        push_raw_word(&mut bits, 0xAAAA, 16);
        push_raw_word(&mut bits, 0xAAAA, 16);
        push_raw_word(&mut bits, SYNC_MARKER_WORD as u32, 16);
        assert_eq!(codec.find_sync(&bits, 0), Some(48));
    }
}

#[test]
fn test_normal_a1_is_not_a_marker() {
    // 0xA1 encoded with its normal clock bit must not be mistaken for the sync marker.
    let mut codec = LineCodec::new(LineEncoding::Mfm);
    let mut bits = codec.encode_buf(&[0x00; 8]);
    bits.extend(codec.encode_buf(&[0xA1, 0xA1, 0xA1]).iter());
    bits.extend(codec.encode_buf(&[0x4E; 8]).iter());

    let mut detector = LineCodec::new(LineEncoding::Mfm);
    assert_eq!(detector.find_sync(&bits, 0), None);
}

#[test]
fn test_sync_then_decode_field() {
    init();
    let payload = [0xFE, 0x01, 0x00, 0x03, 0x02, 0xAB, 0xCD];
    let (bits, payload_start) = build_mfm_field(16, 3, &payload);
    assert_eq!(payload_start, (16 + 12) * 16 + 3 * 16);

    let mut codec = LineCodec::new(LineEncoding::Mfm);
    let mut cursor = 0;
    let mut marker_ends = Vec::new();
    while let Some(end) = codec.find_sync(&bits, cursor) {
        marker_ends.push(end);
        cursor = end;
        codec.reset_sync();
        if marker_ends.len() == 3 {
            break;
        }
    }
    assert_eq!(marker_ends, vec![464, 480, 496]);
    assert_eq!(cursor, payload_start);

    let field = slice_bits(&bits, cursor, payload.len() * 16);
    assert_eq!(codec.decode_bits(&field), payload);
}

#[test]
fn test_marker_decodes_as_a1() {
    // With its clock bits ignored, the sync marker decodes as an ordinary 0xA1.
    let mut codec = LineCodec::new(LineEncoding::Mfm);
    assert_eq!(codec.decode_word16(SYNC_MARKER_WORD), 0xA1);
}
