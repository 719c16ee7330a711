//! Frame sequence encoder
//!
//! Flattens a message into the ordered frame sequence the sequencer
//! displays. Encoding is deterministic and total: unsupported characters
//! contribute no stroke frames and are not an error.

use heapless::Vec;

use super::glyphs::glyph;
use crate::config::{MAX_FRAME_COUNT, MAX_MESSAGE_LEN};

/// The flattened, ordered frame sequence for a message.
pub type FrameSequence = Vec<u8, MAX_FRAME_COUNT>;

/// Width of the blank spacer appended after every character.
const SPACER_FRAMES: usize = 2;

/// Width of the space character's own blank glyph.
const SPACE_GLYPH_FRAMES: usize = 2;

/// Encode a message into its frame sequence.
///
/// Per character, in input order:
/// - `'A'..='Z'`: the letter's 3 stroke columns
/// - `' '`: 2 zero frames (a no-stroke glyph)
/// - anything else: nothing
///
/// followed in every case by a 2-frame zero spacer that separates letters
/// during the sweep. Only the first [`MAX_MESSAGE_LEN`] characters are
/// encoded; the capacity of [`FrameSequence`] is sized so they always fit.
pub fn encode(message: &str) -> FrameSequence {
    let mut frames = FrameSequence::new();

    for ch in message.chars().take(MAX_MESSAGE_LEN) {
        if let Some(columns) = glyph(ch) {
            for &column in columns {
                let _ = frames.push(column);
            }
        } else if ch == ' ' {
            for _ in 0..SPACE_GLYPH_FRAMES {
                let _ = frames.push(0);
            }
        }

        // Letter separation gap, appended regardless of character validity
        for _ in 0..SPACER_FRAMES {
            let _ = frames.push(0);
        }
    }

    frames
}

/// Number of frames a single character encodes to.
///
/// Exposed for capacity reasoning and tests.
pub fn frames_for_char(ch: char) -> usize {
    let glyph_frames = if glyph(ch).is_some() {
        super::glyphs::GLYPH_COLUMNS
    } else if ch == ' ' {
        SPACE_GLYPH_FRAMES
    } else {
        0
    };
    glyph_frames + SPACER_FRAMES
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_letter_is_three_strokes_and_spacer() {
        for ch in 'A'..='Z' {
            let mut buf = [0u8; 4];
            let s = ch.encode_utf8(&mut buf);
            let frames = encode(s);
            assert_eq!(frames.len(), 5, "wrong frame count for {ch}");
            assert_eq!(&frames[3..], &[0, 0], "missing spacer for {ch}");
        }
    }

    #[test]
    fn test_space_is_all_zero() {
        let frames = encode(" ");
        assert_eq!(frames.len(), 4);
        assert!(frames.iter().all(|&f| f == 0));
    }

    #[test]
    fn test_unsupported_character_yields_only_spacer() {
        for s in ["a", "7", "!"] {
            let frames = encode(s);
            assert_eq!(frames.as_slice(), &[0, 0], "bad encoding for {s:?}");
        }
    }

    #[test]
    fn test_order_preserved() {
        // Frame offsets must grow monotonically with character index
        let frames = encode("AB");
        let a = crate::font::glyph('A').unwrap();
        let b = crate::font::glyph('B').unwrap();
        assert_eq!(&frames[0..3], a.as_slice());
        assert_eq!(&frames[3..5], &[0, 0]);
        assert_eq!(&frames[5..8], b.as_slice());
        assert_eq!(&frames[8..10], &[0, 0]);
    }

    #[test]
    fn test_hi_is_ten_frames() {
        // 'H' (3) + spacer (2) + 'I' (3) + spacer (2)
        let frames = encode("HI");
        assert_eq!(frames.len(), 10);
    }

    #[test]
    fn test_idempotent() {
        let first = encode("SAHOTA");
        let second = encode("SAHOTA");
        assert_eq!(first, second);
    }

    #[test]
    fn test_message_truncated_at_capacity_bound() {
        // 10 letters, but only the first 9 are encoded
        let frames = encode("ABCDEFGHIJ");
        assert_eq!(frames.len(), 9 * 5);
    }

    proptest! {
        #[test]
        fn prop_frame_count_matches_per_char_sum(msg in "[ -~]{0,9}") {
            let expected: usize = msg.chars().map(frames_for_char).sum();
            prop_assert_eq!(encode(&msg).len(), expected);
        }

        #[test]
        fn prop_every_letter_followed_by_spacer(msg in "[A-Z]{1,9}") {
            let frames = encode(&msg);
            for (i, _) in msg.chars().enumerate() {
                let spacer = &frames[i * 5 + 3..i * 5 + 5];
                prop_assert_eq!(spacer, &[0u8, 0u8][..]);
            }
        }

        #[test]
        fn prop_deterministic(msg in "[ -~]{0,9}") {
            prop_assert_eq!(encode(&msg), encode(&msg));
        }
    }
}
