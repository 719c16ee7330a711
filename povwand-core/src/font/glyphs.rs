//! Glyph data table
//!
//! Each supported letter is three 8-bit columns, one bit per LED, drawn as
//! the wand sweeps past. The table is indexed by `letter - 'A'`; lookup is
//! pure data, not branching.

/// Columns per letter glyph.
pub const GLYPH_COLUMNS: usize = 3;

/// Stroke patterns for `'A'..='Z'`, 3 columns each.
const GLYPHS: [[u8; GLYPH_COLUMNS]; 26] = [
    [0b1111_1111, 0b0000_1001, 0b1111_1111], // A
    [0b1111_1111, 0b1001_0000, 0b1111_0000], // B
    [0b1111_1111, 0b1000_0001, 0b1000_0001], // C
    [0b1111_0000, 0b1001_0000, 0b1111_1111], // D
    [0b1111_1111, 0b1001_0001, 0b1001_0001], // E
    [0b1111_1111, 0b0000_1001, 0b0000_1001], // F
    [0b1111_1111, 0b1001_0001, 0b1111_0001], // G
    [0b1111_1111, 0b0000_1000, 0b1111_1111], // H
    [0b1000_0001, 0b1111_1111, 0b1000_0001], // I
    [0b1000_0001, 0b1111_1111, 0b0000_0001], // J
    [0b1111_1111, 0b0010_0100, 0b0100_0010], // K
    [0b1111_1111, 0b1000_0000, 0b1000_0000], // L
    [0b1111_1111, 0b0000_1111, 0b1111_1111], // M
    [0b1111_1111, 0b0000_0001, 0b1111_1111], // N
    [0b1111_1111, 0b1000_0001, 0b1111_1111], // O
    [0b1111_1111, 0b0000_1001, 0b0000_1111], // P
    [0b0011_1111, 0b0110_0001, 0b1011_1111], // Q
    [0b1111_0000, 0b0001_0000, 0b0001_0000], // R
    [0b1001_1111, 0b1001_0001, 0b1111_0001], // S
    [0b0000_1000, 0b1111_1111, 0b0000_1000], // T
    [0b1111_1111, 0b1000_0000, 0b1111_1111], // U
    [0b0110_0000, 0b1000_0000, 0b0110_0000], // V
    [0b1111_1111, 0b1111_0000, 0b1111_1111], // W
    [0b1100_0011, 0b0011_1100, 0b1100_0011], // X
    [0b0000_1111, 0b1111_1000, 0b0000_1111], // Y
    [0b1110_0001, 0b1001_1001, 0b1000_0111], // Z
];

/// Look up the stroke columns for a character.
///
/// Returns `None` for anything outside `'A'..='Z'`; the caller decides what
/// an unsupported character contributes (nothing, per the encoder contract).
pub fn glyph(ch: char) -> Option<&'static [u8; GLYPH_COLUMNS]> {
    if ch.is_ascii_uppercase() {
        Some(&GLYPHS[(ch as u8 - b'A') as usize])
    } else {
        None
    }
}
