//! Fixed 5×7 glyph set for marquee text.
//!
//! Glyphs are stored column-major, one byte per column, with bit 0 as the
//! bottom scanline. The supported set is deliberately tiny; see [`glyph_for`]
//! for how unsupported characters are handled.

/// Width of every glyph in pixel columns.
pub const GLYPH_WIDTH: usize = 5;

/// Height of every glyph in pixel rows.
pub const GLYPH_HEIGHT: usize = 7;

/// Horizontal cursor advance per character: glyph width plus one blank
/// spacing column.
pub const GLYPH_ADVANCE: usize = 6;

/// Immutable 5×7 character bitmap.
///
/// ```text
/// 'H' = [0x7F, 0x08, 0x08, 0x08, 0x7F]
///
///   col:  0 1 2 3 4
///         X . . . X   bit 6 (top)
///         X . . . X
///         X . . . X
///         X X X X X   bit 3
///         X . . . X
///         X . . . X
///         X . . . X   bit 0 (bottom)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    columns: [u8; GLYPH_WIDTH],
}

impl Glyph {
    /// Construct a glyph from its column bytes.
    #[must_use]
    pub const fn new(columns: [u8; GLYPH_WIDTH]) -> Self {
        Self { columns }
    }

    /// Column bytes of this glyph, left to right.
    #[must_use]
    pub const fn columns(&self) -> &[u8; GLYPH_WIDTH] {
        &self.columns
    }

    /// Whether the pixel at `(column, row)` is lit. Row 0 is the bottom
    /// scanline. Out-of-bitmap queries are unlit.
    #[must_use]
    pub const fn is_lit(&self, column: usize, row: usize) -> bool {
        if column >= GLYPH_WIDTH || row >= GLYPH_HEIGHT {
            return false;
        }
        self.columns[column] & (1 << row) != 0
    }
}

const GLYPH_L: Glyph = Glyph::new([0x00, 0x41, 0x7F, 0x40, 0x00]);

/// The supported characters with their bitmaps.
///
/// An explicit table (rather than branching) keeps the supported set and the
/// fallback behavior visible in one place and extension is a one-line edit.
pub static GLYPHS: [(char, Glyph); 4] = [
    ('H', Glyph::new([0x7F, 0x08, 0x08, 0x08, 0x7F])),
    ('a', Glyph::new([0x20, 0x54, 0x54, 0x54, 0x78])),
    ('l', GLYPH_L),
    ('o', Glyph::new([0x38, 0x44, 0x44, 0x44, 0x38])),
];

/// Glyph rendered for any character outside the table.
static FALLBACK: Glyph = GLYPH_L;

/// Resolve a character to its glyph.
///
/// Total over the full character domain: unsupported characters render as
/// `'l'` instead of failing. The marquee has no error channel, so a wrong
/// glyph on the panel beats a dark panel. Callers wanting strict behavior
/// should check membership in [`GLYPHS`] first.
#[must_use]
pub fn glyph_for(ch: char) -> &'static Glyph {
    match GLYPHS.iter().find(|(known, _)| *known == ch) {
        Some((_, glyph)) => glyph,
        None => &FALLBACK,
    }
}
