//! Glyph metrics for the base-14 Helvetica faces.
//!
//! Advance widths are in thousandths of an em, taken from the Adobe AFM files
//! for the printable ASCII range. Characters outside that range fall back to
//! the width of a digit, except the bullet which has its own entry.

/// A base-14 font face that needs no embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Helvetica,
    HelveticaBold,
}

impl Face {
    /// PostScript name used in the font dictionary.
    pub fn base_font(self) -> &'static [u8] {
        match self {
            Face::Helvetica => b"Helvetica",
            Face::HelveticaBold => b"Helvetica-Bold",
        }
    }

    /// Resource name a content stream uses to select this face.
    pub fn resource_name(self) -> &'static [u8] {
        match self {
            Face::Helvetica => b"F1",
            Face::HelveticaBold => b"F2",
        }
    }

    pub fn all() -> [Face; 2] {
        [Face::Helvetica, Face::HelveticaBold]
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            Face::Helvetica => &HELVETICA_WIDTHS,
            Face::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    fn line_gap(self) -> f32 {
        match self {
            Face::Helvetica => 231.0,
            Face::HelveticaBold => 265.0,
        }
    }

    /// Advance width of one character at 1000 units per em.
    pub fn char_width(self, c: char) -> u16 {
        match c {
            ' '..='~' => self.widths()[c as usize - 32],
            '•' => BULLET_WIDTH,
            _ => FALLBACK_WIDTH,
        }
    }

    /// Width of `text` in points at `size`.
    pub fn text_width(self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * size / 1000.0
    }

    /// Distance from the top of a line box to its baseline.
    pub fn ascent(self, size: f32) -> f32 {
        ASCENDER * size / 1000.0
    }

    /// Height of one line box: ascender to descender plus the face's line gap.
    pub fn line_height(self, size: f32) -> f32 {
        (ASCENDER - DESCENDER + self.line_gap()) * size / 1000.0
    }
}

const ASCENDER: f32 = 718.0;
const DESCENDER: f32 = -207.0;
const BULLET_WIDTH: u16 = 350;
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];
