//! Laid-out page model.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner of the
//! page. A [`Document`] is fully positioned; serializing it is a direct walk
//! over the marks.

use crate::metrics::Face;

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    /// ISO A4.
    pub const A4: PageSize = PageSize {
        width: 595.28,
        height: 841.89,
    };

    /// US Letter.
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::LETTER
    }
}

/// RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Grey with the same value in every channel, e.g. `0x66` for `#666666`.
    pub const fn gray(v: u8) -> Self {
        Color::rgb(v, v, v)
    }
}

/// A single positioned run of text on one baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub baseline: f32,
    pub face: Face,
    pub size: f32,
    pub color: Color,
    /// Extra space added to every ASCII space, used for justification.
    pub word_spacing: f32,
    pub text: String,
}

/// A straight stroked line.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub width: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Text(TextRun),
    Rule(Rule),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub size: PageSize,
    pub marks: Vec<Mark>,
}

impl Page {
    pub fn new(size: PageSize) -> Self {
        Page {
            size,
            marks: Vec::new(),
        }
    }

    /// Text runs on this page in drawing order.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Text(run) => Some(run),
            Mark::Rule(_) => None,
        })
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Rule(rule) => Some(rule),
            Mark::Text(_) => None,
        })
    }

    /// Whether any text run on the page is exactly `text`.
    pub fn contains_text(&self, text: &str) -> bool {
        self.text_runs().any(|run| run.text == text)
    }
}

/// A finished, paginated document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text on all pages, one run per line, for inspection.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .flat_map(|p| p.text_runs())
            .map(|run| run.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
