//! Cursor-based page composer.
//!
//! The composer keeps a vertical cursor measured downward from the top edge
//! of the current page. Flowing text advances the cursor one line box at a
//! time and opens a new page when the next line would cross the bottom
//! margin. Footers and other absolutely placed text go through [`Composer::stamp`],
//! which can target any page already laid out and never moves the cursor.

use studydesk_core::{Error, Result};
use tracing::trace;

use crate::document::{Color, Document, Mark, Page, PageSize, Rule, TextRun};
use crate::metrics::Face;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn uniform(v: f32) -> Self {
        Margins {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    /// Stretch inter-word spacing to fill the width. The last line of a
    /// paragraph stays left-aligned.
    Justify,
}

/// Options for flowing text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextOptions {
    pub align: Align,
    /// Left offset from the margin applied to every line of the block.
    pub indent: f32,
    /// Extra space after every line.
    pub line_gap: f32,
    /// Extra space between paragraphs.
    pub paragraph_gap: f32,
    /// Wrap width; defaults to the space between the margins minus `indent`.
    pub width: Option<f32>,
    pub underline: bool,
}

impl TextOptions {
    pub fn aligned(align: Align) -> Self {
        TextOptions {
            align,
            ..Default::default()
        }
    }
}

pub struct Composer {
    size: PageSize,
    margins: Margins,
    pages: Vec<Page>,
    y: f32,
    face: Face,
    font_size: f32,
    color: Color,
}

impl Composer {
    /// Start a document with one empty page and the cursor at the top margin.
    pub fn new(size: PageSize, margins: Margins) -> Self {
        Composer {
            size,
            margins,
            pages: vec![Page::new(size)],
            y: margins.top,
            face: Face::Helvetica,
            font_size: 12.0,
            color: Color::BLACK,
        }
    }

    pub fn font(&mut self, face: Face, size: f32) -> &mut Self {
        self.face = face;
        self.font_size = size;
        self
    }

    pub fn fill(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }

    pub fn page_size(&self) -> PageSize {
        self.size
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Cursor position, in points below the top edge of the current page.
    pub fn cursor(&self) -> f32 {
        self.y
    }

    /// Horizontal space between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.size.width - self.margins.left - self.margins.right
    }

    /// Height of one line box in the current font, without any line gap.
    pub fn line_height(&self) -> f32 {
        self.face.line_height(self.font_size)
    }

    fn max_y(&self) -> f32 {
        self.size.height - self.margins.bottom
    }

    pub fn new_page(&mut self) -> &mut Self {
        self.pages.push(Page::new(self.size));
        self.y = self.margins.top;
        trace!(page = self.pages.len(), "Opened page");
        self
    }

    /// Advance the cursor by `lines` line heights of the current font.
    pub fn move_down(&mut self, lines: f32) -> &mut Self {
        self.y += lines * self.line_height();
        self
    }

    /// Stroke a horizontal rule across the content width, `offset` points
    /// below the cursor. The cursor does not move.
    pub fn rule_below(&mut self, offset: f32, line_width: f32) -> &mut Self {
        let y = self.size.height - (self.y + offset);
        let rule = Rule {
            from: (self.margins.left, y),
            to: (self.size.width - self.margins.right, y),
            width: line_width,
            color: self.color,
        };
        self.current_page().marks.push(Mark::Rule(rule));
        self
    }

    /// Flow `text`, breaking each `\n`-separated paragraph by measured glyph
    /// widths. `paragraph_gap` separates paragraphs; none follows the last.
    pub fn text(&mut self, text: &str, opts: &TextOptions) -> &mut Self {
        let (x0, width) = self.frame(opts);
        let paragraphs: Vec<&str> = text.split('\n').collect();
        let last = paragraphs.len().saturating_sub(1);

        for (i, paragraph) in paragraphs.iter().enumerate() {
            let lines = self.break_paragraph(paragraph, width);
            self.emit_block(&lines, x0, width, opts);
            if i < last {
                self.y += opts.paragraph_gap;
            }
        }
        self
    }

    /// Lay out lines that were already wrapped by the caller, as one
    /// paragraph. A line wider than the frame at the current font is broken
    /// again by measured width.
    pub fn lines<S: AsRef<str>>(&mut self, lines: &[S], opts: &TextOptions) -> &mut Self {
        let (x0, width) = self.frame(opts);
        let mut fitted = Vec::with_capacity(lines.len());
        for line in lines {
            let line = line.as_ref();
            if self.face.text_width(line, self.font_size) > width {
                fitted.extend(self.break_paragraph(line, width));
            } else {
                fitted.push(line.to_string());
            }
        }
        self.emit_block(&fitted, x0, width, opts);
        self
    }

    /// Place one line of text at an absolute position on an existing page,
    /// using the current font and colour. `y` is measured from the top edge;
    /// the text is aligned within `width` starting at `x`.
    pub fn stamp(
        &mut self,
        page_index: usize,
        text: &str,
        x: f32,
        y: f32,
        width: f32,
        align: Align,
    ) -> Result<()> {
        let natural = self.face.text_width(text, self.font_size);
        let run = TextRun {
            x: aligned_x(align, x, width, natural),
            baseline: self.size.height - (y + self.face.ascent(self.font_size)),
            face: self.face,
            size: self.font_size,
            color: self.color,
            word_spacing: 0.0,
            text: text.to_string(),
        };
        let count = self.pages.len();
        let page = self.pages.get_mut(page_index).ok_or_else(|| {
            Error::Render(format!(
                "cannot stamp page {} of a {}-page document",
                page_index + 1,
                count
            ))
        })?;
        page.marks.push(Mark::Text(run));
        Ok(())
    }

    pub fn finish(self) -> Document {
        Document { pages: self.pages }
    }

    fn current_page(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::new(self.size));
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn frame(&self, opts: &TextOptions) -> (f32, f32) {
        let x0 = self.margins.left + opts.indent;
        let width = opts
            .width
            .unwrap_or_else(|| self.content_width() - opts.indent);
        (x0, width)
    }

    fn break_paragraph(&self, paragraph: &str, width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{} {}", current, word);
            if self.face.text_width(&candidate, self.font_size) <= width {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }

        if !current.is_empty() || lines.is_empty() {
            lines.push(current);
        }
        lines
    }

    fn emit_block<S: AsRef<str>>(&mut self, lines: &[S], x0: f32, width: f32, opts: &TextOptions) {
        let count = lines.len();
        for (i, line) in lines.iter().enumerate() {
            self.emit_line(line.as_ref(), x0, width, opts, i + 1 == count);
        }
    }

    fn emit_line(&mut self, line: &str, x0: f32, width: f32, opts: &TextOptions, last: bool) {
        let line_height = self.line_height();
        if self.y + line_height > self.max_y() && self.y > self.margins.top {
            self.new_page();
        }

        let natural = self.face.text_width(line, self.font_size);
        let gaps = line.matches(' ').count();
        let word_spacing = if opts.align == Align::Justify && !last && gaps > 0 {
            ((width - natural) / gaps as f32).max(0.0)
        } else {
            0.0
        };
        let x = aligned_x(opts.align, x0, width, natural);
        let baseline = self.size.height - (self.y + self.face.ascent(self.font_size));

        if !line.is_empty() {
            let run = TextRun {
                x,
                baseline,
                face: self.face,
                size: self.font_size,
                color: self.color,
                word_spacing,
                text: line.to_string(),
            };
            let underline = opts.underline.then(|| {
                let thickness = (self.font_size / 10.0).floor().max(0.5);
                let y = baseline - 2.0 * thickness;
                Rule {
                    from: (x, y),
                    to: (x + natural + word_spacing * gaps as f32, y),
                    width: thickness,
                    color: self.color,
                }
            });

            let page = self.current_page();
            page.marks.push(Mark::Text(run));
            if let Some(rule) = underline {
                page.marks.push(Mark::Rule(rule));
            }
        }

        self.y += line_height + opts.line_gap;
    }
}

fn aligned_x(align: Align, x0: f32, width: f32, natural: f32) -> f32 {
    match align {
        Align::Left | Align::Justify => x0,
        Align::Center => x0 + (width - natural) / 2.0,
        Align::Right => x0 + width - natural,
    }
}
