//! The two export layouts.
//!
//! [`NoteExport`] backs the ad-hoc "save as PDF" action on an open note and
//! [`LibraryExport`] backs saving a stored note into the study library. They
//! differ in page size, layout, output directory and file naming, and callers
//! pick one explicitly.

use std::path::PathBuf;

use studydesk_core::Result;

use crate::document::{Color, Document, PageSize};
use crate::layout::{Align, Composer, Margins, TextOptions};
use crate::markup::BULLET;
use crate::metrics::Face;
use crate::sanitize::{sanitize_export_title, sanitize_library_name};
use crate::wrap::wrap;

const MARGIN: f32 = 50.0;

/// A page layout plus the naming rules for where its output is stored.
pub trait ExportStrategy: Send + Sync {
    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// Output path relative to the uploads root.
    fn destination(&self, subject: &str, title: &str) -> PathBuf;

    /// Lay out a document from already-normalized body text.
    fn compose(&self, subject: &str, title: &str, body: &str) -> Result<Document>;
}

/// A4 export with a subject header, ruled title, paragraph-aware body and
/// numbered footers. Written to `notes/<subject>/<Title_With_Underscores>.pdf`;
/// the subject directory is used as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoteExport;

impl NoteExport {
    const BODY_SIZE: f32 = 12.0;
    const BULLET_INDENT: f32 = 20.0;
    const FOOTER_OFFSET: f32 = 30.0;

    fn write_paragraph(composer: &mut Composer, paragraph: &str) {
        let opts = if paragraph.trim().starts_with(BULLET) {
            TextOptions {
                align: Align::Left,
                indent: Self::BULLET_INDENT,
                line_gap: 2.0,
                ..Default::default()
            }
        } else {
            TextOptions {
                align: Align::Justify,
                line_gap: 4.0,
                ..Default::default()
            }
        };
        let width = composer.content_width() - opts.indent;

        // Each source line is its own block so list items stay on separate
        // lines and only the final line of a block is left unjustified.
        for line in paragraph.lines() {
            let wrapped = wrap(line, width, Self::BODY_SIZE);
            if !wrapped.is_empty() {
                composer.lines(&wrapped, &opts);
            }
        }
    }

    fn stamp_footers(composer: &mut Composer) -> Result<()> {
        let total = composer.page_count();
        let size = composer.page_size();
        let margins = composer.margins();
        let width = composer.content_width();

        composer.font(Face::Helvetica, 8.0).fill(Color::gray(0x66));
        for index in 0..total {
            composer.stamp(
                index,
                &format!("Page {} of {}", index + 1, total),
                margins.left,
                size.height - Self::FOOTER_OFFSET,
                width,
                Align::Center,
            )?;
        }
        Ok(())
    }
}

impl ExportStrategy for NoteExport {
    fn name(&self) -> &'static str {
        "note_export"
    }

    fn destination(&self, subject: &str, title: &str) -> PathBuf {
        PathBuf::from("notes")
            .join(subject)
            .join(format!("{}.pdf", sanitize_export_title(title)))
    }

    fn compose(&self, subject: &str, title: &str, body: &str) -> Result<Document> {
        let mut composer = Composer::new(PageSize::A4, Margins::uniform(MARGIN));

        composer.font(Face::Helvetica, 10.0).fill(Color::gray(0x66));
        composer.text(
            &format!("Subject: {}", subject),
            &TextOptions::aligned(Align::Right),
        );
        composer.move_down(0.5);

        composer.font(Face::HelveticaBold, 20.0).fill(Color::BLACK);
        composer.text(title, &TextOptions::aligned(Align::Center));
        composer.rule_below(10.0, 1.0);
        composer.move_down(2.0);

        composer
            .font(Face::Helvetica, Self::BODY_SIZE)
            .fill(Color::gray(0x33));
        let paragraphs: Vec<&str> = body.split("\n\n").collect();
        let last = paragraphs.len().saturating_sub(1);
        for (index, paragraph) in paragraphs.iter().enumerate() {
            if !paragraph.trim().is_empty() {
                Self::write_paragraph(&mut composer, paragraph);
                if index < last {
                    composer.move_down(0.5);
                }
            }
        }

        // Footers need the final page count, so they go on after layout.
        Self::stamp_footers(&mut composer)?;
        Ok(composer.finish())
    }
}

/// Letter-size library copy: underlined title over a single flowed body.
/// Written to `study/<subject>/<title>.pdf` with both parts sanitized.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibraryExport;

impl ExportStrategy for LibraryExport {
    fn name(&self) -> &'static str {
        "library_export"
    }

    fn destination(&self, subject: &str, title: &str) -> PathBuf {
        PathBuf::from("study")
            .join(sanitize_library_name(subject))
            .join(format!("{}.pdf", sanitize_library_name(title)))
    }

    fn compose(&self, _subject: &str, title: &str, body: &str) -> Result<Document> {
        let mut composer = Composer::new(PageSize::LETTER, Margins::uniform(MARGIN));

        composer.font(Face::HelveticaBold, 24.0);
        composer.text(
            title,
            &TextOptions {
                align: Align::Center,
                underline: true,
                ..Default::default()
            },
        );
        composer.move_down(2.0);

        composer.font(Face::Helvetica, 12.0);
        composer.text(
            body,
            &TextOptions {
                align: Align::Left,
                line_gap: 7.0,
                paragraph_gap: 10.0,
                width: Some(500.0),
                ..Default::default()
            },
        );

        Ok(composer.finish())
    }
}
