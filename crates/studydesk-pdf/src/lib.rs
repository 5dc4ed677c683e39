//! # studydesk-pdf
//!
//! Turns note markup into stored PDF documents.
//!
//! This crate provides:
//! - Markup normalization to plain text with paragraph and list structure
//! - Character-count line wrapping and two filename sanitizers
//! - A cursor-based page composer with Helvetica metrics and footer stamping
//! - PDF serialization through `pdf-writer`
//! - Two export layouts ([`NoteExport`], [`LibraryExport`]) and an async
//!   [`PdfRenderer`] that delivers the result to a [`DocumentSink`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use studydesk_pdf::{FilesystemSink, NoteExport, NoteSource, PdfRenderer};
//!
//! let renderer = PdfRenderer::new(FilesystemSink::new("./uploads"));
//! let source = NoteSource::new("Biology", "Cells", "<p>The unit of life.</p>");
//! let rendered = renderer.render(&NoteExport, &source).await?;
//!
//! println!("Saved to {}", rendered.public_path());
//! ```

pub mod document;
pub mod layout;
pub mod markup;
pub mod metrics;
pub mod render;
pub mod sanitize;
pub mod sink;
pub mod strategy;
pub mod wrap;
pub mod writer;

pub use document::{Color, Document, Mark, Page, PageSize, Rule, TextRun};
pub use layout::{Align, Composer, Margins, TextOptions};
pub use markup::normalize;
pub use metrics::Face;
pub use render::{public_path, NoteSource, PdfRenderer, RenderedPdf};
pub use sanitize::{sanitize_export_title, sanitize_library_name};
pub use sink::{DocumentSink, FilesystemSink};
pub use strategy::{ExportStrategy, LibraryExport, NoteExport};
pub use wrap::wrap;
pub use writer::encode;
