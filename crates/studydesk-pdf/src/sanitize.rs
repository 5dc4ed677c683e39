//! File and directory name cleanup for generated documents.
//!
//! The two policies belong to different entry points and produce different
//! names for the same title; they are kept separate on purpose.

use once_cell::sync::Lazy;
use regex::Regex;

static NOT_ALNUM_OR_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NOT_WORD_SPACE_OR_HYPHEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap());

/// File stem for ad-hoc note exports: ASCII letters, digits, and whitespace
/// survive; each whitespace run becomes one underscore.
///
/// ```
/// use studydesk_pdf::sanitize::sanitize_export_title;
///
/// assert_eq!(sanitize_export_title("Chapter 1: Intro!!"), "Chapter_1_Intro");
/// ```
pub fn sanitize_export_title(title: &str) -> String {
    let kept = NOT_ALNUM_OR_SPACE.replace_all(title, "");
    WHITESPACE_RUN
        .replace_all(&kept, "_")
        .trim()
        .to_string()
}

/// Directory or file stem for library saves: ASCII word characters,
/// whitespace, and hyphens survive; spacing is preserved.
///
/// ```
/// use studydesk_pdf::sanitize::sanitize_library_name;
///
/// assert_eq!(sanitize_library_name("Chapter 1: Intro!!"), "Chapter 1 Intro");
/// ```
pub fn sanitize_library_name(name: &str) -> String {
    NOT_WORD_SPACE_OR_HYPHEN
        .replace_all(name, "")
        .trim()
        .to_string()
}
