//! Rich-text markup to plain text.
//!
//! The conversion is a fixed sequence of global find-and-replace passes, not
//! a parser. Each structural pattern matches one opening tag, the shortest run
//! of text up to a closing tag, and does not recurse, so nested tags of the
//! same kind keep their inner tags until the final strip pass removes them.
//! Text survives; structure inside the nesting does not.

use once_cell::sync::Lazy;
use regex::Regex;

/// Glyph that opens every list item in normalized text.
pub const BULLET: char = '•';

/// Entity spellings decoded before any tag handling, in this order.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h[1-6][^>]*>(.*?)</h[1-6]>").unwrap());
static PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<p[^>]*>(.*?)</p>").unwrap());
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<(strong|b)[^>]*>(.*?)</(strong|b)>").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<(em|i)[^>]*>(.*?)</(em|i)>").unwrap());
static LIST_CONTAINER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<ul[^>]*>|</ul>|<ol[^>]*>|</ol>").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<li[^>]*>(.*?)</li>").unwrap());
static DIV: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<div[^>]*>(.*?)</div>").unwrap());
static SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<span[^>]*>(.*?)</span>").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());
static HORIZONTAL_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

/// Convert editor markup into plain text with paragraph, list, and heading
/// structure kept as line breaks and bullets.
///
/// Never fails: unknown tags are dropped, malformed markup degrades to its
/// text. The result has no tags, no run of more than one blank line, and no
/// leading or trailing whitespace.
///
/// ```
/// use studydesk_pdf::markup::normalize;
///
/// assert_eq!(normalize("<p>Hello <strong>World</strong></p>"), "Hello World");
/// assert_eq!(normalize("a &amp; b &lt;3"), "a & b <3");
/// ```
pub fn normalize(markup: &str) -> String {
    if markup.is_empty() {
        return String::new();
    }

    let mut text = decode_entities(markup);

    text = HEADING.replace_all(&text, "\n\n${1}\n").into_owned();
    text = PARAGRAPH.replace_all(&text, "${1}\n\n").into_owned();
    text = LINE_BREAK.replace_all(&text, "\n").into_owned();
    text = BOLD.replace_all(&text, "${2}").into_owned();
    text = ITALIC.replace_all(&text, "${2}").into_owned();
    text = LIST_CONTAINER.replace_all(&text, "\n").into_owned();
    text = LIST_ITEM
        .replace_all(&text, format!("{} ${{1}}\n", BULLET).as_str())
        .into_owned();
    text = DIV.replace_all(&text, "${1}\n").into_owned();
    text = SPAN.replace_all(&text, "${1}").into_owned();

    text = ANY_TAG.replace_all(&text, "").into_owned();

    text = BLANK_RUN.replace_all(&text, "\n\n").into_owned();
    let text = text.trim();
    HORIZONTAL_SPACE.replace_all(text, " ").into_owned()
}

/// Decode the fixed entity set. Numeric references other than `&#39;` are
/// left untouched.
pub fn decode_entities(markup: &str) -> String {
    ENTITIES
        .iter()
        .fold(markup.to_string(), |acc, (entity, replacement)| {
            acc.replace(entity, replacement)
        })
}
