//! Serialize a laid-out [`Document`] to PDF bytes.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::document::{Document, Mark, Rule, TextRun};
use crate::metrics::Face;

const PRODUCER: &str = "studydesk";

/// Encode every page of `doc` as a PDF file.
///
/// Fonts are the base-14 Helvetica faces with the standard WinAnsi encoding,
/// so nothing is embedded. Each page gets a single content stream.
pub fn encode(doc: &Document) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();
    let info_id = alloc.bump();
    let font_ids: Vec<(Face, Ref)> = Face::all().into_iter().map(|f| (f, alloc.bump())).collect();

    let page_ids: Vec<(Ref, Ref)> = doc
        .pages
        .iter()
        .map(|_| (alloc.bump(), alloc.bump()))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(page_ids.len() as i32);
    pdf.document_info(info_id).producer(TextStr(PRODUCER));

    for (face, id) in &font_ids {
        pdf.type1_font(*id)
            .base_font(Name(face.base_font()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    for (page, (page_id, content_id)) in doc.pages.iter().zip(&page_ids) {
        {
            let mut writer = pdf.page(*page_id);
            writer
                .media_box(Rect::new(0.0, 0.0, page.size.width, page.size.height))
                .parent(page_tree_id)
                .contents(*content_id);
            let mut resources = writer.resources();
            let mut fonts = resources.fonts();
            for (face, id) in &font_ids {
                fonts.pair(Name(face.resource_name()), *id);
            }
            fonts.finish();
            resources.finish();
            writer.finish();
        }

        let mut content = Content::new();
        for mark in &page.marks {
            match mark {
                Mark::Text(run) => write_text(&mut content, run),
                Mark::Rule(rule) => write_rule(&mut content, rule),
            }
        }
        pdf.stream(*content_id, &content.finish());
    }

    pdf.finish()
}

fn write_text(content: &mut Content, run: &TextRun) {
    let encoded = to_win_ansi(&run.text);
    content.set_fill_rgb(run.color.r, run.color.g, run.color.b);
    content.begin_text();
    content.set_font(Name(run.face.resource_name()), run.size);
    content.set_word_spacing(run.word_spacing);
    content.next_line(run.x, run.baseline);
    content.show(Str(&encoded));
    content.end_text();
}

fn write_rule(content: &mut Content, rule: &Rule) {
    content.set_stroke_rgb(rule.color.r, rule.color.g, rule.color.b);
    content.set_line_width(rule.width);
    content.move_to(rule.from.0, rule.from.1);
    content.line_to(rule.to.0, rule.to.1);
    content.stroke();
}

/// Map text to single-byte WinAnsi codes. Characters with no WinAnsi code
/// become `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Color, Page, PageSize};

    fn run(text: &str) -> Mark {
        Mark::Text(TextRun {
            x: 50.0,
            baseline: 700.0,
            face: Face::Helvetica,
            size: 12.0,
            color: Color::gray(0x33),
            word_spacing: 0.0,
            text: text.to_string(),
        })
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_win_ansi_mapping() {
        assert_eq!(to_win_ansi("Ab 1"), b"Ab 1".to_vec());
        assert_eq!(to_win_ansi("•"), vec![0x95]);
        assert_eq!(to_win_ansi("é"), vec![0xe9]);
        assert_eq!(to_win_ansi("日本"), b"??".to_vec());
        assert_eq!(to_win_ansi("\t"), b"?".to_vec());
    }

    #[test]
    fn test_output_is_pdf() {
        let mut page = Page::new(PageSize::A4);
        page.marks.push(run("Hello"));
        let bytes = encode(&Document { pages: vec![page] });

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"/Helvetica"));
        assert!(contains(&bytes, b"/Helvetica-Bold"));
        assert!(contains(&bytes, b"/WinAnsiEncoding"));
        assert!(contains(&bytes, b"(Hello) Tj"));
    }

    #[test]
    fn test_page_count_in_tree() {
        let pages = (0..3).map(|_| Page::new(PageSize::LETTER)).collect();
        let bytes = encode(&Document { pages });
        assert!(contains(&bytes, b"/Count 3"));
        assert!(contains(&bytes, b"/MediaBox [0 0 612 792]"));
    }

    #[test]
    fn test_rule_is_stroked() {
        let mut page = Page::new(PageSize::A4);
        page.marks.push(Mark::Rule(Rule {
            from: (50.0, 700.0),
            to: (545.0, 700.0),
            width: 1.0,
            color: Color::BLACK,
        }));
        let bytes = encode(&Document { pages: vec![page] });
        assert!(contains(&bytes, b"50 700 m"));
        assert!(contains(&bytes, b"545 700 l"));
    }
}
