//! Minimal PDF 1.4 writer for text-only reports.
//!
//! One Helvetica font (WinAnsi encoding), one content stream per page, a
//! classic cross-reference table. Characters outside printable ASCII are
//! written as `?`.

use std::fmt::Write as _;

use crate::layout::{ReportLayout, TextAlign, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

const PT_PER_MM: f64 = 72.0 / 25.4;

/// Helvetica advance widths for bytes 32..=126, in 1/1000 em.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a..m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n..z
    334, 260, 334, 584, // {..~
];

pub fn mm_to_pt(mm: f64) -> f64 {
    mm * PT_PER_MM
}

/// Width of `text` set in Helvetica at `font_size` points, in points.
pub fn text_width_pt(text: &str, font_size: f64) -> f64 {
    let units: u32 = text
        .chars()
        .map(|c| {
            let b = printable_byte(c);
            u32::from(HELVETICA_WIDTHS[usize::from(b - 32)])
        })
        .sum();
    f64::from(units) * font_size / 1000.0
}

fn printable_byte(c: char) -> u8 {
    if (' '..='~').contains(&c) {
        c as u8
    } else {
        b'?'
    }
}

/// Escape a string for a PDF literal `( … )`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let b = printable_byte(c) as char;
        if matches!(b, '\\' | '(' | ')') {
            out.push('\\');
        }
        out.push(b);
    }
    out
}

fn content_stream(page: &crate::layout::PageLayout) -> String {
    let page_height_pt = mm_to_pt(PAGE_HEIGHT_MM);
    let mut out = String::new();
    for line in &page.lines {
        let mut x = mm_to_pt(line.x_mm);
        if line.align == TextAlign::Center {
            x -= text_width_pt(&line.text, line.font_size) / 2.0;
        }
        let y = page_height_pt - mm_to_pt(line.y_mm);
        let _ = writeln!(
            out,
            "BT /F1 {:.2} Tf {:.2} {:.2} Td ({}) Tj ET",
            line.font_size,
            x,
            y,
            escape_text(&line.text)
        );
    }
    out
}

/// Serialise `layout` into a complete PDF file.
pub fn encode_pdf(layout: &ReportLayout) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();

    buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let page_count = layout.pages.len();
    // 1 catalog, 2 page tree, 3 font, then (page, contents) pairs.
    let page_id = |i: usize| 4 + 2 * i;
    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", page_id(i))).collect();

    push_object(
        &mut buf,
        &mut offsets,
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
    );
    push_object(
        &mut buf,
        &mut offsets,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_count
        ),
    );
    push_object(
        &mut buf,
        &mut offsets,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    );

    let media_box = format!(
        "[0 0 {:.2} {:.2}]",
        mm_to_pt(PAGE_WIDTH_MM),
        mm_to_pt(PAGE_HEIGHT_MM)
    );
    for (i, page) in layout.pages.iter().enumerate() {
        push_object(
            &mut buf,
            &mut offsets,
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox {media_box} \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                page_id(i) + 1
            ),
        );
        let stream = content_stream(page);
        push_object(
            &mut buf,
            &mut offsets,
            format!(
                "<< /Length {} >>\nstream\n{}endstream",
                stream.len(),
                stream
            ),
        );
    }

    let xref_offset = buf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1);
    for offset in &offsets {
        let _ = writeln!(xref, "{offset:010} 00000 n ");
    }
    let _ = write!(
        xref,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        offsets.len() + 1,
        xref_offset
    );
    buf.extend_from_slice(xref.as_bytes());
    buf
}

/// Append the next numbered object. Object numbers follow push order.
fn push_object(buf: &mut Vec<u8>, offsets: &mut Vec<usize>, body: String) {
    offsets.push(buf.len());
    let id = offsets.len();
    buf.extend_from_slice(format!("{id} 0 obj\n{body}\nendobj\n").as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{PageLayout, TextLine};

    fn layout_with_pages(n: usize) -> ReportLayout {
        ReportLayout {
            pages: (0..n)
                .map(|i| PageLayout {
                    lines: vec![TextLine {
                        x_mm: 15.0,
                        y_mm: 15.0,
                        font_size: 12.0,
                        align: TextAlign::Left,
                        text: format!("Page {}", i + 1),
                    }],
                })
                .collect(),
        }
    }

    /// One char per byte so that string offsets equal file offsets.
    fn as_text(bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|&b| if b.is_ascii() { b as char } else { '?' })
            .collect()
    }

    #[test]
    fn test_header_and_trailer() {
        let bytes = encode_pdf(&layout_with_pages(1));
        assert!(bytes.starts_with(b"%PDF-1.4\n"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_page_count_in_tree() {
        let text = as_text(&encode_pdf(&layout_with_pages(3)));
        assert!(text.contains("/Kids [4 0 R 6 0 R 8 0 R] /Count 3"));
        assert!(text.contains("(Page 3) Tj"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let bytes = encode_pdf(&layout_with_pages(2));
        let text = as_text(&bytes);

        let start = text.rfind("startxref\n").unwrap() + "startxref\n".len();
        let xref_at: usize = text[start..].lines().next().unwrap().parse().unwrap();
        assert!(text[xref_at..].starts_with("xref\n"));

        let entries: Vec<&str> = text[xref_at..].lines().skip(3).take(7).collect();
        assert_eq!(entries.len(), 7);
        for (i, entry) in entries.iter().enumerate() {
            let offset: usize = entry[..10].parse().unwrap();
            let expected = format!("{} 0 obj", i + 1);
            assert!(
                text[offset..].starts_with(&expected),
                "entry {} points at {:?}",
                i + 1,
                &text[offset..offset + 12]
            );
        }
    }

    #[test]
    fn test_xref_entries_are_twenty_bytes() {
        let text = as_text(&encode_pdf(&layout_with_pages(1)));
        let xref_at = text.find("xref\n").unwrap();
        let body = &text[xref_at..];
        for line in body.split_inclusive('\n').skip(2).take(6) {
            assert_eq!(line.len(), 20, "{line:?}");
        }
    }

    #[test]
    fn test_stream_length_matches() {
        let text = as_text(&encode_pdf(&layout_with_pages(1)));
        let at = text.find("/Length ").unwrap() + "/Length ".len();
        let len: usize = text[at..].split_whitespace().next().unwrap().parse().unwrap();
        let stream_start = text.find("stream\n").unwrap() + "stream\n".len();
        let stream_end = text.find("endstream").unwrap();
        assert_eq!(stream_end - stream_start, len);
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a(b)c\\d"), "a\\(b\\)c\\\\d");
        assert_eq!(escape_text("Coût €5"), "Co?t ?5");
    }

    #[test]
    fn test_text_width() {
        // "AV" = 667 + 667 units.
        assert!((text_width_pt("AV", 10.0) - 13.34).abs() < 1e-9);
        assert_eq!(text_width_pt("", 16.0), 0.0);
        // Non-ASCII measures as '?'.
        assert_eq!(text_width_pt("é", 10.0), text_width_pt("?", 10.0));
    }

    #[test]
    fn test_centered_title_is_shifted_left() {
        let layout = ReportLayout {
            pages: vec![PageLayout {
                lines: vec![TextLine {
                    x_mm: 105.0,
                    y_mm: 15.0,
                    font_size: 16.0,
                    align: TextAlign::Center,
                    text: "STEPS".to_string(),
                }],
            }],
        };
        let text = as_text(&encode_pdf(&layout));
        let expected_x = mm_to_pt(105.0) - text_width_pt("STEPS", 16.0) / 2.0;
        assert!(text.contains(&format!("{:.2} {:.2} Td", expected_x, mm_to_pt(282.0))));
    }
}
