//! PDF generation via `printpdf`.
//!
//! Fixed A4 layout with the PDF builtin fonts: headings in Helvetica Bold,
//! body text in Helvetica, tables as fixed-width Courier columns. Content
//! flows down the page and continues on a fresh page when it runs out.

use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::error::ExportError;

/// Generate a PDF from rendered markdown-ish template output. Returns PDF
/// bytes. The markdown subset matches [`crate::docx::generate_docx`].
pub fn generate_pdf(rendered: &str, title: &str) -> Result<Vec<u8>, ExportError> {
    let (doc, page1, layer1) = PdfDocument::new(title, Mm(210.0), Mm(297.0), "Layer 1");
    let font = builtin(&doc, BuiltinFont::Helvetica)?;
    let bold = builtin(&doc, BuiltinFont::HelveticaBold)?;
    let courier = builtin(&doc, BuiltinFont::Courier)?;

    let mut layer = doc.get_page(page1).get_layer(layer1);
    let mut y = Mm(280.0);

    let lines: Vec<&str> = rendered.lines().collect();
    let mut i = 0;

    while i < lines.len() {
        let trimmed = lines[i].trim();

        if is_table_row(trimmed) {
            let start = i;
            while i < lines.len() && is_table_row(lines[i].trim()) {
                i += 1;
            }
            write_table(&doc, &mut layer, &mut y, &lines[start..i], &courier);
            continue;
        }

        if trimmed.is_empty() {
            y -= Mm(3.0);
        } else if let Some(text) = trimmed.strip_prefix("### ") {
            break_page_if_full(&doc, &mut layer, &mut y);
            layer.use_text(text, 11.0, Mm(20.0), y, &bold);
            y -= Mm(6.0);
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            break_page_if_full(&doc, &mut layer, &mut y);
            layer.use_text(text, 12.0, Mm(20.0), y, &bold);
            y -= Mm(7.0);
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            break_page_if_full(&doc, &mut layer, &mut y);
            layer.use_text(text, 15.0, Mm(20.0), y, &bold);
            y -= Mm(9.0);
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            let text = format!("\u{2022} {}", strip_bold_markers(text));
            for line in wrap_text(&text, 88) {
                break_page_if_full(&doc, &mut layer, &mut y);
                layer.use_text(&line, 10.0, Mm(25.0), y, &font);
                y -= Mm(4.5);
            }
        } else if trimmed == "---" || trimmed == "***" {
            let (p, l) = doc.add_page(Mm(210.0), Mm(297.0), "Layer 1");
            layer = doc.get_page(p).get_layer(l);
            y = Mm(280.0);
        } else {
            let text = strip_bold_markers(trimmed);
            for line in wrap_text(&text, 92) {
                break_page_if_full(&doc, &mut layer, &mut y);
                layer.use_text(&line, 10.0, Mm(20.0), y, &font);
                y -= Mm(4.5);
            }
        }

        i += 1;
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Pdf(format!("buffer: {e}")))
}

fn builtin(
    doc: &PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef, ExportError> {
    doc.add_builtin_font(font)
        .map_err(|e| ExportError::Pdf(format!("font: {e}")))
}

fn break_page_if_full(
    doc: &PdfDocumentReference,
    layer: &mut PdfLayerReference,
    y: &mut Mm,
) {
    if *y < Mm(20.0) {
        let (p, l) = doc.add_page(Mm(210.0), Mm(297.0), "Layer 1");
        *layer = doc.get_page(p).get_layer(l);
        *y = Mm(280.0);
    }
}

/// Lay a table run out as padded Courier columns, one text line per row.
/// The separator row is dropped; the header row keeps its place as the
/// first line.
fn write_table(
    doc: &PdfDocumentReference,
    layer: &mut PdfLayerReference,
    y: &mut Mm,
    lines: &[&str],
    courier: &IndirectFontRef,
) {
    let rows: Vec<Vec<&str>> = lines
        .iter()
        .map(|l| split_cells(l.trim()))
        .filter(|cells| !is_separator(cells))
        .collect();
    if rows.is_empty() {
        return;
    }

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &rows {
        for (c, cell) in row.iter().enumerate() {
            widths[c] = widths[c].max(cell.chars().count().min(28));
        }
    }

    for row in &rows {
        let mut text = String::new();
        for (c, cell) in row.iter().enumerate() {
            let cell: String = cell.chars().take(28).collect();
            text.push_str(&format!("{cell:<width$}  ", width = widths[c]));
        }
        break_page_if_full(doc, layer, y);
        layer.use_text(text.trim_end(), 8.0, Mm(25.0), *y, courier);
        *y -= Mm(4.0);
    }
    *y -= Mm(2.0);
}

fn is_table_row(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
}

fn split_cells(line: &str) -> Vec<&str> {
    line.trim_matches('|').split('|').map(str::trim).collect()
}

fn is_separator(cells: &[&str]) -> bool {
    !cells.is_empty() && cells.iter().all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-'))
}

/// The PDF writer renders text in a single weight, so inline bold markers
/// are removed rather than interpreted.
fn strip_bold_markers(text: &str) -> String {
    text.replace("**", "")
}

/// Greedy word wrap by character count. Words longer than `max` get a line
/// of their own.
fn wrap_text(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
