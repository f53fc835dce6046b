//! Plain-text extraction from uploaded resume documents.

use std::io::{Cursor, Read};
use std::panic;

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// Declared upload kind. `doc` and `docx` share the word-processor path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
}

impl DocumentKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim().to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "doc" => Some(DocumentKind::Doc),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    /// Kind from the final extension of an uploaded file name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::from_extension(ext)
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("PDF extractor panicked")]
    PdfPanicked,

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

const DOCX_BODY: &str = "word/document.xml";

pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => extract_pdf(bytes),
        DocumentKind::Doc | DocumentKind::Docx => extract_docx(bytes),
    }
}

/// Page text in page order.
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    // pdf-extract can panic on malformed input instead of returning an error.
    panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| ExtractError::PdfPanicked)?
        .map_err(|e| ExtractError::Pdf(e.to_string()))
}

/// Top-level body paragraphs in document order, each followed by a newline.
/// Table contents are not part of the paragraph stream and are skipped.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCX_BODY)?.read_to_string(&mut xml)?;
    paragraphs_from_document_xml(&xml)
}

fn paragraphs_from_document_xml(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut paragraph = String::new();
    let mut table_depth = 0usize;
    // Paragraphs nest through text boxes; only depth-1 runs belong to the body paragraph.
    let mut paragraph_depth = 0usize;
    let mut in_run_text = false;

    loop {
        let in_body_paragraph = table_depth == 0 && paragraph_depth == 1;
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:p" if table_depth == 0 => {
                    if paragraph_depth == 0 {
                        paragraph.clear();
                    }
                    paragraph_depth += 1;
                }
                b"w:t" => in_run_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if table_depth == 0 && paragraph_depth == 0 => text.push('\n'),
                b"w:tab" if in_body_paragraph => paragraph.push('\t'),
                b"w:br" | b"w:cr" if in_body_paragraph => paragraph.push('\n'),
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:p" if table_depth == 0 && paragraph_depth > 0 => {
                    paragraph_depth -= 1;
                    if paragraph_depth == 0 {
                        text.push_str(&paragraph);
                        text.push('\n');
                    }
                }
                b"w:t" => in_run_text = false,
                _ => {}
            },
            Event::Text(t) if in_run_text && in_body_paragraph => {
                paragraph.push_str(&t.unescape().map_err(quick_xml::Error::from)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    /// Minimal .docx archive whose body is `body_xml`.
    pub(crate) fn docx_fixture(body_xml: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body_xml}</w:body></w:document>"#
        );
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCX_BODY, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    pub(crate) fn paragraph(text: &str) -> String {
        format!(r#"<w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#)
    }

    #[test]
    fn test_kind_from_file_name() {
        assert_eq!(DocumentKind::from_file_name("cv.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_file_name("a.b.docx"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_file_name("old.doc"), Some(DocumentKind::Doc));
        assert_eq!(DocumentKind::from_file_name("notes.txt"), None);
        assert_eq!(DocumentKind::from_file_name("resume"), None);
    }

    #[test]
    fn test_docx_paragraphs_are_newline_separated() {
        let body = format!("{}{}", paragraph("Jane Doe"), paragraph("Rust &amp; Go"));
        let text = extract_text(&docx_fixture(&body), DocumentKind::Docx).unwrap();
        assert_eq!(text, "Jane Doe\nRust & Go\n");
    }

    #[test]
    fn test_docx_runs_join_within_paragraph() {
        let body = r#"<w:p><w:r><w:t>Senior</w:t></w:r><w:r><w:tab/><w:t>Engineer</w:t></w:r></w:p><w:p/>"#;
        let text = extract_text(&docx_fixture(body), DocumentKind::Docx).unwrap();
        assert_eq!(text, "Senior\tEngineer\n\n");
    }

    #[test]
    fn test_docx_tables_are_skipped() {
        let body = format!(
            "{}<w:tbl><w:tr><w:tc>{}</w:tc></w:tr></w:tbl>{}",
            paragraph("before"),
            paragraph("cell"),
            paragraph("after")
        );
        let text = extract_text(&docx_fixture(&body), DocumentKind::Docx).unwrap();
        assert_eq!(text, "before\nafter\n");
    }

    #[test]
    fn test_docx_text_box_keeps_outer_runs() {
        let body = concat!(
            r#"<w:p><w:r><w:t>Before</w:t></w:r>"#,
            r#"<w:r><w:drawing><w:txbxContent><w:p><w:r><w:t>Boxed</w:t></w:r></w:p></w:txbxContent></w:drawing></w:r>"#,
            r#"<w:r><w:t>After</w:t></w:r></w:p>"#,
        );
        let text = extract_text(&docx_fixture(body), DocumentKind::Docx).unwrap();
        assert_eq!(text, "BeforeAfter\n");
    }

    #[test]
    fn test_legacy_doc_bytes_fail() {
        let err = extract_text(b"\xD0\xCF\x11\xE0 not a zip", DocumentKind::Doc).unwrap_err();
        assert!(matches!(err, ExtractError::Archive(_)));
    }

    #[test]
    fn test_garbage_pdf_fails_without_panicking() {
        assert!(extract_text(b"definitely not a pdf", DocumentKind::Pdf).is_err());
    }
}
