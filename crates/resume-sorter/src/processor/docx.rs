use std::io::{Cursor, Read, Seek};

use quick_xml::events::{BytesRef, Event};
use quick_xml::Reader;

use crate::error::ProcessError;
use crate::processor::{DocumentFormat, DocumentProcessor};

/// Extracts the body paragraphs of a Word document, one per line.
pub struct DocxProcessor;

impl DocxProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentProcessor for DocxProcessor {
    fn extract_text(&self, content: &[u8]) -> Result<String, ProcessError> {
        let _span = tracing::info_span!("processor.docx").entered();

        let mut archive = zip::ZipArchive::new(Cursor::new(content))
            .map_err(|e| ProcessError::DocxProcessing(format!("Failed to open DOCX: {}", e)))?;

        let paragraphs = extract_docx_paragraphs(&mut archive)?;
        Ok(paragraphs.join("\n"))
    }

    fn supports(&self, format: DocumentFormat) -> bool {
        matches!(format, DocumentFormat::Docx)
    }
}

fn extract_docx_paragraphs<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
) -> Result<Vec<String>, ProcessError> {
    let mut document_xml = archive
        .by_name("word/document.xml")
        .map_err(|e| ProcessError::DocxProcessing(format!("Failed to find document.xml: {}", e)))?;

    let mut xml_content = String::new();
    document_xml
        .read_to_string(&mut xml_content)
        .map_err(|e| ProcessError::DocxProcessing(format!("Failed to read document.xml: {}", e)))?;

    parse_body_paragraphs(&xml_content)
}

/// Collects the text of each `w:p` that is a direct child of `w:body`.
///
/// Only the runs of such a paragraph contribute text: `w:t` content, with
/// `w:tab` as `\t` and `w:br`/`w:cr` as `\n`. Tables, content controls, text
/// boxes and paragraph properties are skipped.
fn parse_body_paragraphs(xml: &str) -> Result<Vec<String>, ProcessError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut depth = 0usize;
    let mut body_depth: Option<usize> = None;
    let mut paragraph: Option<(usize, String)> = None;
    let mut hyperlink_depth: Option<usize> = None;
    let mut run_depth: Option<usize> = None;
    let mut in_text_element = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                match e.local_name().as_ref() {
                    b"body" if body_depth.is_none() => body_depth = Some(depth),
                    b"p" if is_child_of(body_depth, depth) && paragraph.is_none() => {
                        paragraph = Some((depth, String::new()));
                    }
                    b"hyperlink" if is_child_of(paragraph.as_ref().map(|p| p.0), depth) => {
                        hyperlink_depth = Some(depth);
                    }
                    b"r" if is_child_of(paragraph.as_ref().map(|p| p.0), depth)
                        || is_child_of(hyperlink_depth, depth) =>
                    {
                        run_depth = Some(depth);
                    }
                    b"t" if is_child_of(run_depth, depth) => in_text_element = true,
                    name if is_child_of(run_depth, depth) => {
                        push_run_control(&mut paragraph, name);
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                let element_depth = depth + 1;
                match e.local_name().as_ref() {
                    b"p" if is_child_of(body_depth, element_depth) => {
                        paragraphs.push(String::new());
                    }
                    name if is_child_of(run_depth, element_depth) => {
                        push_run_control(&mut paragraph, name);
                    }
                    _ => {}
                }
            }
            Ok(Event::End(ref e)) => {
                match e.local_name().as_ref() {
                    b"t" if is_child_of(run_depth, depth) => in_text_element = false,
                    b"r" if run_depth == Some(depth) => run_depth = None,
                    b"hyperlink" if hyperlink_depth == Some(depth) => hyperlink_depth = None,
                    b"p" if paragraph.as_ref().map(|p| p.0) == Some(depth) => {
                        if let Some((_, text)) = paragraph.take() {
                            paragraphs.push(text);
                        }
                    }
                    b"body" if body_depth == Some(depth) => body_depth = None,
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Text(e)) => {
                if in_text_element {
                    let decoded = e.decode().map_err(|err| {
                        ProcessError::DocxProcessing(format!("Failed to decode text: {}", err))
                    })?;
                    push_to(&mut paragraph, &decoded);
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if in_text_element {
                    if let Some(resolved) = resolve_reference(&e) {
                        push_to(&mut paragraph, &resolved);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ProcessError::DocxProcessing(format!(
                    "XML parsing error: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// True when an element at `depth` sits directly inside the element opened at
/// `parent`.
fn is_child_of(parent: Option<usize>, depth: usize) -> bool {
    parent.is_some_and(|parent| parent + 1 == depth)
}

fn push_run_control(paragraph: &mut Option<(usize, String)>, name: &[u8]) {
    match name {
        b"tab" => push_to(paragraph, "\t"),
        b"br" | b"cr" => push_to(paragraph, "\n"),
        _ => {}
    }
}

fn push_to(paragraph: &mut Option<(usize, String)>, text: &str) {
    if let Some((_, current)) = paragraph.as_mut() {
        current.push_str(text);
    }
}

fn resolve_reference(reference: &BytesRef<'_>) -> Option<String> {
    if let Ok(Some(ch)) = reference.resolve_char_ref() {
        return Some(ch.to_string());
    }
    let name = reference.decode().ok()?;
    quick_xml::escape::resolve_predefined_entity(&name).map(str::to_string)
}
