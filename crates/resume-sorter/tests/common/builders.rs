//! Builders for creating test documents and model artifacts programmatically.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use lopdf::{dictionary, Document, Object, Stream};

/// Vocabulary covering categories 14 (nursing), 15 (Java) and 20 (Python),
/// plus "chef" for id 99, which has no category name.
pub const VECTORIZER_JSON: &str = r#"{
    "vocabulary": {
        "python": 0, "django": 1,
        "java": 2, "spring": 3,
        "nurse": 4, "patient": 5,
        "chef": 6
    },
    "idf": [1.2, 1.8, 1.2, 1.8, 1.5, 1.5, 2.0],
    "sublinear_tf": true
}"#;

pub const CLASSIFIER_JSON: &str = r#"{
    "classes": [14, 15, 20, 99],
    "coef": [
        [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0],
        [0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        [1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]
    ],
    "intercept": [0.0, 0.0, 0.0, 0.0]
}"#;

/// Builds a PDF with one Courier text line per page.
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.new_object_id();

    doc.objects.insert(
        font_id,
        Object::Dictionary(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        }),
    );
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for line in pages {
        let content = format!("BT /F1 12 Tf 50 700 Td ({}) Tj ET", line);
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => resources_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("Failed to serialize PDF");
    bytes
}

/// Builds a minimal DOCX archive with one paragraph per entry.
pub fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let mut buffer = Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut buffer);
        writer
            .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
            .expect("Failed to start DOCX entry");
        writer
            .write_all(xml.as_bytes())
            .expect("Failed to write DOCX entry");
        writer.finish().expect("Failed to finish DOCX archive");
    }
    buffer.into_inner()
}
