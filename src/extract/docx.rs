use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::errors::{AppError, AppResult};

/// Decode an Office Open XML document by pulling the text runs out of
/// `word/document.xml`. Paragraph ends become newlines, tabs become tabs;
/// all other markup (styling, tables, headers) is dropped.
pub fn decode(bytes: &[u8]) -> AppResult<String> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| docx_parse_failed(&e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| docx_parse_failed(&e.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| docx_parse_failed(&e.to_string()))?;

    extract_document_text(&xml)
}

fn docx_parse_failed(detail: &str) -> AppError {
    AppError::ExtractionFailed(format!("DOCX parse failed: {}", detail))
}

fn extract_document_text(xml: &str) -> AppResult<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == b"w:p" => text.push('\n'),
            Ok(Event::Text(ref t)) => {
                let piece = t
                    .unescape()
                    .map_err(|e| docx_parse_failed(&e.to_string()))?;
                text.push_str(&piece);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(docx_parse_failed(&e.to_string())),
            Ok(_) => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn make_test_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();

        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
            .collect();
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
<w:body>{}</w:body></w:document>",
            body
        );

        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn extracts_paragraph_text() {
        let docx = make_test_docx(&["First paragraph about cells.", "Second paragraph."]);
        let text = decode(&docx).unwrap();

        assert!(text.contains("First paragraph about cells."));
        assert!(text.contains("Second paragraph."));
        // Paragraph boundaries survive as newlines
        assert!(text.contains("cells.\n"));
    }

    #[test]
    fn unescapes_xml_entities() {
        let docx = make_test_docx(&["Pressure &amp; volume, T &lt; 300K"]);
        let text = decode(&docx).unwrap();
        assert!(text.contains("Pressure & volume"));
        assert!(text.contains("T < 300K"));
    }

    #[test]
    fn non_zip_bytes_report_parse_failure() {
        let result = decode(b"this is not a zip archive");
        match result {
            Err(AppError::ExtractionFailed(msg)) => assert!(msg.contains("DOCX parse failed")),
            other => panic!("expected ExtractionFailed, got {:?}", other),
        }
    }

    #[test]
    fn zip_without_document_xml_reports_parse_failure() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("unrelated.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hello").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(matches!(decode(&bytes), Err(AppError::ExtractionFailed(_))));
    }
}
