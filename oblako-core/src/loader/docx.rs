//! Office Open XML word-processing documents.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::{CloudError, Result};

const DOCUMENT_PART: &str = "word/document.xml";

pub(super) fn extract(path: &Path, bytes: &[u8]) -> Result<String> {
    let decode_error = |reason: String| CloudError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|err| decode_error(format!("not a docx archive: {err}")))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|err| decode_error(format!("{DOCUMENT_PART}: {err}")))?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|err| decode_error(format!("{DOCUMENT_PART}: {err}")))?;

    let paragraphs = paragraphs(&xml).map_err(decode_error)?;
    let text = paragraphs.join(" ");
    if text.trim().is_empty() {
        return Err(CloudError::EmptyContent {
            path: path.to_path_buf(),
        });
    }
    Ok(text)
}

/// Text of every `w:p` in document order, including table cells.
fn paragraphs(xml: &str) -> std::result::Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    // Text boxes nest paragraphs inside a run; they merge into the outer one.
    let mut depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => {
                    if depth == 0 {
                        current.clear();
                    }
                    depth += 1;
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Empty(e)) if depth > 0 => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:p" => paragraphs.push(String::new()),
            Ok(Event::Text(e)) if in_text && depth > 0 => {
                let text = e.unescape().map_err(|err| err.to_string())?;
                current.push_str(&text);
            }
            Ok(Event::CData(e)) if in_text && depth > 0 => {
                current.push_str(&String::from_utf8_lossy(&e.into_inner()));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {err}",
                    reader.buffer_position()
                ))
            }
        }
    }

    Ok(paragraphs)
}
