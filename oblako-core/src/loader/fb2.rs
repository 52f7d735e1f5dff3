//! FictionBook 2 documents.

use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::bytes::Regex;

use crate::error::{CloudError, Result};

static DECLARED_ENCODING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*<\?xml[^>]*?\bencoding\s*=\s*["']([A-Za-z0-9._:-]+)["']"#)
        .expect("valid regex")
});

/// Elements whose end separates words in the extracted text.
const BLOCK_ELEMENTS: &[&[u8]] = &[
    b"p",
    b"v",
    b"title",
    b"subtitle",
    b"epigraph",
    b"stanza",
    b"poem",
    b"cite",
    b"text-author",
    b"empty-line",
    b"table",
    b"tr",
    b"td",
    b"th",
];

pub(super) fn extract(path: &Path, bytes: &[u8]) -> Result<String> {
    let decode_error = |reason: String| CloudError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    let xml = decode(bytes).map_err(decode_error)?;
    let sections = sections(&xml).map_err(decode_error)?;
    let text = sections.join(" ");
    if text.trim().is_empty() {
        return Err(CloudError::EmptyContent {
            path: path.to_path_buf(),
        });
    }
    Ok(text)
}

/// Decode using a byte order mark or the encoding named in the XML
/// declaration, UTF-8 when neither is present.
fn decode(bytes: &[u8]) -> std::result::Result<String, String> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (declared_encoding(bytes)?, bytes),
    };

    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        return Err(format!("invalid {} byte sequence", encoding.name()));
    }
    Ok(text.into_owned())
}

fn declared_encoding(bytes: &[u8]) -> std::result::Result<&'static Encoding, String> {
    let prolog = &bytes[..bytes.len().min(256)];
    let Some(label) = DECLARED_ENCODING
        .captures(prolog)
        .and_then(|captures| captures.get(1))
    else {
        return Ok(UTF_8);
    };
    Encoding::for_label(label.as_bytes()).ok_or_else(|| {
        format!(
            "unknown encoding {:?} in xml declaration",
            String::from_utf8_lossy(label.as_bytes())
        )
    })
}

/// Text of every `section` in document order, nested ones included. A
/// section's text covers everything inside it, so the text of a section
/// nested `d` levels deep appears `d + 1` times.
fn sections(xml: &str) -> std::result::Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    let mut sections: Vec<String> = Vec::new();
    // indices into `sections` of the sections currently open
    let mut open: Vec<usize> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"section" => {
                open.push(sections.len());
                sections.push(String::new());
            }
            Ok(Event::End(e)) if e.local_name().as_ref() == b"section" => {
                open.pop();
            }
            Ok(Event::End(e)) => {
                end_block(&mut sections, &open, e.local_name().as_ref());
            }
            Ok(Event::Empty(e)) => {
                end_block(&mut sections, &open, e.local_name().as_ref());
            }
            Ok(Event::Text(e)) if !open.is_empty() => {
                let text = e.unescape().map_err(|err| err.to_string())?;
                append(&mut sections, &open, &text);
            }
            Ok(Event::CData(e)) if !open.is_empty() => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                append(&mut sections, &open, &text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(format!(
                    "malformed xml at byte {}: {err}",
                    reader.buffer_position()
                ))
            }
        }
    }

    Ok(sections
        .into_iter()
        .map(|section| section.trim().to_string())
        .collect())
}

fn append(sections: &mut [String], open: &[usize], text: &str) {
    for &index in open {
        sections[index].push_str(text);
    }
}

fn end_block(sections: &mut [String], open: &[usize], name: &[u8]) {
    if !BLOCK_ELEMENTS.contains(&name) {
        return;
    }
    for &index in open {
        if !sections[index].ends_with(' ') {
            sections[index].push(' ');
        }
    }
}
