//! Plain text with automatic encoding detection.

use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

use crate::error::{CloudError, Result};

pub(super) fn decode(path: &Path, bytes: &[u8]) -> Result<String> {
    let (text, encoding) = decode_text(bytes);
    debug!(path = %path.display(), encoding = encoding.name(), "plain text decoded");
    if text.trim().is_empty() {
        return Err(CloudError::Decode {
            path: path.to_path_buf(),
            reason: format!("no text could be recovered ({} bytes)", bytes.len()),
        });
    }
    Ok(text)
}

/// Decode bytes of unknown encoding.
///
/// A byte order mark wins, then strict UTF-8, then a statistical guess
/// among legacy encodings (windows-1251, KOI8, IBM866, ...). Malformed
/// sequences in the guessed encoding become U+FFFD.
pub fn decode_text(bytes: &[u8]) -> (String, &'static Encoding) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (text.into_owned(), encoding);
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.to_owned(), UTF_8);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, false);
    let (text, _) = encoding.decode_without_bom_handling(bytes);
    (text.into_owned(), encoding)
}
