/// Reads a picked file from disk into text
use encoding_rs::{Encoding, WINDOWS_1252};
use std::path::Path;

use crate::log_debug;
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub file_name: String,
    pub content: String,
}

pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

pub async fn load_file(path: &Path) -> AppResult<LoadedFile> {
    let bytes = tokio::fs::read(path).await?;
    log_debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(LoadedFile {
        file_name: file_name_of(path),
        content: decode_text(&bytes),
    })
}

/// BOM-marked encodings first, then UTF-8, then Windows-1252 (Excel's
/// default export on Windows)
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some((encoding, bom_length)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_length..]);
        return text.into_owned();
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}
