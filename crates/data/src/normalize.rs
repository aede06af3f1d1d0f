//! Text normalization shared by the CSV readers.

use std::path::Path;

use csv::StringRecord;

use crate::error::DataError;

/// Reads a file and decodes it as UTF-8, falling back to Latin-1.
pub fn read_text(path: &Path) -> Result<String, DataError> {
    let bytes = std::fs::read(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_text(bytes))
}

/// Decodes bytes as UTF-8, or as Latin-1 when they are not valid UTF-8.
///
/// A leading byte-order mark is dropped.
#[must_use]
pub fn decode_text(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        // Latin-1 maps every byte to the code point of the same value.
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    };
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Normalizes a column header: trimmed, lower-cased, accents removed,
/// spaces and dashes turned into `_`.
///
/// `Vida Útil` and `vida_util` both become `vida_util`.
#[must_use]
pub fn normalize_header(header: &str) -> String {
    header
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            c if c.is_whitespace() || c == '-' => '_',
            c => c,
        })
        .collect()
}

/// Picks `;` when the header line has more semicolons than commas.
#[must_use]
pub fn detect_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or_default();
    let commas = header.matches(',').count();
    let semicolons = header.matches(';').count();
    if semicolons > commas { b';' } else { b',' }
}

/// Index of the first header matching one of `aliases` after normalization.
#[must_use]
pub fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| headers.iter().position(|h| h == alias))
}

/// Normalized form of every header in a record.
#[must_use]
pub fn normalized_headers(record: &StringRecord) -> Vec<String> {
    record.iter().map(normalize_header).collect()
}

/// Builds a CSV reader over `text` with the detected delimiter.
pub fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .delimiter(detect_delimiter(text))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes())
}
