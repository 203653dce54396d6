//! Collects the product codes to look up, either typed as a comma-separated
//! list or taken from the first column of a tabular file.

use crate::utils::error::Result;
use std::path::Path;

/// Splits free-text input on commas. Codes are trimmed and empties discarded;
/// no further validation happens here, a malformed code simply finds nothing.
pub fn split_code_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads codes from the first column of a CSV file. The header row is
/// skipped, matching how the uploaded sheet is read in the UI flow.
pub fn read_codes_file(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut codes = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(first) = record.get(0) {
            let code = first.trim();
            if !code.is_empty() {
                codes.push(code.to_string());
            }
        }
    }
    Ok(codes)
}

/// File codes come first, then the typed ones, preserving entry order.
pub fn collect_codes(text: &str, file: Option<&Path>) -> Result<Vec<String>> {
    let mut codes = Vec::new();
    if let Some(path) = file {
        codes.extend(read_codes_file(path)?);
    }
    codes.extend(split_code_list(text));
    Ok(codes)
}
