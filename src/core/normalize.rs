//! Field normalization for scraped certificate rows.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Validity shown for a lot the catalog marks as currently distributed.
pub const CURRENTLY_VALID: &str = "Vigente";

/// Terminal fallback when no known date format matches. Not an error.
pub const INVALID_DATE: &str = "Data Inválida";

/// Source formats tried in priority order; first match wins.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d-%b-%Y"];

const OUTPUT_FORMAT: &str = "%d/%m/%Y";

static PAREN_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]*\)").expect("parenthetical pattern"));

/// Drops parenthetical annotations like "(previously 7654321)" from a lot
/// number, along with the whitespace that precedes them.
pub fn clean_lot_number(raw: &str) -> String {
    PAREN_SUFFIX.replace_all(raw, "").trim().to_string()
}

pub fn normalize_validity(raw: &str) -> String {
    if raw.contains("Current") {
        return CURRENTLY_VALID.to_string();
    }

    let trimmed = raw.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.format(OUTPUT_FORMAT).to_string();
        }
    }

    INVALID_DATE.to_string()
}
