//! Fixed addresses and markers of the USP store catalog.

use crate::utils::error::{LookupError, Result};
use url::Url;

const CATALOG_BASE: &str = "https://store.usp.org/product";
const CERTIFICATE_BASE: &str = "https://static.usp.org/pdf/EN/referenceStandards/certificates";

/// Element that only exists once the product attributes have rendered.
pub const DATA_READY_SELECTOR: &str = ".attr-value";

/// Container of the certificate lot table(s).
pub const CERTIFICATE_REGION_SELECTOR: &str = "div.usp-certificates";

pub fn catalog_url(code: &str) -> Result<Url> {
    let raw = format!("{}/{}", CATALOG_BASE, code);
    Url::parse(&raw).map_err(|e| LookupError::InvalidConfigValue {
        field: "code".to_string(),
        value: code.to_string(),
        reason: format!("Invalid catalog URL: {}", e),
    })
}

/// Certificate PDFs are keyed by product code and cleaned lot number.
pub fn certificate_url(code: &str, lot_number: &str) -> String {
    format!("{}/{}-{}.pdf", CERTIFICATE_BASE, code, lot_number)
}
