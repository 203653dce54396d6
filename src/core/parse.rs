//! Extracts certificate rows from the rendered catalog page markup.

use crate::core::catalog;
use crate::core::normalize;
use crate::domain::model::CertificateRecord;
use scraper::{Html, Selector};
use tracing::warn;

pub struct CatalogParser {
    region: Selector,
    row: Selector,
    cell: Selector,
}

impl CatalogParser {
    pub fn new() -> Self {
        Self {
            region: Selector::parse(catalog::CERTIFICATE_REGION_SELECTOR).unwrap(),
            row: Selector::parse("tbody tr").unwrap(),
            cell: Selector::parse("td").unwrap(),
        }
    }

    /// One record per table row, in page order. Column positions are fixed:
    /// cell 0 is the lot number, cell 2 the validity date. A row with fewer
    /// than three cells is skipped rather than failing the whole code.
    pub fn parse(&self, code: &str, html: &str) -> Vec<CertificateRecord> {
        let document = Html::parse_document(html);
        let mut records = Vec::new();

        for region in document.select(&self.region) {
            for row in region.select(&self.row) {
                let cells: Vec<String> = row
                    .select(&self.cell)
                    .map(|cell| cell.text().collect::<String>().trim().to_string())
                    .collect();

                if cells.len() < 3 {
                    warn!(
                        "Skipping certificate row with {} cells for {}",
                        cells.len(),
                        code
                    );
                    continue;
                }

                let lot_number = normalize::clean_lot_number(&cells[0]);
                let validity = normalize::normalize_validity(&cells[2]);
                let certificate_url = catalog::certificate_url(code, &lot_number);

                records.push(CertificateRecord {
                    product_code: code.to_string(),
                    lot_number,
                    validity,
                    certificate_url,
                });
            }
        }

        records
    }
}

impl Default for CatalogParser {
    fn default() -> Self {
        Self::new()
    }
}
