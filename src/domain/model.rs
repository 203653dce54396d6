use crate::utils::error::LookupError;
use serde::{Deserialize, Serialize};

/// One certificate table row, already normalized. The serde names double as
/// the column headers of the exported table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    #[serde(rename = "Código do Produto")]
    pub product_code: String,
    #[serde(rename = "Lote")]
    pub lot_number: String,
    #[serde(rename = "Validade")]
    pub validity: String,
    #[serde(rename = "Certificado")]
    pub certificate_url: String,
}

/// A code whose lookup failed. Failures are collected next to, never mixed
/// into, the successful records.
#[derive(Debug)]
pub struct CodeFailure {
    pub code: String,
    pub error: LookupError,
}

/// Outcome of one batch: records in submission order then page row order,
/// plus the per-code failures.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub records: Vec<CertificateRecord>,
    pub failures: Vec<CodeFailure>,
}

impl BatchReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.failures.is_empty()
    }
}

/// Completed batches, owned by whoever drives the searches. Append-only;
/// a report is recorded only after its batch has fully finished.
#[derive(Debug, Default)]
pub struct SearchHistory {
    batches: Vec<BatchReport>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: BatchReport) {
        self.batches.push(report);
    }

    pub fn latest(&self) -> Option<&BatchReport> {
        self.batches.last()
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BatchReport> {
        self.batches.iter()
    }
}
