use crate::domain::model::{BatchReport, CodeFailure};
use crate::domain::ports::CertificateSource;
use tracing::{info, warn};

/// Drives one batch of lookups, one code at a time. A failing code is
/// reported and skipped; it never aborts the rest of the batch.
pub struct BatchRunner<S: CertificateSource> {
    source: S,
}

impl<S: CertificateSource> BatchRunner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn run(&self, codes: &[String]) -> BatchReport {
        let mut report = BatchReport::default();

        for code in codes {
            info!("Looking up certificates for {}", code);
            match self.source.fetch_certificates(code).await {
                Ok(records) => {
                    info!("Found {} certificate rows for {}", records.len(), code);
                    report.records.extend(records);
                }
                Err(error) => {
                    warn!("Lookup failed for {}: {}", code, error);
                    report.failures.push(CodeFailure {
                        code: code.clone(),
                        error,
                    });
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CertificateRecord;
    use crate::utils::error::{LookupError, Result};
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct ScriptedSource {
        pages: HashMap<String, Vec<CertificateRecord>>,
        failing: Vec<String>,
    }

    impl ScriptedSource {
        fn new() -> Self {
            Self {
                pages: HashMap::new(),
                failing: Vec::new(),
            }
        }

        fn with_page(mut self, code: &str, lots: &[&str]) -> Self {
            let records = lots
                .iter()
                .map(|lot| CertificateRecord {
                    product_code: code.to_string(),
                    lot_number: lot.to_string(),
                    validity: "Vigente".to_string(),
                    certificate_url: format!(
                        "https://static.usp.org/pdf/EN/referenceStandards/certificates/{}-{}.pdf",
                        code, lot
                    ),
                })
                .collect();
            self.pages.insert(code.to_string(), records);
            self
        }

        fn with_failure(mut self, code: &str) -> Self {
            self.failing.push(code.to_string());
            self
        }
    }

    #[async_trait]
    impl CertificateSource for ScriptedSource {
        async fn fetch_certificates(&self, code: &str) -> Result<Vec<CertificateRecord>> {
            if self.failing.iter().any(|c| c == code) {
                return Err(LookupError::NavigationTimeout {
                    url: format!("https://store.usp.org/product/{}", code),
                    secs: 20,
                });
            }
            Ok(self.pages.get(code).cloned().unwrap_or_default())
        }
    }

    fn codes(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn test_failing_code_does_not_abort_batch() {
        let source = ScriptedSource::new()
            .with_failure("A")
            .with_page("B", &["R123A0"]);
        let runner = BatchRunner::new(source);

        let report = runner.run(&codes(&["A", "B"])).await;

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].product_code, "B");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].code, "A");
        assert!(matches!(
            report.failures[0].error,
            LookupError::NavigationTimeout { .. }
        ));
    }

    #[tokio::test]
    async fn test_records_accumulate_in_submission_order() {
        let source = ScriptedSource::new()
            .with_page("B", &["B1", "B2"])
            .with_page("A", &["A1"]);
        let runner = BatchRunner::new(source);

        let report = runner.run(&codes(&["B", "A"])).await;

        let lots: Vec<&str> = report
            .records
            .iter()
            .map(|r| r.lot_number.as_str())
            .collect();
        assert_eq!(lots, vec!["B1", "B2", "A1"]);
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_code_yields_no_records_and_no_failure() {
        let source = ScriptedSource::new();
        let runner = BatchRunner::new(source);

        let report = runner.run(&codes(&["missing"])).await;

        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let runner = BatchRunner::new(ScriptedSource::new());
        let report = runner.run(&[]).await;
        assert!(report.is_empty());
    }
}
