use crate::domain::model::CertificateRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// Produces the certificate rows for one product code. The browser-backed
/// implementation lives in `browser::extractor`; tests substitute their own.
#[async_trait]
pub trait CertificateSource: Send + Sync {
    async fn fetch_certificates(&self, code: &str) -> Result<Vec<CertificateRecord>>;
}

pub trait ConfigProvider: Send + Sync {
    fn wait_timeout(&self) -> Duration;
    fn output_path(&self) -> &str;
    fn chrome_binary(&self) -> Option<&Path>;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
