//! Per-code catalog scraping: navigate, wait for render, parse.

use crate::browser::session::{BrowserSession, SessionProvider};
use crate::core::catalog;
use crate::core::parse::CatalogParser;
use crate::domain::model::CertificateRecord;
use crate::domain::ports::{CertificateSource, ConfigProvider};
use crate::utils::error::{LookupError, Result};
use async_trait::async_trait;
use chromiumoxide::Page;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct CatalogExtractor<C: ConfigProvider> {
    provider: SessionProvider,
    config: C,
    parser: CatalogParser,
}

impl<C: ConfigProvider> CatalogExtractor<C> {
    pub fn new(config: C) -> Self {
        let provider = SessionProvider::new(config.chrome_binary().map(Path::to_path_buf));
        Self {
            provider,
            config,
            parser: CatalogParser::new(),
        }
    }

    async fn fetch_with_session(
        &self,
        session: &BrowserSession,
        code: &str,
    ) -> Result<Vec<CertificateRecord>> {
        let url = catalog::catalog_url(code)?;
        debug!("Navigating to {}", url);
        let page = session.open(url.as_str()).await?;
        page.wait_for_navigation().await?;

        self.wait_for_data_region(&page, url.as_str()).await?;

        let html = page.content().await?;
        Ok(self.parser.parse(code, &html))
    }

    /// The catalog builds the certificate table client side; poll until the
    /// attribute region shows up or the configured deadline passes.
    async fn wait_for_data_region(&self, page: &Page, url: &str) -> Result<()> {
        let timeout = self.config.wait_timeout();
        let deadline = Instant::now() + timeout;

        loop {
            if page
                .find_element(catalog::DATA_READY_SELECTOR)
                .await
                .is_ok()
            {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(LookupError::NavigationTimeout {
                    url: url.to_string(),
                    secs: timeout.as_secs(),
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> CertificateSource for CatalogExtractor<C> {
    /// One fresh session per code, released on every path. Navigation and
    /// wait faults surface as this code's error; the page markup itself is
    /// parsed tolerantly.
    async fn fetch_certificates(&self, code: &str) -> Result<Vec<CertificateRecord>> {
        let session = self.provider.acquire().await?;
        let outcome = self.fetch_with_session(&session, code).await;
        session.close().await;
        outcome
    }
}
