//! Headless Chrome session lifecycle: locate the binary, launch, tear down.

use crate::utils::error::{LookupError, Result};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Launch options the catalog site needs for server-side rendering: no GPU,
/// no sandbox, private /dev/shm, quiet logs. Headless is chromiumoxide's
/// default.
const CHROME_ARGS: [&str; 6] = [
    "--disable-gpu",
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-software-rasterizer",
    "--remote-debugging-port=9222",
    "--log-level=3",
];

const CHROME_CANDIDATE_PATHS: [&str; 7] = [
    "/usr/bin/google-chrome",
    "/usr/bin/google-chrome-stable",
    "/usr/bin/chromium",
    "/usr/bin/chromium-browser",
    "/snap/bin/chromium",
    "/opt/google/chrome/google-chrome",
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
];

const CHROME_COMMAND_NAMES: [&str; 4] = [
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
];

pub struct SessionProvider {
    chrome_binary: Option<PathBuf>,
}

impl SessionProvider {
    pub fn new(chrome_binary: Option<PathBuf>) -> Self {
        Self { chrome_binary }
    }

    fn locate_chrome(&self) -> Result<PathBuf> {
        if let Some(path) = &self.chrome_binary {
            if path.exists() {
                return Ok(path.clone());
            }
            return Err(LookupError::DriverUnavailable {
                detail: format!("configured binary does not exist: {}", path.display()),
            });
        }

        for candidate in CHROME_CANDIDATE_PATHS {
            let path = Path::new(candidate);
            if path.exists() {
                debug!("Found Chrome at {}", candidate);
                return Ok(path.to_path_buf());
            }
        }

        for name in CHROME_COMMAND_NAMES {
            if let Ok(output) = Command::new("which").arg(name).output() {
                if output.status.success() {
                    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
                    if !path.is_empty() {
                        debug!("Found Chrome in PATH: {}", path);
                        return Ok(PathBuf::from(path));
                    }
                }
            }
        }

        Err(LookupError::DriverUnavailable {
            detail: "no Chrome/Chromium installation found; pass --chrome-binary".to_string(),
        })
    }

    /// Launches a fresh headless browser. The binary must be locatable
    /// before anything is spawned. The caller owns the session and must
    /// release it with [`BrowserSession::close`].
    pub async fn acquire(&self) -> Result<BrowserSession> {
        let executable = self.locate_chrome()?;
        info!("Launching headless Chrome from {}", executable.display());

        let mut builder = BrowserConfig::builder().chrome_executable(executable);
        for arg in CHROME_ARGS {
            builder = builder.arg(arg);
        }
        let config = builder
            .build()
            .map_err(|message| LookupError::DriverLaunch { message })?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| LookupError::DriverLaunch {
                message: e.to_string(),
            })?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(BrowserSession {
            browser,
            handler_task,
        })
    }
}

pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Opens a tab on the given URL and starts loading it.
    pub async fn open(&self, url: &str) -> Result<Page> {
        let page = self.browser.new_page(url).await?;
        Ok(page)
    }

    /// Tears the browser down: close, reap the process, stop the CDP event
    /// task. Runs on every exit path of a lookup, so a parse failure never
    /// leaks a Chrome process.
    pub async fn close(mut self) {
        if let Err(error) = self.browser.close().await {
            debug!("Browser close failed: {}", error);
        }
        let _ = self.browser.wait().await;
        self.handler_task.abort();
    }
}
