use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Chrome binary not found: {detail}")]
    DriverUnavailable { detail: String },

    #[error("Browser failed to launch: {message}")]
    DriverLaunch { message: String },

    #[error("Timed out after {secs}s waiting for certificate data at {url}")]
    NavigationTimeout { url: String, secs: u64 },

    #[error("Browser protocol error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, LookupError>;
