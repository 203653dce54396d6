pub mod browser;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::browser::{CatalogExtractor, SessionProvider};
pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::batch::BatchRunner;
pub use crate::domain::model::{BatchReport, CertificateRecord, SearchHistory};
pub use crate::utils::error::{LookupError, Result};
