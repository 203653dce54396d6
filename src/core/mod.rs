pub mod batch;
pub mod catalog;
pub mod export;
pub mod normalize;
pub mod parse;

pub use crate::domain::model::{BatchReport, CertificateRecord, CodeFailure, SearchHistory};
pub use crate::domain::ports::{CertificateSource, ConfigProvider, Storage};
pub use crate::utils::error::Result;
