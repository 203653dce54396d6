pub mod extractor;
pub mod session;

pub use extractor::CatalogExtractor;
pub use session::{BrowserSession, SessionProvider};
