//! Renders a result set as the downloadable table.

use crate::domain::model::CertificateRecord;
use crate::utils::error::{LookupError, Result};

/// Serializes the records to CSV. Headers come from the record's serde
/// names, so the exported table matches what the results view shows.
pub fn render_csv(records: &[CertificateRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| LookupError::Io(e.into_error()))
}
