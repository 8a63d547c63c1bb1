//! Tally "Import Data" voucher envelope.

mod document;
mod writer;

pub use document::ExportDocument;
pub use writer::{Content, Element, escape, escape_attribute, render_document};

use tracing::debug;

use crate::errors::ExportResult;
use crate::types::TransactionRecord;
use crate::voucher::assemble_batch;

/// Converts statement records into a rendered Tally voucher import document.
///
/// Either every classifiable record becomes a voucher and the whole document is
/// returned, or the first failure is returned and nothing is rendered.
pub fn build_export(
    records: &[TransactionRecord],
    bank_ledger: &str,
    company_name: &str,
) -> ExportResult<String> {
    let batch = assemble_batch(records, bank_ledger)?;
    let xml = ExportDocument::new(company_name, batch).render();
    debug!(bytes = xml.len(), "rendered tally export");
    Ok(xml)
}
