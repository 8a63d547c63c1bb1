use serde::Deserialize;

use super::types::CsvAmount;
use crate::errors::ExportResult;
use crate::types::{RecordDate, TransactionRecord};

/// A statement row as read from the file; columns match the download template.
#[derive(Debug, Deserialize)]
pub struct CsvRecordRaw {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Narration", default)]
    pub narration: String,
    #[serde(rename = "Withdrawal", default)]
    pub withdrawal: CsvAmount,
    #[serde(rename = "Deposit", default)]
    pub deposit: CsvAmount,
    #[serde(rename = "Ledger", default)]
    pub ledger: String,
}

impl CsvRecordRaw {
    /// Converts the row, keeping the date as text so it is interpreted when the voucher is built.
    pub fn into_record(self, record: usize) -> ExportResult<TransactionRecord> {
        Ok(TransactionRecord {
            date: RecordDate::Text(self.date),
            narration: self.narration,
            withdrawal: self.withdrawal.parse(record)?,
            deposit: self.deposit.parse(record)?,
            counter_ledger: self.ledger,
        })
    }
}
