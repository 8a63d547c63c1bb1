use csv::{ReaderBuilder, Trim};
use tracing::debug;

use super::dto::CsvRecordRaw;
use crate::errors::{ExportError, ExportResult};
use crate::parsers::traits::Parser;
use crate::types::TransactionRecord;

/// Column headers every statement must carry, in template order.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Date", "Narration", "Withdrawal", "Deposit", "Ledger"];

pub struct CsvStatementParser;

impl Parser for CsvStatementParser {
    type Output = TransactionRecord;

    fn is_supported(filename: Option<&str>, content: &str) -> bool {
        let has_csv_extension = filename
            .map(|name| name.to_lowercase().ends_with(".csv"))
            .unwrap_or(false);

        let first_line = content.lines().next().unwrap_or("");
        let looks_like_statement = first_line.contains("Date") && first_line.contains("Ledger");

        match filename {
            Some(_) => has_csv_extension && looks_like_statement,
            None => looks_like_statement,
        }
    }

    fn parse(content: &str) -> ExportResult<Vec<Self::Output>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::Headers)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| ExportError::ParseFailed(format!("CSV header error: {}", e)))?;

        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|header| header == **column))
        {
            return Err(ExportError::MissingField(missing.to_string()));
        }

        let mut records = Vec::new();

        for (index, result) in reader.deserialize::<CsvRecordRaw>().enumerate() {
            let raw = result.map_err(|e| ExportError::ParseFailed(format!("CSV deserialize error: {}", e)))?;
            records.push(raw.into_record(index + 1)?);
        }

        debug!(records = records.len(), "parsed csv statement");
        Ok(records)
    }
}
