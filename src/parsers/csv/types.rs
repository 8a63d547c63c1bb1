use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{ExportError, ExportResult};

/// Raw amount cell from a statement export.
///
/// Bank exports leave the unused column blank and often group digits,
/// e.g. `40,000.00`, so blanks read as zero and commas are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CsvAmount(String);

impl CsvAmount {
    /// `record` is the 1-based row number reported on failure.
    pub fn parse(&self, record: usize) -> ExportResult<Decimal> {
        let cleaned: String = self.0.trim().chars().filter(|c| *c != ',').collect();

        if cleaned.is_empty() {
            return Ok(Decimal::ZERO);
        }

        Decimal::from_str(&cleaned).map_err(|_| ExportError::InvalidAmount {
            record,
            value: self.0.clone(),
        })
    }
}

impl From<String> for CsvAmount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CsvAmount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
