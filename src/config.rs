use serde::{Deserialize, Serialize};

use crate::errors::{ExportError, ExportResult};

pub const DEFAULT_BANK_LEDGER: &str = "HDFC Bank";
pub const DEFAULT_COMPANY_NAME: &str = "ABC Pvt Ltd";

/// Names that must match ledgers and the company exactly as they exist in Tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub bank_ledger: String,
    pub company_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            bank_ledger: DEFAULT_BANK_LEDGER.to_string(),
            company_name: DEFAULT_COMPANY_NAME.to_string(),
        }
    }
}

impl ExportConfig {
    pub fn new(bank_ledger: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            bank_ledger: bank_ledger.into(),
            company_name: company_name.into(),
        }
    }

    /// Reads a config from JSON; absent keys keep their defaults.
    pub fn from_json(json: &str) -> ExportResult<Self> {
        serde_json::from_str(json).map_err(|e| ExportError::InvalidConfig(e.to_string()))
    }
}
