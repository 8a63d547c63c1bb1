use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    config::ExportConfig,
    errors::{ExportError, ExportResult},
    parsers::prelude::*,
    tally::ExportDocument,
    types::{TransactionRecord, VoucherBatch},
    voucher::assemble_batch,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    #[serde(rename = "csv")]
    Csv,
}

impl FileFormat {
    fn parse(&self, content: &str) -> ExportResult<Vec<TransactionRecord>> {
        match self {
            FileFormat::Csv => CsvStatementParser::parse(content),
        }
    }

    fn detect(filename: Option<&str>, content: Option<&str>) -> ExportResult<Self> {
        if let Some(content) = content {
            if CsvStatementParser::is_supported(filename, content) {
                return Ok(FileFormat::Csv);
            }
        }

        if let Some(ext) = filename.and_then(|name| Path::new(name).extension()) {
            if ext.eq_ignore_ascii_case("csv") {
                return Ok(FileFormat::Csv);
            }
        }

        Err(ExportError::ParseFailed("unsupported statement format".to_string()))
    }
}

/// Reads a statement and turns it into Tally voucher XML.
///
/// ```rust,ignore
/// let xml = ExportBuilder::new()
///     .filename("statement.csv")
///     .bank_ledger("HDFC Bank")
///     .build()?;
/// ```
#[derive(Default)]
pub struct ExportBuilder {
    content: Option<String>,
    filepath: Option<String>,
    format: Option<FileFormat>,
    config: ExportConfig,
}

impl ExportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    pub fn format(mut self, format: FileFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn bank_ledger(mut self, bank_ledger: &str) -> Self {
        self.config.bank_ledger = bank_ledger.to_string();
        self
    }

    pub fn company_name(mut self, company_name: &str) -> Self {
        self.config.company_name = company_name.to_string();
        self
    }

    /// Parses the statement into records without building vouchers.
    pub fn records(&self) -> ExportResult<Vec<TransactionRecord>> {
        let content = match &self.content {
            Some(content) => content.clone(),
            None => {
                let path = self
                    .filepath
                    .as_deref()
                    .ok_or(ExportError::MissingContentAndFilepath)?;
                fs::read_to_string(path)?
            }
        };

        let format = self
            .format
            .map(Ok)
            .unwrap_or_else(|| FileFormat::detect(self.filepath.as_deref(), Some(content.as_str())))?;

        format.parse(&content)
    }

    pub fn build_batch(&self) -> ExportResult<VoucherBatch> {
        assemble_batch(&self.records()?, &self.config.bank_ledger)
    }

    pub fn build(self) -> ExportResult<String> {
        let batch = self.build_batch()?;
        Ok(ExportDocument::new(self.config.company_name, batch).render())
    }
}
