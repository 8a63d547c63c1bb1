//! Turn bank statement records into Tally voucher import XML.
//!
//! Each withdrawal becomes a Payment voucher and each deposit a Receipt voucher,
//! posted against the statement's counter ledger and the configured bank ledger.
//!
//! ```rust,ignore
//! use tally_voucher_rs::ExportBuilder;
//!
//! let xml = ExportBuilder::new()
//!     .content(&csv_content)
//!     .bank_ledger("HDFC Bank")
//!     .company_name("ABC Pvt Ltd")
//!     .build()?;
//! ```

mod builder;
mod config;
mod types;

pub mod errors;
pub mod parsers;
pub mod tally;
pub mod voucher;

pub use builder::{ExportBuilder, FileFormat};
pub use config::{DEFAULT_BANK_LEDGER, DEFAULT_COMPANY_NAME, ExportConfig};
pub use errors::{ExportError, ExportResult};
pub use parsers::prelude::*;
pub use tally::{ExportDocument, build_export};
pub use types::{LedgerEntry, RecordDate, TransactionRecord, Voucher, VoucherBatch, VoucherType};
