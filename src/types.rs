use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d-%b-%Y", "%d %b %Y", "%Y%m%d",
];

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Date cell of a statement record.
///
/// Spreadsheet readers hand over real dates, timestamps or plain text
/// depending on how the cell was typed, so all three are accepted and
/// interpretation is deferred until the voucher is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordDate {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

impl RecordDate {
    /// Interprets the cell as a calendar date, trying the common statement formats in order.
    pub fn parse(&self) -> Option<NaiveDate> {
        match self {
            RecordDate::Date(date) => Some(*date),
            RecordDate::DateTime(date_time) => Some(date_time.date()),
            RecordDate::Text(text) => parse_date_text(text.trim()),
        }
    }
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDate::Date(date) => write!(f, "{date}"),
            RecordDate::DateTime(date_time) => write!(f, "{date_time}"),
            RecordDate::Text(text) => f.write_str(text),
        }
    }
}

impl From<NaiveDate> for RecordDate {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for RecordDate {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<String> for RecordDate {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for RecordDate {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One row of a bank statement: at most one of `withdrawal`/`deposit` is expected to be nonzero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "Date")]
    pub date: RecordDate,
    #[serde(rename = "Narration")]
    pub narration: String,
    #[serde(rename = "Withdrawal", default)]
    pub withdrawal: Decimal,
    #[serde(rename = "Deposit", default)]
    pub deposit: Decimal,
    #[serde(rename = "Ledger")]
    pub counter_ledger: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoucherType {
    Payment,
    Receipt,
}

impl VoucherType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoucherType::Payment => "Payment",
            VoucherType::Receipt => "Receipt",
        }
    }
}

impl fmt::Display for VoucherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single posting against a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub ledger_name: String,
    /// `true` posts as a debit (`Yes`), `false` as a credit (`No`).
    pub is_deemed_positive: bool,
    pub amount: Decimal,
}

impl LedgerEntry {
    pub fn deemed_positive_flag(&self) -> &'static str {
        if self.is_deemed_positive { "Yes" } else { "No" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    pub voucher_type: VoucherType,
    pub date: NaiveDate,
    pub narration: String,
    /// Counter entry first, bank entry second.
    pub entries: [LedgerEntry; 2],
}

impl Voucher {
    /// Date as Tally expects it: `YYYYMMDD`.
    pub fn tally_date(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }

    pub fn counter_entry(&self) -> &LedgerEntry {
        &self.entries[0]
    }

    pub fn bank_entry(&self) -> &LedgerEntry {
        &self.entries[1]
    }
}

/// Vouchers in statement order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoucherBatch {
    vouchers: Vec<Voucher>,
}

impl VoucherBatch {
    pub fn len(&self) -> usize {
        self.vouchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vouchers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Voucher> {
        self.vouchers.iter()
    }

    pub fn as_slice(&self) -> &[Voucher] {
        &self.vouchers
    }
}

impl From<Vec<Voucher>> for VoucherBatch {
    fn from(vouchers: Vec<Voucher>) -> Self {
        Self { vouchers }
    }
}

impl FromIterator<Voucher> for VoucherBatch {
    fn from_iter<I: IntoIterator<Item = Voucher>>(iter: I) -> Self {
        Self { vouchers: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a VoucherBatch {
    type Item = &'a Voucher;
    type IntoIter = std::slice::Iter<'a, Voucher>;

    fn into_iter(self) -> Self::IntoIter {
        self.vouchers.iter()
    }
}
