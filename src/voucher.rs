//! Turning statement records into double-entry vouchers.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::errors::{ExportError, ExportResult};
use crate::types::{LedgerEntry, TransactionRecord, Voucher, VoucherBatch, VoucherType};

/// Classifies a record by which amount column is set.
///
/// Returns `None` when neither column is positive; such records produce no voucher.
/// A withdrawal wins when both columns are set.
pub fn classify(record: &TransactionRecord) -> Option<VoucherType> {
    if record.withdrawal > Decimal::ZERO {
        Some(VoucherType::Payment)
    } else if record.deposit > Decimal::ZERO {
        Some(VoucherType::Receipt)
    } else {
        None
    }
}

/// Builds the voucher for a classified record.
///
/// `position` is the 1-based index of the record in its statement and is only
/// used to identify the record in errors.
pub fn build_voucher(
    record: &TransactionRecord,
    voucher_type: VoucherType,
    bank_ledger: &str,
    position: usize,
) -> ExportResult<Voucher> {
    let date = record.date.parse().ok_or_else(|| {
        warn!(record = position, value = %record.date, "unreadable record date");
        ExportError::DateFormat {
            record: position,
            value: record.date.to_string(),
        }
    })?;

    let amount = match voucher_type {
        VoucherType::Payment => record.withdrawal,
        VoucherType::Receipt => record.deposit,
    };

    // Payment debits the counter ledger and credits the bank; Receipt mirrors it.
    let (counter_positive, counter_amount, bank_positive, bank_amount) = match voucher_type {
        VoucherType::Payment => (true, -amount, false, amount),
        VoucherType::Receipt => (false, amount, true, -amount),
    };

    if record.counter_ledger.trim().is_empty() {
        warn!(record = position, "blank counter ledger name passed through");
    }

    Ok(Voucher {
        voucher_type,
        date,
        narration: record.narration.clone(),
        entries: [
            LedgerEntry {
                ledger_name: record.counter_ledger.clone(),
                is_deemed_positive: counter_positive,
                amount: counter_amount,
            },
            LedgerEntry {
                ledger_name: bank_ledger.to_string(),
                is_deemed_positive: bank_positive,
                amount: bank_amount,
            },
        ],
    })
}

/// Builds one voucher per classifiable record, in input order.
///
/// Stops at the first record whose date cannot be read; no partial batch is returned.
pub fn assemble_batch(records: &[TransactionRecord], bank_ledger: &str) -> ExportResult<VoucherBatch> {
    if bank_ledger.trim().is_empty() {
        warn!("blank bank ledger name passed through");
    }

    let mut vouchers = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let position = index + 1;

        let Some(voucher_type) = classify(record) else {
            debug!(record = position, "no withdrawal or deposit, skipping");
            continue;
        };

        if record.withdrawal > Decimal::ZERO && record.deposit > Decimal::ZERO {
            warn!(
                record = position,
                withdrawal = %record.withdrawal,
                deposit = %record.deposit,
                "both withdrawal and deposit set, treating as payment"
            );
        }

        vouchers.push(build_voucher(record, voucher_type, bank_ledger, position)?);
    }

    debug!(records = records.len(), vouchers = vouchers.len(), "assembled voucher batch");
    Ok(VoucherBatch::from(vouchers))
}
