//! Readers that turn statement files into [`TransactionRecord`](crate::TransactionRecord)s.

pub mod csv;
pub mod traits;

pub mod prelude {
    pub use super::csv::prelude::*;
    pub use super::traits::Parser;
}
