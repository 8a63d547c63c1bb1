mod dto;
mod parser;
mod types;

pub use dto::CsvRecordRaw;
pub use parser::{CsvStatementParser, REQUIRED_COLUMNS};
pub use types::CsvAmount;

pub mod prelude {
    pub use super::{CsvAmount, CsvRecordRaw, CsvStatementParser};
}
