use crate::errors::ExportResult;

pub trait Parser {
    type Output;

    fn parse(content: &str) -> ExportResult<Vec<Self::Output>>;

    fn is_supported(filename: Option<&str>, content: &str) -> bool;
}
