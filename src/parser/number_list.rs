// Comma-separated number list parsing
use crate::model::ParserError;

pub trait Parser {
    fn parse(&self, input: &str) -> Result<Vec<u64>, ParserError>;
}

/// Parses lists like `"3,7,12"` or `"3, 7, 12"`.
pub struct NumberListParser;

impl NumberListParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for NumberListParser {
    fn parse(&self, input: &str) -> Result<Vec<u64>, ParserError> {
        let mut numbers = Vec::new();

        for item in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            // Wider than u64 so sign and range errors can be told apart.
            let value: i128 = item
                .parse()
                .map_err(|_| ParserError::NotAnInteger(item.to_string()))?;
            if value <= 0 {
                return Err(ParserError::NonPositive(value));
            }
            let value = u64::try_from(value).map_err(|_| ParserError::OutOfRange(value))?;
            numbers.push(value);
        }

        if numbers.is_empty() {
            return Err(ParserError::Empty);
        }
        Ok(numbers)
    }
}
