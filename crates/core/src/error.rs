use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while decoding or building catalogue values
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = StdResult<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_the_offending_value() {
        assert_eq!(CoreError::InvalidInput("x".to_owned()).to_string(), "Invalid input: x");
        assert_eq!(CoreError::InvalidDate("2030-13-01".to_owned()).to_string(), "Invalid date: 2030-13-01");
    }
}
