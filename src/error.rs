use thiserror::Error;

/// Every way a numeral conversion can fail.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The source text was absent.
    #[error("No source text given")]
    NullInput,
    /// The source is not a valid numeral for the radix, does not fit into an
    /// `i32`, violates a positivity requirement or hit the octal sentinel.
    #[error("Not a valid base {radix} integer: {input:?}")]
    InvalidFormat { input: String, radix: u32 },
    /// Dispatch was asked for a radix other than 8, 10 or 16.
    #[error("Invalid radix {0}, expected 8, 10 or 16")]
    InvalidRadix(u32),
}

impl ParseError {
    pub fn invalid_format(source: &str, radix: u32) -> ParseError {
        ParseError::InvalidFormat {
            input: source.to_string(),
            radix,
        }
    }

    /// Content errors are the ones try-variants report as `None`.
    pub fn is_content_error(&self) -> bool {
        matches!(self, ParseError::InvalidFormat { .. })
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
