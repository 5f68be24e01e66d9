use std::fmt::Display;

/// Why a digit sequence could not be turned into an `i32`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DigitError {
    Empty,
    InvalidDigit { digit: char, index: usize },
    Overflow,
}

impl Display for DigitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no digits"),
            Self::InvalidDigit { digit, index } => {
                write!(f, "invalid digit {:?} at index {}", digit, index)
            }
            Self::Overflow => write!(f, "value does not fit into 32 bits"),
        }
    }
}

/// Maps a single character onto its value in `radix`.
///
/// Only ASCII digits are accepted, letters are case insensitive
/// (`A`/`a` is 10 up to `F`/`f` being 15 for hexadecimal).
pub fn digit_value(char: char, radix: u32) -> Option<i32> {
    let value = match char {
        '0'..='9' => char as i32 - '0' as i32,
        'a'..='f' => char as i32 - 'a' as i32 + 10,
        'A'..='F' => char as i32 - 'A' as i32 + 10,
        _ => return None,
    };
    (value < radix as i32).then_some(value)
}

/// Folds `digits` from most to least significant into an `i32`.
///
/// Negative values are accumulated downwards so that `i32::MIN` stays
/// representable. Any overflow of an intermediate value is reported.
pub fn accumulate(digits: &str, radix: u32, negative: bool) -> Result<i32, DigitError> {
    if digits.is_empty() {
        return Err(DigitError::Empty);
    }
    let base = radix as i32;
    let mut value: i32 = 0;
    for (index, char) in digits.chars().enumerate() {
        let digit =
            digit_value(char, radix).ok_or(DigitError::InvalidDigit { digit: char, index })?;
        let shifted = value.checked_mul(base).ok_or(DigitError::Overflow)?;
        value = if negative {
            shifted.checked_sub(digit)
        } else {
            shifted.checked_add(digit)
        }
        .ok_or(DigitError::Overflow)?;
    }
    Ok(value)
}
