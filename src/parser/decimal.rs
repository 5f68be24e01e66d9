use tracing::{debug, trace};

use crate::{
    error::{ParseError, Result},
    parser::{absorb, convert_digits, radix::Radix, require_positive, require_source},
};

/// Converts an optionally negative decimal string into its value.
///
/// A lone `-` without digits converts to `0`.
pub fn convert_decimal<'a>(source: impl Into<Option<&'a str>>) -> Result<i32> {
    let source = require_source(source.into())?;
    trace!("Converting decimal: {}", source);
    match source.strip_prefix('-') {
        Some("") => {
            debug!("Lone sign without digits converts to zero");
            Ok(0)
        }
        Some(digits) => convert_digits(source, digits, Radix::Decimal, true),
        None => convert_digits(source, source, Radix::Decimal, false),
    }
}

/// Like [`convert_decimal`], but negative values are rejected. Zero passes.
pub fn parse_decimal<'a>(source: impl Into<Option<&'a str>>) -> Result<i32> {
    let source = require_source(source.into())?;
    let value = convert_decimal(source)?;
    if value < 0 {
        debug!("Rejecting negative decimal {}", value);
        return Err(ParseError::invalid_format(source, Radix::Decimal.value()));
    }
    Ok(value)
}

pub fn try_convert_decimal<'a>(source: impl Into<Option<&'a str>>) -> Result<Option<i32>> {
    absorb(convert_decimal(source))
}

/// Unlike [`parse_decimal`], zero is reported as a failure here.
pub fn try_parse_decimal<'a>(source: impl Into<Option<&'a str>>) -> Result<Option<i32>> {
    let source = require_source(source.into())?;
    let result = convert_decimal(source)
        .and_then(|value| require_positive(value, source, Radix::Decimal));
    absorb(result)
}
