use tracing::trace;

use crate::{
    error::Result,
    parser::{absorb, convert_digits, radix::Radix, require_positive, require_source},
};

/// Converts a string of hexadecimal digits into its value.
///
/// Letters are accepted in either case. There is no `0x` prefix and no sign,
/// see [`crate::parser::parse_literal`] for prefixed input. Values above
/// `i32::MAX` overflow and are reported as an invalid format, just like
/// characters outside the alphabet.
pub fn convert_hex<'a>(source: impl Into<Option<&'a str>>) -> Result<i32> {
    let source = require_source(source.into())?;
    trace!("Converting hex: {}", source);
    convert_digits(source, source, Radix::Hexadecimal, false)
}

/// Like [`convert_hex`], but zero is rejected along with negative values.
pub fn parse_hex<'a>(source: impl Into<Option<&'a str>>) -> Result<i32> {
    let source = require_source(source.into())?;
    let value = convert_hex(source)?;
    require_positive(value, source, Radix::Hexadecimal)
}

pub fn try_convert_hex<'a>(source: impl Into<Option<&'a str>>) -> Result<Option<i32>> {
    absorb(convert_hex(source))
}

pub fn try_parse_hex<'a>(source: impl Into<Option<&'a str>>) -> Result<Option<i32>> {
    absorb(parse_hex(source))
}
