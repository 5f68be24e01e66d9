use tracing::trace;

use crate::{
    error::Result,
    parser::{absorb, convert_digits, radix::Radix, require_positive, require_source},
};

/// Converts a string of octal digits (`0`-`7`) into its value.
pub fn convert_octal<'a>(source: impl Into<Option<&'a str>>) -> Result<i32> {
    let source = require_source(source.into())?;
    trace!("Converting octal: {}", source);
    convert_digits(source, source, Radix::Octal, false)
}

/// Like [`convert_octal`], but zero is rejected along with negative values.
pub fn parse_octal<'a>(source: impl Into<Option<&'a str>>) -> Result<i32> {
    let source = require_source(source.into())?;
    let value = convert_octal(source)?;
    require_positive(value, source, Radix::Octal)
}

pub fn try_convert_octal<'a>(source: impl Into<Option<&'a str>>) -> Result<Option<i32>> {
    absorb(convert_octal(source))
}

pub fn try_parse_octal<'a>(source: impl Into<Option<&'a str>>) -> Result<Option<i32>> {
    absorb(parse_octal(source))
}
