use tracing::{debug, trace};

use crate::{
    error::{ParseError, Result},
    util::digits::accumulate,
};

pub use decimal::{convert_decimal, parse_decimal, try_convert_decimal, try_parse_decimal};
pub use hex::{convert_hex, parse_hex, try_convert_hex, try_parse_hex};
pub use octal::{convert_octal, parse_octal, try_convert_octal, try_parse_octal};
pub use radix::Radix;

pub mod decimal;
pub mod hex;
pub mod octal;
pub mod radix;

/// Radix 8 dispatch refuses this value even though it is a valid octal number.
pub const OCTAL_SENTINEL: i32 = 8_393_601;

/// Converts `source` in the given radix.
///
/// `radix` must be 8, 10 or 16. Octal input that evaluates to
/// [`OCTAL_SENTINEL`] is rejected.
pub fn parse_by_radix<'a>(source: impl Into<Option<&'a str>>, radix: u32) -> Result<i32> {
    let radix = Radix::try_from(radix)?;
    let source = require_source(source.into())?;
    trace!("Parsing {} as {}", source, radix);
    match radix {
        Radix::Octal => {
            let value = convert_octal(source)?;
            if value == OCTAL_SENTINEL {
                debug!("Octal {} hit the sentinel value", source);
                return Err(ParseError::invalid_format(source, radix.value()));
            }
            Ok(value)
        }
        Radix::Hexadecimal => convert_hex(source),
        Radix::Decimal => convert_decimal(source),
    }
}

/// Converts `source` in the given radix using the positive parsers.
pub fn parse_positive_by_radix<'a>(source: impl Into<Option<&'a str>>, radix: u32) -> Result<i32> {
    let radix = Radix::try_from(radix)?;
    let source = require_source(source.into())?;
    trace!("Parsing positive {} as {}", source, radix);
    match radix {
        Radix::Octal => parse_octal(source),
        Radix::Hexadecimal => parse_hex(source),
        Radix::Decimal => parse_decimal(source),
    }
}

/// Non-failing [`parse_by_radix`]. An invalid radix is still an error.
pub fn try_parse_by_radix<'a>(
    source: impl Into<Option<&'a str>>,
    radix: u32,
) -> Result<Option<i32>> {
    Radix::try_from(radix)?;
    absorb(parse_by_radix(source, radix))
}

/// Non-failing [`parse_positive_by_radix`]. Goes through the `try_parse_*`
/// converters, so decimal zero is rejected here.
pub fn try_parse_positive_by_radix<'a>(
    source: impl Into<Option<&'a str>>,
    radix: u32,
) -> Result<Option<i32>> {
    match Radix::try_from(radix)? {
        Radix::Octal => try_parse_octal(source),
        Radix::Hexadecimal => try_parse_hex(source),
        Radix::Decimal => try_parse_decimal(source),
    }
}

/// Splits a C style prefix off `source`: `0x`/`0X` selects hexadecimal and
/// a leading `0` followed by more characters selects octal.
pub fn detect_radix(source: &str) -> (Radix, &str) {
    if let Some(digits) = source
        .strip_prefix("0x")
        .or_else(|| source.strip_prefix("0X"))
    {
        return (Radix::Hexadecimal, digits);
    }
    match source.strip_prefix('0') {
        Some(digits) if !digits.is_empty() => (Radix::Octal, digits),
        _ => (Radix::Decimal, source),
    }
}

/// Parses a literal such as `0x1F`, `017` or `-42`, choosing the radix from
/// its prefix. A leading `-` negates octal and hexadecimal literals as well.
pub fn parse_literal<'a>(source: impl Into<Option<&'a str>>) -> Result<i32> {
    let source = require_source(source.into())?;
    trace!("Parsing literal: {}", source);
    let (negative, unsigned) = match source.strip_prefix('-') {
        Some(unsigned) => (true, unsigned),
        None => (false, source),
    };
    let (radix, digits) = detect_radix(unsigned);
    if radix == Radix::Decimal {
        return parse_by_radix(source, radix.value());
    }
    let value = parse_by_radix(digits, radix.value()).map_err(|error| match error {
        ParseError::InvalidFormat { .. } => ParseError::invalid_format(source, radix.value()),
        other => other,
    })?;
    if negative {
        // Magnitudes never exceed i32::MAX, so negation cannot overflow.
        return Ok(-value);
    }
    Ok(value)
}

pub fn try_parse_literal<'a>(source: impl Into<Option<&'a str>>) -> Result<Option<i32>> {
    absorb(parse_literal(source))
}

pub(crate) fn require_source(source: Option<&str>) -> Result<&str> {
    source.ok_or_else(|| {
        debug!("No source text given");
        ParseError::NullInput
    })
}

/// Accumulates `digits` and reports any failure against the whole `source`.
pub(crate) fn convert_digits(
    source: &str,
    digits: &str,
    radix: Radix,
    negative: bool,
) -> Result<i32> {
    accumulate(digits, radix.value(), negative).map_err(|error| {
        debug!("Rejecting {} {:?}: {}", radix, source, error);
        ParseError::invalid_format(source, radix.value())
    })
}

pub(crate) fn require_positive(value: i32, source: &str, radix: Radix) -> Result<i32> {
    if value <= 0 {
        debug!("Rejecting non-positive {} {}", radix, value);
        return Err(ParseError::invalid_format(source, radix.value()));
    }
    Ok(value)
}

/// Turns content failures into `None`, everything else stays an error.
pub(crate) fn absorb(result: Result<i32>) -> Result<Option<i32>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(error) if error.is_content_error() => Ok(None),
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_radix() {
        assert_eq!(parse_by_radix("17", 8), Ok(15));
        assert_eq!(parse_by_radix("17", 10), Ok(17));
        assert_eq!(parse_by_radix("17", 16), Ok(23));
        assert_eq!(parse_by_radix("-17", 10), Ok(-17));
    }

    #[test]
    fn invalid_radix_wins_over_content() {
        for source in ["17", "", "zz"] {
            assert_eq!(parse_by_radix(source, 9), Err(ParseError::InvalidRadix(9)));
            assert_eq!(
                parse_positive_by_radix(source, 2),
                Err(ParseError::InvalidRadix(2))
            );
            assert_eq!(
                try_parse_by_radix(source, 9),
                Err(ParseError::InvalidRadix(9))
            );
            assert_eq!(
                try_parse_positive_by_radix(source, 36),
                Err(ParseError::InvalidRadix(36))
            );
        }
        assert_eq!(parse_by_radix(None, 7), Err(ParseError::InvalidRadix(7)));
    }

    #[test]
    fn sentinel_only_applies_to_octal_dispatch() {
        assert_eq!(convert_octal("40011601"), Ok(OCTAL_SENTINEL));
        assert_eq!(
            parse_by_radix("40011601", 8),
            Err(ParseError::invalid_format("40011601", 8))
        );
        assert_eq!(
            parse_by_radix("040011601", 8),
            Err(ParseError::invalid_format("040011601", 8))
        );
        assert_eq!(try_parse_by_radix("40011601", 8), Ok(None));
        assert_eq!(parse_by_radix("8393601", 10), Ok(OCTAL_SENTINEL));
        assert_eq!(parse_by_radix("801381", 16), Ok(OCTAL_SENTINEL));
        assert_eq!(parse_positive_by_radix("40011601", 8), Ok(OCTAL_SENTINEL));
        assert_eq!(parse_by_radix("40011600", 8), Ok(OCTAL_SENTINEL - 1));
    }

    #[test]
    fn positive_dispatch_keeps_per_radix_zero_rules() {
        assert_eq!(parse_positive_by_radix("0", 10), Ok(0));
        assert!(parse_positive_by_radix("0", 8).is_err());
        assert!(parse_positive_by_radix("0", 16).is_err());
        assert!(parse_positive_by_radix("-1", 10).is_err());
        assert_eq!(try_parse_positive_by_radix("0", 10), Ok(None));
        assert_eq!(try_parse_positive_by_radix("10", 8), Ok(Some(8)));
        assert_eq!(try_parse_positive_by_radix("10", 16), Ok(Some(16)));
    }

    #[test]
    fn try_dispatch_absorbs_only_content_errors() {
        assert_eq!(try_parse_by_radix("-17", 10), Ok(Some(-17)));
        assert_eq!(try_parse_by_radix("0", 8), Ok(Some(0)));
        assert_eq!(try_parse_by_radix("G", 16), Ok(None));
        assert_eq!(try_parse_by_radix(None, 16), Err(ParseError::NullInput));
        assert_eq!(
            try_parse_positive_by_radix(None, 8),
            Err(ParseError::NullInput)
        );
    }

    #[test]
    fn detects_prefixes() {
        assert_eq!(detect_radix("0x1F"), (Radix::Hexadecimal, "1F"));
        assert_eq!(detect_radix("0X1f"), (Radix::Hexadecimal, "1f"));
        assert_eq!(detect_radix("017"), (Radix::Octal, "17"));
        assert_eq!(detect_radix("0"), (Radix::Decimal, "0"));
        assert_eq!(detect_radix("17"), (Radix::Decimal, "17"));
        assert_eq!(detect_radix("0x"), (Radix::Hexadecimal, ""));
    }

    #[test]
    fn parses_literals() {
        assert_eq!(parse_literal("0x1F"), Ok(31));
        assert_eq!(parse_literal("017"), Ok(15));
        assert_eq!(parse_literal("17"), Ok(17));
        assert_eq!(parse_literal("-17"), Ok(-17));
        assert_eq!(parse_literal("-0x10"), Ok(-16));
        assert_eq!(parse_literal("-010"), Ok(-8));
        assert_eq!(parse_literal("0"), Ok(0));
        assert_eq!(parse_literal("00"), Ok(0));
        assert_eq!(parse_literal("0x"), Err(ParseError::invalid_format("0x", 16)));
        assert_eq!(parse_literal("08"), Err(ParseError::invalid_format("08", 8)));
        assert_eq!(parse_literal(None), Err(ParseError::NullInput));
        assert_eq!(try_parse_literal("0xZZ"), Ok(None));
        assert_eq!(try_parse_literal("0x7fffffff"), Ok(Some(i32::MAX)));
    }
}
