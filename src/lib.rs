//! Conversion of octal, decimal and hexadecimal text into `i32` values.
//!
//! Every converter comes as a strict function returning [`Result`] and as a
//! `try_` variant that reports malformed input as `Ok(None)`. Absent input
//! (`None`) and unsupported radices are errors in both flavours.

pub mod error;
pub mod parser;
pub mod util;

pub use error::{ParseError, Result};
pub use parser::{
    convert_decimal, convert_hex, convert_octal, detect_radix, parse_by_radix, parse_decimal,
    parse_hex, parse_literal, parse_octal, parse_positive_by_radix, try_convert_decimal,
    try_convert_hex, try_convert_octal, try_parse_by_radix, try_parse_decimal, try_parse_hex,
    try_parse_literal, try_parse_octal, try_parse_positive_by_radix, Radix, OCTAL_SENTINEL,
};
