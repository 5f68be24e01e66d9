use std::fmt::Display;

use crate::error::ParseError;

/// The numeral systems the parser understands.
#[derive(Eq, Hash, PartialEq, Clone, Copy, Debug)]
pub enum Radix {
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub const ALL: [Radix; 3] = [Radix::Octal, Radix::Decimal, Radix::Hexadecimal];

    pub fn value(&self) -> u32 {
        match self {
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Octal => "octal",
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
        }
    }

    pub fn from_value(radix: u32) -> Option<Self> {
        match radix {
            8 => Some(Self::Octal),
            10 => Some(Self::Decimal),
            16 => Some(Self::Hexadecimal),
            _ => None,
        }
    }
}

impl TryFrom<u32> for Radix {
    type Error = ParseError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        Radix::from_value(radix).ok_or(ParseError::InvalidRadix(radix))
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
