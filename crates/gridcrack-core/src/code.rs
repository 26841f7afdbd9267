//! Grid code representation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A two-character hexadecimal code printed on a grid cell.
///
/// The alphabet is fixed to six codes. Each variant carries the byte value it
/// displays as, so `Code::X1C` prints as `1C`.
///
/// # Examples
///
/// ```
/// use gridcrack_core::Code;
///
/// let code: Code = "e9".parse()?;
/// assert_eq!(code, Code::XE9);
/// assert_eq!(code.to_string(), "E9");
/// assert_eq!(Code::ALL.len(), 6);
/// # Ok::<(), gridcrack_core::CodeParseError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Code {
    /// The code `1C`.
    #[default]
    X1C = 0x1C,
    /// The code `BD`.
    XBD = 0xBD,
    /// The code `55`.
    X55 = 0x55,
    /// The code `E9`.
    XE9 = 0xE9,
    /// The code `7A`.
    X7A = 0x7A,
    /// The code `FF`.
    XFF = 0xFF,
}

impl Code {
    /// The complete code alphabet, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::X1C,
        Self::XBD,
        Self::X55,
        Self::XE9,
        Self::X7A,
        Self::XFF,
    ];

    /// Returns the byte value this code displays as.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the code for the given byte value, if it belongs to the alphabet.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.value() == value)
    }

    /// Returns the position of this code within [`Code::ALL`].
    #[must_use]
    pub fn alphabet_index(self) -> usize {
        match self {
            Self::X1C => 0,
            Self::XBD => 1,
            Self::X55 => 2,
            Self::XE9 => 3,
            Self::X7A => 4,
            Self::XFF => 5,
        }
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.value())
    }
}

/// Error returned when a string is not a code of the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("`{text}` is not a grid code (expected one of 1C, BD, 55, E9, 7A, FF)")]
pub struct CodeParseError {
    text: String,
}

impl FromStr for Code {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CodeParseError { text: s.to_owned() };
        if s.len() != 2 {
            return Err(err());
        }
        let value = u8::from_str_radix(s, 16).map_err(|_| err())?;
        Self::from_value(value).ok_or_else(err)
    }
}
