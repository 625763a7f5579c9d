//! The four supported positional numeral systems.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of supported numeral systems.
///
/// Each variant carries its base, canonical prefix and digit set through
/// exhaustive-match accessors, so adding a system is a compile error until
/// every accessor handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl NumeralSystem {
    /// All systems, in ascending base order.
    pub const ALL: [NumeralSystem; 4] = [
        NumeralSystem::Binary,
        NumeralSystem::Octal,
        NumeralSystem::Decimal,
        NumeralSystem::Hexadecimal,
    ];

    /// Numeric base of the system.
    pub const fn base(self) -> u32 {
        match self {
            NumeralSystem::Binary => 2,
            NumeralSystem::Octal => 8,
            NumeralSystem::Decimal => 10,
            NumeralSystem::Hexadecimal => 16,
        }
    }

    /// Canonical textual prefix (`0b`, `0o`, `0x`; empty for decimal).
    pub const fn prefix(self) -> &'static str {
        match self {
            NumeralSystem::Binary => "0b",
            NumeralSystem::Octal => "0o",
            NumeralSystem::Decimal => "",
            NumeralSystem::Hexadecimal => "0x",
        }
    }

    /// Human-readable description of the legal digit set, used in error
    /// messages.
    pub const fn allowed_digits(self) -> &'static str {
        match self {
            NumeralSystem::Binary => "digits 0-1",
            NumeralSystem::Octal => "digits 0-7",
            NumeralSystem::Decimal => "digits 0-9",
            NumeralSystem::Hexadecimal => "digits 0-9 and letters A-F",
        }
    }

    /// Lowercase system name.
    pub const fn name(self) -> &'static str {
        match self {
            NumeralSystem::Binary => "binary",
            NumeralSystem::Octal => "octal",
            NumeralSystem::Decimal => "decimal",
            NumeralSystem::Hexadecimal => "hexadecimal",
        }
    }

    /// Whether `c` is a legal digit in this system.
    pub fn accepts(self, c: char) -> bool {
        c.is_digit(self.base())
    }

    /// Guess the system of a raw numeral from its canonical prefix.
    /// No prefix means decimal.
    pub fn detect(raw: &str) -> NumeralSystem {
        let head = raw.get(..2).map(str::to_ascii_lowercase);
        match head.as_deref() {
            Some("0b") => NumeralSystem::Binary,
            Some("0o") => NumeralSystem::Octal,
            Some("0x") => NumeralSystem::Hexadecimal,
            _ => NumeralSystem::Decimal,
        }
    }
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failed lookup of a numeral system by name or base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSystem(pub String);

impl fmt::Display for UnknownSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown numeral system '{}' (expected binary|octal|decimal|hexadecimal or 2|8|10|16)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSystem {}

impl FromStr for NumeralSystem {
    type Err = UnknownSystem;

    /// Accepts full names, common short names and numeric bases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" | "b" | "2" => Ok(NumeralSystem::Binary),
            "octal" | "oct" | "o" | "8" => Ok(NumeralSystem::Octal),
            "decimal" | "dec" | "d" | "10" => Ok(NumeralSystem::Decimal),
            "hexadecimal" | "hex" | "x" | "16" => Ok(NumeralSystem::Hexadecimal),
            other => Err(UnknownSystem(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_consistent() {
        for system in NumeralSystem::ALL {
            assert_eq!(
                system.prefix().len(),
                if system.base() == 10 { 0 } else { 2 }
            );
            assert!(system.accepts('0'));
            assert!(!system.accepts('z'));
        }
    }

    #[test]
    fn test_from_str_accepts_names_and_bases() {
        assert_eq!(
            "hex".parse::<NumeralSystem>().unwrap(),
            NumeralSystem::Hexadecimal
        );
        assert_eq!("2".parse::<NumeralSystem>().unwrap(), NumeralSystem::Binary);
        assert_eq!(
            "Decimal".parse::<NumeralSystem>().unwrap(),
            NumeralSystem::Decimal
        );
        assert!("3".parse::<NumeralSystem>().is_err());
    }

    #[test]
    fn test_detect_by_prefix() {
        assert_eq!(NumeralSystem::detect("0x2A"), NumeralSystem::Hexadecimal);
        assert_eq!(NumeralSystem::detect("0B11"), NumeralSystem::Binary);
        assert_eq!(NumeralSystem::detect("0o52"), NumeralSystem::Octal);
        assert_eq!(NumeralSystem::detect("42"), NumeralSystem::Decimal);
        assert_eq!(NumeralSystem::detect("0"), NumeralSystem::Decimal);
    }
}
