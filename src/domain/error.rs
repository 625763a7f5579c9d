//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::system::NumeralSystem;

/// Conversion errors represent bad user input.
///
/// All are recoverable by correcting the input and are carried inside
/// `ConversionResult` rather than propagated as panics. Each digit failure
/// names the legal digit set of the offending system, so every system has a
/// distinct message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("value required")]
    EmptyInput,

    #[error("invalid digit '{digit}' for {system} input: only {} allowed", .system.allowed_digits())]
    InvalidDigit { digit: char, system: NumeralSystem },

    #[error("{system} value does not fit into 128 bits")]
    ValueTooLarge { system: NumeralSystem },
}
