//! Domain entities: core data structures

use crate::domain::convert::Algorithm;
use crate::domain::error::ConversionError;
use crate::domain::system::NumeralSystem;

/// One conversion request: raw text plus source and target systems.
/// Immutable once constructed; `swapped` builds a new request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Raw user input, prefix allowed, whitespace already trimmed by the caller
    pub raw: String,
    pub source: NumeralSystem,
    pub target: NumeralSystem,
}

impl ConversionRequest {
    pub fn new(raw: impl Into<String>, source: NumeralSystem, target: NumeralSystem) -> Self {
        Self {
            raw: raw.into(),
            source,
            target,
        }
    }

    /// Exchange source and target, keeping the raw input.
    ///
    /// The returned request must be re-validated: a string valid as hex may
    /// be invalid as binary.
    pub fn swapped(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            source: self.target,
            target: self.source,
        }
    }
}

/// Outcome of one conversion. Constructed once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub is_valid: bool,
    /// Present exactly when `is_valid` is false
    pub error: Option<ConversionError>,
    /// Original raw input
    pub input: String,
    /// Formatted output with the target system's prefix; empty on failure
    pub output: String,
    /// Intermediate integer value; zero on failure
    pub value: u128,
    /// Canonical base-2 expansion of `value`, no prefix, no leading zeros
    pub binary: String,
    /// Number of digits in `binary`
    pub bit_count: usize,
    /// Which conversion path produced the output
    pub algorithm: Algorithm,
    /// Human-readable description of the conversion pipeline
    pub steps: Vec<String>,
}

impl ConversionResult {
    pub fn valid(
        input: impl Into<String>,
        output: impl Into<String>,
        value: u128,
        binary: String,
        algorithm: Algorithm,
        steps: Vec<String>,
    ) -> Self {
        let bit_count = binary.len();
        Self {
            is_valid: true,
            error: None,
            input: input.into(),
            output: output.into(),
            value,
            binary,
            bit_count,
            algorithm,
            steps,
        }
    }

    pub fn invalid(input: impl Into<String>, error: ConversionError) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
            input: input.into(),
            output: String::new(),
            value: 0,
            binary: String::new(),
            bit_count: 0,
            algorithm: Algorithm::DecimalIntermediate,
            steps: Vec::new(),
        }
    }

    /// True when the failure is an untouched/empty input.
    ///
    /// Lets presentation code suppress the error text before the user has
    /// typed anything, without conflating emptiness with a digit failure.
    pub fn is_empty_input(&self) -> bool {
        matches!(self.error, Some(ConversionError::EmptyInput))
    }
}
