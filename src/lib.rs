//! numbase: validate, convert and inspect numerals in the four common
//! positional systems (binary, octal, decimal, hexadecimal).
//!
//! The domain layer is pure and synchronous: every conversion is a function
//! evaluation over an immutable request, so callers can run it as eagerly as
//! they like. The CLI layer adds argument parsing, layered configuration and
//! colored terminal output on top.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use config::Settings;
pub use domain::{
    format_value, normalize, run_conversion, run_request, to_base, validate, Algorithm,
    ConversionError, ConversionRequest, ConversionResult, NumeralSystem,
};
