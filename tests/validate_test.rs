//! Integration tests for normalization and validation: digit sets, prefix
//! handling, error messages and the 128-bit overflow boundary.

use rstest::rstest;

use numbase::util::testing;
use numbase::{normalize, validate, ConversionError, NumeralSystem};
use NumeralSystem::{Binary, Decimal, Hexadecimal, Octal};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// ============================================================
// Normalization
// ============================================================

#[rstest]
#[case("0b101", Binary, "101")]
#[case("0B101", Binary, "101")]
#[case("101", Binary, "101")]
#[case("0o52", Octal, "52")]
#[case("0X2a", Hexadecimal, "2a")]
#[case("42", Decimal, "42")]
// only the matching system's prefix is stripped
#[case("0x2A", Binary, "0x2A")]
// decimal has no prefix, "0b" stays as-is (and then fails digit validation)
#[case("0b101", Decimal, "0b101")]
fn given_raw_input_when_normalized_then_prefix_handling(
    #[case] raw: &str,
    #[case] system: NumeralSystem,
    #[case] expected: &str,
) {
    assert_eq!(normalize(raw, system), expected);
}

#[test]
fn given_prefix_only_when_validated_then_empty_input_error() {
    assert_eq!(validate("0x", Hexadecimal), Err(ConversionError::EmptyInput));
    assert_eq!(validate("0b", Binary), Err(ConversionError::EmptyInput));
}

// ============================================================
// Digit sets
// ============================================================

#[rstest]
#[case("1010", Binary, 10)]
#[case("777", Octal, 511)]
#[case("1989", Decimal, 1989)]
#[case("ff", Hexadecimal, 255)]
#[case("FF", Hexadecimal, 255)]
#[case("0x0", Hexadecimal, 0)]
fn given_legal_digits_when_validated_then_value(
    #[case] raw: &str,
    #[case] system: NumeralSystem,
    #[case] expected: u128,
) {
    assert_eq!(validate(raw, system), Ok(expected));
}

#[rstest]
#[case("102", Binary, '2')]
#[case("778", Octal, '8')]
#[case("12a", Decimal, 'a')]
#[case("FG", Hexadecimal, 'G')]
#[case("-1", Decimal, '-')]
#[case("1.5", Decimal, '.')]
fn given_illegal_digit_when_validated_then_digit_error(
    #[case] raw: &str,
    #[case] system: NumeralSystem,
    #[case] digit: char,
) {
    assert_eq!(
        validate(raw, system),
        Err(ConversionError::InvalidDigit { digit, system })
    );
}

/// Each system produces a distinct message naming its legal digit set.
#[rstest]
#[case(Binary, "only digits 0-1 allowed")]
#[case(Octal, "only digits 0-7 allowed")]
#[case(Decimal, "only digits 0-9 allowed")]
#[case(Hexadecimal, "only digits 0-9 and letters A-F allowed")]
fn given_digit_error_when_displayed_then_names_legal_set(
    #[case] system: NumeralSystem,
    #[case] expected_fragment: &str,
) {
    let message = ConversionError::InvalidDigit { digit: 'z', system }.to_string();
    assert!(
        message.contains(expected_fragment),
        "message {message:?} should contain {expected_fragment:?}"
    );
    assert!(message.contains(system.name()));
}

#[test]
fn given_empty_error_when_displayed_then_value_required() {
    assert_eq!(ConversionError::EmptyInput.to_string(), "value required");
}

// ============================================================
// Overflow boundary (u128 intermediate)
// ============================================================

#[test]
fn given_max_value_when_validated_then_accepted() {
    let max_hex = "F".repeat(32);
    assert_eq!(validate(&max_hex, Hexadecimal), Ok(u128::MAX));

    let max_bin = "1".repeat(128);
    assert_eq!(validate(&max_bin, Binary), Ok(u128::MAX));
}

#[test]
fn given_value_past_128_bits_when_validated_then_too_large_error() {
    let over_hex = format!("1{}", "0".repeat(32));
    assert_eq!(
        validate(&over_hex, Hexadecimal),
        Err(ConversionError::ValueTooLarge {
            system: Hexadecimal
        })
    );

    let over_bin = format!("1{}", "0".repeat(128));
    assert_eq!(
        validate(&over_bin, Binary),
        Err(ConversionError::ValueTooLarge { system: Binary })
    );
}

/// Leading zeros do not change the value and never overflow on their own.
#[test]
fn given_leading_zeros_when_validated_then_value_unchanged() {
    let padded = format!("{}2A", "0".repeat(200));
    assert_eq!(validate(&padded, Hexadecimal), Ok(42));
}
