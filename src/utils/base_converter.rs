//! Numeric base conversion over arbitrary ordered digit alphabets.
//!
//! A number written with the digits of one [`Alphabet`] is reduced to an
//! unsigned accumulator and re-encoded with the digits of another. The base
//! of each side is the length of its alphabet.
//!
//! ```
//! use shorturls::utils::base_converter::{Alphabet, BaseConverter, BASE4, BASE5_ALPHABETIC};
//!
//! let converter = BaseConverter::new(
//!     Alphabet::new(BASE4).unwrap(),
//!     Alphabet::new(BASE5_ALPHABETIC).unwrap(),
//! );
//! assert_eq!(converter.convert("1203").unwrap(), "dee");
//! assert_eq!(converter.reverse("dee").unwrap(), "1203");
//! ```
//!
//! Conversion is only inverse to itself when the same alphabet pair is used
//! for both directions. Decoding a string produced with alphabet `A` using
//! alphabet `B` yields a well-defined but unrelated number.

use std::collections::HashSet;

use thiserror::Error;

pub const BASE2: &str = "01";
pub const BASE4: &str = "0123";
pub const BASE5_ALPHABETIC: &str = "abcde";
pub const BASE10: &str = "0123456789";
pub const BASE16: &str = "0123456789ABCDEF";
pub const BASE62: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789abcdefghijklmnopqrstuvwxyz";

const SIGN: char = '-';

/// Errors produced while building alphabets or converting numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("alphabet must contain at least two symbols, got {0}")]
    AlphabetTooSmall(usize),

    #[error("alphabet contains duplicate symbol '{0}'")]
    DuplicateSymbol(char),

    #[error("symbol '{symbol}' at position {position} is not part of the source alphabet")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("number has no digits")]
    Empty,

    #[error("number does not fit in a 128-bit accumulator")]
    Overflow,
}

/// Ordered set of digit symbols, smallest value first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from its digits in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::AlphabetTooSmall`] for fewer than two
    /// symbols and [`ConversionError::DuplicateSymbol`] when a digit repeats.
    pub fn new(digits: &str) -> Result<Self, ConversionError> {
        let symbols: Vec<char> = digits.chars().collect();

        if symbols.len() < 2 {
            return Err(ConversionError::AlphabetTooSmall(symbols.len()));
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        for &symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(ConversionError::DuplicateSymbol(symbol));
            }
        }

        Ok(Self { symbols })
    }

    /// Numeric base of the alphabet.
    pub fn base(&self) -> u128 {
        self.symbols.len() as u128
    }

    /// Value of `symbol`, if it belongs to the alphabet.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    fn zero(&self) -> char {
        self.symbols[0]
    }
}

/// Converts numbers between a source and a target alphabet.
#[derive(Debug, Clone)]
pub struct BaseConverter {
    source: Alphabet,
    target: Alphabet,
}

impl BaseConverter {
    pub fn new(source: Alphabet, target: Alphabet) -> Self {
        Self { source, target }
    }

    /// Converts a number written in the source alphabet into the target alphabet.
    pub fn convert(&self, number: &str) -> Result<String, ConversionError> {
        convert(number, &self.source, &self.target)
    }

    /// Converts a number written in the target alphabet back into the source alphabet.
    pub fn reverse(&self, number: &str) -> Result<String, ConversionError> {
        convert(number, &self.target, &self.source)
    }

    pub fn source(&self) -> &Alphabet {
        &self.source
    }

    pub fn target(&self) -> &Alphabet {
        &self.target
    }
}

/// Converts `number` from the digits of `from` into the digits of `to`.
///
/// A leading `-` is carried over to any non-zero result.
///
/// # Errors
///
/// - [`ConversionError::Empty`] when there are no digits after the sign
/// - [`ConversionError::InvalidSymbol`] when a digit is not in `from`
/// - [`ConversionError::Overflow`] when the value exceeds `u128::MAX`
pub fn convert(number: &str, from: &Alphabet, to: &Alphabet) -> Result<String, ConversionError> {
    let (negative, digits) = match number.strip_prefix(SIGN) {
        Some(rest) => (true, rest),
        None => (false, number),
    };

    let value = decode_magnitude(digits, from)?;
    let mut encoded = encode_magnitude(value, to);

    if negative && value != 0 {
        encoded.insert(0, SIGN);
    }

    Ok(encoded)
}

fn decode_magnitude(digits: &str, alphabet: &Alphabet) -> Result<u128, ConversionError> {
    if digits.is_empty() {
        return Err(ConversionError::Empty);
    }

    let base = alphabet.base();
    let mut value: u128 = 0;

    for (position, symbol) in digits.chars().enumerate() {
        let digit = alphabet
            .index_of(symbol)
            .ok_or(ConversionError::InvalidSymbol { symbol, position })?;

        value = value
            .checked_mul(base)
            .and_then(|v| v.checked_add(digit as u128))
            .ok_or(ConversionError::Overflow)?;
    }

    Ok(value)
}

fn encode_magnitude(mut value: u128, alphabet: &Alphabet) -> String {
    if value == 0 {
        return alphabet.zero().to_string();
    }

    let base = alphabet.base();
    let mut reversed = Vec::new();

    while value > 0 {
        reversed.push(alphabet.symbol((value % base) as usize));
        value /= base;
    }

    reversed.into_iter().rev().collect()
}

/// Converter fixed to decimal on the source side.
#[derive(Debug, Clone)]
pub struct DecimalBaseConverter {
    inner: BaseConverter,
}

impl DecimalBaseConverter {
    /// Builds a converter between decimal and `target`.
    pub fn new(target: Alphabet) -> Self {
        let decimal = Alphabet {
            symbols: BASE10.chars().collect(),
        };
        Self {
            inner: BaseConverter::new(decimal, target),
        }
    }

    /// Encodes a decimal integer with the target alphabet.
    pub fn from_decimal(&self, value: i128) -> String {
        let magnitude = encode_magnitude(value.unsigned_abs(), self.inner.target());
        if value < 0 {
            format!("{SIGN}{magnitude}")
        } else {
            magnitude
        }
    }

    /// Decodes a number written in the target alphabet to a decimal integer.
    ///
    /// # Errors
    ///
    /// Same as [`convert`], plus [`ConversionError::Overflow`] when the value
    /// does not fit in an `i128`.
    pub fn to_decimal(&self, number: &str) -> Result<i128, ConversionError> {
        let (negative, digits) = match number.strip_prefix(SIGN) {
            Some(rest) => (true, rest),
            None => (false, number),
        };

        let magnitude = decode_magnitude(digits, self.inner.target())?;

        if negative {
            0i128
                .checked_sub_unsigned(magnitude)
                .ok_or(ConversionError::Overflow)
        } else {
            i128::try_from(magnitude).map_err(|_| ConversionError::Overflow)
        }
    }

    pub fn target(&self) -> &Alphabet {
        self.inner.target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet(digits: &str) -> Alphabet {
        Alphabet::new(digits).unwrap()
    }

    #[test]
    fn test_decimal_to_binary() {
        let converter = DecimalBaseConverter::new(alphabet(BASE2));
        assert_eq!(converter.from_decimal(555), "1000101011");
        assert_eq!(converter.to_decimal("1000101011").unwrap(), 555);
    }

    #[test]
    fn test_decimal_to_base4() {
        let converter = DecimalBaseConverter::new(alphabet(BASE4));
        assert_eq!(converter.from_decimal(99), "1203");
    }

    #[test]
    fn test_base4_to_base5_alphabetic_and_back() {
        let converter = BaseConverter::new(alphabet(BASE4), alphabet(BASE5_ALPHABETIC));
        assert_eq!(converter.convert("1203").unwrap(), "dee");
        assert_eq!(converter.reverse("dee").unwrap(), "1203");
    }

    #[test]
    fn test_base5_alphabetic_to_decimal() {
        let converter = BaseConverter::new(alphabet(BASE5_ALPHABETIC), alphabet(BASE10));
        assert_eq!(converter.convert("dee").unwrap(), "99");
    }

    #[test]
    fn test_decimal_to_base62() {
        let converter = DecimalBaseConverter::new(alphabet(BASE62));
        assert_eq!(converter.from_decimal(257_938_572_394), "E78Lxik");
        assert_eq!(converter.to_decimal("E78Lxik").unwrap(), 257_938_572_394);
    }

    #[test]
    fn test_decimal_to_hex() {
        let converter = DecimalBaseConverter::new(alphabet(BASE16));
        assert_eq!(converter.from_decimal(255), "FF");
        assert_eq!(converter.from_decimal(4096), "1000");
        assert_eq!(converter.to_decimal("CAFE").unwrap(), 51966);
    }

    #[test]
    fn test_zero_encodes_to_first_symbol() {
        let converter = BaseConverter::new(alphabet(BASE10), alphabet(BASE5_ALPHABETIC));
        assert_eq!(converter.convert("0").unwrap(), "a");
        assert_eq!(converter.convert("000").unwrap(), "a");
    }

    #[test]
    fn test_negative_sign_is_preserved() {
        let converter = BaseConverter::new(alphabet(BASE10), alphabet(BASE2));
        assert_eq!(converter.convert("-5").unwrap(), "-101");
        assert_eq!(converter.reverse("-101").unwrap(), "-5");

        let decimal = DecimalBaseConverter::new(alphabet(BASE62));
        assert_eq!(decimal.from_decimal(-1), "-B");
        assert_eq!(decimal.to_decimal("-B").unwrap(), -1);
    }

    #[test]
    fn test_negative_zero_drops_sign() {
        let converter = BaseConverter::new(alphabet(BASE10), alphabet(BASE2));
        assert_eq!(converter.convert("-0").unwrap(), "0");
    }

    #[test]
    fn test_leading_zeros_are_not_preserved() {
        let converter = BaseConverter::new(alphabet(BASE10), alphabet(BASE16));
        assert_eq!(converter.convert("0042").unwrap(), "2A");
        assert_eq!(converter.reverse("2A").unwrap(), "42");
    }

    #[test]
    fn test_invalid_symbol_reports_position() {
        let converter = BaseConverter::new(alphabet(BASE2), alphabet(BASE10));
        let err = converter.convert("1021").unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidSymbol {
                symbol: '2',
                position: 2
            }
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let converter = BaseConverter::new(alphabet(BASE10), alphabet(BASE62));
        assert_eq!(converter.convert("").unwrap_err(), ConversionError::Empty);
        assert_eq!(converter.convert("-").unwrap_err(), ConversionError::Empty);
    }

    #[test]
    fn test_overflow_is_rejected() {
        let converter = BaseConverter::new(alphabet(BASE62), alphabet(BASE10));
        let huge = "z".repeat(40);
        assert_eq!(converter.convert(&huge).unwrap_err(), ConversionError::Overflow);
    }

    #[test]
    fn test_u128_max_round_trips() {
        let converter = BaseConverter::new(alphabet(BASE10), alphabet(BASE62));
        let max = u128::MAX.to_string();
        let encoded = converter.convert(&max).unwrap();
        assert_eq!(converter.reverse(&encoded).unwrap(), max);
    }

    #[test]
    fn test_to_decimal_i128_bounds() {
        let converter = DecimalBaseConverter::new(alphabet(BASE16));
        let min = converter.from_decimal(i128::MIN);
        assert_eq!(converter.to_decimal(&min).unwrap(), i128::MIN);

        let max = converter.from_decimal(i128::MAX);
        assert_eq!(converter.to_decimal(&max).unwrap(), i128::MAX);

        let too_big = encode_magnitude(i128::MAX as u128 + 1, converter.target());
        assert_eq!(
            converter.to_decimal(&too_big).unwrap_err(),
            ConversionError::Overflow
        );
    }

    #[test]
    fn test_mismatched_alphabets_are_not_inverse() {
        let forward = BaseConverter::new(alphabet(BASE10), alphabet(BASE16));
        let other = BaseConverter::new(alphabet(BASE10), alphabet("0123456789abcdef"));
        let encoded = forward.convert("255").unwrap();
        assert_eq!(encoded, "FF");
        assert!(other.reverse(&encoded).is_err());
    }

    #[test]
    fn test_decimal_round_trip_range() {
        for base in [BASE2, BASE4, BASE5_ALPHABETIC, BASE16, BASE62] {
            let converter = DecimalBaseConverter::new(alphabet(base));
            for n in (-1_000..=1_000).chain([i64::MAX as i128, i64::MIN as i128]) {
                let encoded = converter.from_decimal(n);
                assert_eq!(converter.to_decimal(&encoded).unwrap(), n, "base {base}");
            }
        }
    }

    #[test]
    fn test_alphabet_validation() {
        assert_eq!(
            Alphabet::new("0").unwrap_err(),
            ConversionError::AlphabetTooSmall(1)
        );
        assert_eq!(
            Alphabet::new("").unwrap_err(),
            ConversionError::AlphabetTooSmall(0)
        );
        assert_eq!(
            Alphabet::new("0120").unwrap_err(),
            ConversionError::DuplicateSymbol('0')
        );
        assert_eq!(Alphabet::new(BASE62).unwrap().base(), 62);
    }

    #[test]
    fn test_unicode_alphabet() {
        let converter = BaseConverter::new(alphabet(BASE10), alphabet("○●"));
        assert_eq!(converter.convert("6").unwrap(), "●●○");
        assert_eq!(converter.reverse("●●○").unwrap(), "6");
    }
}
