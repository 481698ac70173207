//! Parsing utilities for exchange-format index tokens
//!
//! Pure parsing functions with no I/O. Element values are parsed through
//! their own `FromStr`; only the integer tokens are handled here.

use crate::SpmatError;

/// Parse a usize from a decimal token
///
/// Only ASCII digits are accepted; signs and whitespace are rejected.
pub fn parse_usize(s: &str) -> Result<usize, SpmatError> {
    if s.is_empty() {
        return Err(SpmatError::InvalidIndex);
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(SpmatError::InvalidIndex);
        }

        let digit = (byte - b'0') as usize;

        // Check for overflow
        if result > (usize::MAX - digit) / 10 {
            return Err(SpmatError::InvalidIndex);
        }

        result = result * 10 + digit;
    }

    Ok(result)
}

/// Parse a 1-based index token and return the 0-based index
///
/// `0` has no 0-based counterpart and is rejected.
pub fn parse_one_based(s: &str) -> Result<usize, SpmatError> {
    parse_usize(s)?
        .checked_sub(1)
        .ok_or(SpmatError::InvalidIndex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_usize() {
        assert_eq!(parse_usize("0"), Ok(0));
        assert_eq!(parse_usize("131"), Ok(131));
        assert_eq!(parse_usize("999999"), Ok(999999));

        // Invalid cases
        assert_eq!(parse_usize(""), Err(SpmatError::InvalidIndex));
        assert_eq!(parse_usize("abc"), Err(SpmatError::InvalidIndex));
        assert_eq!(parse_usize("12a"), Err(SpmatError::InvalidIndex));
        assert_eq!(parse_usize("-1"), Err(SpmatError::InvalidIndex));
        assert_eq!(parse_usize("1.0"), Err(SpmatError::InvalidIndex));
        assert_eq!(
            parse_usize("999999999999999999999999999"),
            Err(SpmatError::InvalidIndex)
        );
    }

    #[test]
    fn test_parse_one_based() {
        assert_eq!(parse_one_based("1"), Ok(0));
        assert_eq!(parse_one_based("131"), Ok(130));
        assert_eq!(parse_one_based("0"), Err(SpmatError::InvalidIndex));
        assert_eq!(parse_one_based("x"), Err(SpmatError::InvalidIndex));
    }
}
