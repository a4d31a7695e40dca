//! Fixed-point token amounts
//!
//! Balances are raw `U256` integers in the token's smallest unit. The user types
//! decimal strings; converting between the two never goes through floating point.

use alloy_primitives::U256;
use thiserror::Error;

use super::types::LpToken;

/// 0.01 of an 18-decimal native asset, kept back on MAX so gas can still be paid
pub const NATIVE_GAS_RESERVE: U256 = U256::from_limbs([10_000_000_000_000_000, 0, 0, 0]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("missing value")]
    Empty,

    #[error("invalid character in amount: {0:?}")]
    InvalidCharacter(char),

    #[error("fractional component exceeds {decimals} decimals")]
    TooManyDecimals { decimals: u8 },

    #[error("amount does not fit in 256 bits")]
    Overflow,
}

/// 10^decimals, or `None` if it would not fit
pub fn pow10(decimals: u8) -> Option<U256> {
    U256::from(10u64).checked_pow(U256::from(decimals))
}

/// Render a raw amount with `decimals` fractional digits.
///
/// Trailing zeros are trimmed but at least one fractional digit is kept
/// (`1.0`, `0.01`); with zero decimals only the whole part is printed.
pub fn format_units(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    let scale = decimals as usize;
    if scale == 0 {
        return digits;
    }

    let padded = if digits.len() <= scale {
        format!("{}{}", "0".repeat(scale - digits.len() + 1), digits)
    } else {
        digits
    };
    let (whole, fraction) = padded.split_at(padded.len() - scale);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}.0", whole)
    } else {
        format!("{}.{}", whole, fraction)
    }
}

/// Parse a user-typed decimal string into a raw amount at `decimals` precision
pub fn parse_units(input: &str, decimals: u8) -> Result<U256, AmountError> {
    let input = input.trim();
    if input.is_empty() || input == "." {
        return Err(AmountError::Empty);
    }
    if let Some(bad) = input.chars().find(|c| !c.is_ascii_digit() && *c != '.') {
        return Err(AmountError::InvalidCharacter(bad));
    }

    let mut parts = input.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next().unwrap_or("");
    if fraction.contains('.') {
        return Err(AmountError::InvalidCharacter('.'));
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > decimals as usize {
        return Err(AmountError::TooManyDecimals { decimals });
    }

    let scale = pow10(decimals).ok_or(AmountError::Overflow)?;
    let whole = if whole.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(whole, 10).map_err(|_| AmountError::Overflow)?
    };

    let fraction = if fraction.is_empty() {
        U256::ZERO
    } else {
        let padded = format!("{:0<width$}", fraction, width = decimals as usize);
        U256::from_str_radix(&padded, 10).map_err(|_| AmountError::Overflow)?
    };

    whole
        .checked_mul(scale)
        .and_then(|w| w.checked_add(fraction))
        .ok_or(AmountError::Overflow)
}

/// Normalise what the user typed into the amount field.
///
/// Commas become dots. Returns `None` when the text is not a plain decimal
/// (digits with at most one dot) so the caller keeps the previous value.
pub fn sanitize_amount_input(raw: &str) -> Option<String> {
    let normalised = raw.replace(',', ".");
    let mut seen_dot = false;
    for c in normalised.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return None,
        }
    }
    Some(normalised)
}

/// Largest amount the MAX shortcut offers for this token
pub fn max_spendable(token: &LpToken) -> U256 {
    if token.is_native() {
        token.balance.saturating_sub(NATIVE_GAS_RESERVE)
    } else {
        token.balance
    }
}

/// MAX shortcut as text for the amount field
pub fn max_amount_text(token: &LpToken) -> String {
    format_units(max_spendable(token), token.decimals)
}

/// Outcome of checking the typed amount against the selected balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountCheck {
    Sufficient(U256),
    Insufficient(U256),
    Invalid(AmountError),
}

impl AmountCheck {
    /// Compare `amount` (empty counts as zero) with `balance`
    pub fn evaluate(balance: U256, amount: &str, decimals: u8) -> Self {
        let requested = if amount.trim().is_empty() {
            Ok(U256::ZERO)
        } else {
            parse_units(amount, decimals)
        };
        match requested {
            Ok(value) if balance < value => AmountCheck::Insufficient(value),
            Ok(value) => AmountCheck::Sufficient(value),
            Err(e) => AmountCheck::Invalid(e),
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, AmountCheck::Insufficient(_))
    }
}
