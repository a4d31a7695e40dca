//! Serialization utilities for WASM/JavaScript compatibility

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serializer};

/// Maximum safe integer value in JavaScript (2^53 - 1)
const MAX_SAFE_INTEGER: u64 = (1u64 << 53) - 1;

/// Serialize a token balance as a decimal string so it survives a round trip
/// through JavaScript numbers
pub fn serialize_u256_decimal<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

/// Deserialize a balance that might be a decimal string, a `0x` hex string or a number
pub fn deserialize_u256_flexible<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum U256OrString {
        Number(u64),
        String(String),
    }

    match U256OrString::deserialize(deserializer)? {
        U256OrString::Number(n) => {
            if n > MAX_SAFE_INTEGER {
                crate::console_warn!(
                    "[Serialization] Balance {} exceeds the JS safe integer range, prefer strings",
                    n
                );
            }
            Ok(U256::from(n))
        }
        U256OrString::String(s) => parse_u256(&s).map_err(serde::de::Error::custom),
    }
}

/// Parse a decimal or `0x`-prefixed hex quantity
pub fn parse_u256(raw: &str) -> Result<U256, String> {
    let trimmed = raw.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) if hex.is_empty() => Ok(U256::ZERO),
        Some(hex) => U256::from_str_radix(hex, 16),
        None => U256::from_str_radix(trimmed, 10),
    };
    parsed.map_err(|e| format!("invalid quantity '{}': {}", raw, e))
}

/// Parse an EIP-1193 hex quantity (chain ids, block numbers) into a u64
pub fn parse_hex_u64(raw: &str) -> Result<u64, String> {
    let hex = raw
        .trim()
        .strip_prefix("0x")
        .ok_or_else(|| format!("expected 0x-prefixed quantity, got '{}'", raw))?;
    u64::from_str_radix(hex, 16).map_err(|e| format!("invalid quantity '{}': {}", raw, e))
}
