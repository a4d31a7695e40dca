// Core types for the LP migration page - no dioxus imports needed here
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::serialization::{deserialize_u256_flexible, serialize_u256_decimal};

/// Chain ids the page knows an exchange for
pub const CHAIN_ID_MAINNET: u64 = 1;
pub const CHAIN_ID_BSC: u64 = 56;

/// EIP-1193 code for "user rejected the request"
pub const USER_REJECTED_CODE: i64 = 4001;

/// One side of an LP pair
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

/// A liquidity pool position held by the connected account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LpToken {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "tokenA")]
    pub token_a: TokenInfo,
    #[serde(rename = "tokenB")]
    pub token_b: TokenInfo,
    #[serde(
        serialize_with = "serialize_u256_decimal",
        deserialize_with = "deserialize_u256_flexible"
    )]
    pub balance: U256,
}

impl LpToken {
    /// `A/B` label used in rows and the info line
    pub fn pair_label(&self) -> String {
        format!("{}/{}", self.token_a.symbol, self.token_b.symbol)
    }

    /// The zero address stands in for the chain's native asset
    pub fn is_native(&self) -> bool {
        self.address == Address::ZERO
    }

    pub fn has_balance(&self) -> bool {
        !self.balance.is_zero()
    }
}

/// How the user authorizes the migration contract
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MigrationMode {
    /// Off-chain signature, one click
    Permit,
    /// On-chain approval first, for hardware wallets
    Approve,
}

impl MigrationMode {
    pub const ALL: [MigrationMode; 2] = [MigrationMode::Permit, MigrationMode::Approve];

    pub fn key(&self) -> &'static str {
        match self {
            MigrationMode::Permit => "permit",
            MigrationMode::Approve => "approve",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MigrationMode::Permit => "Non-hardware Wallet",
            MigrationMode::Approve => "Hardware Wallet",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MigrationMode::Permit => "Migration is done in one-click using your signature (permit)",
            MigrationMode::Approve => "You need to first approve LP tokens and then migrate it",
        }
    }
}

/// Spender authorization lifecycle, only meaningful in approve mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApprovalState {
    #[default]
    NotApproved,
    Pending,
    Approved,
}

/// Source exchange the liquidity is migrated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    Uniswap,
    PancakeSwapV1,
}

impl Exchange {
    pub fn from_chain_id(chain_id: Option<u64>) -> Option<Self> {
        match chain_id {
            Some(CHAIN_ID_MAINNET) => Some(Exchange::Uniswap),
            Some(CHAIN_ID_BSC) => Some(Exchange::PancakeSwapV1),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Exchange::Uniswap => "Uniswap",
            Exchange::PancakeSwapV1 => "PancakeSwapV1",
        }
    }

    pub fn version_tag(&self) -> &'static str {
        match self {
            Exchange::Uniswap => "v2",
            Exchange::PancakeSwapV1 => "v1",
        }
    }
}

/// Label used in page text; an unknown chain renders as blank
pub fn exchange_label(exchange: Option<Exchange>) -> &'static str {
    exchange.map(|e| e.name()).unwrap_or("")
}

/// Version badge for a row; blank for an unknown chain
pub fn version_tag(exchange: Option<Exchange>) -> &'static str {
    exchange.map(|e| e.version_tag()).unwrap_or("")
}

/// Error object returned by an EIP-1193 provider (or the backend) for a failed request
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("{}", .message.as_deref().unwrap_or("Unknown wallet error"))]
pub struct MetamaskError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl MetamaskError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: Some(message.into()),
        }
    }

    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: Some(message.into()),
        }
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(USER_REJECTED_CODE)
    }

    /// Text shown under the buttons, if any
    pub fn display_message(&self) -> Option<&str> {
        if self.is_user_rejection() {
            return None;
        }
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// Connected wallet as seen by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalletContext {
    pub account: Option<Address>,
    pub chain_id: Option<u64>,
}

impl WalletContext {
    pub fn exchange(&self) -> Option<Exchange> {
        Exchange::from_chain_id(self.chain_id)
    }
}

/// Everything a backend needs to submit one migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRequest {
    pub account: Address,
    pub chain_id: u64,
    pub mode: MigrationMode,
    pub lp_token: LpToken,
    pub amount: U256,
}
