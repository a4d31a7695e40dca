//! Page configuration
//!
//! Built-in defaults cover mainnet; anything else (other chains, a local fork's
//! migrator address, sandbox latency) can be overridden by storing a JSON
//! document under [`CONFIG_STORAGE_KEY`] in localStorage.

use std::sync::OnceLock;

use alloy_primitives::{address, Address};
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::console_warn;
use crate::features::migrate::{CHAIN_ID_BSC, CHAIN_ID_MAINNET};

pub const CONFIG_STORAGE_KEY: &str = "migrate_config";

/// SushiRoll, the contract that pulls LP tokens and re-adds them on SushiSwap
const MAINNET_MIGRATOR: Address = address!("16E58463eb9792Bc236d8860F5BC69A81E26E32B");
/// SushiRoll deployment that migrates PancakeSwap pairs
const BSC_MIGRATOR: Address = address!("677978dE066b3f5414eeA56644d9fCa3c75482a1");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("chain {0} is configured more than once")]
    DuplicateChain(u64),

    #[error("migrator for chain {0} is the zero address")]
    ZeroMigrator(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainContracts {
    pub chain_id: u64,
    /// Spender the approve mode authorizes
    pub migrator: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Simulated wallet round trip for approve / migrate
    pub latency_ms: u32,
    /// Delay before the LP inventory shows up
    pub inventory_latency_ms: u32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1200,
            inventory_latency_ms: 400,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrateConfig {
    pub chains: Vec<ChainContracts>,
    pub sandbox: SandboxConfig,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            chains: vec![
                ChainContracts {
                    chain_id: CHAIN_ID_MAINNET,
                    migrator: MAINNET_MIGRATOR,
                },
                ChainContracts {
                    chain_id: CHAIN_ID_BSC,
                    migrator: BSC_MIGRATOR,
                },
            ],
            sandbox: SandboxConfig::default(),
        }
    }
}

impl MigrateConfig {
    /// Migration contract used as the approval spender on `chain_id`
    pub fn spender_for(&self, chain_id: Option<u64>) -> Option<Address> {
        let chain_id = chain_id?;
        self.chains
            .iter()
            .find(|c| c.chain_id == chain_id)
            .map(|c| c.migrator)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = Vec::with_capacity(self.chains.len());
        for chain in &self.chains {
            if chain.migrator == Address::ZERO {
                return Err(ConfigError::ZeroMigrator(chain.chain_id));
            }
            if seen.contains(&chain.chain_id) {
                return Err(ConfigError::DuplicateChain(chain.chain_id));
            }
            seen.push(chain.chain_id);
        }
        Ok(())
    }

    /// Defaults overlaid with the localStorage override, if a valid one exists
    pub fn load() -> Self {
        match LocalStorage::get::<MigrateConfig>(CONFIG_STORAGE_KEY) {
            Ok(config) => match config.validate() {
                Ok(()) => config,
                Err(e) => {
                    console_warn!("[Config] Ignoring stored configuration: {}", e);
                    Self::default()
                }
            },
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Self::default(),
            Err(e) => {
                console_warn!("[Config] Could not read stored configuration: {}", e);
                Self::default()
            }
        }
    }
}

static GLOBAL_CONFIG: OnceLock<MigrateConfig> = OnceLock::new();

/// Get the page configuration, read once per session
pub fn get_global_config() -> MigrateConfig {
    GLOBAL_CONFIG.get_or_init(MigrateConfig::load).clone()
}
