//! In-browser sandbox backend
//!
//! Keeps LP positions and allowances in memory so the whole flow can be
//! exercised without sending anything on-chain. Failures can be queued to
//! rehearse the error paths (a rejected signature, a reverted migration).

use std::collections::{BTreeMap, HashMap, VecDeque};

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use tokio::sync::Mutex;

use super::MigrationBackend;
use crate::console_info;
use crate::features::migrate::{ApprovalState, LpToken, MetamaskError, MigrationMode, MigrationRequest};
use crate::services::config::SandboxConfig;
use crate::services::errors::{WalletError, WalletResult};

const DEMO_INVENTORY: &str = include_str!("sandbox_inventory.json");

#[derive(Default)]
struct Ledger {
    positions: BTreeMap<u64, Vec<LpToken>>,
    allowances: HashMap<(Address, Address), U256>,
    queued_failures: VecDeque<MetamaskError>,
}

impl Ledger {
    fn take_failure(&mut self, method: &str) -> WalletResult<()> {
        match self.queued_failures.pop_front() {
            Some(source) => Err(WalletError::Rpc {
                method: method.to_string(),
                source,
            }),
            None => Ok(()),
        }
    }
}

pub struct SandboxBackend {
    ledger: Mutex<Ledger>,
    config: SandboxConfig,
}

impl SandboxBackend {
    pub fn new(positions: BTreeMap<u64, Vec<LpToken>>, config: SandboxConfig) -> Self {
        Self {
            ledger: Mutex::new(Ledger {
                positions,
                ..Ledger::default()
            }),
            config,
        }
    }

    /// Sample Uniswap and PancakeSwap positions
    pub fn demo(config: SandboxConfig) -> Result<Self, serde_json::Error> {
        let positions: BTreeMap<u64, Vec<LpToken>> = serde_json::from_str(DEMO_INVENTORY)?;
        Ok(Self::new(positions, config))
    }

    /// Make the next wallet request fail with `error`
    pub async fn queue_failure(&self, error: MetamaskError) {
        self.ledger.lock().await.queued_failures.push_back(error);
    }

    async fn wallet_delay(&self, ms: u32) {
        if ms > 0 {
            gloo_timers::future::TimeoutFuture::new(ms).await;
        }
    }
}

#[async_trait(?Send)]
impl MigrationBackend for SandboxBackend {
    async fn lp_tokens(&self, account: Address, chain_id: u64) -> WalletResult<Vec<LpToken>> {
        self.wallet_delay(self.config.inventory_latency_ms).await;
        let ledger = self.ledger.lock().await;
        let tokens = ledger.positions.get(&chain_id).cloned().unwrap_or_default();
        console_info!(
            "[Sandbox] {} LP positions for {} on chain {}",
            tokens.len(),
            account,
            chain_id
        );
        Ok(tokens)
    }

    async fn approval_state(
        &self,
        token: &LpToken,
        _owner: Address,
        spender: Address,
    ) -> WalletResult<ApprovalState> {
        let ledger = self.ledger.lock().await;
        let allowance = ledger
            .allowances
            .get(&(token.address, spender))
            .copied()
            .unwrap_or_default();
        Ok(if !allowance.is_zero() && allowance >= token.balance {
            ApprovalState::Approved
        } else {
            ApprovalState::NotApproved
        })
    }

    async fn approve(&self, token: &LpToken, spender: Address, amount: U256) -> WalletResult<()> {
        self.ledger.lock().await.take_failure("eth_sendTransaction")?;
        self.wallet_delay(self.config.latency_ms).await;
        self.ledger
            .lock()
            .await
            .allowances
            .insert((token.address, spender), amount);
        console_info!("[Sandbox] Approved {} for {}", token.pair_label(), spender);
        Ok(())
    }

    async fn migrate(&self, request: MigrationRequest) -> WalletResult<()> {
        let method = match request.mode {
            MigrationMode::Permit => "eth_signTypedData_v4",
            MigrationMode::Approve => "eth_sendTransaction",
        };
        self.ledger.lock().await.take_failure(method)?;
        self.wallet_delay(self.config.latency_ms).await;

        let mut ledger = self.ledger.lock().await;
        let revert = |reason: &str| WalletError::Rpc {
            method: "eth_sendTransaction".to_string(),
            source: MetamaskError::new(-32603, format!("execution reverted: {}", reason)),
        };

        if request.mode == MigrationMode::Approve {
            let allowance = ledger
                .allowances
                .iter()
                .find(|((token, _), _)| *token == request.lp_token.address)
                .map(|(_, allowance)| *allowance)
                .unwrap_or_default();
            if allowance < request.amount {
                return Err(revert("transfer amount exceeds allowance"));
            }
        }

        let position = ledger
            .positions
            .get_mut(&request.chain_id)
            .and_then(|tokens| {
                tokens
                    .iter_mut()
                    .find(|t| t.address == request.lp_token.address)
            })
            .ok_or_else(|| revert("unknown pair"))?;

        position.balance = position
            .balance
            .checked_sub(request.amount)
            .ok_or_else(|| revert("transfer amount exceeds balance"))?;

        console_info!(
            "[Sandbox] Migrated {} of {} for {}",
            request.amount,
            request.lp_token.pair_label(),
            request.account
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sandbox"
    }
}
