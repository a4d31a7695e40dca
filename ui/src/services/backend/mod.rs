//! Migration backend seam
//!
//! The page never builds transactions itself. Everything that touches the chain
//! (reading LP positions, allowances, sending the approve and migrate calls)
//! goes through [`MigrationBackend`].

mod sandbox;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;

use crate::features::migrate::{ApprovalState, LpToken, MigrationRequest};
use crate::services::errors::WalletResult;

pub use sandbox::SandboxBackend;

#[async_trait(?Send)]
pub trait MigrationBackend {
    /// LP positions `account` holds on the source exchange of `chain_id`
    async fn lp_tokens(&self, account: Address, chain_id: u64) -> WalletResult<Vec<LpToken>>;

    /// Whether `spender` may already move the whole balance of `token`
    async fn approval_state(
        &self,
        token: &LpToken,
        owner: Address,
        spender: Address,
    ) -> WalletResult<ApprovalState>;

    /// Send the approval transaction and wait for it to be mined
    async fn approve(&self, token: &LpToken, spender: Address, amount: U256) -> WalletResult<()>;

    /// Send the migration transaction and wait for it to be mined
    async fn migrate(&self, request: MigrationRequest) -> WalletResult<()>;

    fn name(&self) -> &'static str;
}
