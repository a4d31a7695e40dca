//! Async workflows started from the page
//!
//! Each one talks to the backend and reports back only through `dispatch`, so
//! the same code runs inside a Dioxus task or a plain test executor.

use alloy_primitives::{Address, U256};

use super::amount::parse_units;
use super::state::{MigrateAction, MigrateState};
use super::types::{ApprovalState, LpToken, MetamaskError, MigrationRequest, WalletContext};
use crate::services::backend::MigrationBackend;
use crate::services::errors::WalletError;
use crate::{console_error, console_info, console_warn};

/// Fetch the inventory for a (new) wallet context, starting from a clean page
pub async fn load_lp_tokens(
    backend: &dyn MigrationBackend,
    wallet: WalletContext,
    dispatch: &dyn Fn(MigrateAction),
) {
    dispatch(MigrateAction::Reset(wallet));
    let (Some(account), Some(chain_id)) = (wallet.account, wallet.chain_id) else {
        return;
    };

    dispatch(MigrateAction::SetLoading(true));
    let tokens = match backend.lp_tokens(account, chain_id).await {
        Ok(tokens) => tokens,
        Err(e) => {
            console_error!("[Migrate] Failed to load LP tokens: {}", e);
            Vec::new()
        }
    };
    dispatch(MigrateAction::LpTokensLoaded(wallet, tokens));
}

/// Re-read balances without leaving the flow
pub async fn refresh_lp_tokens(
    backend: &dyn MigrationBackend,
    wallet: WalletContext,
    dispatch: &dyn Fn(MigrateAction),
) {
    let (Some(account), Some(chain_id)) = (wallet.account, wallet.chain_id) else {
        return;
    };

    dispatch(MigrateAction::SetUpdatingLpTokens(true));
    match backend.lp_tokens(account, chain_id).await {
        Ok(tokens) => dispatch(MigrateAction::LpTokensLoaded(wallet, tokens)),
        Err(e) => console_warn!("[Migrate] Balance refresh failed: {}", e),
    }
    dispatch(MigrateAction::SetUpdatingLpTokens(false));
}

/// Look up whether the migrator may already spend the selected token
pub async fn refresh_approval(
    backend: &dyn MigrationBackend,
    wallet: WalletContext,
    token: LpToken,
    spender: Option<Address>,
    dispatch: &dyn Fn(MigrateAction),
) {
    let checked = |approval| MigrateAction::ApprovalChecked {
        wallet,
        token: token.address,
        approval,
    };
    let (Some(owner), Some(spender)) = (wallet.account, spender) else {
        dispatch(checked(ApprovalState::NotApproved));
        return;
    };

    match backend.approval_state(&token, owner, spender).await {
        Ok(approval) => dispatch(checked(approval)),
        Err(e) => {
            console_warn!("[Migrate] Could not read allowance: {}", e);
            dispatch(checked(ApprovalState::NotApproved));
        }
    }
}

/// Approve the migrator for the selected token; without one the reason is shown instead
pub async fn approve_selected(
    backend: &dyn MigrationBackend,
    wallet: WalletContext,
    token: LpToken,
    spender: Option<Address>,
    dispatch: &dyn Fn(MigrateAction),
) {
    let Some(spender) = spender else {
        let error = match wallet.chain_id {
            Some(chain_id) => WalletError::NoMigrator { chain_id },
            None => WalletError::NotConnected,
        };
        console_error!("[Migrate] Cannot approve: {}", error);
        dispatch(MigrateAction::SetMigrationError(Some(error.into())));
        return;
    };

    dispatch(MigrateAction::SetApproval(ApprovalState::Pending));
    match backend.approve(&token, spender, U256::MAX).await {
        Ok(()) => {
            console_info!("[Migrate] {} approved for {}", token.pair_label(), spender);
            dispatch(MigrateAction::SetApproval(ApprovalState::Approved));
        }
        Err(e) => {
            console_error!("[Migrate] Failed to approve token: {}", e);
            dispatch(MigrateAction::SetApproval(ApprovalState::NotApproved));
        }
    }
}

/// Turn the current page state into a request the backend can submit
pub fn build_request(
    wallet: WalletContext,
    state: &MigrateState,
) -> Result<MigrationRequest, MetamaskError> {
    let (Some(account), Some(chain_id)) = (wallet.account, wallet.chain_id) else {
        return Err(WalletError::NotConnected.into());
    };
    let mode = state
        .mode
        .ok_or_else(|| MetamaskError::from_message("Select a wallet type first"))?;
    let lp_token = state
        .selected_lp_token
        .clone()
        .ok_or_else(|| MetamaskError::from_message("Select a pair first"))?;
    let amount = parse_units(&state.amount, lp_token.decimals)
        .map_err(|e| MetamaskError::from_message(e.to_string()))?;

    Ok(MigrationRequest {
        account,
        chain_id,
        mode,
        lp_token,
        amount,
    })
}

/// Submit the migration; failures end up in `state.error`, user rejections stay hidden
pub async fn submit_migration(
    backend: &dyn MigrationBackend,
    wallet: WalletContext,
    state: MigrateState,
    dispatch: &dyn Fn(MigrateAction),
) {
    dispatch(MigrateAction::SetMigrationError(None));
    let request = match build_request(wallet, &state) {
        Ok(request) => request,
        Err(e) => {
            console_error!("[Migrate] {}", e);
            dispatch(MigrateAction::SetMigrationError(Some(e)));
            return;
        }
    };

    dispatch(MigrateAction::SetMigrationPending(true));
    let result = backend.migrate(request.clone()).await;
    dispatch(MigrateAction::SetMigrationPending(false));

    match result {
        Ok(()) => {
            console_info!(
                "[Migrate] Migrated {} {} via {}",
                request.amount,
                request.lp_token.pair_label(),
                backend.name()
            );
            dispatch(MigrateAction::MigrationSucceeded);
            refresh_lp_tokens(backend, wallet, dispatch).await;
        }
        Err(e) => {
            console_error!("[Migrate] Migration failed: {:?}", e);
            dispatch(MigrateAction::SetMigrationError(Some(e.into())));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::migrate::{MigrationMode, CHAIN_ID_BSC, CHAIN_ID_MAINNET};
    use crate::services::backend::SandboxBackend;
    use crate::services::config::SandboxConfig;
    use crate::services::errors::WalletResult;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use tokio::sync::Notify;

    fn backend() -> SandboxBackend {
        SandboxBackend::demo(SandboxConfig {
            latency_ms: 0,
            inventory_latency_ms: 0,
        })
        .unwrap()
    }

    fn mainnet() -> WalletContext {
        WalletContext {
            account: Some(Address::repeat_byte(0xaa)),
            chain_id: Some(CHAIN_ID_MAINNET),
        }
    }

    fn store() -> RefCell<MigrateState> {
        RefCell::new(MigrateState::default())
    }

    #[tokio::test]
    async fn loading_fills_inventory_and_clears_flag() {
        let backend = backend();
        let state = store();
        let dispatch = |a: MigrateAction| state.borrow_mut().reduce_in_place(a);

        load_lp_tokens(&backend, mainnet(), &dispatch).await;

        let state = state.borrow();
        assert!(!state.loading);
        assert_eq!(state.lp_tokens.len(), 3);
        assert_eq!(state.selectable_lp_tokens().count(), 2);
    }

    #[tokio::test]
    async fn disconnected_wallet_loads_nothing() {
        let backend = backend();
        let state = store();
        let dispatch = |a: MigrateAction| state.borrow_mut().reduce_in_place(a);

        load_lp_tokens(&backend, WalletContext::default(), &dispatch).await;
        assert!(state.borrow().lp_tokens.is_empty());
        assert!(!state.borrow().loading);
    }

    async fn ready(backend: &SandboxBackend, mode: MigrationMode, amount: &str) -> RefCell<MigrateState> {
        let state = store();
        {
            let dispatch = |a: MigrateAction| state.borrow_mut().reduce_in_place(a);
            load_lp_tokens(backend, mainnet(), &dispatch).await;
            let first = state.borrow().lp_tokens[0].clone();
            dispatch(MigrateAction::ToggleMode(mode));
            dispatch(MigrateAction::ToggleLpToken(first));
            dispatch(MigrateAction::SetAmount(amount.to_string()));
        }
        state
    }

    #[tokio::test]
    async fn successful_migration_refreshes_balances() {
        let backend = backend();
        let state = ready(&backend, MigrationMode::Permit, "1.5").await;
        let snapshot = state.borrow().clone();
        let dispatch = |a: MigrateAction| state.borrow_mut().reduce_in_place(a);

        submit_migration(&backend, mainnet(), snapshot, &dispatch).await;

        let state = state.borrow();
        assert!(!state.is_migration_pending);
        assert_eq!(state.error, None);
        assert_eq!(state.selected_lp_token, None);
        assert_eq!(state.amount, "");
        assert_eq!(
            state.lp_tokens[0].balance,
            U256::from(1_000_000_000_000_000_000u128)
        );
    }

    #[tokio::test]
    async fn rejected_migration_is_stored_but_not_displayed() {
        let backend = backend();
        let state = ready(&backend, MigrationMode::Permit, "1").await;
        backend
            .queue_failure(MetamaskError::new(4001, "User denied message signature."))
            .await;
        let snapshot = state.borrow().clone();
        let dispatch = |a: MigrateAction| state.borrow_mut().reduce_in_place(a);

        submit_migration(&backend, mainnet(), snapshot, &dispatch).await;

        let state = state.borrow();
        assert!(!state.is_migration_pending);
        let error = state.error.as_ref().expect("error kept");
        assert!(error.is_user_rejection());
        assert_eq!(error.display_message(), None);
        assert!(state.selected_lp_token.is_some());
    }

    #[tokio::test]
    async fn reverted_migration_shows_its_message() {
        let backend = backend();
        let state = ready(&backend, MigrationMode::Approve, "1").await;
        let snapshot = state.borrow().clone();
        let dispatch = |a: MigrateAction| state.borrow_mut().reduce_in_place(a);

        submit_migration(&backend, mainnet(), snapshot, &dispatch).await;

        let message = state.borrow().error.as_ref().and_then(|e| e.display_message().map(str::to_string));
        assert_eq!(
            message.as_deref(),
            Some("execution reverted: transfer amount exceeds allowance")
        );
    }

    #[tokio::test]
    async fn approve_then_migrate_in_approve_mode() {
        let backend = backend();
        let spender = Some(Address::repeat_byte(0x16));
        let state = ready(&backend, MigrationMode::Approve, "1").await;
        let token = state.borrow().selected_lp_token.clone().unwrap();
        let dispatch = |a: MigrateAction| state.borrow_mut().reduce_in_place(a);

        refresh_approval(&backend, mainnet(), token.clone(), spender, &dispatch).await;
        assert_eq!(state.borrow().approval, ApprovalState::NotApproved);

        approve_selected(&backend, mainnet(), token, spender, &dispatch).await;
        assert_eq!(state.borrow().approval, ApprovalState::Approved);

        let snapshot = state.borrow().clone();
        submit_migration(&backend, mainnet(), snapshot, &dispatch).await;
        assert_eq!(state.borrow().error, None);
    }

    #[tokio::test]
    async fn approval_without_migrator_explains_why() {
        let backend = backend();
        let state = ready(&backend, MigrationMode::Approve, "1").await;
        let token = state.borrow().selected_lp_token.clone().unwrap();
        let dispatch = |a: MigrateAction| state.borrow_mut().reduce_in_place(a);

        approve_selected(&backend, mainnet(), token, None, &dispatch).await;

        let state = state.borrow();
        assert_eq!(state.approval, ApprovalState::NotApproved);
        let message = state.error.as_ref().and_then(|e| e.display_message());
        assert_eq!(message, Some("No migration contract configured for chain 1"));
    }

    /// Holds mainnet inventory reads until released
    struct GatedBackend {
        inner: SandboxBackend,
        release: Notify,
    }

    #[async_trait(?Send)]
    impl MigrationBackend for GatedBackend {
        async fn lp_tokens(&self, account: Address, chain_id: u64) -> WalletResult<Vec<LpToken>> {
            if chain_id == CHAIN_ID_MAINNET {
                self.release.notified().await;
            }
            self.inner.lp_tokens(account, chain_id).await
        }

        async fn approval_state(
            &self,
            token: &LpToken,
            owner: Address,
            spender: Address,
        ) -> WalletResult<ApprovalState> {
            self.inner.approval_state(token, owner, spender).await
        }

        async fn approve(&self, token: &LpToken, spender: Address, amount: U256) -> WalletResult<()> {
            self.inner.approve(token, spender, amount).await
        }

        async fn migrate(&self, request: MigrationRequest) -> WalletResult<()> {
            self.inner.migrate(request).await
        }

        fn name(&self) -> &'static str {
            "gated"
        }
    }

    #[tokio::test]
    async fn slow_load_for_previous_wallet_does_not_replace_inventory() {
        let backend = GatedBackend {
            inner: backend(),
            release: Notify::new(),
        };
        let bsc = WalletContext {
            account: Some(Address::repeat_byte(0xbb)),
            chain_id: Some(CHAIN_ID_BSC),
        };
        let state = store();
        let dispatch = |a: MigrateAction| state.borrow_mut().reduce_in_place(a);

        futures::join!(load_lp_tokens(&backend, mainnet(), &dispatch), async {
            load_lp_tokens(&backend, bsc, &dispatch).await;
            backend.release.notify_one();
        });

        let state = state.borrow();
        assert_eq!(state.wallet, bsc);
        assert!(!state.loading);
        let pairs: Vec<String> = state.lp_tokens.iter().map(|t| t.pair_label()).collect();
        assert_eq!(pairs, vec!["CAKE/WBNB", "BUSD/WBNB"]);
    }

    #[tokio::test]
    async fn allowance_read_after_approve_click_keeps_pending() {
        let backend = backend();
        let spender = Some(Address::repeat_byte(0x16));
        let state = ready(&backend, MigrationMode::Approve, "1").await;
        let token = state.borrow().selected_lp_token.clone().unwrap();
        let dispatch = |a: MigrateAction| state.borrow_mut().reduce_in_place(a);

        dispatch(MigrateAction::SetApproval(ApprovalState::Pending));
        refresh_approval(&backend, mainnet(), token, spender, &dispatch).await;
        assert_eq!(state.borrow().approval, ApprovalState::Pending);
    }

    #[test]
    fn request_needs_connection_and_parsable_amount() {
        let state = MigrateState::default();
        let err = build_request(WalletContext::default(), &state).unwrap_err();
        assert_eq!(err.display_message(), Some("Wallet is not connected"));

        let err = build_request(mainnet(), &state).unwrap_err();
        assert_eq!(err.display_message(), Some("Select a wallet type first"));
    }
}
