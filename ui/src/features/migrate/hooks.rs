//! Dioxus hooks wiring the store to the wallet and backend

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;

use super::actions::{load_lp_tokens, refresh_approval};
use super::state::{MigrateAction, MigrateState};
use super::types::{MigrationMode, WalletContext};
use crate::console_info;
use crate::services::MigrateServices;

/// Connected wallet, kept current as the user switches account or chain.
///
/// Sending on the returned coroutine re-reads the wallet (after a connect prompt).
pub fn use_wallet_context() -> (Signal<WalletContext>, Coroutine<()>) {
    let services = use_context::<MigrateServices>();
    let mut wallet = use_signal(WalletContext::default);

    let provider = services.wallet.clone();
    let refresh = use_coroutine(move |mut changes: UnboundedReceiver<()>| {
        let provider = provider.clone();
        async move {
            wallet.set(provider.context().await);
            while changes.next().await.is_some() {
                let context = provider.context().await;
                console_info!(
                    "[Wallet] Context changed: account={:?}, chain={:?}",
                    context.account,
                    context.chain_id
                );
                wallet.set(context);
            }
        }
    });

    use_hook(|| {
        services.wallet.watch(Box::new(move || refresh.send(())));
    });

    (wallet, refresh)
}

/// Page store plus the only way to change it
pub fn use_migrate_state(
    wallet: Signal<WalletContext>,
) -> (Signal<MigrateState>, EventHandler<MigrateAction>) {
    let services = use_context::<MigrateServices>();
    let mut state = use_signal(MigrateState::default);

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: MigrateAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    // Reload the inventory whenever the account or chain changes; results are
    // also stamped with the wallet, so a late answer is dropped by the reducer
    let backend = services.backend.clone();
    let load_task = use_hook(|| Rc::new(Cell::new(None::<Task>)));
    use_effect(move || {
        let context = wallet();
        let backend = backend.clone();
        if let Some(previous) = load_task.take() {
            previous.cancel();
        }
        load_task.set(Some(spawn(async move {
            load_lp_tokens(backend.as_ref(), context, &|a| dispatch.call(a)).await;
        })));
    });

    // Approve mode needs the allowance of the selected pair
    let approval_key = use_memo(move || {
        let s = state.read();
        (s.mode, s.selected_lp_token.clone(), wallet())
    });
    let approval_task = use_hook(|| Rc::new(Cell::new(None::<Task>)));
    use_effect(move || {
        let (mode, token, context) = approval_key();
        if let Some(previous) = approval_task.take() {
            previous.cancel();
        }
        let (Some(MigrationMode::Approve), Some(token)) = (mode, token) else {
            return;
        };
        let spender = services.config.spender_for(context.chain_id);
        let backend = services.backend.clone();
        approval_task.set(Some(spawn(async move {
            refresh_approval(backend.as_ref(), context, token, spender, &|a| dispatch.call(a))
                .await;
        })));
    });

    (state, dispatch)
}
