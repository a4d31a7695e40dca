use std::collections::BTreeMap;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::display::{LoadingIndicator, QuestionHelper};
use crate::components::migrate::{
    AmountInput, ExchangeLiquidityPairs, MigrateButtons, MigrateModeSelect,
};
use crate::features::migrate::{
    exchange_label, page_caption, use_migrate_state, use_wallet_context, PAGE_DESCRIPTION,
};
use crate::services::backend::SandboxBackend;
use crate::services::config::get_global_config;
use crate::services::wallet::BrowserWallet;
use crate::services::MigrateServices;
use crate::{console_error, console_info};

const MIGRATE_CSS: Asset = asset!("/assets/styling/migrate.css");

/// Page with the browser wallet and the in-memory backend wired in
#[component]
pub fn MigrateApp() -> Element {
    use_context_provider(|| {
        let config = get_global_config();
        let backend = SandboxBackend::demo(config.sandbox.clone()).unwrap_or_else(|e| {
            console_error!("[Migrate] Sandbox inventory is unreadable: {}", e);
            SandboxBackend::new(BTreeMap::new(), config.sandbox.clone())
        });
        console_info!("[Migrate] Using {} chain configuration(s)", config.chains.len());
        MigrateServices::new(Rc::new(BrowserWallet::new()), Rc::new(backend), config)
    });

    rsx! {
        MigrateV2 {}
    }
}

/// LP migration page; expects `MigrateServices` in context
#[component]
pub fn MigrateV2() -> Element {
    let services = use_context::<MigrateServices>();
    let (wallet, refresh_wallet) = use_wallet_context();
    let (state, dispatch) = use_migrate_state(wallet);
    let mut connecting = use_signal(|| false);
    let wallet_available = services.wallet.is_available();

    let exchange = wallet().exchange();
    let exchange_name = exchange_label(exchange);
    let caption = page_caption(exchange);

    let connect = move |_: MouseEvent| {
        let provider = services.wallet.clone();
        connecting.set(true);
        spawn(async move {
            match provider.request_accounts().await {
                Ok(accounts) => console_info!("[Wallet] Connected {} account(s)", accounts.len()),
                Err(e) if e.is_user_rejection() => console_info!("[Wallet] Connection declined"),
                Err(e) => console_error!("[Wallet] Failed to connect: {}", e),
            }
            connecting.set(false);
            refresh_wallet.send(());
        });
    };

    rsx! {
        document::Title { "Migrate LP tokens | Sushi" }
        document::Meta {
            name: "description",
            content: PAGE_DESCRIPTION,
        }
        document::Link { rel: "stylesheet", href: MIGRATE_CSS }

        div {
            class: "migrate-container",

            div {
                class: "migrate-header",
                a {
                    class: "back-link",
                    href: "/pool",
                    "‹"
                }
                h1 {
                    class: "migrate-title",
                    "Migrate {exchange_name} Liquidity"
                }
                QuestionHelper {
                    text: format!("Migrate your {} LP tokens to SushiSwap LP tokens.", exchange_name)
                }
            }

            div {
                class: "migrate-caption",
                "{caption}"
            }

            if wallet().account.is_none() {
                div {
                    class: "migrate-connect",
                    div {
                        class: "migrate-notice",
                        "Connect to a wallet to view your liquidity."
                    }
                    if wallet_available {
                        button {
                            class: "action-button primary",
                            disabled: connecting(),
                            onclick: connect,
                            if connecting() {
                                LoadingIndicator { message: "Connecting".to_string() }
                            } else {
                                "Connect Wallet"
                            }
                        }
                    }
                }
            } else if state.read().loading {
                div {
                    class: "migrate-notice",
                    LoadingIndicator { message: "Loading".to_string() }
                }
            } else {
                MigrateModeSelect { state, dispatch }
                ExchangeLiquidityPairs { state, dispatch, exchange }
                AmountInput { state, dispatch }
                MigrateButtons { state, dispatch, wallet, exchange }
            }
        }
    }
}
