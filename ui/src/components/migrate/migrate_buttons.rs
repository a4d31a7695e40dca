use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::features::migrate::actions::{approve_selected, submit_migration};
use crate::features::migrate::{
    ApproveButton, ButtonsBody, ButtonsPanel, Exchange, MigrateAction, MigrateState, WalletContext,
};
use crate::services::MigrateServices;

#[derive(Props, PartialEq, Clone)]
pub struct MigrateButtonsProps {
    pub state: Signal<MigrateState>,
    pub dispatch: EventHandler<MigrateAction>,
    pub wallet: Signal<WalletContext>,
    pub exchange: Option<Exchange>,
}

#[component]
pub fn MigrateButtons(props: MigrateButtonsProps) -> Element {
    let services = use_context::<MigrateServices>();
    let state = props.state;
    let dispatch = props.dispatch;
    let wallet = props.wallet;

    let has_migrator = services.config.spender_for(wallet().chain_id).is_some();
    let Some(panel) = ButtonsPanel::derive(&state.read(), props.exchange, has_migrator) else {
        return rsx! {};
    };

    let body = match panel.body {
        ButtonsBody::InsufficientBalance => rsx! {
            div {
                class: "buttons-notice error",
                "Insufficient Balance"
            }
        },
        ButtonsBody::InvalidAmount(e) => rsx! {
            div {
                class: "buttons-notice error",
                title: "{e}",
                "Invalid Amount"
            }
        },
        ButtonsBody::Loading => rsx! {
            div {
                class: "buttons-notice",
                LoadingIndicator { message: "Loading".to_string() }
            }
        },
        ButtonsBody::Actions { approve, migrate } => {
            let approve_services = services.clone();
            let migrate_services = services.clone();
            rsx! {
                div {
                    class: "buttons-row",

                    if let Some(button) = approve {
                        button {
                            class: approve_class(&button),
                            disabled: button.disabled,
                            onclick: move |_| {
                                let Some(token) = state.read().selected_lp_token.clone() else {
                                    return;
                                };
                                let context = wallet();
                                let spender = approve_services.config.spender_for(context.chain_id);
                                let backend = approve_services.backend.clone();
                                spawn(async move {
                                    approve_selected(backend.as_ref(), context, token, spender, &|a| {
                                        dispatch.call(a)
                                    })
                                    .await;
                                });
                            },
                            if button.pending {
                                LoadingIndicator { message: button.label.to_string() }
                            } else {
                                "{button.label}"
                            }
                        }
                    }

                    if let Some(button) = migrate {
                        button {
                            class: "action-button primary",
                            disabled: button.disabled,
                            onclick: move |_| {
                                let snapshot = state();
                                let context = wallet();
                                let backend = migrate_services.backend.clone();
                                spawn(async move {
                                    submit_migration(backend.as_ref(), context, snapshot, &|a| {
                                        dispatch.call(a)
                                    })
                                    .await;
                                });
                            },
                            if button.pending {
                                LoadingIndicator { message: button.label.to_string() }
                            } else {
                                "{button.label}"
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "migrate-buttons",

            div {
                class: "migrate-summary",
                span {
                    class: "migrate-summary-amount",
                    "{panel.amount}"
                }
                span {
                    class: "migrate-summary-symbol",
                    "{panel.token_symbol}"
                }
            }

            {body}

            if let Some(message) = panel.error_message {
                div {
                    class: "migrate-error",
                    "{message}"
                }
            }

            div {
                class: "migrate-info",
                "{panel.info_line}"
            }
        }
    }
}

fn approve_class(button: &ApproveButton) -> &'static str {
    if button.confirmed {
        "action-button confirmed"
    } else if button.alt_disabled_style {
        "action-button alt-disabled"
    } else {
        "action-button"
    }
}
