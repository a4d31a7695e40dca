use dioxus::prelude::*;

use super::lp_token_select::LpTokenSelect;
use crate::components::display::EmptyState;
use crate::features::migrate::{Exchange, LpToken, MigrateAction, MigrateState, PairsPanel};

#[derive(Props, PartialEq, Clone)]
pub struct ExchangeLiquidityPairsProps {
    pub state: Signal<MigrateState>,
    pub dispatch: EventHandler<MigrateAction>,
    pub exchange: Option<Exchange>,
}

/// Pairs with a balance, listed once a mode is chosen
#[component]
pub fn ExchangeLiquidityPairs(props: ExchangeLiquidityPairsProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let updating = state.read().updating_lp_tokens;

    let panel = PairsPanel::derive(&state.read(), props.exchange);

    match panel {
        PairsPanel::Hidden => rsx! {},
        PairsPanel::Empty => rsx! {
            EmptyState { message: "No Liquidity found.".to_string() }
        },
        PairsPanel::Listed { heading, rows } => rsx! {
            div {
                class: "liquidity-pairs",

                div {
                    class: "section-label",
                    "{heading}"
                }

                for (token, is_selected) in rows {
                    LpTokenSelect {
                        key: "{token.address}",
                        lp_token: token.clone(),
                        is_selected,
                        updating,
                        exchange: props.exchange,
                        on_toggle: move |token: LpToken| dispatch.call(MigrateAction::ToggleLpToken(token)),
                    }
                }
            }
        },
    }
}
