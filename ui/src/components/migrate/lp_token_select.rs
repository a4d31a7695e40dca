use dioxus::prelude::*;

use crate::features::migrate::{Exchange, LpToken, PairRow, RowIcon};

#[derive(Props, PartialEq, Clone)]
pub struct LpTokenSelectProps {
    pub lp_token: LpToken,
    pub is_selected: bool,
    pub updating: bool,
    pub exchange: Option<Exchange>,
    pub on_toggle: EventHandler<LpToken>,
}

/// One row of the pair list; the selected row shows its balance and a close control
#[component]
pub fn LpTokenSelect(props: LpTokenSelectProps) -> Element {
    let row = PairRow::derive(&props.lp_token, props.is_selected, props.updating, props.exchange);
    let token = props.lp_token.clone();
    let on_toggle = props.on_toggle;

    let mut row_class = String::from("lp-token-row");
    if props.is_selected {
        row_class.push_str(" selected");
    }
    if row.dimmed {
        row_class.push_str(" updating");
    }

    let icon = match row.icon {
        RowIcon::Close => rsx! {
            span {
                class: "lp-token-close",
                "✕"
            }
        },
        RowIcon::Chevron => rsx! {
            span {
                class: "lp-token-chevron",
                "›"
            }
        },
    };

    rsx! {
        div {
            class: "{row_class}",
            onclick: move |_| on_toggle.call(token.clone()),

            div {
                class: "lp-token-pair",
                div {
                    class: "lp-token-name",
                    "{row.pair}"
                }
                div {
                    class: "lp-token-tag",
                    "{row.version}"
                }
            }

            div {
                class: "lp-token-balance",
                if let Some(balance) = row.balance {
                    span { "{balance}" }
                }
                {icon}
            }
        }
    }
}
