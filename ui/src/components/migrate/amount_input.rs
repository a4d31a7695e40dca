use dioxus::prelude::*;

use crate::components::inputs::NumericalInput;
use crate::features::migrate::{MigrateAction, MigrateState};

#[derive(Props, PartialEq, Clone)]
pub struct AmountInputProps {
    pub state: Signal<MigrateState>,
    pub dispatch: EventHandler<MigrateAction>,
}

/// Amount field with a MAX shortcut, shown once a mode and a pair are picked
#[component]
pub fn AmountInput(props: AmountInputProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    if !state.read().is_ready() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "amount-section",

            div {
                class: "amount-label",
                "Amount of Tokens"
            }

            div {
                class: "amount-row",
                NumericalInput {
                    value: state().amount,
                    on_change: move |value: String| dispatch.call(MigrateAction::SetAmount(value)),
                }
                button {
                    class: "max-button",
                    onclick: move |_| dispatch.call(MigrateAction::FillMaxAmount),
                    "MAX"
                }
            }
        }
    }
}
