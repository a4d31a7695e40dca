use dioxus::prelude::*;

use crate::features::migrate::{visible_modes, MigrateAction, MigrateState};

#[derive(Props, PartialEq, Clone)]
pub struct MigrateModeSelectProps {
    pub state: Signal<MigrateState>,
    pub dispatch: EventHandler<MigrateAction>,
}

/// Permit/approve chooser; collapses to the picked mode until it is clicked again
#[component]
pub fn MigrateModeSelect(props: MigrateModeSelectProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let current = state.read().mode;

    rsx! {
        div {
            class: "mode-select",

            div {
                class: "section-label",
                "Wallet Type"
            }

            for mode in visible_modes(current) {
                div {
                    key: "{mode.key()}",
                    class: option_class(current == Some(mode)),
                    onclick: move |_| dispatch.call(MigrateAction::ToggleMode(mode)),

                    div {
                        class: "mode-text",
                        div {
                            class: "mode-title",
                            "{mode.title()}"
                        }
                        div {
                            class: "mode-description",
                            "{mode.description()}"
                        }
                    }

                    if current == Some(mode) {
                        span {
                            class: "mode-close",
                            "✕"
                        }
                    } else {
                        span {
                            class: "mode-chevron",
                            "›"
                        }
                    }
                }
            }
        }
    }
}

fn option_class(active: bool) -> &'static str {
    if active {
        "mode-option active"
    } else {
        "mode-option"
    }
}
