//! Input controls shared by the migrate page

use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct NumericalInputProps {
    pub value: String,
    #[props(default = "0.0".to_string())]
    pub placeholder: String,
    #[props(default = false)]
    pub disabled: bool,
    /// Receives the raw text; filtering happens in the store
    pub on_change: EventHandler<String>,
}

/// Decimal text field (digits and one separator)
#[component]
pub fn NumericalInput(props: NumericalInputProps) -> Element {
    rsx! {
        input {
            class: "numerical-input",
            r#type: "text",
            inputmode: "decimal",
            pattern: "^[0-9]*[.,]?[0-9]*$",
            autocomplete: "off",
            "autocorrect": "off",
            spellcheck: "false",
            minlength: "1",
            maxlength: "79",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
