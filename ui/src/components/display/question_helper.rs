use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct QuestionHelperProps {
    pub text: String,
}

/// "?" badge that shows `text` while hovered or focused
#[component]
pub fn QuestionHelper(props: QuestionHelperProps) -> Element {
    let mut show = use_signal(|| false);

    rsx! {
        span {
            class: "question-helper",
            tabindex: "0",
            onmouseenter: move |_| show.set(true),
            onmouseleave: move |_| show.set(false),
            onfocus: move |_| show.set(true),
            onblur: move |_| show.set(false),
            "?"
            if show() {
                span {
                    class: "question-helper-tooltip",
                    role: "tooltip",
                    "{props.text}"
                }
            }
        }
    }
}
