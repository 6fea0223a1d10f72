use dioxus::prelude::*;
use store::chat::{ChatLog, Speaker};

use crate::icons::{FaComments, FaXmark};
use crate::Icon;

/// Floating help chat. Answers come from a fixed keyword table, not a person.
#[component]
pub fn ChatWidget() -> Element {
    let mut open = use_signal(|| false);
    let mut log = use_signal(ChatLog::default);
    let mut draft = use_signal(String::new);

    let mut send = move || {
        let text = draft();
        if log.write().send(&text).is_some() {
            draft.set(String::new());
        }
    };

    if !open() {
        return rsx! {
            button {
                class: "chat-launcher",
                title: "Chat with us",
                onclick: move |_| open.set(true),
                Icon { icon: FaComments, width: 22, height: 22 }
            }
        };
    }

    rsx! {
        div {
            class: "chat-widget",
            div {
                class: "chat-header",
                span { "Bridal assistant" }
                button {
                    class: "chat-close",
                    onclick: move |_| open.set(false),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }
            div {
                class: "chat-messages",
                for (i, message) in log().messages.into_iter().enumerate() {
                    div {
                        key: "{i}",
                        class: match message.from {
                            Speaker::User => "chat-message user",
                            Speaker::Bot => "chat-message bot",
                        },
                        "{message.text}"
                    }
                }
            }
            form {
                class: "chat-input",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    send();
                },
                input {
                    value: "{draft}",
                    placeholder: "Ask about bookings, prices, workshops...",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { r#type: "submit", "Send" }
            }
        }
    }
}
