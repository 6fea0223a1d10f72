//! Transient notices shown in the corner of the page. These stand in for
//! `alert()`: every failed request or confirmation goes through [`notify`].

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notices {
    pub entries: Vec<Notice>,
    next_id: u32,
}

impl Notices {
    pub fn dismiss(&mut self, id: u32) {
        self.entries.retain(|n| n.id != id);
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

/// Show a notice. Errors are also logged.
pub fn notify(notices: &mut Signal<Notices>, level: NoticeLevel, message: &str) {
    if level == NoticeLevel::Error {
        tracing::error!("{message}");
    }
    let id = {
        let mut n = notices.write();
        let id = n.next_id;
        n.next_id += 1;
        n.entries.push(Notice {
            id,
            level,
            message: message.to_string(),
        });
        id
    };

    #[cfg(target_arch = "wasm32")]
    {
        let mut notices = *notices;
        spawn(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
            notices.write().dismiss(id);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

#[component]
pub fn NoticeProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Notices::default()));
    rsx! {
        {children}
    }
}

#[component]
pub fn NoticeStack() -> Element {
    let mut notices = use_notices();
    let entries = notices().entries.clone();

    rsx! {
        div {
            class: "notice-stack",
            for notice in entries {
                div {
                    key: "{notice.id}",
                    class: match notice.level {
                        NoticeLevel::Error => "notice error",
                        NoticeLevel::Success => "notice success",
                        NoticeLevel::Info => "notice info",
                    },
                    span { "{notice.message}" }
                    button {
                        class: "notice-close",
                        onclick: move |_| notices.write().dismiss(notice.id),
                        "×"
                    }
                }
            }
        }
    }
}
