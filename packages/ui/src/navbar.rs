use dioxus::prelude::*;

use crate::BRIDAL_CSS;

/// Top navigation bar. Links are supplied by the app so the route table
/// stays in one place.
#[component]
pub fn Navbar(#[props(default = "Bridal Studio".to_string())] brand: String, children: Element) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: BRIDAL_CSS }
        nav {
            class: "navbar",
            Link { class: "navbar-brand", to: "/", "{brand}" }
            button {
                class: "navbar-toggle",
                aria_label: "Toggle navigation",
                onclick: move |_| open.toggle(),
                "☰"
            }
            div {
                class: if open() { "navbar-links open" } else { "navbar-links" },
                onclick: move |_| open.set(false),
                {children}
            }
        }
    }
}
