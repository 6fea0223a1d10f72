use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "empty",
            h1 { "Page not found" }
            p { "There is nothing at /{path}." }
            Link { to: Route::Home {}, "Go home" }
        }
    }
}
