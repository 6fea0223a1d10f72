use dioxus::prelude::*;
use ui::VirtualMakeup;

#[component]
pub fn Makeup() -> Element {
    rsx! {
        h1 { "Virtual makeup" }
        p { "Upload a front-facing photo, pick your shades and preview the look. Your photo never leaves this device." }
        VirtualMakeup {}
    }
}
