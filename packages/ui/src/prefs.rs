//! Font preferences: a provider that styles its children and a picker to change them.

use dioxus::prelude::*;
use store::prefs::{FontFamily, FontPrefs};

use crate::make_storage;

pub fn use_font_prefs() -> Signal<FontPrefs> {
    use_context::<Signal<FontPrefs>>()
}

#[component]
pub fn FontPrefsProvider(children: Element) -> Element {
    let prefs = use_context_provider(|| Signal::new(FontPrefs::load(&make_storage())));

    rsx! {
        div {
            class: "font-root",
            style: "{prefs().root_style()}",
            {children}
        }
    }
}

#[component]
pub fn FontPicker() -> Element {
    let mut prefs = use_font_prefs();
    let current = prefs();

    let mut update = move |next: FontPrefs| {
        next.save(&make_storage());
        prefs.set(next);
    };

    rsx! {
        div {
            class: "font-picker",
            select {
                value: current.family.key(),
                onchange: move |evt| {
                    let family = FontFamily::parse(&evt.value());
                    update(FontPrefs { family, ..prefs() });
                },
                for family in FontFamily::ALL {
                    option { value: family.key(), "{family.label()}" }
                }
            }
            button {
                title: "Smaller text",
                onclick: move |_| update(prefs().with_scale(prefs().scale - 0.1)),
                "A-"
            }
            button {
                title: "Larger text",
                onclick: move |_| update(prefs().with_scale(prefs().scale + 0.1)),
                "A+"
            }
        }
    }
}
