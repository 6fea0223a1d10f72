use dioxus::prelude::*;
use ui::{api_client, today};

use super::or_empty;
use crate::Route;

#[component]
pub fn Offers() -> Element {
    let offers = use_resource(|| async { or_empty("offers", api_client(None).list_offers().await) });
    let date = today();
    let active: Vec<_> = offers()
        .unwrap_or_default()
        .into_iter()
        .filter(|o| o.is_active(date))
        .collect();

    rsx! {
        h1 { "Offers" }
        if offers.read().is_none() {
            p { class: "loading", "Loading offers..." }
        } else if active.is_empty() {
            p { class: "empty", "No offers right now. Check back soon!" }
        }
        div {
            class: "card-grid",
            for offer in active {
                div {
                    key: "{offer.id}",
                    class: "stat",
                    div { class: "stat-value", "{offer.discount_percent}% off" }
                    h3 { "{offer.title}" }
                    p { "{offer.description}" }
                    if let Some(until) = offer.valid_until {
                        p { class: "stat-label", "Valid until {until}" }
                    }
                }
            }
        }
        Link { class: "btn-primary", to: Route::Services {}, "Book a service" }
    }
}
