use dioxus::prelude::*;
use store::recently_viewed::RecentlyViewed;
use store::Service;
use ui::{api_client, make_storage, today, ServiceCard};

use super::or_empty;
use crate::Route;

const FEATURED: usize = 3;

#[component]
pub fn Home() -> Element {
    let services = use_resource(|| async { or_empty("services", api_client(None).list_services().await) });
    let offers = use_resource(|| async { or_empty("offers", api_client(None).list_offers().await) });

    let all: Vec<Service> = services().unwrap_or_default();
    let featured: Vec<Service> = all.iter().take(FEATURED).cloned().collect();
    let recent = RecentlyViewed::load(&make_storage());
    let recently_viewed: Vec<Service> = recent
        .ids()
        .iter()
        .filter_map(|id| all.iter().find(|s| &s.id == id).cloned())
        .collect();
    let date = today();
    let active_offers: Vec<_> = offers()
        .unwrap_or_default()
        .into_iter()
        .filter(|o| o.is_active(date))
        .collect();

    rsx! {
        section {
            class: "hero",
            h1 { "Your wedding, beautifully planned" }
            p { "Bridal makeup, mehendi, decor and workshops in one place." }
            Link { class: "btn-primary", to: Route::Services {}, "Explore services" }
        }

        if !active_offers.is_empty() {
            section {
                h2 { "Current offers" }
                ul {
                    for offer in active_offers {
                        li { key: "{offer.id}", strong { "{offer.title}" } " {offer.discount_percent}% off" }
                    }
                }
            }
        }

        section {
            h2 { "Featured services" }
            if services.read().is_none() {
                p { class: "loading", "Loading services..." }
            }
            div {
                class: "card-grid",
                for service in featured {
                    ServiceCard {
                        key: "{service.id}",
                        href: Route::ServiceDetail { id: service.id.clone() }.to_string(),
                        service: service.clone(),
                    }
                }
            }
        }

        if !recently_viewed.is_empty() {
            section {
                h2 { "Recently viewed" }
                div {
                    class: "card-grid",
                    for service in recently_viewed {
                        ServiceCard {
                            key: "recent-{service.id}",
                            href: Route::ServiceDetail { id: service.id.clone() }.to_string(),
                            service: service.clone(),
                        }
                    }
                }
            }
        }
    }
}
