use dioxus::prelude::*;
use store::booking::format_rupees;
use store::Service;

use crate::icons::FaStar;
use crate::{Icon, WishlistToggle};

/// Catalog tile. `href` is the detail page; the app owns the route table.
#[component]
pub fn ServiceCard(service: Service, href: String) -> Element {
    let price = format_rupees(u64::from(service.price) * 100);

    rsx! {
        div {
            class: "service-card",
            Link {
                to: href,
                img {
                    class: "service-card-image",
                    src: "{service.image_url}",
                    alt: "{service.name}",
                }
            }
            div {
                class: "service-card-body",
                div {
                    class: "service-card-header",
                    h3 { "{service.name}" }
                    WishlistToggle { service: service.clone() }
                }
                if !service.category.is_empty() {
                    span { class: "service-card-category", "{service.category}" }
                }
                div {
                    class: "service-card-meta",
                    span { class: "price", "{price}" }
                    if service.rating > 0.0 {
                        span {
                            class: "rating",
                            Icon { icon: FaStar, width: 12, height: 12 }
                            " {service.rating:.1}"
                        }
                    }
                }
            }
        }
    }
}
