use dioxus::prelude::*;
use store::booking::format_rupees;
use ui::{api_client, make_storage, notify, use_notices, use_session, use_wishlist, NoticeLevel};

use crate::Route;

#[component]
pub fn WishlistPage() -> Element {
    let mut wishlist = use_wishlist();
    let session = use_session();
    let mut notices = use_notices();
    let state = wishlist();

    let remove = move |id: String| async move {
        let client = api_client(session.peek().session.as_ref());
        match client.remove_wishlist(&id).await {
            Ok(()) => {
                wishlist.write().list.remove(&id);
                wishlist.peek().list.save_cached(&make_storage());
            }
            Err(e) => notify(&mut notices, NoticeLevel::Error, &format!("Could not remove item: {e}")),
        }
    };

    rsx! {
        h1 { "My wishlist" }
        if state.loading && state.list.items.is_empty() {
            p { class: "loading", "Loading your wishlist..." }
        } else if state.list.items.is_empty() {
            div {
                class: "empty",
                p { "Nothing saved yet." }
                Link { to: Route::Services {}, "Browse services" }
            }
        }
        div {
            class: "card-grid",
            for item in state.list.items {
                div {
                    key: "{item.id}",
                    class: "service-card",
                    img { class: "service-card-image", src: "{item.url}", alt: "{item.desc}" }
                    div {
                        class: "service-card-body",
                        h3 { "{item.desc}" }
                        div {
                            class: "service-card-meta",
                            span { class: "price", {format_rupees(u64::from(item.price) * 100)} }
                            span { class: "rating", "★ {item.rating:.1}" }
                        }
                        button {
                            class: "btn-secondary",
                            onclick: {
                                let id = item.id.clone();
                                move |_| remove(id.clone())
                            },
                            "Remove"
                        }
                    }
                }
            }
        }
    }
}
