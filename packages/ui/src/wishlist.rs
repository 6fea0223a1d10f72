//! Wishlist context: the current user's saved services, refetched whenever
//! the logged-in user changes.

use dioxus::prelude::*;
use store::{NewWishlistItem, Service, Wishlist};

use crate::icons::FaHeart;
use crate::{api_client, make_storage, notify, use_notices, use_session, Icon, NoticeLevel};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistState {
    pub list: Wishlist,
    pub loading: bool,
}

pub fn use_wishlist() -> Signal<WishlistState> {
    use_context::<Signal<WishlistState>>()
}

#[component]
pub fn WishlistProvider(children: Element) -> Element {
    let mut state = use_signal(WishlistState::default);
    let session = use_session();
    let user_id = use_memo(move || session().user_id().map(str::to_string));

    let _ = use_resource(move || async move {
        let Some(user_id) = user_id() else {
            state.set(WishlistState::default());
            return;
        };
        let storage = make_storage();
        state.set(WishlistState {
            list: Wishlist::load_cached(&storage, &user_id),
            loading: true,
        });

        let client = api_client(session.peek().session.as_ref());
        match client.list_wishlist(&user_id).await {
            Ok(items) => {
                let mut list = Wishlist::new(&user_id);
                list.replace_all(items);
                list.save_cached(&storage);
                state.set(WishlistState {
                    list,
                    loading: false,
                });
            }
            Err(e) => {
                tracing::error!("wishlist fetch failed: {e}");
                state.write().loading = false;
            }
        }
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Heart button that saves or removes a service.
#[component]
pub fn WishlistToggle(service: Service) -> Element {
    let mut wishlist = use_wishlist();
    let session = use_session();
    let mut notices = use_notices();
    let mut busy = use_signal(|| false);

    let saved = wishlist().list.find_by_url(&service.wishlist_url()).cloned();
    let is_saved = saved.is_some();

    let onclick = move |_| {
        let service = service.clone();
        let saved = saved.clone();
        async move {
            let Some(current) = session().session.clone() else {
                notify(&mut notices, NoticeLevel::Info, "Log in to save services to your wishlist");
                return;
            };
            busy.set(true);
            let client = api_client(Some(&current));
            let storage = make_storage();
            match saved {
                Some(item) => match client.remove_wishlist(&item.id).await {
                    Ok(()) => {
                        wishlist.write().list.remove(&item.id);
                        wishlist.peek().list.save_cached(&storage);
                    }
                    Err(e) => notify(&mut notices, NoticeLevel::Error, &format!("Could not remove: {e}")),
                },
                None => {
                    let new_item = NewWishlistItem::from_service(&current.user.id, &service);
                    if let Err(e) = wishlist.peek().list.check_new(&new_item.url) {
                        notify(&mut notices, NoticeLevel::Info, &e.to_string());
                        busy.set(false);
                        return;
                    }
                    match client.add_wishlist(&new_item).await {
                        Ok(item) => {
                            // a concurrent add may have landed first
                            if wishlist.write().list.insert(item).is_ok() {
                                notify(&mut notices, NoticeLevel::Success, "Saved to wishlist");
                            }
                            wishlist.peek().list.save_cached(&storage);
                        }
                        Err(e) => notify(&mut notices, NoticeLevel::Error, &format!("Could not save: {e}")),
                    }
                }
            }
            busy.set(false);
        }
    };

    rsx! {
        button {
            class: if is_saved { "wishlist-toggle saved" } else { "wishlist-toggle" },
            title: if is_saved { "Remove from wishlist" } else { "Save to wishlist" },
            disabled: busy(),
            onclick: onclick,
            Icon { icon: FaHeart, width: 16, height: 16 }
        }
    }
}
