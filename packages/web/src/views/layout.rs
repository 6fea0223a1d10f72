use dioxus::prelude::*;
use store::access::{check, Access};
use ui::{use_session, ChatWidget, FontPicker, LogoutButton, Navbar, NoticeStack, VoiceCommandButton};

use crate::Route;

/// Navbar, notices and chat around every page.
#[component]
pub fn Shell() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let state = session();

    rsx! {
        Navbar {
            Link { to: Route::Services {}, "Services" }
            Link { to: Route::Workshops {}, "Workshops" }
            Link { to: Route::Offers {}, "Offers" }
            Link { to: Route::Makeup {}, "Try makeup" }
            Link { to: Route::Contact {}, "Contact" }
            if state.is_admin() {
                Link { to: Route::AdminDashboard {}, "Admin" }
            }
            if let Some(current) = state.session.as_ref() {
                Link { to: Route::WishlistPage {}, "Wishlist" }
                Link { to: Route::Dashboard {}, "{current.user.display_name()}" }
                LogoutButton {
                    class: "btn-secondary",
                    on_logout: move |_| {
                        nav.push(Route::Home {});
                    },
                }
            } else {
                Link { to: Route::Login {}, "Login" }
            }
            FontPicker {}
            VoiceCommandButton {
                on_command: move |path: String| {
                    match path.parse::<Route>() {
                        Ok(route) => {
                            nav.push(route);
                        }
                        Err(_) => tracing::warn!("voice command resolved to unknown path {path}"),
                    }
                },
            }
        }
        NoticeStack {}
        main {
            class: "page",
            Outlet::<Route> {}
        }
        ChatWidget {}
    }
}

/// Pages for signed-in users. Anonymous visitors go to the login page.
#[component]
pub fn RequireLogin() -> Element {
    guard(Access::Authenticated)
}

#[component]
pub fn RequireAdmin() -> Element {
    guard(Access::Admin)
}

fn guard(access: Access) -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        let state = session();
        if state.loading {
            return;
        }
        if let Err(redirect) = check(access, state.session.as_ref()) {
            tracing::info!("redirecting to {}", redirect.path());
            nav.replace(redirect.path());
        }
    });

    let state = session();
    if state.loading {
        return rsx! {
            p { class: "loading", "Checking your session..." }
        };
    }
    if check(access, state.session.as_ref()).is_err() {
        return rsx! {};
    }
    rsx! {
        Outlet::<Route> {}
    }
}
