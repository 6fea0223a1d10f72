//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{Session, SessionCache, SessionCheck};

use crate::{api_client, make_storage};

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// True while a cached session is being confirmed with the backend.
    pub loading: bool,
}

impl SessionState {
    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.id.as_str())
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Store a fresh login and publish it.
pub fn sign_in(state: &mut Signal<SessionState>, session: Session) {
    SessionCache::new(make_storage()).save(&session);
    state.set(SessionState {
        session: Some(session),
        loading: false,
    });
}

/// Forget the session locally. The backend uses stateless tokens, so there is
/// nothing to call.
pub fn sign_out(state: &mut Signal<SessionState>) {
    SessionCache::new(make_storage()).clear();
    state.set(SessionState {
        session: None,
        loading: false,
    });
}

/// Provider component that rehydrates the session from local storage and
/// confirms it with `/api/auth/me`.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(|| {
        let cached = SessionCache::new(make_storage()).load();
        SessionState {
            loading: cached.is_some(),
            session: cached,
        }
    });

    let _ = use_resource(move || async move {
        let Some(session) = state.peek().session.clone() else {
            return;
        };
        let check = api_client(Some(&session)).check_session().await;
        match &check {
            SessionCheck::Rejected => tracing::warn!("stored session rejected, signing out"),
            SessionCheck::Unreachable(e) => {
                tracing::warn!("could not confirm session, keeping cached copy: {e}")
            }
            SessionCheck::Confirmed(_) => {}
        }
        let kept = SessionCache::new(make_storage()).reconcile(session, check);
        state.set(SessionState {
            session: kept,
            loading: false,
        });
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut state = use_session();

    let onclick = move |_| {
        sign_out(&mut state);
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
