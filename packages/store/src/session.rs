//! Session state: who is logged in, and the bearer token for REST calls.

use serde::{Deserialize, Serialize};

use crate::kv::{forget, load_json, persist, KeyValueStore};
use crate::models::{Role, UserInfo};

const SESSION_KEY: &str = "bridal.session";

/// The logged-in user as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserInfo,
    #[serde(default)]
    pub role: Role,
    pub token: String,
}

impl Session {
    /// Build a session from a login response. A missing top-level role falls
    /// back to the role carried by the user record.
    pub fn from_login(user: UserInfo, role: Option<Role>, token: String) -> Self {
        let role = role.unwrap_or(user.role);
        Self { user, role, token }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// What the backend said when asked who a cached session belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCheck {
    Confirmed(UserInfo),
    /// The token was refused (401).
    Rejected,
    /// Any other failure: offline, server error, bad body.
    Unreachable(String),
}

/// Persists the session across page loads.
pub struct SessionCache<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Option<Session> {
        load_json(&self.store, SESSION_KEY).filter(|s: &Session| !s.token.is_empty())
    }

    pub fn save(&self, session: &Session) {
        persist(&self.store, SESSION_KEY, session);
    }

    pub fn clear(&self) {
        forget(&self.store, SESSION_KEY);
    }

    /// Apply a [`SessionCheck`] to a rehydrated session and return what to
    /// keep. Only a rejected token signs the user out.
    pub fn reconcile(&self, mut session: Session, check: SessionCheck) -> Option<Session> {
        match check {
            SessionCheck::Confirmed(user) => {
                session.user = user;
                self.save(&session);
                Some(session)
            }
            SessionCheck::Rejected => {
                self.clear();
                None
            }
            SessionCheck::Unreachable(_) => Some(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            email: "priya@example.com".into(),
            name: Some("Priya".into()),
            role,
        }
    }

    #[test]
    fn session_survives_reload() {
        let store = MemoryStore::new();
        let session = Session::from_login(user(Role::Customer), None, "tok".into());
        SessionCache::new(store.clone()).save(&session);

        let restored = SessionCache::new(store.clone()).load().unwrap();
        assert_eq!(restored, session);
        assert_eq!(restored.bearer(), "Bearer tok");

        SessionCache::new(store.clone()).clear();
        assert!(SessionCache::new(store).load().is_none());
    }

    #[test]
    fn explicit_role_wins_over_user_role() {
        let session = Session::from_login(user(Role::Customer), Some(Role::Admin), "t".into());
        assert!(session.is_admin());
        let session = Session::from_login(user(Role::Admin), None, "t".into());
        assert!(session.is_admin());
    }

    #[test]
    fn empty_token_is_not_a_session() {
        let store = MemoryStore::new();
        let cache = SessionCache::new(store);
        cache.save(&Session::from_login(user(Role::Customer), None, String::new()));
        assert!(cache.load().is_none());
    }

    #[test]
    fn reconcile_refreshes_user_on_confirmation() {
        let store = MemoryStore::new();
        let cache = SessionCache::new(store);
        let session = Session::from_login(user(Role::Customer), None, "tok".into());
        cache.save(&session);

        let renamed = UserInfo {
            name: Some("Priya Sharma".into()),
            ..user(Role::Customer)
        };
        let kept = cache.reconcile(session, SessionCheck::Confirmed(renamed)).unwrap();
        assert_eq!(kept.user.display_name(), "Priya Sharma");
        assert_eq!(cache.load(), Some(kept));
    }

    #[test]
    fn reconcile_signs_out_only_when_rejected() {
        let store = MemoryStore::new();
        let cache = SessionCache::new(store);
        let session = Session::from_login(user(Role::Customer), None, "tok".into());
        cache.save(&session);

        let kept = cache.reconcile(session.clone(), SessionCheck::Unreachable("offline".into()));
        assert_eq!(kept.as_ref(), Some(&session));
        assert!(cache.load().is_some());

        assert_eq!(cache.reconcile(session, SessionCheck::Rejected), None);
        assert!(cache.load().is_none());
    }
}
