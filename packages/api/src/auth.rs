//! `/api/auth` endpoints.

use serde::{Deserialize, Serialize};
use store::{Role, Session, SessionCheck, UserInfo};

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

#[derive(Debug, Serialize)]
struct GoogleLoginRequest<'a> {
    credential: &'a str,
}

/// Login, register and Google sign-in all answer with this shape.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
    #[serde(default)]
    pub role: Option<Role>,
}

impl AuthResponse {
    pub fn into_session(self) -> Session {
        Session::from_login(self.user, self.role, self.token)
    }
}

/// `/me` answers either `{ "user": {...} }` or the user itself.
#[derive(Deserialize)]
#[serde(untagged)]
enum MeResponse {
    Nested { user: UserInfo },
    Flat(UserInfo),
}

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let response: AuthResponse = self.post("/api/auth/login", request).await?;
        tracing::info!("logged in as {}", response.user.email);
        Ok(response.into_session())
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        let response: AuthResponse = self.post("/api/auth/register", request).await?;
        tracing::info!("registered {}", response.user.email);
        Ok(response.into_session())
    }

    /// Exchange a Google Identity Services credential for a session.
    pub async fn google_login(&self, credential: &str) -> Result<Session, ApiError> {
        let response: AuthResponse = self
            .post("/api/auth/google", &GoogleLoginRequest { credential })
            .await?;
        Ok(response.into_session())
    }

    /// Who the current token belongs to.
    pub async fn me(&self) -> Result<UserInfo, ApiError> {
        let response: MeResponse = self.get("/api/auth/me").await?;
        Ok(match response {
            MeResponse::Nested { user } => user,
            MeResponse::Flat(user) => user,
        })
    }

    /// Ask `/me` about the current token.
    pub async fn check_session(&self) -> SessionCheck {
        session_check(self.me().await)
    }
}

/// Classify a `/me` result: a 401 rejects the token, anything else that
/// fails leaves it standing.
pub fn session_check(result: Result<UserInfo, ApiError>) -> SessionCheck {
    match result {
        Ok(user) => SessionCheck::Confirmed(user),
        Err(ApiError::Unauthorized) => SessionCheck::Rejected,
        Err(e) => SessionCheck::Unreachable(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::decode;

    #[test]
    fn login_response_becomes_session() {
        let response: AuthResponse = decode(
            r#"{"token":"jwt","role":"admin","user":{"_id":"u1","email":"a@studio.in","name":"Anu"}}"#,
        )
        .unwrap();
        let session = response.into_session();
        assert!(session.is_admin());
        assert_eq!(session.token, "jwt");
        assert_eq!(session.user.display_name(), "Anu");
    }

    #[test]
    fn me_accepts_nested_and_flat() {
        let nested: MeResponse = decode(r#"{"user":{"id":"u1","email":"a@b.in"}}"#).unwrap();
        let flat: MeResponse = decode(r#"{"id":"u1","email":"a@b.in"}"#).unwrap();
        let (MeResponse::Nested { user: a }, MeResponse::Flat(b)) = (nested, flat) else {
            panic!("unexpected shapes");
        };
        assert_eq!(a, b);
    }

    #[test]
    fn only_unauthorized_rejects_the_session() {
        assert_eq!(
            session_check(Err(ApiError::from_status(401, ""))),
            SessionCheck::Rejected
        );
        assert!(matches!(
            session_check(Err(ApiError::Network("timeout".into()))),
            SessionCheck::Unreachable(_)
        ));
        assert!(matches!(
            session_check(Err(ApiError::from_status(503, r#"{"message":"down"}"#))),
            SessionCheck::Unreachable(m) if m == "down"
        ));
        let user: UserInfo = decode(r#"{"id":"u1","email":"a@b.in"}"#).unwrap();
        assert_eq!(session_check(Ok(user.clone())), SessionCheck::Confirmed(user));
    }
}
