//! Request plumbing shared by every endpoint module.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Some endpoints wrap their payload as `{ "data": ... }`, others return it bare.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(data) => data,
        }
    }
}

/// Decode a success body, accepting either envelope shape.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    Ok(envelope.into_inner())
}

/// HTTP client bound to one backend origin and, once logged in, one token.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            http: reqwest::Client::new(),
        }
    }

    /// A copy of this client that sends `Authorization: Bearer <token>`.
    pub fn with_token(&self, token: Option<&str>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Join a `/api/...` path onto the origin.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder, path: &str) -> Result<String, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("{path}: {e}");
            ApiError::from(e)
        })?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            let err = ApiError::from_status(status.as_u16(), &body);
            tracing::warn!("{path}: {} {err}", status.as_u16());
            Err(err)
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(self.request(reqwest::Method::GET, path), path).await?;
        decode(&body)
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        let builder = self.request(reqwest::Method::POST, path).json(payload);
        let body = self.send(builder, path).await?;
        decode(&body)
    }

    /// POST where the response body is irrelevant.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<(), ApiError> {
        let builder = self.request(reqwest::Method::POST, path).json(payload);
        self.send(builder, path).await.map(|_| ())
    }

    pub(crate) async fn put_unit(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(reqwest::Method::PUT, path), path)
            .await
            .map(|_| ())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(reqwest::Method::DELETE, path), path)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        name: String,
    }

    #[test]
    fn urls_join_without_double_slashes() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/api/services"), "http://localhost:5000/api/services");
        assert_eq!(client.url("api/offers"), "http://localhost:5000/api/offers");
    }

    #[test]
    fn token_is_optional() {
        let client = ApiClient::new("http://x");
        assert!(!client.is_authenticated());
        assert!(client.with_token(Some("abc")).is_authenticated());
        assert!(!client.with_token(Some("")).is_authenticated());
        assert_eq!(client.with_token(None), client);
    }

    #[test]
    fn both_envelopes_decode() {
        let bare: Vec<Thing> = decode(r#"[{"name":"a"}]"#).unwrap();
        let wrapped: Vec<Thing> = decode(r#"{"data":[{"name":"a"}]}"#).unwrap();
        assert_eq!(bare, wrapped);
        assert!(matches!(
            decode::<Vec<Thing>>(r#"{"items":[]}"#),
            Err(ApiError::Decode(_))
        ));
    }
}
