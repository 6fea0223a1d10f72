//! Process-wide configuration and the shared API client.

use std::sync::OnceLock;

use api::ApiClient;
use store::{AppConfig, Session};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

thread_local! {
    static BASE_CLIENT: ApiClient = ApiClient::new(&app_config().api.base_url);
}

/// The embedded `bridal.toml`, parsed once.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| AppConfig::load(include_str!("../bridal.toml")))
}

/// A client carrying the session's bearer token, if any.
pub fn api_client(session: Option<&Session>) -> ApiClient {
    BASE_CLIENT.with(|client| client.with_token(session.map(|s| s.token.as_str())))
}

/// Today's date in the browser's timezone.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
