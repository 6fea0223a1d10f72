use dioxus::prelude::*;
use futures::StreamExt;

use crate::interop;
use crate::{api_client, app_config, notify, sign_in, use_notices, use_session, NoticeLevel};

const BUTTON_ID: &str = "google-signin";

/// Google Identity Services button. Renders nothing when no client id is configured.
#[component]
pub fn GoogleSignIn(on_signed_in: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let client_id = app_config().auth.google_client_id.clone();
    let enabled = !client_id.is_empty();

    use_effect(move || {
        if !enabled {
            return;
        }
        let client_id = client_id.clone();
        spawn(async move {
            let mut credentials = match interop::google_button(&client_id, BUTTON_ID).await {
                Ok(rx) => rx,
                Err(e) => {
                    tracing::warn!("google sign-in unavailable: {e}");
                    return;
                }
            };
            while let Some(credential) = credentials.next().await {
                match api_client(None).google_login(&credential).await {
                    Ok(new_session) => {
                        sign_in(&mut session, new_session);
                        on_signed_in.call(());
                    }
                    Err(e) => notify(&mut notices, NoticeLevel::Error, &format!("Google sign-in failed: {e}")),
                }
            }
        });
    });

    if !enabled {
        return rsx! {};
    }
    rsx! {
        div { class: "google-signin", id: BUTTON_ID }
    }
}
