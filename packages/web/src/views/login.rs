//! Login page view with email/password and Google sign-in.

use api::LoginRequest;
use dioxus::prelude::*;
use store::validation::{collect, validate_email, validate_required};
use store::FieldError;
use ui::{api_client, error_for, sign_in, use_session, GoogleSignIn, TextField};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: nothing to do here.
    use_effect(move || {
        let state = session();
        if !state.loading && state.session.is_some() {
            nav.replace(if state.is_admin() { Route::AdminDashboard {} } else { Route::Dashboard {} });
        }
    });

    let err = move |field: &str| error_for(&errors.read(), field).unwrap_or_default();

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        error.set(None);
        let found = collect([validate_email(&email()), validate_required("password", &password())]);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());

        loading.set(true);
        let request = LoginRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        match api_client(None).login(&request).await {
            Ok(new_session) => sign_in(&mut session, new_session),
            Err(e) if e.is_unauthorized() => error.set(Some("Invalid email or password".to_string())),
            Err(e) => {
                tracing::error!("login failed: {e}");
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    };

    rsx! {
        form {
            class: "form-card",
            onsubmit: handle_login,
            h1 { "Welcome back" }
            if let Some(message) = error() {
                p { class: "field-errors", "{message}" }
            }
            TextField {
                label: "Email",
                input_type: "email",
                value: email(),
                error: err("email"),
                oninput: move |v| email.set(v),
            }
            TextField {
                label: "Password",
                input_type: "password",
                value: password(),
                error: err("password"),
                oninput: move |v| password.set(v),
            }
            button {
                class: "btn-primary",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Signing in..." } else { "Sign in" }
            }
            GoogleSignIn { on_signed_in: move |_| {} }
            p {
                "New here? "
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}
