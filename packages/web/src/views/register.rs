//! Registration page view with email/password form.

use api::RegisterRequest;
use dioxus::prelude::*;
use store::validation::{collect, validate_email, validate_phone, validate_required};
use store::FieldError;
use ui::{api_client, error_for, sign_in, use_session, TextField};

use crate::Route;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Default, PartialEq)]
struct RegisterForm {
    name: String,
    email: String,
    phone: String,
    password: String,
    confirm_password: String,
}

impl RegisterForm {
    fn validate(&self) -> Result<RegisterRequest, Vec<FieldError>> {
        let mut errors = collect([
            validate_required("name", &self.name),
            validate_email(&self.email),
            validate_phone(&self.phone),
        ]);
        if self.password.len() < MIN_PASSWORD_LEN {
            errors.push(FieldError::new(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            ));
        } else if self.password != self.confirm_password {
            errors.push(FieldError::new("confirm_password", "Passwords do not match"));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone: self.phone.trim().to_string(),
        })
    }
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut form = use_signal(RegisterForm::default);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        let state = session();
        if !state.loading && state.session.is_some() {
            nav.replace(Route::Dashboard {});
        }
    });

    let values = form();
    let err = move |field: &str| error_for(&errors.read(), field).unwrap_or_default();

    let handle_register = move |evt: FormEvent| async move {
        evt.prevent_default();
        error.set(None);
        let request = match form.peek().validate() {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(Vec::new());

        loading.set(true);
        match api_client(None).register(&request).await {
            Ok(new_session) => sign_in(&mut session, new_session),
            Err(e) => {
                tracing::error!("registration failed: {e}");
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    };

    rsx! {
        form {
            class: "form-card",
            onsubmit: handle_register,
            h1 { "Create your account" }
            if let Some(message) = error() {
                p { class: "field-errors", "{message}" }
            }
            TextField {
                label: "Name",
                value: values.name.clone(),
                error: err("name"),
                oninput: move |v| form.write().name = v,
            }
            TextField {
                label: "Email",
                input_type: "email",
                value: values.email.clone(),
                error: err("email"),
                oninput: move |v| form.write().email = v,
            }
            TextField {
                label: "Phone",
                input_type: "tel",
                value: values.phone.clone(),
                error: err("phone"),
                oninput: move |v| form.write().phone = v,
            }
            TextField {
                label: "Password",
                input_type: "password",
                value: values.password.clone(),
                error: err("password"),
                oninput: move |v| form.write().password = v,
            }
            TextField {
                label: "Confirm password",
                input_type: "password",
                value: values.confirm_password.clone(),
                error: err("confirm_password"),
                oninput: move |v| form.write().confirm_password = v,
            }
            button {
                class: "btn-primary",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Creating account..." } else { "Create account" }
            }
            p {
                "Already registered? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterForm {
        RegisterForm {
            name: "Anika".into(),
            email: "anika@example.com".into(),
            phone: "9123456780".into(),
            password: "mehendi2030".into(),
            confirm_password: "mehendi2030".into(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        let request = filled().validate().unwrap();
        assert_eq!(request.email, "anika@example.com");
    }

    #[test]
    fn short_password_is_rejected_before_mismatch() {
        let form = RegisterForm {
            password: "short".into(),
            confirm_password: "other".into(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let form = RegisterForm {
            confirm_password: "mehendi2031".into(),
            ..filled()
        };
        assert_eq!(form.validate().unwrap_err()[0].field, "confirm_password");
    }
}
