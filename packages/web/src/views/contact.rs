use dioxus::prelude::*;
use store::validation::{collect, validate_email, validate_phone, validate_required};
use store::{ContactMessage, FieldError};
use ui::{api_client, error_for, notify, use_notices, NoticeLevel, TextField};

#[derive(Clone, Default, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    phone: String,
    message: String,
}

impl ContactForm {
    fn validate(&self) -> Result<ContactMessage, Vec<FieldError>> {
        let errors = collect([
            validate_required("name", &self.name),
            validate_email(&self.email),
            validate_phone(&self.phone),
            validate_required("message", &self.message),
        ]);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[component]
pub fn Contact() -> Element {
    let mut notices = use_notices();
    let mut form = use_signal(ContactForm::default);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut sending = use_signal(|| false);

    let values = form();
    let err = move |field: &str| error_for(&errors.read(), field).unwrap_or_default();

    let submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let message = match form.peek().validate() {
            Ok(message) => message,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(Vec::new());
        sending.set(true);
        match api_client(None).send_contact(&message).await {
            Ok(()) => {
                notify(&mut notices, NoticeLevel::Success, "Thanks! We'll get back to you shortly.");
                form.set(ContactForm::default());
            }
            Err(e) => notify(&mut notices, NoticeLevel::Error, &format!("Could not send your message: {e}")),
        }
        sending.set(false);
    };

    rsx! {
        form {
            class: "form-card",
            onsubmit: submit,
            h1 { "Contact us" }
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
            label {
                class: if err("message").is_empty() { "text-field" } else { "text-field invalid" },
                span { class: "text-field-label", "Message" }
                textarea {
                    value: "{values.message}",
                    oninput: move |evt| form.write().message = evt.value(),
                }
                if !err("message").is_empty() {
                    span { class: "text-field-error", {err("message")} }
                }
            }
            button {
                class: "btn-primary",
                r#type: "submit",
                disabled: sending(),
                "Send"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_form_requires_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"message"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn contact_form_trims_input() {
        let form = ContactForm {
            name: " Priya ".into(),
            email: "priya@example.com".into(),
            phone: "9876543210".into(),
            message: " Do you travel to Jaipur? ".into(),
        };
        let message = form.validate().unwrap();
        assert_eq!(message.name, "Priya");
        assert_eq!(message.message, "Do you travel to Jaipur?");
    }
}
