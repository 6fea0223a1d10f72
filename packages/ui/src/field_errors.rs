use dioxus::prelude::*;
use store::FieldError;

/// The message for `field`, if validation flagged it.
pub fn error_for(errors: &[FieldError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.clone())
}

#[component]
pub fn FieldErrors(errors: Vec<FieldError>) -> Element {
    if errors.is_empty() {
        return rsx! {};
    }
    rsx! {
        ul {
            class: "field-errors",
            for error in errors {
                li { key: "{error.field}", "{error.message}" }
            }
        }
    }
}

/// Labelled input with its validation message underneath.
#[component]
pub fn TextField(
    label: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)]
    placeholder: String,
    /// Empty when the field is valid.
    #[props(default)]
    error: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: if error.is_empty() { "text-field" } else { "text-field invalid" },
            span { class: "text-field-label", "{label}" }
            input {
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |evt| oninput.call(evt.value()),
            }
            if !error.is_empty() {
                span { class: "text-field-error", "{error}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_for_picks_the_first_message_for_a_field() {
        let errors = vec![
            FieldError::new("phone", "Phone number must be exactly 10 digits"),
            FieldError::new("email", "Please enter a valid email"),
        ];
        assert_eq!(error_for(&errors, "email").as_deref(), Some("Please enter a valid email"));
        assert_eq!(error_for(&errors, "name"), None);
    }
}
