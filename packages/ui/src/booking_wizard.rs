//! Three-step booking form. On submit the booking is created on the backend
//! and the caller receives the [`PaymentHandoff`] for the payment page.

use dioxus::prelude::*;
use store::booking::{Advance, BookingForm, PACKAGES};
use store::{BookingStep, BookingWizard, FieldError, PaymentHandoff, Service};

use crate::{api_client, error_for, notify, today, use_notices, use_session, NoticeLevel, TextField};

const STEPS: [BookingStep; 3] = [BookingStep::Details, BookingStep::Package, BookingStep::Review];

#[component]
pub fn MultiStepBooking(service: Service, on_booked: EventHandler<PaymentHandoff>) -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let service_id = service.id.clone();
    let mut wizard = use_signal(move || {
        let mut wizard = BookingWizard::new(&service_id);
        if let Some(current) = session.peek().session.as_ref() {
            wizard.form.name = current.user.name.clone().unwrap_or_default();
            wizard.form.email = current.user.email.clone();
        }
        wizard
    });
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut submitting = use_signal(|| false);

    let state = wizard();
    let form = state.form.clone();
    let step = state.step;
    let err = move |field: &str| error_for(&errors.read(), field).unwrap_or_default();
    let service_name = service.name.clone();

    let submit_booking = move |request: store::BookingRequest| {
        let service = service.clone();
        spawn(async move {
            submitting.set(true);
            let client = api_client(session.peek().session.as_ref());
            match client.create_booking(&request).await {
                Ok(mut booking) => {
                    if booking.amount == 0 {
                        booking.amount = service.price;
                    }
                    tracing::info!("booking {} created for {}", booking.id, service.name);
                    notify(&mut notices, NoticeLevel::Success, "Booking created, continue to payment");
                    wizard.write().reset();
                    on_booked.call(PaymentHandoff::from_booking(&booking, &service.name));
                }
                Err(e) => notify(&mut notices, NoticeLevel::Error, &format!("Booking failed: {e}")),
            }
            submitting.set(false);
        });
    };

    let on_next = move |_| {
        let outcome = wizard.write().next(today());
        match outcome {
            Ok(Advance::Moved(_)) => errors.set(Vec::new()),
            Ok(Advance::Submit(request)) => {
                errors.set(Vec::new());
                submit_booking(request);
            }
            Err(found) => errors.set(found),
        }
    };

    let mut edit = move |apply: fn(&mut BookingForm, String), value: String| {
        apply(&mut wizard.write().form, value);
    };

    rsx! {
        div {
            class: "booking-wizard",
            ol {
                class: "wizard-steps",
                for s in STEPS {
                    li {
                        class: step_class(s, step),
                        "{s.number()}. {s.title()}"
                    }
                }
            }

            {match step {
                BookingStep::Details => rsx! {
                    TextField {
                        label: "Full name",
                        value: form.name.clone(),
                        error: err("name"),
                        oninput: move |v| edit(|f, v| f.name = v, v),
                    }
                    TextField {
                        label: "Email",
                        input_type: "email",
                        value: form.email.clone(),
                        error: err("email"),
                        oninput: move |v| edit(|f, v| f.email = v, v),
                    }
                    TextField {
                        label: "Phone",
                        input_type: "tel",
                        placeholder: "10-digit mobile number",
                        value: form.phone.clone(),
                        error: err("phone"),
                        oninput: move |v| edit(|f, v| f.phone = v, v),
                    }
                },
                BookingStep::Package => rsx! {
                    TextField {
                        label: "Event date",
                        input_type: "date",
                        value: form.event_date.clone(),
                        error: err("event_date"),
                        oninput: move |v| edit(|f, v| f.event_date = v, v),
                    }
                    TextField {
                        label: "Venue",
                        value: form.venue.clone(),
                        error: err("venue"),
                        oninput: move |v| edit(|f, v| f.venue = v, v),
                    }
                    fieldset {
                        class: "package-choice",
                        legend { "Package" }
                        for (key, title) in PACKAGES.iter().copied() {
                            label {
                                input {
                                    r#type: "radio",
                                    name: "package",
                                    value: key,
                                    checked: form.package == key,
                                    onchange: move |_| edit(|f, v| f.package = v, key.to_string()),
                                }
                                " {title}"
                            }
                        }
                        if !err("package").is_empty() {
                            span { class: "text-field-error", {err("package")} }
                        }
                    }
                    TextField {
                        label: "Guests (optional)",
                        input_type: "number",
                        value: form.guests.clone(),
                        error: err("guests"),
                        oninput: move |v| edit(|f, v| f.guests = v, v),
                    }
                    label {
                        class: "text-field",
                        span { class: "text-field-label", "Notes" }
                        textarea {
                            value: "{form.notes}",
                            oninput: move |evt| edit(|f, v| f.notes = v, evt.value()),
                        }
                    }
                },
                BookingStep::Review => rsx! {
                    dl {
                        class: "booking-review",
                        dt { "Service" } dd { "{service_name}" }
                        dt { "Name" } dd { "{form.name}" }
                        dt { "Email" } dd { "{form.email}" }
                        dt { "Phone" } dd { "{form.phone}" }
                        dt { "Date" } dd { "{form.event_date}" }
                        dt { "Venue" } dd { "{form.venue}" }
                        dt { "Package" } dd { "{form.package}" }
                        if !form.guests.is_empty() {
                            dt { "Guests" } dd { "{form.guests}" }
                        }
                    }
                    if !errors.read().is_empty() {
                        crate::FieldErrors { errors: errors() }
                    }
                },
            }}

            div {
                class: "wizard-actions",
                if step != BookingStep::Details {
                    button {
                        class: "btn-secondary",
                        disabled: submitting(),
                        onclick: move |_| {
                            errors.set(Vec::new());
                            wizard.write().back();
                        },
                        "Back"
                    }
                }
                button {
                    class: "btn-primary",
                    disabled: submitting(),
                    onclick: on_next,
                    if step == BookingStep::Review {
                        if submitting() { "Booking..." } else { "Confirm & pay" }
                    } else {
                        "Next"
                    }
                }
            }
        }
    }
}

fn step_class(s: BookingStep, current: BookingStep) -> &'static str {
    if s == current {
        "active"
    } else if s.number() < current.number() {
        "done"
    } else {
        ""
    }
}
