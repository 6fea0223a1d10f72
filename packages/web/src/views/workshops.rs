use dioxus::prelude::*;
use store::booking::format_rupees;
use store::workshop::{has_seats, WorkshopForm, EXPERIENCE_LEVELS};
use store::{paginate, search, FieldError, PaymentHandoff, Workshop};
use ui::{
    api_client, app_config, error_for, notify, use_notices, use_session, NoticeLevel, Pager,
    TextField,
};

use super::or_empty;
use crate::{PendingPayment, Route};

#[component]
pub fn Workshops() -> Element {
    let workshops = use_resource(|| async { or_empty("workshops", api_client(None).list_workshops().await) });
    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let all = workshops().unwrap_or_default();
    let matches: Vec<Workshop> = search(&all, &query()).into_iter().cloned().collect();
    let current = paginate(&matches, page(), app_config().ui.page_size);

    rsx! {
        h1 { "Bridal workshops" }
        div {
            class: "toolbar",
            input {
                class: "search-box",
                r#type: "search",
                placeholder: "Search workshops or instructors...",
                value: "{query}",
                oninput: move |evt| {
                    query.set(evt.value());
                    page.set(1);
                },
            }
        }
        if workshops.read().is_none() {
            p { class: "loading", "Loading workshops..." }
        } else if current.items.is_empty() {
            p { class: "empty", "No workshops scheduled right now." }
        }
        div {
            class: "card-grid",
            for workshop in current.items {
                div {
                    key: "{workshop.id}",
                    class: "service-card",
                    div {
                        class: "service-card-body",
                        h3 { "{workshop.title}" }
                        p { class: "service-card-category", "{workshop.date} · {workshop.instructor}" }
                        p { "{workshop.description}" }
                        div {
                            class: "service-card-meta",
                            span { class: "price", {format_rupees(u64::from(workshop.fee) * 100)} }
                            span { "{workshop.seats_left} seats left" }
                        }
                        if has_seats(&workshop) {
                            Link {
                                class: "btn-primary",
                                to: Route::WorkshopRegister { id: workshop.id.clone() },
                                "Register"
                            }
                        } else {
                            span { class: "empty", "Fully booked" }
                        }
                    }
                }
            }
        }
        Pager {
            page: current.page,
            total_pages: current.total_pages,
            on_change: move |p| page.set(p),
        }
    }
}

#[component]
pub fn WorkshopRegister(id: String) -> Element {
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }
    let workshop = use_resource(move || async move { api_client(None).get_workshop(&id_signal()).await });

    match workshop() {
        None => rsx! { p { class: "loading", "Loading..." } },
        Some(Err(e)) => {
            tracing::error!("workshop {id} failed to load: {e}");
            rsx! {
                p { class: "empty", "This workshop could not be found." }
                Link { to: Route::Workshops {}, "Back to workshops" }
            }
        }
        Some(Ok(workshop)) if !has_seats(&workshop) => rsx! {
            p { class: "empty", "{workshop.title} is fully booked." }
            Link { to: Route::Workshops {}, "See other workshops" }
        },
        Some(Ok(workshop)) => rsx! {
            RegistrationForm { key: "{workshop.id}", workshop }
        },
    }
}

#[component]
fn RegistrationForm(workshop: Workshop) -> Element {
    let PendingPayment(mut pending) = use_context::<PendingPayment>();
    let session = use_session();
    let mut notices = use_notices();
    let nav = use_navigator();
    let workshop_id = workshop.id.clone();
    let mut form = use_signal(move || {
        let mut form = WorkshopForm::for_workshop(&workshop_id);
        if let Some(current) = session.peek().session.as_ref() {
            form.name = current.user.name.clone().unwrap_or_default();
            form.email = current.user.email.clone();
        }
        form
    });
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut submitting = use_signal(|| false);

    let title = workshop.title.clone();
    let fee = format_rupees(u64::from(workshop.fee) * 100);
    let values = form();
    let err = move |field: &str| error_for(&errors.read(), field).unwrap_or_default();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let workshop = workshop.clone();
        async move {
            let request = match form.peek().validate() {
                Ok(request) => request,
                Err(found) => {
                    errors.set(found);
                    return;
                }
            };
            errors.set(Vec::new());
            submitting.set(true);
            let client = api_client(session.peek().session.as_ref());
            match client.register_workshop(&request).await {
                Ok(registration) => {
                    pending.set(Some(PaymentHandoff::from_workshop(&registration, &workshop)));
                    nav.push(Route::Checkout {});
                }
                Err(e) => notify(&mut notices, NoticeLevel::Error, &format!("Registration failed: {e}")),
            }
            submitting.set(false);
        }
    };

    rsx! {
        form {
            class: "form-card",
            onsubmit: submit,
            h1 { "Register for {title}" }
            p { class: "price", "Fee: {fee}" }
            TextField {
                label: "Full name",
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
                class: "text-field",
                span { class: "text-field-label", "Experience" }
                select {
                    value: "{values.experience}",
                    onchange: move |evt| form.write().experience = evt.value(),
                    for level in EXPERIENCE_LEVELS.iter().copied() {
                        option { value: level, "{level}" }
                    }
                }
            }
            button {
                class: "btn-primary",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Registering..." } else { "Register & pay" }
            }
        }
    }
}
