use api::admin::NewReview;
use dioxus::prelude::*;
use store::booking::format_rupees;
use store::recently_viewed::RecentlyViewed;
use store::{paginate, search, Service};
use ui::{
    api_client, app_config, make_storage, notify, use_notices, use_session, NoticeLevel, Pager,
    ServiceCard, WishlistToggle,
};

use super::or_empty;
use crate::Route;

/// Catalog with search and pagination.
#[component]
pub fn Services() -> Element {
    let services = use_resource(|| async { or_empty("services", api_client(None).list_services().await) });
    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let all = services().unwrap_or_default();
    let matches: Vec<Service> = search(&all, &query()).into_iter().cloned().collect();
    let current = paginate(&matches, page(), app_config().ui.page_size);

    rsx! {
        h1 { "Our services" }
        div {
            class: "toolbar",
            input {
                class: "search-box",
                r#type: "search",
                placeholder: "Search makeup, mehendi, decor...",
                value: "{query}",
                oninput: move |evt| {
                    query.set(evt.value());
                    page.set(1);
                },
            }
            span { "{current.total_items} found" }
        }
        if services.read().is_none() {
            p { class: "loading", "Loading services..." }
        } else if current.items.is_empty() {
            p { class: "empty", "No services match your search." }
        }
        div {
            class: "card-grid",
            for service in current.items {
                ServiceCard {
                    key: "{service.id}",
                    href: Route::ServiceDetail { id: service.id.clone() }.to_string(),
                    service: service.clone(),
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
pub fn ServiceDetail(id: String) -> Element {
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let service = use_resource(move || async move {
        let id = id_signal();
        let found = api_client(None).get_service(&id).await;
        if found.is_ok() {
            let storage = make_storage();
            let mut recent = RecentlyViewed::load(&storage);
            recent.touch(&id);
            recent.save(&storage);
        }
        found
    });

    match service() {
        None => rsx! { p { class: "loading", "Loading..." } },
        Some(Err(e)) => {
            tracing::error!("service {id} failed to load: {e}");
            rsx! {
                p { class: "empty", "This service could not be found." }
                Link { to: Route::Services {}, "Back to services" }
            }
        }
        Some(Ok(service)) => {
            let price = format_rupees(u64::from(service.price) * 100);
            rsx! {
                article {
                    class: "service-detail",
                    img { class: "service-card-image", src: "{service.image_url}", alt: "{service.name}" }
                    div {
                        class: "service-card-header",
                        h1 { "{service.name}" }
                        WishlistToggle { service: service.clone() }
                    }
                    p { class: "service-card-category", "{service.category}" }
                    p { "{service.description}" }
                    p { class: "price", "{price}" }
                    Link {
                        class: "btn-primary",
                        to: Route::BookService { service_id: service.id.clone() },
                        "Book now"
                    }
                }
                ReviewForm { service_id: service.id.clone() }
            }
        }
    }
}

/// Customers can leave a review; it shows up once an admin approves it.
#[component]
fn ReviewForm(service_id: String) -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let mut rating = use_signal(|| 5u8);
    let mut comment = use_signal(String::new);
    let mut sent = use_signal(|| false);

    if session().session.is_none() {
        return rsx! {};
    }
    if sent() {
        return rsx! { p { class: "empty", "Thank you! Your review is awaiting approval." } };
    }

    let submit = move |evt: FormEvent| {
        let service_id = service_id.clone();
        async move {
            evt.prevent_default();
            let text = comment().trim().to_string();
            if text.is_empty() {
                notify(&mut notices, NoticeLevel::Info, "Please write a few words about your experience");
                return;
            }
            let client = api_client(session.peek().session.as_ref());
            let review = NewReview::new(&service_id, rating(), &text);
            match client.submit_review(&review).await {
                Ok(()) => sent.set(true),
                Err(e) => notify(&mut notices, NoticeLevel::Error, &format!("Could not send review: {e}")),
            }
        }
    };

    rsx! {
        form {
            class: "form-card review-form",
            onsubmit: submit,
            h3 { "Leave a review" }
            select {
                value: "{rating}",
                onchange: move |evt| {
                    if let Ok(r) = evt.value().parse::<u8>() {
                        rating.set(r.clamp(1, 5));
                    }
                },
                for r in (1..=5u8).rev() {
                    option { value: "{r}", "{r} ★" }
                }
            }
            label {
                class: "text-field",
                textarea {
                    value: "{comment}",
                    placeholder: "How was your experience?",
                    oninput: move |evt| comment.set(evt.value()),
                }
            }
            button { class: "btn-primary", r#type: "submit", "Submit review" }
        }
    }
}
