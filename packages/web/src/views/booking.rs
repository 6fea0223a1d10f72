use dioxus::prelude::*;
use store::HandoffKind;
use ui::{api_client, MultiStepBooking, PaymentPanel};

use crate::{PendingPayment, Route};

#[component]
pub fn BookService(service_id: String) -> Element {
    let PendingPayment(mut pending) = use_context::<PendingPayment>();
    let nav = use_navigator();
    let mut id_signal = use_signal(|| service_id.clone());
    if *id_signal.peek() != service_id {
        id_signal.set(service_id.clone());
    }
    let service = use_resource(move || async move { api_client(None).get_service(&id_signal()).await });

    match service() {
        None => rsx! { p { class: "loading", "Loading..." } },
        Some(Err(e)) => {
            tracing::error!("service {service_id} failed to load: {e}");
            rsx! {
                p { class: "empty", "This service is not available for booking." }
                Link { to: Route::Services {}, "Back to services" }
            }
        }
        Some(Ok(service)) => rsx! {
            div {
                class: "form-card",
                h1 { "Book {service.name}" }
                MultiStepBooking {
                    service: service.clone(),
                    on_booked: move |handoff| {
                        pending.set(Some(handoff));
                        nav.push(Route::Checkout {});
                    },
                }
            }
        },
    }
}

/// Pays whatever the previous step left in [`PendingPayment`].
#[component]
pub fn Checkout() -> Element {
    let PendingPayment(mut pending) = use_context::<PendingPayment>();
    let nav = use_navigator();

    let Some(handoff) = pending() else {
        return rsx! {
            div {
                class: "empty",
                p { "There is nothing waiting to be paid." }
                Link { to: Route::Services {}, "Browse services" }
                " or "
                Link { to: Route::Workshops {}, "see workshops" }
            }
        };
    };
    let heading = match handoff.kind {
        HandoffKind::Booking => "Booking payment",
        HandoffKind::Workshop => "Workshop payment",
    };

    rsx! {
        div {
            key: "{handoff.reference_id}",
            class: "checkout",
            p { class: "service-card-category", "{heading}" }
            PaymentPanel {
                handoff: handoff.clone(),
                on_paid: move |_payment_id: String| {
                    pending.set(None);
                    nav.push(Route::Dashboard {});
                },
            }
        }
    }
}
