use dioxus::prelude::*;
use store::booking::format_rupees;
use ui::{api_client, use_session};

use crate::Route;

/// The signed-in customer's bookings, saved items and payments.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();

    let summary = use_resource(move || async move {
        let state = session();
        let user_id = state.user_id().unwrap_or_default().to_string();
        api_client(state.session.as_ref()).load_dashboard(&user_id).await
    });

    let state = session();
    let name = state
        .session
        .as_ref()
        .map(|s| s.user.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        h1 { "Hello, {name}" }
        {match summary() {
            None => rsx! { p { class: "loading", "Loading your dashboard..." } },
            Some(Err(e)) => {
                tracing::error!("dashboard failed to load: {e}");
                rsx! { p { class: "empty", "We couldn't load your dashboard. Please try again later." } }
            }
            Some(Ok(summary)) => rsx! {
                div {
                    class: "stat-grid",
                    div { class: "stat",
                        div { class: "stat-value", "{summary.bookings.len()}" }
                        div { class: "stat-label", "Bookings" }
                    }
                    div { class: "stat",
                        div { class: "stat-value", "{summary.wishlist.len()}" }
                        div { class: "stat-label", "Saved services" }
                    }
                    div { class: "stat",
                        div { class: "stat-value", {format_rupees(summary.total_paid())} }
                        div { class: "stat-label", "Paid" }
                    }
                }

                h2 { "Bookings" }
                if summary.bookings.is_empty() {
                    p { class: "empty", "No bookings yet." }
                    Link { to: Route::Services {}, "Find a service" }
                } else {
                    table {
                        class: "data",
                        thead { tr { th { "Date" } th { "Venue" } th { "Package" } th { "Status" } th { "Amount" } } }
                        tbody {
                            for booking in summary.bookings.iter() {
                                tr {
                                    key: "{booking.id}",
                                    td { "{booking.request.event_date}" }
                                    td { "{booking.request.venue}" }
                                    td { "{booking.request.package}" }
                                    td { "{booking.status}" }
                                    td { {format_rupees(u64::from(booking.amount) * 100)} }
                                }
                            }
                        }
                    }
                }

                h2 { "Payments" }
                if summary.payments.is_empty() {
                    p { class: "empty", "No payments yet." }
                } else {
                    table {
                        class: "data",
                        thead { tr { th { "Reference" } th { "Status" } th { "Amount" } } }
                        tbody {
                            for payment in summary.payments.iter() {
                                tr {
                                    key: "{payment.id}",
                                    td { "{payment.razorpay_payment_id}" }
                                    td { "{payment.status}" }
                                    td { {format_rupees(payment.amount)} }
                                }
                            }
                        }
                    }
                }
            },
        }}
    }
}
