//! The payment step: create an order, open Razorpay, verify, report.

use dioxus::prelude::*;
use store::{CheckoutOptions, PaymentFlow, PaymentHandoff, PaymentStatus};

use crate::interop::{self, CheckoutOutcome, RAZORPAY_SRC};
use crate::{api_client, app_config, notify, use_notices, use_session, NoticeLevel};

/// Drives one [`PaymentFlow`] for `handoff`. `on_paid` receives the Razorpay
/// payment id once the backend has verified the signature.
#[component]
pub fn PaymentPanel(handoff: PaymentHandoff, on_paid: EventHandler<String>) -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let mut flow = use_signal(PaymentFlow::new);

    // Warm the script while the user reads the summary.
    use_future(|| async {
        if let Err(e) = interop::load_script(RAZORPAY_SRC).await {
            tracing::warn!("checkout script not loaded yet: {e}");
        }
    });

    let amount = handoff.display_amount();
    let description = handoff.description.clone();
    let status = flow.read().status().clone();

    let pay = move |_| {
        let handoff = handoff.clone();
        async move {
            if let Err(e) = flow.write().start() {
                tracing::warn!("{e}");
                return;
            }
            let current = session.peek().session.clone();
            let ended = checkout(&handoff, current.as_ref()).await;
            let moved = {
                let mut flow = flow.write();
                match &ended {
                    Ended::Verified(payment_id) => flow.succeed(payment_id),
                    Ended::Dismissed => flow.dismiss(),
                    Ended::Failed(message) => flow.fail(message),
                }
            };
            if let Err(e) = moved {
                tracing::warn!("ignoring late checkout result: {e}");
                return;
            }
            match ended {
                Ended::Verified(payment_id) => {
                    tracing::info!("payment {payment_id} verified for {}", handoff.reference_id);
                    notify(&mut notices, NoticeLevel::Success, "Payment successful");
                    on_paid.call(payment_id);
                }
                Ended::Dismissed => notify(&mut notices, NoticeLevel::Info, "Payment cancelled"),
                Ended::Failed(message) => notify(&mut notices, NoticeLevel::Error, &message),
            }
        }
    };

    rsx! {
        div {
            class: "payment-panel",
            h2 { "Complete your payment" }
            p { class: "payment-description", "{description}" }
            p { class: "payment-amount", "{amount}" }

            {match status {
                PaymentStatus::Idle => rsx! {
                    button { class: "btn-primary", onclick: pay, "Pay {amount}" }
                },
                PaymentStatus::Processing => rsx! {
                    button { class: "btn-primary", disabled: true, "Processing..." }
                },
                PaymentStatus::Success { payment_id } => rsx! {
                    div {
                        class: "payment-success",
                        p { "Payment received. Reference: {payment_id}" }
                    }
                },
                PaymentStatus::Error { message } => rsx! {
                    div {
                        class: "payment-error",
                        p { "{message}" }
                        button { class: "btn-primary", onclick: pay, "Try again" }
                    }
                },
            }}
        }
    }
}

enum Ended {
    Verified(String),
    Dismissed,
    Failed(String),
}

/// Order, popup, verification.
async fn checkout(handoff: &PaymentHandoff, session: Option<&store::Session>) -> Ended {
    let client = api_client(session);
    let order = match client.create_order(handoff).await {
        Ok(order) => order,
        Err(e) => return Ended::Failed(format!("Could not start payment: {e}")),
    };
    if let Err(e) = interop::load_script(RAZORPAY_SRC).await {
        return Ended::Failed(e);
    }

    let options = CheckoutOptions::new(&app_config().payment, &order, handoff);
    let confirmation = match interop::open_checkout(&options).await {
        CheckoutOutcome::Paid(confirmation) => confirmation,
        CheckoutOutcome::Dismissed => return Ended::Dismissed,
        CheckoutOutcome::Failed(message) => return Ended::Failed(message),
    };

    match client.verify_payment(handoff, &confirmation).await {
        Ok(_) => Ended::Verified(confirmation.razorpay_payment_id),
        Err(e) => Ended::Failed(format!("Payment verification failed: {e}")),
    }
}
