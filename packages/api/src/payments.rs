//! Razorpay order creation and verification.
//!
//! Bookings and workshop registrations have parallel endpoint trees
//! (`/api/payments` and `/api/workshop-payments`); the [`HandoffKind`] on the
//! [`PaymentHandoff`] picks one. The backend checks the signature; the client
//! only relays what the checkout handler received.

use serde::{Deserialize, Serialize};
use store::{HandoffKind, Payment, PaymentConfirmation, PaymentHandoff, PaymentOrder};

use crate::client::ApiClient;
use crate::error::ApiError;

fn prefix(kind: HandoffKind) -> &'static str {
    match kind {
        HandoffKind::Booking => "/api/payments",
        HandoffKind::Workshop => "/api/workshop-payments",
    }
}

#[derive(Debug, Serialize)]
struct CreateOrderRequest<'a> {
    reference_id: &'a str,
    amount: u64,
}

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    reference_id: &'a str,
    #[serde(flatten)]
    confirmation: &'a PaymentConfirmation,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VerifyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ApiClient {
    pub async fn create_order(&self, handoff: &PaymentHandoff) -> Result<PaymentOrder, ApiError> {
        let path = format!("{}/create-order", prefix(handoff.kind));
        self.post(
            &path,
            &CreateOrderRequest {
                reference_id: &handoff.reference_id,
                amount: handoff.amount_paise,
            },
        )
        .await
    }

    /// Forward the checkout result. A `success: false` answer is an error.
    pub async fn verify_payment(
        &self,
        handoff: &PaymentHandoff,
        confirmation: &PaymentConfirmation,
    ) -> Result<VerifyResponse, ApiError> {
        let path = format!("{}/verify", prefix(handoff.kind));
        let response: VerifyResponse = self
            .post(
                &path,
                &VerifyRequest {
                    reference_id: &handoff.reference_id,
                    confirmation,
                },
            )
            .await?;
        if !response.success {
            let message = if response.message.is_empty() {
                "Payment verification failed".to_string()
            } else {
                response.message
            };
            return Err(ApiError::Status { code: 200, message });
        }
        Ok(response)
    }

    pub async fn my_payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.get("/api/payments/my").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workshop_payments_use_their_own_tree() {
        assert_eq!(prefix(HandoffKind::Booking), "/api/payments");
        assert_eq!(prefix(HandoffKind::Workshop), "/api/workshop-payments");
    }

    #[test]
    fn verify_body_flattens_confirmation() {
        let confirmation = PaymentConfirmation {
            razorpay_payment_id: "pay_1".into(),
            razorpay_order_id: "order_1".into(),
            razorpay_signature: "sig".into(),
        };
        let body = serde_json::to_value(VerifyRequest {
            reference_id: "b1",
            confirmation: &confirmation,
        })
        .unwrap();
        assert_eq!(body["reference_id"], "b1");
        assert_eq!(body["razorpay_signature"], "sig");
    }
}
