//! # Payment step state machine and Razorpay checkout options
//!
//! The payment page drives a [`PaymentFlow`]:
//!
//! ```text
//! Idle ──start──▶ Processing ──succeed──▶ Success
//!   ▲                 │
//!   │                 ├──fail─────▶ Error ──start──▶ Processing
//!   │                 └──dismiss──▶ Error
//! ```
//!
//! From `Processing` exactly one terminal state is reachable. A second
//! completion (say a late `ondismiss` after the success handler already ran)
//! is rejected with [`TransitionError`] and leaves the state untouched. There
//! is no automatic retry; the user restarts from `Error` explicitly.
//!
//! [`CheckoutOptions`] is the options object handed to `new Razorpay(...)`.
//! [`CheckoutEvents`] folds the popup callbacks into one [`CheckoutOutcome`]:
//! a failed attempt leaves the popup open for another try, so only a payment
//! or closing the popup ends it.
//! Signature verification happens on the backend: the client only forwards the
//! [`PaymentConfirmation`] the checkout handler receives.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::booking::{PaymentHandoff, Prefill};
use crate::config::PaymentConfig;
use crate::models::PaymentOrder;

const THEME_COLOR: &str = "#b0306a";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PaymentStatus {
    #[default]
    Idle,
    Processing,
    Success { payment_id: String },
    Error { message: String },
}

impl PaymentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Success { .. } | PaymentStatus::Error { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot {action} while payment is {from}")]
pub struct TransitionError {
    pub action: &'static str,
    pub from: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFlow {
    status: PaymentStatus,
}

impl PaymentFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &PaymentStatus {
        &self.status
    }

    fn state_name(&self) -> &'static str {
        match self.status {
            PaymentStatus::Idle => "idle",
            PaymentStatus::Processing => "processing",
            PaymentStatus::Success { .. } => "complete",
            PaymentStatus::Error { .. } => "failed",
        }
    }

    fn reject(&self, action: &'static str) -> TransitionError {
        TransitionError {
            action,
            from: self.state_name(),
        }
    }

    /// Begin a checkout attempt. Allowed from `Idle` and `Error`.
    pub fn start(&mut self) -> Result<(), TransitionError> {
        match self.status {
            PaymentStatus::Idle | PaymentStatus::Error { .. } => {
                self.status = PaymentStatus::Processing;
                Ok(())
            }
            _ => Err(self.reject("start")),
        }
    }

    pub fn succeed(&mut self, payment_id: &str) -> Result<(), TransitionError> {
        if self.status != PaymentStatus::Processing {
            return Err(self.reject("succeed"));
        }
        self.status = PaymentStatus::Success {
            payment_id: payment_id.to_string(),
        };
        Ok(())
    }

    pub fn fail(&mut self, message: &str) -> Result<(), TransitionError> {
        if self.status != PaymentStatus::Processing {
            return Err(self.reject("fail"));
        }
        self.status = PaymentStatus::Error {
            message: message.to_string(),
        };
        Ok(())
    }

    /// The checkout popup was closed without paying.
    pub fn dismiss(&mut self) -> Result<(), TransitionError> {
        self.fail("Payment cancelled")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutTheme {
    pub color: String,
}

/// Options object for the Razorpay checkout constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutOptions {
    pub key: String,
    /// Amount in paise.
    pub amount: u64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub order_id: String,
    pub prefill: Prefill,
    pub theme: CheckoutTheme,
}

impl CheckoutOptions {
    /// The order amount wins over the handoff amount; the backend priced it.
    pub fn new(config: &PaymentConfig, order: &PaymentOrder, handoff: &PaymentHandoff) -> Self {
        Self {
            key: config.razorpay_key_id.clone(),
            amount: order.amount,
            currency: if order.currency.is_empty() {
                config.currency.clone()
            } else {
                order.currency.clone()
            },
            name: config.merchant_name.clone(),
            description: handoff.description.clone(),
            order_id: order.id.clone(),
            prefill: handoff.prefill.clone(),
            theme: CheckoutTheme {
                color: THEME_COLOR.to_string(),
            },
        }
    }
}

/// Payload the checkout `handler` receives, forwarded to the backend verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
}

/// How a checkout popup ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    Paid(PaymentConfirmation),
    Dismissed,
    Failed(String),
}

/// Callbacks from one open checkout popup.
#[derive(Debug, Clone, Default)]
pub struct CheckoutEvents {
    last_failure: Option<String>,
    ended: bool,
}

impl CheckoutEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// `payment.failed`. The popup stays open and the user may retry.
    pub fn attempt_failed(&mut self, description: &str) {
        if !self.ended {
            self.last_failure = Some(description.to_string());
        }
    }

    /// The success handler ran. Wins over any earlier failed attempt.
    pub fn paid(&mut self, confirmation: PaymentConfirmation) -> Option<CheckoutOutcome> {
        self.end(CheckoutOutcome::Paid(confirmation))
    }

    /// The popup was closed. Reports the last failed attempt, if any.
    pub fn closed(&mut self) -> Option<CheckoutOutcome> {
        let outcome = match self.last_failure.take() {
            Some(message) => CheckoutOutcome::Failed(message),
            None => CheckoutOutcome::Dismissed,
        };
        self.end(outcome)
    }

    fn end(&mut self, outcome: CheckoutOutcome) -> Option<CheckoutOutcome> {
        if self.ended {
            return None;
        }
        self.ended = true;
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::HandoffKind;

    #[test]
    fn processing_reaches_exactly_one_terminal_state() {
        let mut flow = PaymentFlow::new();
        flow.start().unwrap();
        flow.succeed("pay_1").unwrap();
        assert!(flow.fail("late error").is_err());
        assert!(flow.dismiss().is_err());
        assert_eq!(
            flow.status(),
            &PaymentStatus::Success {
                payment_id: "pay_1".into()
            }
        );

        let mut flow = PaymentFlow::new();
        flow.start().unwrap();
        flow.dismiss().unwrap();
        assert!(flow.succeed("pay_2").is_err());
        assert_eq!(
            flow.status(),
            &PaymentStatus::Error {
                message: "Payment cancelled".into()
            }
        );
    }

    #[test]
    fn completion_requires_processing() {
        let mut flow = PaymentFlow::new();
        let err = flow.succeed("pay").unwrap_err();
        assert_eq!(err.to_string(), "cannot succeed while payment is idle");
        flow.start().unwrap();
        assert!(flow.start().is_err());
    }

    #[test]
    fn restart_after_error() {
        let mut flow = PaymentFlow::new();
        flow.start().unwrap();
        flow.fail("card declined").unwrap();
        assert!(flow.status().is_terminal());
        flow.start().unwrap();
        assert_eq!(flow.status(), &PaymentStatus::Processing);
    }

    #[test]
    fn checkout_options_serialize_for_razorpay() {
        let config = PaymentConfig {
            razorpay_key_id: "rzp_test_abc".into(),
            ..PaymentConfig::default()
        };
        let order = PaymentOrder {
            id: "order_1".into(),
            amount: 150_000,
            currency: "INR".into(),
        };
        let handoff = PaymentHandoff {
            kind: HandoffKind::Workshop,
            reference_id: "r1".into(),
            amount_paise: 150_000,
            description: "Workshop: Saree draping".into(),
            prefill: Prefill {
                name: "Riya".into(),
                email: "riya@example.com".into(),
                contact: "9123456780".into(),
            },
        };
        let options = CheckoutOptions::new(&config, &order, &handoff);
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["key"], "rzp_test_abc");
        assert_eq!(json["amount"], 150_000);
        assert_eq!(json["order_id"], "order_1");
        assert_eq!(json["name"], "Bridal Studio");
        assert_eq!(json["prefill"]["contact"], "9123456780");
    }

    #[test]
    fn confirmation_parses_handler_payload() {
        let confirmation: PaymentConfirmation = serde_json::from_str(
            r#"{"razorpay_payment_id":"pay_1","razorpay_order_id":"order_1","razorpay_signature":"sig"}"#,
        )
        .unwrap();
        assert_eq!(confirmation.razorpay_signature, "sig");
    }

    fn confirmation(id: &str) -> PaymentConfirmation {
        PaymentConfirmation {
            razorpay_payment_id: id.into(),
            razorpay_order_id: "order_1".into(),
            razorpay_signature: "sig".into(),
        }
    }

    #[test]
    fn retry_after_failed_attempt_is_still_paid() {
        let mut events = CheckoutEvents::new();
        events.attempt_failed("Card declined");
        assert_eq!(
            events.paid(confirmation("pay_2")),
            Some(CheckoutOutcome::Paid(confirmation("pay_2")))
        );
        assert_eq!(events.closed(), None);
    }

    #[test]
    fn closing_reports_last_failure_or_dismissal() {
        let mut events = CheckoutEvents::new();
        events.attempt_failed("Card declined");
        events.attempt_failed("Bank timeout");
        assert_eq!(events.closed(), Some(CheckoutOutcome::Failed("Bank timeout".into())));
        assert_eq!(events.paid(confirmation("pay_late")), None);

        let mut events = CheckoutEvents::new();
        assert_eq!(events.closed(), Some(CheckoutOutcome::Dismissed));
    }
}
