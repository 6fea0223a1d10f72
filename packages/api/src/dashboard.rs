//! Customer dashboard loader.

use std::future::Future;

use store::{Booking, DashboardSummary, Payment, WishlistItem};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Run the three dashboard fetches concurrently. The first failure fails the
/// whole load; partial results are dropped.
pub async fn join_dashboard<B, W, P>(
    bookings: B,
    wishlist: W,
    payments: P,
) -> Result<DashboardSummary, ApiError>
where
    B: Future<Output = Result<Vec<Booking>, ApiError>>,
    W: Future<Output = Result<Vec<WishlistItem>, ApiError>>,
    P: Future<Output = Result<Vec<Payment>, ApiError>>,
{
    let (bookings, wishlist, payments) = futures::try_join!(bookings, wishlist, payments)?;
    Ok(DashboardSummary {
        bookings,
        wishlist,
        payments,
    })
}

impl ApiClient {
    pub async fn load_dashboard(&self, user_id: &str) -> Result<DashboardSummary, ApiError> {
        join_dashboard(
            self.my_bookings(),
            self.list_wishlist(user_id),
            self.my_payments(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(amount: u64) -> Payment {
        Payment {
            id: "p1".into(),
            booking_id: Some("b1".into()),
            razorpay_payment_id: "pay_1".into(),
            amount,
            status: "paid".into(),
        }
    }

    #[tokio::test]
    async fn all_three_succeed() {
        let summary = join_dashboard(
            async { Ok(Vec::new()) },
            async { Ok(Vec::new()) },
            async { Ok(vec![payment(5000)]) },
        )
        .await
        .unwrap();
        assert!(summary.bookings.is_empty());
        assert_eq!(summary.total_paid(), 5000);
    }

    #[tokio::test]
    async fn one_failure_fails_the_load() {
        let result = join_dashboard(
            async { Ok(Vec::new()) },
            async { Err(ApiError::Network("offline".into())) },
            async { Ok(vec![payment(5000)]) },
        )
        .await;
        assert_eq!(result, Err(ApiError::Network("offline".into())));
    }
}
