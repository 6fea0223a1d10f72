use store::{Booking, BookingRequest};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        let booking: Booking = self.post("/api/bookings", request).await?;
        tracing::info!("booking {} created", booking.id);
        Ok(booking)
    }

    pub async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get("/api/bookings/my").await
    }
}
