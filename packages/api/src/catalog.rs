//! Public catalog endpoints: services, offers and the contact form.

use store::{ContactMessage, Offer, Service};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get("/api/services").await
    }

    pub async fn get_service(&self, id: &str) -> Result<Service, ApiError> {
        self.get(&format!("/api/services/{id}")).await
    }

    pub async fn list_offers(&self) -> Result<Vec<Offer>, ApiError> {
        self.get("/api/offers").await
    }

    pub async fn send_contact(&self, message: &ContactMessage) -> Result<(), ApiError> {
        self.post_unit("/api/contact", message).await
    }
}
