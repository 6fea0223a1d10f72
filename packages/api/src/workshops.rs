use store::{Workshop, WorkshopRegistration, WorkshopRegistrationRequest};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_workshops(&self) -> Result<Vec<Workshop>, ApiError> {
        self.get("/api/workshops").await
    }

    pub async fn get_workshop(&self, id: &str) -> Result<Workshop, ApiError> {
        self.get(&format!("/api/workshops/{id}")).await
    }

    pub async fn register_workshop(
        &self,
        request: &WorkshopRegistrationRequest,
    ) -> Result<WorkshopRegistration, ApiError> {
        let registration: WorkshopRegistration =
            self.post("/api/workshops/register", request).await?;
        tracing::info!("workshop registration {} created", registration.id);
        Ok(registration)
    }
}
