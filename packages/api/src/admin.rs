//! Back office reads and review moderation.

use serde::Serialize;
use store::{AdminSummary, InventoryItem, ReportRow, Review, StaffMember};

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 3] = [ReportPeriod::Weekly, ReportPeriod::Monthly, ReportPeriod::Yearly];

    pub fn key(self) -> &'static str {
        match self {
            ReportPeriod::Weekly => "weekly",
            ReportPeriod::Monthly => "monthly",
            ReportPeriod::Yearly => "yearly",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "weekly" => ReportPeriod::Weekly,
            "yearly" => ReportPeriod::Yearly,
            _ => ReportPeriod::Monthly,
        }
    }
}

/// Body of `POST /api/reviews`, always tied to the service it reviews.
#[derive(Debug, Serialize)]
pub struct NewReview {
    pub service_id: String,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    pub fn new(service_id: &str, rating: u8, comment: &str) -> Self {
        Self {
            service_id: service_id.to_string(),
            rating: rating.clamp(1, 5),
            comment: comment.trim().to_string(),
        }
    }
}

impl ApiClient {
    pub async fn admin_summary(&self) -> Result<AdminSummary, ApiError> {
        self.get("/api/dashboard").await
    }

    pub async fn list_staff(&self) -> Result<Vec<StaffMember>, ApiError> {
        self.get("/api/staff").await
    }

    pub async fn list_inventory(&self) -> Result<Vec<InventoryItem>, ApiError> {
        self.get("/api/inventory").await
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.get("/api/admin/reviews").await
    }

    pub async fn approve_review(&self, id: &str) -> Result<(), ApiError> {
        self.put_unit(&format!("/api/admin/reviews/{id}/approve")).await
    }

    pub async fn delete_review(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/admin/reviews/{id}")).await
    }

    pub async fn submit_review(&self, review: &NewReview) -> Result<(), ApiError> {
        self.post_unit("/api/reviews", review).await
    }

    pub async fn reports(&self, period: ReportPeriod) -> Result<Vec<ReportRow>, ApiError> {
        self.get(&format!("/api/reports?period={}", period.key())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_body_names_the_service() {
        let review = NewReview::new("svc_9", 7, "  Lovely work  ");
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["service_id"], "svc_9");
        assert_eq!(json["rating"], 5);
        assert_eq!(json["comment"], "Lovely work");
    }
}
