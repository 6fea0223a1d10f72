//! # Domain models mirrored from the backend
//!
//! Every record here is owned by the REST backend; the client holds transient
//! copies for display and passes ids between steps. All types are
//! `Serialize + Deserialize` so they travel as JSON bodies and can be cached in
//! local storage.
//!
//! The backend stores documents with a `_id` key, so ids accept both `id` and
//! `_id` on the way in.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] / [`Role`] | The logged-in user as returned by `/api/auth`. |
//! | [`Service`] | A catalog entry (makeup, mehendi, venue decor, ...). |
//! | [`BookingRequest`] / [`Booking`] | A reservation before and after the backend accepts it. |
//! | [`Workshop`] / [`WorkshopRegistrationRequest`] / [`WorkshopRegistration`] | Bridal-skills workshops and sign-ups. |
//! | [`PaymentOrder`] / [`Payment`] | A Razorpay order created server-side and a settled payment record. |
//! | [`WishlistItem`] / [`NewWishlistItem`] | Saved catalog entries. |
//! | [`Review`], [`StaffMember`], [`InventoryItem`], [`ReportRow`], [`Offer`] | Back office records. |
//! | [`DashboardSummary`] | The customer dashboard, assembled from three parallel fetches. |
//! | [`AdminSummary`] | Headline numbers for the admin dashboard. |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    Customer,
}

/// User information returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Price in rupees.
    pub price: u32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub rating: f32,
}

impl Service {
    /// Identity of the service in a wishlist: its image, or its detail page
    /// when it has none.
    pub fn wishlist_url(&self) -> String {
        if self.image_url.trim().is_empty() {
            format!("/services/{}", self.id)
        } else {
            self.image_url.clone()
        }
    }
}

/// Booking fields as submitted by the booking wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRequest {
    pub service_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_date: NaiveDate,
    pub venue: String,
    pub package: String,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub request: BookingRequest,
    #[serde(default)]
    pub status: String,
    /// Amount due in rupees.
    #[serde(default)]
    pub amount: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workshop {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub seats_left: u32,
    /// Fee in rupees.
    pub fee: u32,
    #[serde(default)]
    pub instructor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkshopRegistrationRequest {
    pub workshop_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub experience: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkshopRegistration {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub request: WorkshopRegistrationRequest,
    #[serde(default)]
    pub amount: u32,
}

/// A Razorpay order created by the backend. `amount` is in paise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentOrder {
    pub id: String,
    pub amount: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

/// A settled payment as listed on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub razorpay_payment_id: String,
    pub amount: u64,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub user_id: String,
    pub url: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub price: u32,
}

/// Body of `POST /api/wishlist`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewWishlistItem {
    pub user_id: String,
    pub url: String,
    pub desc: String,
    pub rating: f32,
    pub price: u32,
}

impl NewWishlistItem {
    /// Save a catalog service for a user under [`Service::wishlist_url`].
    pub fn from_service(user_id: &str, service: &Service) -> Self {
        Self {
            user_id: user_id.to_string(),
            url: service.wishlist_url(),
            desc: service.name.clone(),
            rating: service.rating,
            price: service.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    #[serde(alias = "_id")]
    pub id: String,
    pub user_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub approved: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffMember {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: u32,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.quantity < 5
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRow {
    pub period: String,
    #[serde(default)]
    pub bookings: u32,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub workshop_registrations: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub discount_percent: u8,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
}

impl Offer {
    /// An offer without an end date never expires.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.valid_until.map_or(true, |end| end >= today)
    }
}

/// Back office headline numbers from `GET /api/dashboard`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminSummary {
    #[serde(default)]
    pub total_bookings: u32,
    /// Rupees.
    #[serde(default)]
    pub total_revenue: u64,
    #[serde(default)]
    pub workshop_registrations: u32,
    #[serde(default)]
    pub pending_reviews: u32,
    #[serde(default)]
    pub low_stock_items: u32,
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Customer dashboard data, fetched in parallel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub bookings: Vec<Booking>,
    pub wishlist: Vec<WishlistItem>,
    pub payments: Vec<Payment>,
}

impl DashboardSummary {
    /// Sum of settled payments in paise.
    pub fn total_paid(&self) -> u64 {
        self.payments
            .iter()
            .filter(|p| p.status.eq_ignore_ascii_case("paid") || p.status.eq_ignore_ascii_case("captured"))
            .map(|p| p.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_is_customer() {
        let user: UserInfo =
            serde_json::from_str(r#"{"_id":"u1","email":"a@b.in","role":"superuser"}"#).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::Customer);
        assert_eq!(user.display_name(), "a@b.in");

        let admin: UserInfo =
            serde_json::from_str(r#"{"id":"u2","email":"x@y.in","name":"Asha","role":"admin"}"#)
                .unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.display_name(), "Asha");
    }

    #[test]
    fn booking_flattens_request_fields() {
        let booking: Booking = serde_json::from_str(
            r#"{
                "_id": "b1",
                "service_id": "s1",
                "name": "Meera",
                "email": "meera@example.com",
                "phone": "9876543210",
                "event_date": "2030-02-14",
                "venue": "Udaipur",
                "package": "gold",
                "status": "pending",
                "amount": 25000
            }"#,
        )
        .unwrap();
        assert_eq!(booking.id, "b1");
        assert_eq!(booking.request.venue, "Udaipur");
        assert_eq!(booking.request.guests, None);
        assert_eq!(booking.amount, 25000);
    }

    #[test]
    fn offer_activity_window() {
        let today = NaiveDate::from_ymd_opt(2030, 1, 10).unwrap();
        let mut offer = Offer {
            id: "o".into(),
            title: "Early bird".into(),
            description: String::new(),
            discount_percent: 10,
            valid_until: None,
        };
        assert!(offer.is_active(today));
        offer.valid_until = NaiveDate::from_ymd_opt(2030, 1, 10);
        assert!(offer.is_active(today));
        offer.valid_until = NaiveDate::from_ymd_opt(2030, 1, 9);
        assert!(!offer.is_active(today));
    }

    #[test]
    fn dashboard_totals_only_settled_payments() {
        let payment = |amount, status: &str| Payment {
            id: "p".into(),
            booking_id: None,
            razorpay_payment_id: String::new(),
            amount,
            status: status.into(),
        };
        let summary = DashboardSummary {
            payments: vec![payment(1000, "paid"), payment(500, "failed"), payment(250, "Captured")],
            ..Default::default()
        };
        assert_eq!(summary.total_paid(), 1250);
    }
}
