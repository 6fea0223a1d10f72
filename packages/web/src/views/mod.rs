mod layout;
pub use layout::{RequireAdmin, RequireLogin, Shell};

mod home;
pub use home::Home;

mod services;
pub use services::{ServiceDetail, Services};

mod booking;
pub use booking::{BookService, Checkout};

mod workshops;
pub use workshops::{WorkshopRegister, Workshops};

mod offers;
pub use offers::Offers;

mod contact;
pub use contact::Contact;

mod makeup;
pub use makeup::Makeup;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod wishlist;
pub use wishlist::WishlistPage;

mod dashboard;
pub use dashboard::Dashboard;

mod admin;
pub use admin::{AdminDashboard, AdminInventory, AdminReports, AdminReviews, AdminStaff};

mod not_found;
pub use not_found::NotFound;

use api::ApiError;

/// Log a failed list fetch and show nothing instead.
pub(crate) fn or_empty<T>(what: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::error!("loading {what} failed: {e}");
        Vec::new()
    })
}
