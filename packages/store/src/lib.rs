pub mod access;
pub mod booking;
pub mod chat;
pub mod config;
pub mod kv;
pub mod listing;
pub mod makeup;
pub mod models;
pub mod payment;
pub mod prefs;
pub mod recently_viewed;
pub mod session;
pub mod validation;
pub mod voice;
pub mod wishlist;
pub mod workshop;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use access::{Access, Redirect};
pub use booking::{BookingForm, BookingStep, BookingWizard, HandoffKind, PaymentHandoff};
pub use config::AppConfig;
pub use kv::{KeyValueStore, StorageError};
pub use listing::{paginate, search, Page, Searchable};
pub use models::{
    AdminSummary, Booking, BookingRequest, ContactMessage, DashboardSummary, InventoryItem, NewWishlistItem,
    Offer, Payment, PaymentOrder, ReportRow, Review, Role, Service, StaffMember, UserInfo,
    WishlistItem, Workshop, WorkshopRegistration, WorkshopRegistrationRequest,
};
pub use payment::{
    CheckoutEvents, CheckoutOptions, CheckoutOutcome, PaymentConfirmation, PaymentFlow, PaymentStatus,
};
pub use session::{Session, SessionCache, SessionCheck};
pub use validation::FieldError;
pub use wishlist::Wishlist;
