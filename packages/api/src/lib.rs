//! # API crate: typed client for the bridal studio backend
//!
//! Every page in the front end talks to the same REST backend through
//! [`ApiClient`]. The backend owns authentication, persistence, payment
//! signature checks and report aggregation; this crate only shapes requests,
//! attaches the bearer token, and decodes responses into [`store`] models.
//!
//! ## Modules
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | [`client`] | Shared request plumbing, bearer auth, response envelopes |
//! | [`error`] | [`ApiError`]: the single failure type every call returns |
//! | [`auth`] | `/api/auth`: login, register, Google sign-in, who-am-I |
//! | [`catalog`] | `/api/services`, `/api/offers`, `/api/contact` |
//! | [`bookings`] | `/api/bookings` |
//! | [`workshops`] | `/api/workshops` |
//! | [`payments`] | `/api/payments`, `/api/workshop-payments` |
//! | [`wishlist`] | `/api/wishlist` |
//! | [`admin`] | `/api/dashboard`, `/api/staff`, `/api/inventory`, `/api/admin/reviews`, `/api/reports`, `/api/reviews` |
//! | [`dashboard`] | Customer dashboard: three fetches joined, failing together |
//!
//! There is no retry policy. A failed call is logged with `tracing` and the
//! caller decides whether to show a notice or fall back to an empty list.

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod payments;
pub mod wishlist;
pub mod workshops;

pub use auth::{session_check, AuthResponse, LoginRequest, RegisterRequest};
pub use client::ApiClient;
pub use dashboard::join_dashboard;
pub use error::ApiError;
pub use payments::VerifyResponse;
