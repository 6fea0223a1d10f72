//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod config;
pub use config::{api_client, app_config, today};

mod storage;
pub use storage::make_storage;

pub const BRIDAL_CSS: Asset = asset!("/assets/bridal.css");

mod auth;
pub use auth::{sign_in, sign_out, use_session, LogoutButton, SessionProvider, SessionState};

mod notice;
pub use notice::{notify, use_notices, NoticeLevel, NoticeProvider, NoticeStack, Notices};

mod wishlist;
pub use wishlist::{use_wishlist, WishlistProvider, WishlistState, WishlistToggle};

mod prefs;
pub use prefs::{use_font_prefs, FontPicker, FontPrefsProvider};

mod navbar;
pub use navbar::Navbar;

mod field_errors;
pub use field_errors::{error_for, FieldErrors, TextField};

mod pagination;
pub use pagination::Pager;

mod service_card;
pub use service_card::ServiceCard;

mod booking_wizard;
pub use booking_wizard::MultiStepBooking;

mod payment_panel;
pub use payment_panel::PaymentPanel;

mod makeup;
pub use makeup::VirtualMakeup;

mod chat_widget;
pub use chat_widget::ChatWidget;

mod voice;
pub use voice::VoiceCommandButton;

mod google;
pub use google::GoogleSignIn;

mod interop;
