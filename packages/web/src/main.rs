use dioxus::prelude::*;

use store::PaymentHandoff;
use ui::{FontPrefsProvider, NoticeProvider, SessionProvider, WishlistProvider};
use views::{
    AdminDashboard, AdminInventory, AdminReports, AdminReviews, AdminStaff, BookService, Checkout,
    Contact, Dashboard, Home, Login, Makeup, NotFound, Offers, Register, RequireAdmin, RequireLogin,
    ServiceDetail, Services, Shell, WishlistPage, WorkshopRegister, Workshops,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/services")]
        Services {},
        #[route("/services/:id")]
        ServiceDetail { id: String },
        #[route("/workshops")]
        Workshops {},
        #[route("/offers")]
        Offers {},
        #[route("/contact")]
        Contact {},
        #[route("/makeup")]
        Makeup {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},

        #[layout(RequireLogin)]
            #[route("/book/:service_id")]
            BookService { service_id: String },
            #[route("/payment")]
            Checkout {},
            #[route("/workshops/:id/register")]
            WorkshopRegister { id: String },
            #[route("/wishlist")]
            WishlistPage {},
            #[route("/dashboard")]
            Dashboard {},
        #[end_layout]

        #[nest("/admin")]
            #[layout(RequireAdmin)]
                #[route("/")]
                AdminDashboard {},
                #[route("/reviews")]
                AdminReviews {},
                #[route("/reports")]
                AdminReports {},
                #[route("/inventory")]
                AdminInventory {},
                #[route("/staff")]
                AdminStaff {},
            #[end_layout]
        #[end_nest]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// The booking or workshop registration waiting to be paid. Lives only in
/// memory: a reload of `/payment` starts over.
#[derive(Clone, Copy)]
pub struct PendingPayment(pub Signal<Option<PaymentHandoff>>);

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| PendingPayment(Signal::new(None)));

    rsx! {
        document::Title { "{ui::app_config().payment.merchant_name}" }

        NoticeProvider {
            SessionProvider {
                WishlistProvider {
                    FontPrefsProvider {
                        Router::<Route> {}
                    }
                }
            }
        }
    }
}
