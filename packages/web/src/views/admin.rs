//! Back office pages. Every list is fetched whole and searched/paged here.

use api::admin::ReportPeriod;
use dioxus::prelude::*;
use store::booking::format_rupees;
use store::{paginate, search, InventoryItem, Review, StaffMember};
use ui::{api_client, app_config, notify, use_notices, use_session, NoticeLevel, Pager};

use super::or_empty;
use crate::Route;

#[component]
fn AdminTabs() -> Element {
    rsx! {
        nav {
            class: "admin-tabs",
            Link { to: Route::AdminDashboard {}, "Overview" }
            Link { to: Route::AdminReviews {}, "Reviews" }
            Link { to: Route::AdminReports {}, "Reports" }
            Link { to: Route::AdminInventory {}, "Inventory" }
            Link { to: Route::AdminStaff {}, "Staff" }
        }
    }
}

#[component]
fn SearchBox(mut query: Signal<String>, mut page: Signal<usize>, placeholder: String) -> Element {
    rsx! {
        input {
            class: "search-box",
            r#type: "search",
            placeholder: "{placeholder}",
            value: "{query}",
            oninput: move |evt| {
                query.set(evt.value());
                page.set(1);
            },
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let session = use_session();
    let summary = use_resource(move || async move { api_client(session().session.as_ref()).admin_summary().await });

    rsx! {
        h1 { "Admin dashboard" }
        AdminTabs {}
        {match summary() {
            None => rsx! { p { class: "loading", "Loading..." } },
            Some(Err(e)) => {
                tracing::error!("admin summary failed: {e}");
                rsx! { p { class: "empty", "Could not load the summary." } }
            }
            Some(Ok(s)) => rsx! {
                div {
                    class: "stat-grid",
                    Stat { label: "Bookings", value: s.total_bookings.to_string() }
                    Stat { label: "Revenue", value: format_rupees(s.total_revenue * 100) }
                    Stat { label: "Workshop registrations", value: s.workshop_registrations.to_string() }
                    Stat { label: "Reviews awaiting approval", value: s.pending_reviews.to_string() }
                    Stat { label: "Low stock items", value: s.low_stock_items.to_string() }
                }
            },
        }}
    }
}

#[component]
fn Stat(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "stat",
            div { class: "stat-value", "{value}" }
            div { class: "stat-label", "{label}" }
        }
    }
}

#[component]
pub fn AdminReviews() -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let mut reviews = use_signal(Vec::<Review>::new);
    let query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let loader = use_resource(move || async move {
        let list = or_empty("reviews", api_client(session().session.as_ref()).list_reviews().await);
        reviews.set(list);
    });

    let approve = move |id: String| async move {
        let client = api_client(session.peek().session.as_ref());
        match client.approve_review(&id).await {
            Ok(()) => {
                if let Some(review) = reviews.write().iter_mut().find(|r| r.id == id) {
                    review.approved = true;
                }
                notify(&mut notices, NoticeLevel::Success, "Review approved");
            }
            Err(e) => notify(&mut notices, NoticeLevel::Error, &format!("Approve failed: {e}")),
        }
    };

    let delete = move |id: String| async move {
        let client = api_client(session.peek().session.as_ref());
        match client.delete_review(&id).await {
            Ok(()) => {
                reviews.write().retain(|r| r.id != id);
                notify(&mut notices, NoticeLevel::Success, "Review deleted");
            }
            Err(e) => notify(&mut notices, NoticeLevel::Error, &format!("Delete failed: {e}")),
        }
    };

    let all = reviews();
    let matches: Vec<Review> = search(&all, &query()).into_iter().cloned().collect();
    let current = paginate(&matches, page(), app_config().ui.page_size);

    rsx! {
        h1 { "Reviews" }
        AdminTabs {}
        div {
            class: "toolbar",
            SearchBox { query, page, placeholder: "Search by customer or text" }
        }
        if loader.read().is_none() {
            p { class: "loading", "Loading..." }
        }
        table {
            class: "data",
            thead { tr { th { "Customer" } th { "Rating" } th { "Comment" } th { "Status" } th {} } }
            tbody {
                for review in current.items {
                    tr {
                        key: "{review.id}",
                        td { "{review.user_name}" }
                        td { "{review.rating} ★" }
                        td { "{review.comment}" }
                        td { if review.approved { "Approved" } else { "Pending" } }
                        td {
                            if !review.approved {
                                button {
                                    class: "btn-primary",
                                    onclick: {
                                        let id = review.id.clone();
                                        move |_| approve(id.clone())
                                    },
                                    "Approve"
                                }
                            }
                            button {
                                class: "btn-secondary",
                                onclick: {
                                    let id = review.id.clone();
                                    move |_| delete(id.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
        Pager {
            page: current.page,
            total_pages: current.total_pages,
            on_change: move |p| page.set(p),
        }
    }
}

#[component]
pub fn AdminReports() -> Element {
    let session = use_session();
    let mut period = use_signal(|| ReportPeriod::Monthly);

    let rows = use_resource(move || async move {
        let period = period();
        or_empty("reports", api_client(session().session.as_ref()).reports(period).await)
    });

    let rows = rows().unwrap_or_default();
    let max_revenue = rows.iter().map(|r| r.revenue).max().unwrap_or(0).max(1);

    rsx! {
        h1 { "Reports" }
        AdminTabs {}
        div {
            class: "toolbar",
            select {
                value: period().key(),
                onchange: move |evt| period.set(ReportPeriod::parse(&evt.value())),
                for p in ReportPeriod::ALL {
                    option { value: p.key(), "{p.key()}" }
                }
            }
        }
        if rows.is_empty() {
            p { class: "empty", "No data for this period." }
        } else {
            table {
                class: "data",
                thead { tr { th { "Period" } th { "Bookings" } th { "Workshop sign-ups" } th { "Revenue" } th {} } }
                tbody {
                    for row in rows {
                        tr {
                            key: "{row.period}",
                            td { "{row.period}" }
                            td { "{row.bookings}" }
                            td { "{row.workshop_registrations}" }
                            td { {format_rupees(row.revenue * 100)} }
                            td {
                                style: "width: 30%",
                                div {
                                    class: "bar",
                                    style: "width: {row.revenue * 100 / max_revenue}%",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AdminInventory() -> Element {
    let session = use_session();
    let items = use_resource(move || async move {
        or_empty("inventory", api_client(session().session.as_ref()).list_inventory().await)
    });
    let query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let all = items().unwrap_or_default();
    let low = all.iter().filter(|i| i.is_low_stock()).count();
    let matches: Vec<InventoryItem> = search(&all, &query()).into_iter().cloned().collect();
    let current = paginate(&matches, page(), app_config().ui.page_size);

    rsx! {
        h1 { "Inventory" }
        AdminTabs {}
        div {
            class: "toolbar",
            SearchBox { query, page, placeholder: "Search items or categories" }
            if low > 0 {
                span { class: "field-errors", "{low} item(s) low on stock" }
            }
        }
        table {
            class: "data",
            thead { tr { th { "Item" } th { "Category" } th { "Quantity" } th { "Unit price" } } }
            tbody {
                for item in current.items {
                    tr {
                        key: "{item.id}",
                        class: if item.is_low_stock() { "low-stock" } else { "" },
                        td { "{item.name}" }
                        td { "{item.category}" }
                        td { "{item.quantity}" }
                        td { {format_rupees(u64::from(item.unit_price) * 100)} }
                    }
                }
            }
        }
        Pager {
            page: current.page,
            total_pages: current.total_pages,
            on_change: move |p| page.set(p),
        }
    }
}

#[component]
pub fn AdminStaff() -> Element {
    let session = use_session();
    let staff = use_resource(move || async move {
        or_empty("staff", api_client(session().session.as_ref()).list_staff().await)
    });
    let query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let all = staff().unwrap_or_default();
    let matches: Vec<StaffMember> = search(&all, &query()).into_iter().cloned().collect();
    let current = paginate(&matches, page(), app_config().ui.page_size);

    rsx! {
        h1 { "Staff" }
        AdminTabs {}
        div {
            class: "toolbar",
            SearchBox { query, page, placeholder: "Search by name, role or email" }
        }
        table {
            class: "data",
            thead { tr { th { "Name" } th { "Role" } th { "Email" } th { "Phone" } } }
            tbody {
                for member in current.items {
                    tr {
                        key: "{member.id}",
                        td { "{member.name}" }
                        td { "{member.role}" }
                        td { "{member.email}" }
                        td { "{member.phone}" }
                    }
                }
            }
        }
        Pager {
            page: current.page,
            total_pages: current.total_pages,
            on_change: move |p| page.set(p),
        }
    }
}
