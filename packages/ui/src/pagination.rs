use dioxus::prelude::*;

/// Previous / next controls for a paginated list. Hidden when everything fits on one page.
#[component]
pub fn Pager(page: usize, total_pages: usize, on_change: EventHandler<usize>) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }
    rsx! {
        div {
            class: "pager",
            button {
                disabled: page <= 1,
                onclick: move |_| on_change.call(page.saturating_sub(1).max(1)),
                "‹ Prev"
            }
            span { class: "pager-label", "Page {page} of {total_pages}" }
            button {
                disabled: page >= total_pages,
                onclick: move |_| on_change.call((page + 1).min(total_pages)),
                "Next ›"
            }
        }
    }
}
