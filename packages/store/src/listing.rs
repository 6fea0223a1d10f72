//! Client-side search and pagination over in-memory lists.

use crate::models::{Booking, InventoryItem, ReportRow, Review, Service, StaffMember, Workshop};

/// Something a search box can match against.
pub trait Searchable {
    /// Text the query is matched against.
    fn haystack(&self) -> String;
}

/// Keep items containing every whitespace-separated term, case-insensitively.
pub fn search<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    items
        .iter()
        .filter(|item| {
            if terms.is_empty() {
                return true;
            }
            let hay = item.haystack().to_lowercase();
            terms.iter().all(|t| hay.contains(t.as_str()))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice out one page. Out-of-range pages are clamped; an empty list has one empty page.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());
    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        page,
        total_pages,
        total_items: items.len(),
    }
}

macro_rules! searchable {
    ($ty:ty, |$it:ident| $body:expr) => {
        impl Searchable for $ty {
            fn haystack(&self) -> String {
                let $it = self;
                $body
            }
        }
    };
}

searchable!(Service, |s| format!("{} {} {}", s.name, s.category, s.description));
searchable!(Workshop, |w| format!("{} {} {}", w.title, w.instructor, w.description));
searchable!(Review, |r| format!("{} {}", r.user_name, r.comment));
searchable!(StaffMember, |s| format!("{} {} {}", s.name, s.role, s.email));
searchable!(InventoryItem, |i| format!("{} {}", i.name, i.category));
searchable!(ReportRow, |r| r.period.clone());
searchable!(Booking, |b| format!(
    "{} {} {} {}",
    b.request.name, b.request.venue, b.request.package, b.status
));

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(&'static str);

    impl Searchable for Item {
        fn haystack(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn every_term_must_match() {
        let items = [Item("Bridal Makeup HD"), Item("Mehendi"), Item("Party makeup")];
        let hits = search(&items, "makeup bridal");
        assert_eq!(hits, [&items[0]]);
        assert_eq!(search(&items, "MAKEUP").len(), 2);
        assert_eq!(search(&items, "  ").len(), 3);
        assert!(search(&items, "nails").is_empty());
    }

    #[test]
    fn pages_are_clamped() {
        let items: Vec<u32> = (1..=7).collect();
        let page = paginate(&items, 2, 3);
        assert_eq!(page.items, [4, 5, 6]);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_prev() && page.has_next());

        let last = paginate(&items, 99, 3);
        assert_eq!(last.page, 3);
        assert_eq!(last.items, [7]);
        assert!(!last.has_next());

        assert_eq!(paginate(&items, 0, 3).page, 1);
    }

    #[test]
    fn empty_list_has_one_page() {
        let page = paginate::<u32>(&[], 4, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert_eq!(paginate(&[1, 2], 1, 0).items, [1]);
    }
}
