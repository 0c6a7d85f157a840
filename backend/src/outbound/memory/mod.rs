//! In-memory repository adapters.
//!
//! Used when no database is configured and by the HTTP behaviour tests. Each
//! store guards an ordered map with a `tokio` `RwLock`. Text attributes sort
//! ASCII case-insensitively by byte, which is what the Diesel adapters get from
//! `lower()` over "C"-collated columns; ties fall back to id order.

use std::cmp::Ordering;

use pagination::Page;

use crate::domain::{Pageable, SortField};

mod property_repository;
mod user_repository;

pub use property_repository::InMemoryPropertyRepository;
pub use user_repository::InMemoryUserRepository;

/// Compare text ignoring ASCII case, then by byte.
fn case_folded(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Sort `items` as `pageable` requests and cut out the requested page.
///
/// `items` must already be in ascending id order (a `BTreeMap<Uuid, _>`
/// iterates that way, matching PostgreSQL's `uuid` ordering); the stable sort
/// then keeps equal keys in id order.
fn paginate<T, F, C>(mut items: Vec<T>, pageable: &Pageable<F>, compare: C) -> Page<T>
where
    F: SortField,
    C: Fn(F, &T, &T) -> Ordering,
{
    if let Some(sort) = pageable.sort() {
        items.sort_by(|a, b| {
            let ordering = compare(sort.field(), a, b);
            if sort.direction().is_ascending() {
                ordering
            } else {
                ordering.reverse()
            }
        });
    }
    let total = items.len() as u64;
    let window = pageable.request().window(items.len());
    let data = items
        .into_iter()
        .skip(window.start)
        .take(window.len())
        .collect();
    Page::new(data, pageable.request(), total)
}
