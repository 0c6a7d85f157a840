//! Page request, sort order, and page envelope primitives.
//!
//! Listing endpoints accept a zero-based page index, a page size, and an
//! optional sort expression. Repository adapters translate a validated
//! [`PageRequest`] into their native query form and answer with a [`Page`],
//! which carries the requested slice together with the total number of
//! matching items so clients can render pagers without a second round trip.
//!
//! ```
//! use pagination::{Direction, Page, PageRequest, Sort};
//!
//! let request = PageRequest::new(1, 10)
//!     .expect("valid page request")
//!     .with_sort(Sort::parse("city,desc").expect("valid sort"));
//! assert_eq!(request.offset(), 10);
//! assert_eq!(request.sort().map(Sort::direction), Some(Direction::Desc));
//!
//! let page = Page::new(vec!["a", "b"], &request, 12);
//! assert_eq!(page.total_pages(), 2);
//! assert_eq!(page.data(), ["a", "b"]);
//! ```

mod error;
mod page;
mod request;
mod sort;

pub use error::PageRequestError;
pub use page::Page;
pub use request::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
pub use sort::{Direction, Sort};
