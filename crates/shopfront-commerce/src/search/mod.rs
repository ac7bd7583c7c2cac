//! Search module.
//!
//! A free-text filter over the catalog plus the page state derived from the
//! filtered sequence.

mod filter;
mod pager;

pub use filter::SearchFilter;
pub use pager::{Pager, DEFAULT_PAGE_SIZE};
