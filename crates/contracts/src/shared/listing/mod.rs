//! Listing engine: filtering, paging and row selection over the loaded catalog.

pub mod filter;
pub mod pagination;
pub mod selection;

pub use filter::{distinct_categories, distinct_names, CatalogItem, FilterState};
pub use pagination::{
    clamp_page, total_pages, PageLink, Paginator, SliceReporter, DEFAULT_PER_PAGE,
    DEFAULT_WINDOW_SIZE, PER_PAGE_OPTIONS,
};
pub use selection::toggle_id;
