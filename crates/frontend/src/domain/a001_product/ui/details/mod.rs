//! Product details page
//!
//! - view.rs: page component and product card (pure UI)
//! - the feed request is shared with the listing through `ProductsViewModel`

mod view;

pub use view::{ProductDetailsPage, ProductItem};
