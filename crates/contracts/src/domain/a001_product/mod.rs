pub mod aggregate;
pub mod load;

pub use aggregate::{Product, Ratings, Review, ShippingDetails};
pub use load::{
    parse_products, resolve_details, LoadError, LoadOutcome, ProductDetailsView, ProductsLoadState,
    NOT_FOUND_MESSAGE,
};
