pub mod currency;
pub mod listing;
pub mod view_mode;
