pub mod details;
pub mod grid;
pub mod image;
pub mod list;
pub mod table;
pub mod view_model;
