pub mod components;
pub mod icons;
pub mod view_mode_store;
