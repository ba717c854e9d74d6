pub mod header;

pub use header::{AppHeader, AppLogo};
