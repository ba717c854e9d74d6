use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Session storage key of the listing presentation preference.
pub const VIEW_MODE_STORAGE_KEY: &str = "product-view-mode";

/// Presentation of the product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::Table => "table",
        }
    }

    /// Exact match only; anything else is "not a view mode".
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "grid" => Some(ViewMode::Grid),
            "table" => Some(ViewMode::Table),
            _ => None,
        }
    }

    /// Interprets a raw stored value. Absent or foreign values mean the default.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(Self::from_code).unwrap_or_default()
    }
}

/// Where the view-mode preference is kept between page loads.
pub trait ViewModeStore {
    fn get(&self) -> ViewMode;
    fn set(&self, mode: ViewMode);
}

/// Process-local store for non-browser contexts and tests.
#[derive(Debug, Default)]
pub struct MemoryViewModeStore {
    raw: Mutex<Option<String>>,
}

impl MemoryViewModeStore {
    /// Seeds the store with a raw value as it would be found in storage.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.lock().ok().and_then(|raw| raw.clone())
    }
}

impl ViewModeStore for MemoryViewModeStore {
    fn get(&self) -> ViewMode {
        match self.raw.lock() {
            Ok(raw) => ViewMode::from_stored(raw.as_deref()),
            Err(_) => ViewMode::default(),
        }
    }

    fn set(&self, mode: ViewMode) {
        if let Ok(mut raw) = self.raw.lock() {
            *raw = Some(mode.as_str().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert_eq!(ViewMode::from_stored(Some("grid")), ViewMode::Grid);
        assert_eq!(ViewMode::from_stored(Some("table")), ViewMode::Table);
        assert_eq!(ViewMode::from_stored(Some("banana")), ViewMode::Grid);
        assert_eq!(ViewMode::from_stored(Some("Table")), ViewMode::Grid);
        assert_eq!(ViewMode::from_stored(Some("")), ViewMode::Grid);
        assert_eq!(ViewMode::from_stored(None), ViewMode::Grid);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryViewModeStore::default();
        assert_eq!(store.get(), ViewMode::Grid);

        store.set(ViewMode::Table);
        assert_eq!(store.get(), ViewMode::Table);
        assert_eq!(store.raw().as_deref(), Some("table"));
    }

    #[test]
    fn test_memory_store_ignores_corrupt_value() {
        let store = MemoryViewModeStore::with_raw("banana");
        assert_eq!(store.get(), ViewMode::Grid);

        let store = MemoryViewModeStore::with_raw("table");
        assert_eq!(store.get(), ViewMode::Table);
    }
}
