use contracts::shared::view_mode::{ViewMode, ViewModeStore, VIEW_MODE_STORAGE_KEY};

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// View-mode preference kept in `sessionStorage`, so it lasts for the
/// browsing session only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionViewModeStore;

impl ViewModeStore for SessionViewModeStore {
    fn get(&self) -> ViewMode {
        let raw = storage().and_then(|s| s.get_item(VIEW_MODE_STORAGE_KEY).ok().flatten());
        ViewMode::from_stored(raw.as_deref())
    }

    fn set(&self, mode: ViewMode) {
        let Some(storage) = storage() else {
            log::warn!("sessionStorage unavailable, view mode not persisted");
            return;
        };
        if storage.set_item(VIEW_MODE_STORAGE_KEY, mode.as_str()).is_err() {
            log::warn!("failed to persist view mode '{}'", mode.as_str());
        }
    }
}
