use contracts::shared::listing::FilterState;
use contracts::shared::view_mode::{ViewMode, ViewModeStore};
use leptos::prelude::*;
use std::sync::Arc;

pub type SharedViewModeStore = Arc<dyn ViewModeStore + Send + Sync>;

/// Listing page state: active filters and the presentation mode.
#[derive(Clone, Copy)]
pub struct ListingState {
    pub filter: RwSignal<FilterState>,
    pub view_mode: RwSignal<ViewMode>,
    store: StoredValue<SharedViewModeStore>,
}

/// Reads the stored view mode once; filters always start empty.
pub fn create_state(store: SharedViewModeStore) -> ListingState {
    let initial = store.get();
    ListingState {
        filter: RwSignal::new(FilterState::default()),
        view_mode: RwSignal::new(initial),
        store: StoredValue::new(store),
    }
}

impl ListingState {
    /// Persists first, then switches the page.
    pub fn set_view_mode(&self, mode: ViewMode) {
        self.store.with_value(|store| store.set(mode));
        self.view_mode.set(mode);
        log::debug!("view mode -> {}", mode.as_str());
    }

    pub fn select_name(&self, name: String) {
        self.filter.update(|f| f.select_name(name));
    }

    /// Checkbox toggle of one category.
    pub fn set_category(&self, category: &str, checked: bool) {
        self.filter.update(|f| f.set_category(category, checked));
    }

    pub fn has_filters(&self) -> bool {
        self.filter.with(|f| !f.is_empty())
    }

    pub fn clear_filters(&self) {
        self.filter.update(|f| f.clear());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every write together with the page's view mode at that moment.
    #[derive(Default)]
    struct RecordingStore {
        page_mode: Mutex<Option<RwSignal<ViewMode>>>,
        writes: Mutex<Vec<(ViewMode, ViewMode)>>,
    }

    impl ViewModeStore for RecordingStore {
        fn get(&self) -> ViewMode {
            ViewMode::Table
        }

        fn set(&self, mode: ViewMode) {
            let on_page = self
                .page_mode
                .lock()
                .unwrap()
                .map(|s| s.get_untracked())
                .unwrap_or_default();
            self.writes.lock().unwrap().push((mode, on_page));
        }
    }

    #[test]
    fn test_initial_mode_comes_from_store() {
        let state = create_state(Arc::new(RecordingStore::default()));
        assert_eq!(state.view_mode.get_untracked(), ViewMode::Table);
        assert_eq!(state.filter.get_untracked(), FilterState::default());
    }

    #[test]
    fn test_view_mode_persisted_before_page_switches() {
        let store = Arc::new(RecordingStore::default());
        let state = create_state(store.clone());
        *store.page_mode.lock().unwrap() = Some(state.view_mode);

        state.set_view_mode(ViewMode::Grid);

        assert_eq!(
            *store.writes.lock().unwrap(),
            vec![(ViewMode::Grid, ViewMode::Table)]
        );
        assert_eq!(state.view_mode.get_untracked(), ViewMode::Grid);
    }

    #[test]
    fn test_filter_actions() {
        let state = create_state(Arc::new(RecordingStore::default()));
        state.select_name("Widget".to_string());
        state.set_category("Tools", true);
        state.set_category("Garden", true);
        state.set_category("Tools", false);

        let filter = state.filter.get_untracked();
        assert_eq!(filter.name_query, "Widget");
        assert_eq!(filter.selected_categories, vec!["Garden"]);
        assert!(state.has_filters());

        state.clear_filters();
        assert!(!state.has_filters());
    }
}
