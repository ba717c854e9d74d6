use std::collections::BTreeSet;

/// Items the listing can narrow by name and category.
pub trait CatalogItem {
    fn name(&self) -> &str;
    fn category(&self) -> &str;
}

/// Active name/category restriction. Empty means "no restriction" on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub name_query: String,
    /// Selected categories in the order they were checked, without duplicates.
    pub selected_categories: Vec<String>,
}

impl FilterState {
    /// Single choice: replaces any previously selected name.
    pub fn select_name(&mut self, name: impl Into<String>) {
        self.name_query = name.into();
    }

    pub fn add_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if !self.selected_categories.contains(&category) {
            self.selected_categories.push(category);
        }
    }

    pub fn remove_category(&mut self, category: &str) {
        self.selected_categories.retain(|c| c != category);
    }

    /// Checkbox semantics: add on check, remove on uncheck.
    pub fn set_category(&mut self, category: &str, checked: bool) {
        if checked {
            self.add_category(category);
        } else {
            self.remove_category(category);
        }
    }

    pub fn is_category_selected(&self, category: &str) -> bool {
        self.selected_categories.iter().any(|c| c == category)
    }

    pub fn clear(&mut self) {
        self.name_query.clear();
        self.selected_categories.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name_query.is_empty() && self.selected_categories.is_empty()
    }

    /// Comma-joined selected categories for the filter bar.
    pub fn categories_summary(&self) -> String {
        self.selected_categories.join(", ")
    }

    pub fn matches<T: CatalogItem>(&self, item: &T) -> bool {
        (self.name_query.is_empty() || item.name() == self.name_query)
            && (self.selected_categories.is_empty() || self.is_category_selected(item.category()))
    }

    pub fn apply<T: CatalogItem + Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.matches(*item))
            .cloned()
            .collect()
    }
}

/// Distinct names, ascending.
pub fn distinct_names<T: CatalogItem>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.name().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct non-empty categories, ascending.
pub fn distinct_categories<T: CatalogItem>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.category())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, &'static str);

    impl CatalogItem for Row {
        fn name(&self) -> &str {
            self.0
        }

        fn category(&self) -> &str {
            self.1
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row("Widget", "Tools"),
            Row("Widget", "Garden"),
            Row("Widget", "Kitchen"),
            Row("Gadget", "Tools"),
            Row("widget", "Garden"),
            Row("Hose", "Garden"),
            Row("Nameless", ""),
        ]
    }

    #[test]
    fn test_name_and_categories_combine() {
        let mut filter = FilterState::default();
        filter.select_name("Widget");
        filter.add_category("Tools");
        filter.add_category("Garden");

        assert_eq!(
            filter.apply(&rows()),
            vec![Row("Widget", "Tools"), Row("Widget", "Garden")]
        );
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let filter = FilterState::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&rows()), rows());
    }

    #[test]
    fn test_name_match_is_exact_and_case_sensitive() {
        let mut filter = FilterState::default();
        filter.select_name("widget");
        assert_eq!(filter.apply(&rows()), vec![Row("widget", "Garden")]);
    }

    #[test]
    fn test_select_name_replaces_previous() {
        let mut filter = FilterState::default();
        filter.select_name("Widget");
        filter.select_name("Hose");
        assert_eq!(filter.name_query, "Hose");
        assert_eq!(filter.apply(&rows()), vec![Row("Hose", "Garden")]);
    }

    #[test]
    fn test_category_toggle() {
        let mut filter = FilterState::default();
        filter.set_category("Garden", true);
        filter.set_category("Tools", true);
        filter.set_category("Garden", true);
        assert_eq!(filter.selected_categories, vec!["Garden", "Tools"]);
        assert_eq!(filter.categories_summary(), "Garden, Tools");

        filter.set_category("Garden", false);
        assert_eq!(filter.selected_categories, vec!["Tools"]);
        assert!(!filter.is_category_selected("Garden"));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let mut filter = FilterState::default();
        filter.select_name("Widget");
        filter.add_category("Garden");

        let once = filter.apply(&rows());
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clear_restores_full_sequence() {
        let mut filter = FilterState::default();
        filter.select_name("Gadget");
        filter.add_category("Tools");
        assert_eq!(filter.apply(&rows()).len(), 1);

        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&rows()), rows());
    }

    #[test]
    fn test_distinct_values_sorted_without_duplicates() {
        assert_eq!(
            distinct_names(&rows()),
            vec!["Gadget", "Hose", "Nameless", "Widget", "widget"]
        );
        assert_eq!(
            distinct_categories(&rows()),
            vec!["Garden", "Kitchen", "Tools"]
        );
        assert!(distinct_names::<Row>(&[]).is_empty());
    }
}
