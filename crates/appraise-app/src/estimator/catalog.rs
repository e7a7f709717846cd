//! Location selector backed by the server catalog
//!
//! Option 0 is always the "Select Location" placeholder. Catalog names follow
//! it in the order the server returned them. While the catalog is loading, or
//! after it failed to load, the placeholder is the only option.

use appraise_core::{FetchStatus, LocationCatalog};

/// Text of the unselected option
pub const LOCATION_PLACEHOLDER: &str = "Select Location";

#[derive(Debug, Clone, Default)]
pub struct LocationSelector {
    pub status: FetchStatus<LocationCatalog>,
    selected: usize,
}

impl LocationSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_loaded(&mut self, catalog: LocationCatalog) {
        self.status = FetchStatus::Loaded(catalog);
        self.selected = 0;
    }

    /// Keep only the placeholder
    pub fn apply_failed(&mut self, reason: impl Into<String>) {
        self.status = FetchStatus::Failed {
            reason: reason.into(),
        };
        self.selected = 0;
    }

    /// Go back to loading before a retry
    pub fn begin_reload(&mut self) {
        self.status = FetchStatus::Loading;
        self.selected = 0;
    }

    fn catalog(&self) -> Option<&LocationCatalog> {
        self.status.loaded()
    }

    /// Placeholder plus every catalog name
    pub fn option_count(&self) -> usize {
        1 + self.catalog().map_or(0, LocationCatalog::len)
    }

    /// Labels of all options, placeholder first
    pub fn options(&self) -> Vec<&str> {
        let mut options = vec![LOCATION_PLACEHOLDER];
        if let Some(catalog) = self.catalog() {
            options.extend(catalog.names().iter().map(String::as_str));
        }
        options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Selected location name; `None` while on the placeholder
    pub fn selected_location(&self) -> Option<&str> {
        if self.selected == 0 {
            return None;
        }
        self.catalog().and_then(|c| c.get(self.selected - 1))
    }

    /// Label of the selected option, placeholder included
    pub fn selected_label(&self) -> &str {
        self.selected_location().unwrap_or(LOCATION_PLACEHOLDER)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.option_count() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Jump to the next name starting with `initial` (case-insensitive),
    /// searching forward from the current option and wrapping.
    ///
    /// Returns true if the selection changed.
    pub fn select_by_initial(&mut self, initial: char) -> bool {
        let Some(catalog) = self.catalog() else {
            return false;
        };
        if catalog.is_empty() {
            return false;
        }

        let needle = initial.to_lowercase().collect::<String>();
        let len = catalog.len();
        // catalog index of the current selection, or "before the first name"
        let start = self.selected;
        for offset in 0..len {
            let index = (start + offset) % len;
            let matches = catalog
                .get(index)
                .map(|name| name.to_lowercase().starts_with(&needle))
                .unwrap_or(false);
            if matches {
                let option = index + 1;
                let changed = option != self.selected;
                self.selected = option;
                return changed;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(names: &[&str]) -> LocationSelector {
        let mut selector = LocationSelector::new();
        selector.apply_loaded(LocationCatalog::from_names(names.iter().copied()));
        selector
    }

    #[test]
    fn test_loading_offers_only_placeholder() {
        let selector = LocationSelector::new();
        assert!(selector.status.is_loading());
        assert_eq!(selector.options(), [LOCATION_PLACEHOLDER]);
        assert_eq!(selector.selected_location(), None);
    }

    #[test]
    fn test_options_follow_server_order() {
        let selector = loaded(&["Sindhu Bhavan", "Bopal", "Ambli"]);
        assert_eq!(
            selector.options(),
            [LOCATION_PLACEHOLDER, "Sindhu Bhavan", "Bopal", "Ambli"]
        );
    }

    #[test]
    fn test_failure_leaves_only_placeholder() {
        let mut selector = loaded(&["Bopal"]);
        selector.select_next();
        selector.apply_failed("timeout");
        assert_eq!(selector.options(), [LOCATION_PLACEHOLDER]);
        assert_eq!(selector.selected_location(), None);
        assert!(selector.status.is_failed());
    }

    #[test]
    fn test_select_next_and_prev_clamp() {
        let mut selector = loaded(&["Sindhu Bhavan", "Bopal"]);
        selector.select_prev();
        assert_eq!(selector.selected_index(), 0);

        selector.select_next();
        assert_eq!(selector.selected_location(), Some("Sindhu Bhavan"));
        selector.select_next();
        selector.select_next();
        assert_eq!(selector.selected_location(), Some("Bopal"));

        selector.select_prev();
        selector.select_prev();
        assert_eq!(selector.selected_location(), None);
        assert_eq!(selector.selected_label(), LOCATION_PLACEHOLDER);
    }

    #[test]
    fn test_select_by_initial_cycles_matches() {
        let mut selector = loaded(&["Bodakdev", "Ambli", "Bopal"]);

        assert!(selector.select_by_initial('b'));
        assert_eq!(selector.selected_location(), Some("Bodakdev"));

        assert!(selector.select_by_initial('B'));
        assert_eq!(selector.selected_location(), Some("Bopal"));

        assert!(selector.select_by_initial('b'));
        assert_eq!(selector.selected_location(), Some("Bodakdev"));

        assert!(!selector.select_by_initial('z'));
        assert_eq!(selector.selected_location(), Some("Bodakdev"));
    }

    #[test]
    fn test_select_by_initial_without_catalog() {
        let mut selector = LocationSelector::new();
        assert!(!selector.select_by_initial('b'));
    }
}
