use serde::{Deserialize, Serialize};

use crate::standings::ViewMode;

/// What the user is looking at: active view, search box text and the one
/// expanded row (keyed by participant or team name).
///
/// Values are never mutated; each setter returns the next state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub view_mode: ViewMode,
    pub search_text: String,
    pub expanded: Option<String>,
}

impl ViewState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Self::default()
        }
    }

    /// Only the view changes. An expanded key with no row in the new view is
    /// simply not shown.
    #[must_use]
    pub fn set_view_mode(self, view_mode: ViewMode) -> Self {
        Self { view_mode, ..self }
    }

    #[must_use]
    pub fn set_search_text(self, search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            ..self
        }
    }

    /// Expands `key`, or collapses it if it is already the expanded row.
    #[must_use]
    pub fn toggle_expanded(self, key: &str) -> Self {
        let expanded = match self.expanded.as_deref() {
            Some(current) if current == key => None,
            _ => Some(key.to_string()),
        };
        Self { expanded, ..self }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.as_deref() == Some(key)
    }
}
