//! Application state definitions

use super::editor::EditorState;
use super::fill::FillState;
use super::schema::{Form, ResponseRecord};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    FormCreate,
    FormEdit,
    FormDetail,
    FormFill,
}

/// Tab within the form detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Responses,
    Share,
}

impl DetailTab {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Responses => Self::Share,
            Self::Share => Self::Responses,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Responses => "Responses",
            Self::Share => "Share",
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Data
    pub forms: Vec<Form>,
    pub responses: Vec<ResponseRecord>,

    // Selection
    pub selected_index: usize,
    pub selected_form_id: Option<String>,

    // Sessions
    pub editor: Option<EditorState>,
    pub fill: Option<FillState>,

    // UI state
    pub detail_tab: DetailTab,
    pub scroll_offset: usize,
    pub store_connected: bool,
    pub error_message: Option<String>,
    /// Form id awaiting delete confirmation
    pub confirm_delete: Option<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Record a storage error for the status bar; local state is preserved
    /// so the user can retry
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clear the displayed error
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Forms sorted newest first, as on the dashboard
    pub fn sorted_forms(&self) -> Vec<&Form> {
        let mut forms: Vec<_> = self.forms.iter().collect();
        forms.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        forms
    }

    /// The form under the dashboard selection
    pub fn selected_form(&self) -> Option<&Form> {
        self.sorted_forms().get(self.selected_index).copied()
    }

    /// The form matching the detail/fill selection id
    pub fn form_by_id(&self, id: &str) -> Option<&Form> {
        self.forms.iter().find(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::schema::QuestionType;
    use crate::state::Question;
    use chrono::{Duration, Utc};

    fn form(id: &str, age_days: i64) -> Form {
        Form {
            id: id.to_string(),
            title: format!("Form {}", id),
            description: String::new(),
            questions: vec![Question::new(QuestionType::ShortText)],
            user_id: "u-1".to_string(),
            published: false,
            created_at: Utc::now() - Duration::days(age_days),
            updated_at: Utc::now() - Duration::days(age_days),
            response_count: 0,
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn test_move_selection_down_respects_max() {
            let mut state = AppState::default();
            state.move_selection_down(3);
            state.move_selection_down(3);
            state.move_selection_down(3);
            assert_eq!(state.selected_index, 2);
        }

        #[test]
        fn test_move_selection_down_with_zero_max_is_noop() {
            let mut state = AppState::default();
            state.move_selection_down(0);
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_move_selection_up_stops_at_zero() {
            let mut state = AppState::default();
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_reset_selection() {
            let mut state = AppState {
                selected_index: 4,
                scroll_offset: 9,
                ..Default::default()
            };
            state.reset_selection();
            assert_eq!(state.selected_index, 0);
            assert_eq!(state.scroll_offset, 0);
        }
    }

    mod forms {
        use super::*;

        #[test]
        fn test_sorted_forms_newest_first() {
            let mut state = AppState::default();
            state.forms = vec![form("old", 10), form("new", 1), form("mid", 5)];
            let sorted = state.sorted_forms();
            let ids: Vec<&str> = sorted.iter().map(|f| f.id.as_str()).collect();
            assert_eq!(ids, vec!["new", "mid", "old"]);
        }

        #[test]
        fn test_selected_form_follows_sort_order() {
            let mut state = AppState::default();
            state.forms = vec![form("old", 10), form("new", 1)];
            state.selected_index = 1;
            assert_eq!(state.selected_form().map(|f| f.id.as_str()), Some("old"));
        }

        #[test]
        fn test_selected_form_none_when_empty() {
            let state = AppState::default();
            assert!(state.selected_form().is_none());
        }

        #[test]
        fn test_form_by_id() {
            let mut state = AppState::default();
            state.forms = vec![form("a", 1), form("b", 2)];
            assert!(state.form_by_id("b").is_some());
            assert!(state.form_by_id("c").is_none());
        }
    }

    mod ui_state {
        use super::*;

        #[test]
        fn test_detail_tab_toggle() {
            let mut tab = DetailTab::default();
            assert_eq!(tab, DetailTab::Responses);
            tab.toggle();
            assert_eq!(tab, DetailTab::Share);
            tab.toggle();
            assert_eq!(tab, DetailTab::Responses);
        }

        #[test]
        fn test_push_and_clear_error() {
            let mut state = AppState::default();
            state.push_error("Failed to save form");
            assert_eq!(state.error_message.as_deref(), Some("Failed to save form"));
            state.clear_error();
            assert!(state.error_message.is_none());
        }

        #[test]
        fn test_scroll_up_saturates() {
            let mut state = AppState::default();
            state.scroll_up();
            assert_eq!(state.scroll_offset, 0);
            state.scroll_down();
            state.scroll_down();
            state.scroll_up();
            assert_eq!(state.scroll_offset, 1);
        }
    }
}
