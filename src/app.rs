//! Application state and core logic

use crate::backend::{FormStoreClient, FormStoreTrait};
use crate::config::FormhiveConfig;
use crate::export;
use crate::state::{
    AppState, DetailTab, EditorFocus, EditorState, FillState, QuestionField, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the form store
    pub store: FormStoreClient,
    /// User configuration (session token, addresses)
    pub config: FormhiveConfig,
    /// Whether the app should quit
    quit: bool,
    /// Copy/export feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub async fn new() -> Result<Self> {
        let config = FormhiveConfig::load().unwrap_or_default();
        let mut store = FormStoreClient::new(&config).await?;
        let mut state = AppState::default();

        // Check store connection
        state.store_connected = store.check_connection().await;

        // Load the user's forms if connected
        if state.store_connected {
            if let Ok(forms) = store.list_forms(config.user_id_or_empty()).await {
                state.forms = forms;
            }
        }

        Ok(Self {
            state,
            store,
            config,
            quit: false,
            copy_message: None,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push the current view onto the history and switch
    fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view.clone());
        self.state.current_view = view;
        self.copy_message = None;
    }

    /// Return to the previous view, dropping any in-memory session.
    /// Editor and fill state are deliberately lost on navigation away;
    /// there is no autosave.
    fn go_back(&mut self) {
        match self.state.current_view {
            View::FormCreate | View::FormEdit => self.state.editor = None,
            View::FormFill => self.state.fill = None,
            _ => {}
        }
        self.state.current_view = self.state.view_history.pop().unwrap_or_default();
        self.copy_message = None;
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Dashboard => self.handle_dashboard_key(key).await?,
            View::FormCreate | View::FormEdit => self.handle_editor_key(key).await?,
            View::FormDetail => self.handle_detail_key(key).await?,
            View::FormFill => self.handle_fill_key(key).await?,
        }
        Ok(())
    }

    /// Handle keys on the dashboard
    async fn handle_dashboard_key(&mut self, key: KeyEvent) -> Result<()> {
        // Pending delete confirmation swallows everything else
        if let Some(form_id) = self.state.confirm_delete.clone() {
            match key.code {
                KeyCode::Char('y') => {
                    self.state.confirm_delete = None;
                    self.delete_form(&form_id).await;
                }
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.state.confirm_delete = None;
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let max = self.state.forms.len();
                self.state.move_selection_down(max);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.move_selection_up();
            }
            KeyCode::Enter => {
                if let Some(form) = self.state.selected_form() {
                    let id = form.id.clone();
                    self.open_detail(&id).await;
                }
            }
            KeyCode::Char('n') => {
                self.state.editor = Some(EditorState::new());
                self.navigate(View::FormCreate);
            }
            KeyCode::Char('e') => {
                if let Some(form) = self.state.selected_form() {
                    let id = form.id.clone();
                    self.start_edit(&id).await;
                }
            }
            KeyCode::Char('f') => {
                if let Some(form) = self.state.selected_form() {
                    let id = form.id.clone();
                    self.start_fill(&id).await;
                }
            }
            KeyCode::Char('d') => {
                if let Some(form) = self.state.selected_form() {
                    self.state.confirm_delete = Some(form.id.clone());
                }
            }
            KeyCode::Char('r') => {
                self.refresh_forms().await;
            }
            KeyCode::Char('q') => {
                self.quit = true;
            }
            KeyCode::Esc => {
                self.state.clear_error();
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the editor (create and edit modes)
    async fn handle_editor_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        // Save/publish/cancel work in both edit and preview mode
        if ctrl && key.code == KeyCode::Char('w') {
            self.save_editor(false).await;
            return Ok(());
        }
        if ctrl && key.code == KeyCode::Char('y') {
            self.save_editor(true).await;
            return Ok(());
        }
        if ctrl && key.code == KeyCode::Char('v') {
            if let Some(editor) = self.state.editor.as_mut() {
                editor.preview = !editor.preview;
            }
            return Ok(());
        }
        if key.code == KeyCode::Esc {
            if self.state.error_message.is_some() {
                self.state.clear_error();
            } else {
                self.go_back();
            }
            return Ok(());
        }

        let Some(editor) = self.state.editor.as_mut() else {
            return Ok(());
        };

        // Preview is read-only
        if editor.preview {
            return Ok(());
        }

        match key.code {
            KeyCode::Char('a') if ctrl => editor.add_question(),
            KeyCode::Char('d') if ctrl => editor.remove_focused_question(),
            KeyCode::Char('o') if ctrl => editor.add_option_to_focused(),
            KeyCode::Char('x') if ctrl => editor.remove_focused_option(),
            KeyCode::Up if shift => editor.move_focused_up(),
            KeyCode::Down if shift => editor.move_focused_down(),
            KeyCode::Tab | KeyCode::Down => editor.next_field(),
            KeyCode::BackTab | KeyCode::Up => editor.prev_field(),
            KeyCode::Left => editor.cycle_type(false),
            KeyCode::Right => editor.cycle_type(true),
            KeyCode::Enter => {
                if matches!(
                    editor.focus,
                    EditorFocus::Question {
                        field: QuestionField::Required,
                        ..
                    }
                ) {
                    editor.toggle_required();
                } else {
                    editor.next_field();
                }
            }
            KeyCode::Char(' ') => {
                if matches!(
                    editor.focus,
                    EditorFocus::Question {
                        field: QuestionField::Required,
                        ..
                    }
                ) {
                    editor.toggle_required();
                } else {
                    editor.input_char(' ');
                }
            }
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Char(c) if !ctrl => editor.input_char(c),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the form detail view
    async fn handle_detail_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab => {
                self.state.detail_tab.toggle();
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if self.state.scroll_offset + 1 < self.state.responses.len() {
                    self.state.scroll_down();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.scroll_up();
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.state.selected_form_id.clone() {
                    self.start_edit(&id).await;
                }
            }
            KeyCode::Char('f') => {
                if let Some(id) = self.state.selected_form_id.clone() {
                    self.start_fill(&id).await;
                }
            }
            KeyCode::Char('x') => {
                self.export_responses();
            }
            KeyCode::Char('c') => {
                self.copy_share_link();
            }
            KeyCode::Char('r') => {
                if let Some(id) = self.state.selected_form_id.clone() {
                    self.load_responses(&id).await;
                }
            }
            KeyCode::Esc => {
                if self.state.error_message.is_some() {
                    self.state.clear_error();
                } else {
                    self.go_back();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the fill view
    async fn handle_fill_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('w') {
            self.submit_fill().await;
            return Ok(());
        }
        if key.code == KeyCode::Esc {
            if self.state.error_message.is_some() {
                self.state.clear_error();
            } else {
                self.go_back();
            }
            return Ok(());
        }

        let Some(fill) = self.state.fill.as_mut() else {
            return Ok(());
        };

        if fill.submitted {
            if key.code == KeyCode::Char('r') {
                fill.reset();
            }
            return Ok(());
        }

        let on_option_question = fill
            .form
            .questions
            .get(fill.selected_question)
            .map(|q| q.question_type.is_option_bearing())
            .unwrap_or(false);

        match key.code {
            KeyCode::Down => fill.next_question(),
            KeyCode::Up => fill.prev_question(),
            KeyCode::Tab => fill.next_question(),
            KeyCode::BackTab => fill.prev_question(),
            KeyCode::Left => fill.prev_option(),
            KeyCode::Right => fill.next_option(),
            KeyCode::Enter => {
                if on_option_question {
                    fill.toggle_selected_option();
                } else {
                    fill.next_question();
                }
            }
            KeyCode::Char(' ') if on_option_question => fill.toggle_selected_option(),
            KeyCode::Backspace => fill.backspace(),
            KeyCode::Char(c) if !ctrl => fill.input_char(c),
            _ => {}
        }
        Ok(())
    }

    /// Reload the forms list from the store
    async fn refresh_forms(&mut self) {
        let user_id = self.config.user_id_or_empty().to_string();
        match self.store.list_forms(&user_id).await {
            Ok(forms) => {
                self.state.forms = forms;
                let max = self.state.forms.len();
                if max > 0 && self.state.selected_index >= max {
                    self.state.selected_index = max - 1;
                }
            }
            Err(e) => {
                self.state.push_error(format!("Failed to load forms: {}", e));
            }
        }
    }

    /// Open the detail view for a form, fetching its responses
    async fn open_detail(&mut self, form_id: &str) {
        match self.store.get_form(form_id).await {
            Ok(form) => {
                // Keep the cached record fresh
                if let Some(slot) = self.state.forms.iter_mut().find(|f| f.id == form.id) {
                    *slot = form;
                } else {
                    self.state.forms.push(form);
                }
            }
            Err(e) => {
                self.state.push_error(format!("Failed to fetch form: {}", e));
                return;
            }
        }

        self.state.selected_form_id = Some(form_id.to_string());
        self.state.detail_tab = DetailTab::Responses;
        self.state.scroll_offset = 0;
        self.load_responses(form_id).await;
        self.navigate(View::FormDetail);
    }

    /// Fetch the responses for a form
    async fn load_responses(&mut self, form_id: &str) {
        match self.store.list_responses(form_id).await {
            Ok(responses) => {
                self.state.responses = responses;
            }
            Err(e) => {
                self.state
                    .push_error(format!("Failed to load responses: {}", e));
            }
        }
    }

    /// Open the editor loaded with an existing form
    async fn start_edit(&mut self, form_id: &str) {
        match self.store.get_form(form_id).await {
            Ok(form) => {
                self.state.editor = Some(EditorState::from_form(&form));
                self.navigate(View::FormEdit);
            }
            Err(e) => {
                self.state.push_error(format!("Failed to fetch form: {}", e));
            }
        }
    }

    /// Open a fill session against a published form
    async fn start_fill(&mut self, form_id: &str) {
        match self.store.get_form(form_id).await {
            Ok(form) => {
                if !form.published {
                    self.state.push_error("This form is not published");
                    return;
                }
                self.state.fill = Some(FillState::new(form));
                self.navigate(View::FormFill);
            }
            Err(e) => {
                self.state.push_error(format!("Failed to fetch form: {}", e));
            }
        }
    }

    /// Serialize the editor and hand it to the store.
    /// On failure the editor state is preserved so the user can retry.
    async fn save_editor(&mut self, publish: bool) {
        let Some(editor) = &self.state.editor else {
            return;
        };
        let payload = editor.to_payload(self.config.user_id_or_empty(), publish);

        let result = match editor.form_id.clone() {
            Some(id) => self.store.update_form(&id, &payload).await.map(|_| id),
            None => self.store.create_form(&payload).await,
        };

        match result {
            Ok(form_id) => {
                self.state.editor = None;
                self.refresh_forms().await;
                // Land on the saved form's detail page
                self.state.view_history.clear();
                self.state.current_view = View::Dashboard;
                self.open_detail(&form_id).await;
            }
            Err(e) => {
                self.state.push_error(format!("Failed to save form: {}", e));
            }
        }
    }

    /// Delete a form after confirmation
    async fn delete_form(&mut self, form_id: &str) {
        match self.store.delete_form(form_id).await {
            Ok(()) => {
                self.refresh_forms().await;
            }
            Err(e) => {
                self.state
                    .push_error(format!("Failed to delete form: {}", e));
            }
        }
    }

    /// Validate and submit the fill session.
    /// Validation failure is shown inline and keeps the entered answers.
    async fn submit_fill(&mut self) {
        let Some(fill) = self.state.fill.as_mut() else {
            return;
        };
        if fill.validate().is_err() {
            return;
        }
        let submission = fill.submission_payload();

        match self.store.submit_response(&submission).await {
            Ok(_) => {
                if let Some(fill) = self.state.fill.as_mut() {
                    fill.submitted = true;
                }
            }
            Err(e) => {
                self.state
                    .push_error(format!("Failed to submit response: {}", e));
            }
        }
    }

    /// Export the current form's responses as CSV
    fn export_responses(&mut self) {
        let Some(form) = self
            .state
            .selected_form_id
            .as_deref()
            .and_then(|id| self.state.form_by_id(id))
        else {
            return;
        };

        if self.state.responses.is_empty() {
            self.copy_message = Some("No responses to export".to_string());
            return;
        }

        match export::export_responses(form, &self.state.responses) {
            Ok(path) => {
                self.copy_message = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                self.state
                    .push_error(format!("Failed to export responses: {}", e));
            }
        }
    }

    /// Copy the public share link to the clipboard
    fn copy_share_link(&mut self) {
        let Some(form_id) = self.state.selected_form_id.clone() else {
            return;
        };
        let url = self.config.share_url(&form_id);

        match arboard::Clipboard::new().and_then(|mut c| c.set_text(url)) {
            Ok(()) => {
                self.copy_message = Some("Link copied to clipboard".to_string());
            }
            Err(e) => {
                self.state
                    .push_error(format!("Failed to access clipboard: {}", e));
            }
        }
    }
}
