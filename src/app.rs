//! Application state and core logic

use crate::api::{ApiError, RegistrationApi};
use crate::platform::{SUBMIT_KEY, TOGGLE_PASSWORD_KEY};
use crate::state::{AppState, Focus, Form, OptionLists};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Alert shown for every kind of submission failure
pub const SUBMIT_FAILED_MESSAGE: &str =
    "There was an error submitting the form. Please try again later.";

type OptionsResult = Result<OptionLists, ApiError>;

/// Main application struct
pub struct App<A: RegistrationApi> {
    /// Current application state
    pub state: AppState,
    /// Options and submission endpoints
    api: Arc<A>,
    /// Receives the result of the background options fetch
    pending_options: Option<oneshot::Receiver<OptionsResult>>,
    /// Whether the app should quit
    quit: bool,
}

impl<A: RegistrationApi + 'static> App<A> {
    /// Create a new App instance
    pub fn new(api: A) -> Self {
        Self {
            state: AppState::default(),
            api: Arc::new(api),
            pending_options: None,
            quit: false,
        }
    }

    /// Start fetching the option lists in the background.
    ///
    /// The form stays interactive; [`App::poll_options`] installs the result
    /// once it arrives.
    pub fn start_loading_options(&mut self) {
        let api = Arc::clone(&self.api);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            // Receiver gone means the app already exited
            let _ = tx.send(api.fetch_options().await);
        });
        self.pending_options = Some(rx);
        self.state.options_loading = true;
    }

    /// Apply the options fetch result if it has completed
    pub fn poll_options(&mut self) {
        let Some(rx) = self.pending_options.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => self.apply_options(result),
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => {
                tracing::warn!("Options fetch ended without a result");
            }
        }
        self.pending_options = None;
        self.state.options_loading = false;
    }

    /// Whether the background options fetch is still outstanding
    pub fn is_loading_options(&self) -> bool {
        self.pending_options.is_some()
    }

    /// Install fetched options. Failure leaves the lists empty and is only logged.
    fn apply_options(&mut self, result: OptionsResult) {
        match result {
            Ok(options) => {
                if options.is_empty() {
                    tracing::warn!("Options endpoint returned no choices");
                }
                tracing::info!(
                    occupations = options.occupations.len(),
                    states = options.states.len(),
                    "Loaded form options"
                );
                self.state.set_options(options);
            }
            Err(e) => {
                tracing::warn!("Failed to load form options: {e}");
            }
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Validate everything and post the form if it passes.
    ///
    /// Returns true when the submission was accepted.
    pub async fn submit(&mut self) -> bool {
        if !self.state.form.validate_all() {
            tracing::debug!("Submission blocked by validation errors");
            return false;
        }

        match self.api.submit(&self.state.form.data).await {
            Ok(()) => {
                tracing::info!("Registration submitted");
                self.state.mark_submitted();
                true
            }
            Err(e) => {
                tracing::error!("Failed to submit registration: {e}");
                self.push_error(SUBMIT_FAILED_MESSAGE);
                false
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            self.quit = true;
            return Ok(());
        }

        if self.state.is_submitted() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('q')) {
                self.quit = true;
            }
            return Ok(());
        }

        // AltGr arrives as Ctrl+Alt on Windows and must still type characters
        let is_ctrl_chord = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char(c) if is_ctrl_chord && c == SUBMIT_KEY => {
                self.submit().await;
            }
            KeyCode::Char(c) if is_ctrl_chord && c == TOGGLE_PASSWORD_KEY => {
                self.state.form.toggle_password_visibility();
            }
            KeyCode::Char(_) if is_ctrl_chord => {}
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left => self.state.cycle_focused_choice(false),
            KeyCode::Right => self.state.cycle_focused_choice(true),
            KeyCode::Enter => match self.state.form.focus {
                Focus::PasswordToggle => self.state.form.toggle_password_visibility(),
                Focus::Submit => {
                    self.submit().await;
                }
                _ => self.state.form.next_field(),
            },
            KeyCode::Char(' ') if self.state.form.focus == Focus::PasswordToggle => {
                self.state.form.toggle_password_visibility();
            }
            KeyCode::Char(c) => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }

        Ok(())
    }
}
