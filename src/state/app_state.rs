//! Application state definitions

use super::forms::{Field, RegistrationForm};
use serde::{Deserialize, Serialize};

/// A US state as returned by the options endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsState {
    pub abbreviation: String,
    pub name: String,
}

/// Selectable values for the occupation and state fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionLists {
    pub occupations: Vec<String>,
    pub states: Vec<UsState>,
}

impl OptionLists {
    pub fn is_empty(&self) -> bool {
        self.occupations.is_empty() && self.states.is_empty()
    }

    /// Values stored in the form for a select field, in display order
    pub fn choices(&self, field: Field) -> Vec<String> {
        match field {
            Field::Occupation => self.occupations.clone(),
            Field::State => self
                .states
                .iter()
                .map(|s| s.abbreviation.clone())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Human-readable label for a stored select value
    ///
    /// States are stored by abbreviation but shown by name.
    pub fn display_value<'a>(&'a self, field: Field, value: &'a str) -> &'a str {
        match field {
            Field::State => self
                .states
                .iter()
                .find(|s| s.abbreviation == value)
                .map(|s| s.name.as_str())
                .unwrap_or(value),
            _ => value,
        }
    }
}

/// Whole-application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: RegistrationForm,
    pub options: OptionLists,
    /// Set once the options fetch has succeeded
    pub options_loaded: bool,
    /// True while the background options fetch is outstanding
    pub options_loading: bool,
    /// Flips to true after a successful submission and never back
    submitted: bool,
    /// Blocking alerts, oldest first
    error_queue: Vec<String>,
}

impl AppState {
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    /// Install the fetched option lists
    pub fn set_options(&mut self, options: OptionLists) {
        self.options = options;
        self.options_loaded = true;
    }

    /// Step the select field under focus through its choices
    pub fn cycle_focused_choice(&mut self, forward: bool) {
        if let Some(field) = self.form.focused_field().filter(|f| f.is_select()) {
            let choices = self.options.choices(field);
            self.form.cycle_choice(field, &choices, forward);
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }
}
