//! Registration form state: field values, errors and focus

use super::field::Field;
use serde::{Deserialize, Serialize};

/// Current field values, sent as-is to the submission endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub occupation: String,
    pub state: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Occupation => &self.occupation,
            Field::State => &self.state,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Occupation => &mut self.occupation,
            Field::State => &mut self.state,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        *self.slot_mut(field) = value;
    }
}

/// Per-field validation messages
///
/// `None` means the field has not been validated yet; `Some("")` means it
/// passed its last validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    messages: [Option<String>; 5],
}

impl ErrorState {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages[field.index()].as_deref()
    }

    pub fn set(&mut self, field: Field, message: String) {
        self.messages[field.index()] = Some(message);
    }

    /// The message to display, if the field currently has one
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).filter(|m| !m.is_empty())
    }

    pub fn has_errors(&self) -> bool {
        Field::ALL.iter().any(|f| self.message(*f).is_some())
    }
}

/// Focusable elements, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Email,
    Password,
    PasswordToggle,
    State,
    Occupation,
    Submit,
}

impl Focus {
    pub const ORDER: [Focus; 7] = [
        Focus::Name,
        Focus::Email,
        Focus::Password,
        Focus::PasswordToggle,
        Focus::State,
        Focus::Occupation,
        Focus::Submit,
    ];

    /// The field this element edits, if any
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Name => Some(Field::Name),
            Focus::Email => Some(Field::Email),
            Focus::Password => Some(Field::Password),
            Focus::State => Some(Field::State),
            Focus::Occupation => Some(Field::Occupation),
            Focus::PasswordToggle | Focus::Submit => None,
        }
    }

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The registration form controller state
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub data: FormData,
    pub errors: ErrorState,
    /// Invalid markers for assistive output, toggled on field change only
    invalid: [bool; 5],
    pub focus: Focus,
    pub show_password: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new value for one field and re-validate only that field.
    /// Returns the resulting message (empty when valid).
    pub fn on_field_change(&mut self, field: Field, value: String) -> String {
        let message = field.validate(&value);
        self.data.set(field, value);
        self.invalid[field.index()] = !message.is_empty();
        self.errors.set(field, message.clone());
        message
    }

    /// Re-validate every field. Returns true when all fields pass.
    pub fn validate_all(&mut self) -> bool {
        for field in Field::ALL {
            let message = field.validate(self.data.get(field));
            self.errors.set(field, message);
        }
        !self.errors.has_errors()
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid[field.index()]
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Password as it should be displayed
    pub fn password_display(&self) -> String {
        if self.show_password {
            self.data.password.clone()
        } else {
            "•".repeat(self.data.password.chars().count())
        }
    }

    /// The field under focus, if the focus is on an editable field
    pub fn focused_field(&self) -> Option<Field> {
        self.focus.field()
    }

    /// Append a character to the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field().filter(|f| !f.is_select()) {
            let mut value = self.data.get(field).to_string();
            value.push(c);
            self.on_field_change(field, value);
        }
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field().filter(|f| !f.is_select()) {
            let mut value = self.data.get(field).to_string();
            if value.pop().is_some() {
                self.on_field_change(field, value);
            }
        }
    }

    /// Step a select field through its choices.
    ///
    /// `choices` are the stored values; an implicit empty placeholder sits
    /// before the first one, and stepping wraps around.
    pub fn cycle_choice(&mut self, field: Field, choices: &[String], forward: bool) {
        if !field.is_select() {
            return;
        }
        let slots = choices.len() + 1;
        let current = self.data.get(field);
        let position = choices
            .iter()
            .position(|c| c == current)
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (position + 1) % slots
        } else {
            (position + slots - 1) % slots
        };
        let value = if next == 0 {
            String::new()
        } else {
            choices[next - 1].clone()
        };
        self.on_field_change(field, value);
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        Focus::ORDER.len()
    }
    fn active_field(&self) -> usize {
        self.focus.position()
    }
    fn set_active_field(&mut self, index: usize) {
        self.focus = Focus::ORDER[index.min(Focus::ORDER.len() - 1)];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_data() -> FormData {
        FormData {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "Abcdefg1!".to_string(),
            occupation: "Engineer".to_string(),
            state: "CA".to_string(),
        }
    }

    mod form_data {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_and_get_each_field() {
            let mut data = FormData::default();
            for field in Field::ALL {
                data.set(field, format!("{:?}", field));
            }
            assert_eq!(data.name, "Name");
            assert_eq!(data.email, "Email");
            assert_eq!(data.password, "Password");
            assert_eq!(data.occupation, "Occupation");
            assert_eq!(data.state, "State");
            assert_eq!(data.get(Field::State), "State");
        }

        #[test]
        fn test_serializes_to_payload_shape() {
            let json = serde_json::to_value(valid_data()).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "name": "Ada Lovelace",
                    "email": "ada@example.com",
                    "password": "Abcdefg1!",
                    "occupation": "Engineer",
                    "state": "CA",
                })
            );
        }
    }

    mod error_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_unvalidated() {
            let errors = ErrorState::default();
            for field in Field::ALL {
                assert!(errors.get(field).is_none());
            }
            assert!(!errors.has_errors());
        }

        #[test]
        fn test_empty_message_is_not_an_error() {
            let mut errors = ErrorState::default();
            errors.set(Field::Name, String::new());
            assert_eq!(errors.get(Field::Name), Some(""));
            assert!(errors.message(Field::Name).is_none());
            assert!(!errors.has_errors());
        }
    }

    mod registration_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_change_updates_value_and_error() {
            let mut form = RegistrationForm::new();
            let message = form.on_field_change(Field::Email, "abc".to_string());
            assert_eq!(message, "Email is invalid");
            assert_eq!(form.data.email, "abc");
            assert_eq!(form.errors.message(Field::Email), Some("Email is invalid"));
            assert!(form.is_invalid(Field::Email));
        }

        #[test]
        fn test_field_change_touches_only_that_field() {
            let mut form = RegistrationForm::new();
            assert!(!form.validate_all());

            form.on_field_change(Field::Name, "Ada".to_string());

            assert_eq!(form.errors.get(Field::Name), Some(""));
            assert!(!form.is_invalid(Field::Name));
            assert_eq!(form.errors.message(Field::Email), Some("Email is required"));
            assert_eq!(
                form.errors.message(Field::Password),
                Some("Password is required")
            );
            assert_eq!(
                form.errors.message(Field::Occupation),
                Some("Occupation is required")
            );
            assert_eq!(form.errors.message(Field::State), Some("State is required"));
        }

        #[test]
        fn test_validate_all_reports_every_invalid_field() {
            let mut form = RegistrationForm::new();
            form.data.name = "Ada".to_string();
            form.data.email = "nope".to_string();

            assert!(!form.validate_all());
            assert!(form.errors.message(Field::Name).is_none());
            assert_eq!(form.errors.message(Field::Email), Some("Email is invalid"));
            assert!(form.errors.message(Field::Password).is_some());
            assert!(form.errors.message(Field::Occupation).is_some());
            assert!(form.errors.message(Field::State).is_some());
        }

        #[test]
        fn test_validate_all_passes_valid_data() {
            let mut form = RegistrationForm {
                data: valid_data(),
                ..Default::default()
            };
            assert!(form.validate_all());
            for field in Field::ALL {
                assert_eq!(form.errors.get(field), Some(""));
            }
        }

        #[test]
        fn test_validate_all_leaves_invalid_markers_alone() {
            let mut form = RegistrationForm::new();
            form.validate_all();
            for field in Field::ALL {
                assert!(!form.is_invalid(field));
            }
        }

        #[test]
        fn test_error_clears_once_corrected() {
            let mut form = RegistrationForm::new();
            form.on_field_change(Field::Password, "short".to_string());
            assert!(form.is_invalid(Field::Password));

            form.on_field_change(Field::Password, "Abcdefg1!".to_string());
            assert!(form.errors.message(Field::Password).is_none());
            assert!(!form.is_invalid(Field::Password));
        }

        #[test]
        fn test_input_char_and_backspace_edit_focused_field() {
            let mut form = RegistrationForm::new();
            form.input_char('A');
            form.input_char('d');
            assert_eq!(form.data.name, "Ad");
            form.backspace();
            assert_eq!(form.data.name, "A");
            assert_eq!(form.errors.get(Field::Name), Some(""));
        }

        #[test]
        fn test_backspace_to_empty_revalidates() {
            let mut form = RegistrationForm::new();
            form.input_char('A');
            form.backspace();
            assert_eq!(form.errors.message(Field::Name), Some("Name is required"));
        }

        #[test]
        fn test_input_ignored_on_select_and_buttons() {
            let mut form = RegistrationForm::new();
            form.focus = Focus::State;
            form.input_char('x');
            form.focus = Focus::Submit;
            form.input_char('x');
            assert_eq!(form.data, FormData::default());
        }

        #[test]
        fn test_cycle_choice_wraps_through_placeholder() {
            let mut form = RegistrationForm::new();
            let choices = vec!["AL".to_string(), "AK".to_string()];

            form.cycle_choice(Field::State, &choices, true);
            assert_eq!(form.data.state, "AL");
            form.cycle_choice(Field::State, &choices, true);
            assert_eq!(form.data.state, "AK");
            form.cycle_choice(Field::State, &choices, true);
            assert_eq!(form.data.state, "");
            assert_eq!(form.errors.message(Field::State), Some("State is required"));

            form.cycle_choice(Field::State, &choices, false);
            assert_eq!(form.data.state, "AK");
        }

        #[test]
        fn test_cycle_choice_with_no_options_stays_empty() {
            let mut form = RegistrationForm::new();
            form.cycle_choice(Field::Occupation, &[], true);
            assert_eq!(form.data.occupation, "");
        }

        #[test]
        fn test_cycle_choice_ignores_text_fields() {
            let mut form = RegistrationForm::new();
            form.cycle_choice(Field::Name, &["x".to_string()], true);
            assert_eq!(form.data.name, "");
            assert!(form.errors.get(Field::Name).is_none());
        }

        #[test]
        fn test_password_masked_until_toggled() {
            let mut form = RegistrationForm::new();
            form.on_field_change(Field::Password, "secret".to_string());
            assert_eq!(form.password_display(), "••••••");

            form.toggle_password_visibility();
            assert_eq!(form.password_display(), "secret");

            form.toggle_password_visibility();
            assert!(!form.show_password);
        }

        #[test]
        fn test_toggle_does_not_affect_validation() {
            let mut form = RegistrationForm::new();
            form.on_field_change(Field::Password, "short".to_string());
            form.toggle_password_visibility();
            assert!(form.errors.message(Field::Password).is_some());
            assert_eq!(form.data.password, "short");
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = RegistrationForm::new();
            for _ in 0..Focus::ORDER.len() {
                form.next_field();
            }
            assert_eq!(form.focus, Focus::Name);
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut form = RegistrationForm::new();
            form.prev_field();
            assert_eq!(form.focus, Focus::Submit);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = RegistrationForm::new();
            form.set_active_field(100);
            assert_eq!(form.focus, Focus::Submit);
        }

        #[test]
        fn test_focus_order_puts_state_before_occupation() {
            let mut form = RegistrationForm::new();
            form.focus = Focus::PasswordToggle;
            form.next_field();
            assert_eq!(form.focus, Focus::State);
            form.next_field();
            assert_eq!(form.focus, Focus::Occupation);
        }
    }
}
