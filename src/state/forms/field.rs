//! Form field identities

use super::validation::{
    validate_email, validate_name, validate_occupation, validate_password, validate_state,
};

/// Validator signature shared by every field
pub type Validator = fn(&str) -> String;

/// The five registration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    Occupation,
    State,
}

impl Field {
    /// All fields, in payload order
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::Occupation,
        Field::State,
    ];

    /// Validator bound to this field
    pub fn validator(self) -> Validator {
        match self {
            Field::Name => validate_name,
            Field::Email => validate_email,
            Field::Password => validate_password,
            Field::Occupation => validate_occupation,
            Field::State => validate_state,
        }
    }

    /// Run this field's validator against a value
    pub fn validate(self, value: &str) -> String {
        (self.validator())(value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::Occupation => "Occupation",
            Field::State => "State",
        }
    }

    /// Text shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "full name",
            Field::Email => "email",
            Field::Password => "password",
            Field::Occupation => "Select an occupation",
            Field::State => "Select a state",
        }
    }

    /// Whether the value is picked from a fetched option list
    pub fn is_select(self) -> bool {
        matches!(self, Field::Occupation | Field::State)
    }

    /// Position in `Field::ALL`
    pub fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Password => 2,
            Field::Occupation => 3,
            Field::State => 4,
        }
    }
}
