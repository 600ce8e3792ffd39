//! Form domain layer
//!
//! Type-safe registration form handling: field identities, validators and
//! the controller state that ties values to their error messages.

mod field;
mod form_state;
mod validation;

pub use field::Field;
pub use form_state::{ErrorState, Focus, Form, FormData, RegistrationForm};
