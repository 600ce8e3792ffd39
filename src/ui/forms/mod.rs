//! Form rendering module
//!
//! - `field_renderer`: field box and error line rendering
//! - `registration_form`: the registration form layout

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
