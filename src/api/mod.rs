//! Client module for the registration endpoints

mod client;
mod error;
mod traits;

pub use client::RegistrationClient;
pub use error::ApiError;
pub use traits::RegistrationApi;

#[cfg(test)]
pub use traits::MockRegistrationApi;
