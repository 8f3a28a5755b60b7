//! Session user domain module.
//!
//! # Module Structure
//!
//! - `model`: Session user and the login/register inputs
//! - `form`: Client-side form checks used before calling the store

pub mod form;
mod model;

pub use form::is_valid_email;
pub use model::{Credentials, Registration, SessionUser};
