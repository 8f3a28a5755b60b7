//! Client-side checks for the login and register forms.
//!
//! These gate the submit button only. The store accepts whatever it is given.

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::{Credentials, Registration};

/// Minimum password length accepted by the register form.
pub const MIN_REGISTER_PASSWORD_LEN: usize = 4;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));

/// Loose "looks like an email" check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl Credentials {
    pub fn can_submit(&self) -> bool {
        is_valid_email(&self.email) && !self.password.is_empty()
    }
}

impl Registration {
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
            && is_valid_email(&self.email)
            && self.password.chars().count() >= MIN_REGISTER_PASSWORD_LEN
    }
}
