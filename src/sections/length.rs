//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::StrengthLabel;

pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length.
///
/// # Returns
/// - `Some(StrengthLabel::TooShort)` if password is shorter than 8 characters
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(StrengthLabel::TooShort);
    }
    None
}
