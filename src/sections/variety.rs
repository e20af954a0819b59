//! Character variety section - grades uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::charset::Composition;
use crate::types::StrengthLabel;

/// Grades the password by how many character classes it contains.
///
/// # Returns
/// - `Some(Strong)` if all four classes are present
/// - `Some(Medium)` if exactly three are present
/// - `None` otherwise
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    match Composition::of(password.expose_secret()).count() {
        4 => Some(StrengthLabel::Strong),
        3 => Some(StrengthLabel::Medium),
        _ => None,
    }
}
