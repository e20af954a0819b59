//! Password classification sections
//!
//! Each section inspects one aspect of the password and may settle its label.

mod length;
mod variety;

pub use length::{length_section, MIN_LENGTH};
pub use variety::character_variety_section;

use crate::types::StrengthLabel;

/// Result type for section functions.
/// - `Some(label)` - Section settled the label
/// - `None` - Section has no verdict, continue
pub type SectionResult = Option<StrengthLabel>;
