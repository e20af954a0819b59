//! Strength classifier - main classification logic.

use secrecy::SecretString;

use crate::sections::{character_variety_section, length_section, SectionResult};
use crate::types::StrengthLabel;

/// Classifies a password into one of four strength labels.
///
/// Rules, in order:
/// 1. fewer than 8 characters: `TooShort`
/// 2. uppercase, lowercase, digit and special all present: `Strong`
/// 3. exactly three of them present: `Medium`
/// 4. otherwise: `Weak`
pub fn classify(password: &SecretString) -> StrengthLabel {
    // Orchestrator: first section with a verdict wins
    let sections: [(&str, fn(&SecretString) -> SectionResult); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    for (_section_name, section_fn) in sections {
        if let Some(label) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::trace!("Section {} classified password as {}", _section_name, label);
            return label;
        }
    }

    StrengthLabel::Weak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_str(pwd: &str) -> StrengthLabel {
        classify(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_classify_too_short() {
        assert_eq!(classify_str("abcdefg"), StrengthLabel::TooShort);
        assert_eq!(classify_str(""), StrengthLabel::TooShort);
    }

    #[test]
    fn test_classify_short_ignores_composition() {
        assert_eq!(classify_str("Ab1!xyz"), StrengthLabel::TooShort);
    }

    #[test]
    fn test_classify_weak_lowercase_only() {
        assert_eq!(classify_str("abcdefgh"), StrengthLabel::Weak);
    }

    #[test]
    fn test_classify_weak_two_classes() {
        assert_eq!(classify_str("ABCDefgh"), StrengthLabel::Weak);
        assert_eq!(classify_str("--------"), StrengthLabel::Weak);
    }

    #[test]
    fn test_classify_medium() {
        assert_eq!(classify_str("Abcdefg1"), StrengthLabel::Medium);
        assert_eq!(classify_str("abcdef1!"), StrengthLabel::Medium);
    }

    #[test]
    fn test_classify_strong() {
        assert_eq!(classify_str("Abcdef1!"), StrengthLabel::Strong);
        assert_eq!(classify_str("VeryStrongPassword123!@#"), StrengthLabel::Strong);
    }

    #[test]
    fn test_classify_deterministic() {
        for pwd in ["", "abc", "Abcdefg1", "Abcdef1!", "zzzzzzzzzz"] {
            assert_eq!(classify_str(pwd), classify_str(pwd));
        }
    }

    #[test]
    fn test_classify_generated_full_selection() {
        use crate::charset::{CharacterClassSelection, Composition};
        use secrecy::ExposeSecret;

        let pwd = crate::generate(12, &CharacterClassSelection::all()).unwrap();
        assert_eq!(pwd.expose_secret().len(), 12);
        let label = classify(&pwd);
        if Composition::of(pwd.expose_secret()).count() == 4 {
            assert_eq!(label, StrengthLabel::Strong);
        } else {
            assert_ne!(label, StrengthLabel::TooShort);
        }
    }
}
