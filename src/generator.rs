//! Password generator - uniform sampling from the enabled character classes.

use rand::Rng;
use rand::rngs::OsRng;
use secrecy::SecretString;
use thiserror::Error;

use crate::charset::CharacterClassSelection;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("At least one character class must be selected")]
    InvalidSelection,
}

/// Generates a password of `length` characters using the operating system RNG.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidSelection`] when no class is enabled.
pub fn generate(
    length: usize,
    selection: &CharacterClassSelection,
) -> Result<SecretString, GenerateError> {
    generate_with(&mut OsRng, length, selection)
}

/// Generates a password with an explicit random provider.
///
/// Each position is an independent uniform draw, with replacement, from
/// [`CharacterClassSelection::alphabet`]. No enabled class is guaranteed to
/// appear in the result.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    selection: &CharacterClassSelection,
) -> Result<SecretString, GenerateError> {
    let alphabet = selection.alphabet();
    if alphabet.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Password generation rejected: no character class selected");
        return Err(GenerateError::InvalidSelection);
    }

    let mut password = String::with_capacity(length);
    for _ in 0..length {
        password.push(alphabet[rng.gen_range(0..alphabet.len())]);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generated password: {} chars from {} symbols",
        length,
        alphabet.len()
    );

    Ok(SecretString::new(password.into_boxed_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{CharacterClass, LOWERCASE, NUMBERS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use secrecy::ExposeSecret;

    #[test]
    fn test_generate_exact_length() {
        let selection = CharacterClassSelection::all();
        for length in [0, 1, 5, 8, 12, 30, 64] {
            let pwd = generate(length, &selection).unwrap();
            assert_eq!(pwd.expose_secret().chars().count(), length);
        }
    }

    #[test]
    fn test_generate_draws_from_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let selection = CharacterClassSelection {
            uppercase: false,
            lowercase: true,
            numbers: true,
            special_chars: false,
        };
        let pwd = generate_with(&mut rng, 200, &selection).unwrap();
        assert!(
            pwd.expose_secret()
                .chars()
                .all(|c| LOWERCASE.contains(c) || NUMBERS.contains(c))
        );
    }

    #[test]
    fn test_generate_single_class() {
        let mut rng = StdRng::seed_from_u64(42);
        for class in CharacterClass::ALL {
            let mut selection = CharacterClassSelection::none();
            selection.set(class, true);
            let pwd = generate_with(&mut rng, 50, &selection).unwrap();
            assert!(pwd.expose_secret().chars().all(|c| class.contains(c)));
        }
    }

    #[test]
    fn test_generate_empty_selection() {
        let selection = CharacterClassSelection::none();
        assert!(matches!(
            generate(12, &selection),
            Err(GenerateError::InvalidSelection)
        ));
        assert!(matches!(
            generate(0, &selection),
            Err(GenerateError::InvalidSelection)
        ));
    }

    #[test]
    fn test_generate_zero_length() {
        let pwd = generate(0, &CharacterClassSelection::default()).unwrap();
        assert!(pwd.expose_secret().is_empty());
    }

    #[test]
    fn test_generate_is_seed_deterministic() {
        let selection = CharacterClassSelection::all();
        let a = generate_with(&mut StdRng::seed_from_u64(1), 16, &selection).unwrap();
        let b = generate_with(&mut StdRng::seed_from_u64(1), 16, &selection).unwrap();
        assert_eq!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn test_generate_covers_alphabet() {
        let mut rng = StdRng::seed_from_u64(3);
        let selection = CharacterClassSelection {
            uppercase: false,
            lowercase: false,
            numbers: true,
            special_chars: false,
        };
        let pwd = generate_with(&mut rng, 1000, &selection).unwrap();
        for digit in NUMBERS.chars() {
            assert!(pwd.expose_secret().contains(digit), "missing {}", digit);
        }
    }
}
