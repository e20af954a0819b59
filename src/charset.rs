//! Character classes shared by the generator and the strength classifier.

/// Uppercase letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Decimal digits.
pub const NUMBERS: &str = "0123456789";
/// Special characters, used both for generation and for detection.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()";

/// One of the four fixed character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    SpecialChars,
}

impl CharacterClass {
    /// All classes, in alphabet order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::SpecialChars,
    ];

    /// The fixed character set of this class.
    pub fn charset(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::SpecialChars => SPECIAL_CHARS,
        }
    }

    /// Returns `true` if `c` belongs to this class.
    pub fn contains(self, c: char) -> bool {
        self.charset().contains(c)
    }
}

/// Which character classes are enabled for generation.
///
/// Nothing forces a class to be enabled: an all-false selection has an
/// empty alphabet and is rejected by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClassSelection {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special_chars: bool,
}

impl Default for CharacterClassSelection {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: false,
            special_chars: true,
        }
    }
}

impl CharacterClassSelection {
    /// Every class enabled.
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            special_chars: true,
        }
    }

    /// No class enabled.
    pub fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            numbers: false,
            special_chars: false,
        }
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::SpecialChars => self.special_chars,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        let flag = match class {
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Numbers => &mut self.numbers,
            CharacterClass::SpecialChars => &mut self.special_chars,
        };
        *flag = enabled;
    }

    /// Flips `class` and returns its new state.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        let enabled = !self.is_enabled(class);
        self.set(class, enabled);
        enabled
    }

    pub fn is_empty(&self) -> bool {
        !CharacterClass::ALL.iter().any(|&c| self.is_enabled(c))
    }

    /// Enabled classes in alphabet order.
    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |&c| self.is_enabled(c))
    }

    /// Union of the enabled charsets: uppercase, lowercase, numbers, special.
    pub fn alphabet(&self) -> Vec<char> {
        self.enabled().flat_map(|c| c.charset().chars()).collect()
    }
}

/// Which character classes are present in a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Composition {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl Composition {
    /// Presence test of each class against its fixed charset.
    pub fn of(pwd: &str) -> Self {
        Self {
            has_upper: pwd.chars().any(|c| CharacterClass::Uppercase.contains(c)),
            has_lower: pwd.chars().any(|c| CharacterClass::Lowercase.contains(c)),
            has_digit: pwd.chars().any(|c| CharacterClass::Numbers.contains(c)),
            has_special: pwd.chars().any(|c| CharacterClass::SpecialChars.contains(c)),
        }
    }

    /// Number of classes present, 0 to 4.
    pub fn count(&self) -> usize {
        [self.has_upper, self.has_lower, self.has_digit, self.has_special]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}
