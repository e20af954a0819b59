//! Strength label and indicator types.

use std::fmt;

/// Coarse strength classification of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    TooShort,
    Weak,
    Medium,
    Strong,
}

/// Visual tone of a strength label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Success,
    Warning,
    Danger,
}

impl StrengthLabel {
    pub fn indicator(self) -> Indicator {
        match self {
            StrengthLabel::Strong => Indicator::Success,
            StrengthLabel::Medium => Indicator::Warning,
            StrengthLabel::TooShort | StrengthLabel::Weak => Indicator::Danger,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLabel::TooShort => "Too short",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(StrengthLabel::TooShort.to_string(), "Too short");
        assert_eq!(StrengthLabel::Weak.to_string(), "Weak");
        assert_eq!(StrengthLabel::Medium.to_string(), "Medium");
        assert_eq!(StrengthLabel::Strong.to_string(), "Strong");
    }

    #[test]
    fn test_indicator() {
        assert_eq!(StrengthLabel::Strong.indicator(), Indicator::Success);
        assert_eq!(StrengthLabel::Medium.indicator(), Indicator::Warning);
        assert_eq!(StrengthLabel::Weak.indicator(), Indicator::Danger);
        assert_eq!(StrengthLabel::TooShort.indicator(), Indicator::Danger);
    }
}
