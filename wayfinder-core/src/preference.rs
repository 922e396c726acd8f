//! Light/dark display preference.
//!
//! # Examples
//! ```
//! use wayfinder_core::ThemePreference;
//!
//! assert_eq!(ThemePreference::Dark.as_str(), "dark");
//! assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
//! ```

use thiserror::Error;

/// Colour scheme the presentation layer renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThemePreference {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

/// Returned when parsing an unknown theme name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct ParseThemePreferenceError(pub String);

impl ThemePreference {
    /// Return the preference as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other preference.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemePreference {
    type Err = ParseThemePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseThemePreferenceError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("light", ThemePreference::Light)]
    #[case("DARK", ThemePreference::Dark)]
    #[case(" dark\n", ThemePreference::Dark)]
    fn parses_case_insensitively(#[case] raw: &str, #[case] expected: ThemePreference) {
        assert_eq!(ThemePreference::from_str(raw), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = ThemePreference::from_str("sepia").expect_err("unknown theme");
        assert!(err.to_string().contains("unknown theme 'sepia'"));
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(ThemePreference::Dark.to_string(), ThemePreference::Dark.as_str());
    }

    #[rstest]
    fn toggling_twice_is_identity() {
        assert_eq!(ThemePreference::Dark.toggled().toggled(), ThemePreference::Dark);
    }
}
