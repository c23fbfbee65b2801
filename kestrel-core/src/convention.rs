//! Naming conventions for enum constants.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::case::{camelize, title_case, underscore};

/// Casing policy applied to enum constant names.
///
/// Selected once through configuration and applied uniformly to every enum
/// constant. The string forms match the configuration values exactly
/// (`original`, `camelCase`, `PascalCase`, `snake_case`, `UPPERCASE`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NamingConvention {
    /// Keep the sanitized value as-is
    #[default]
    Original,
    /// lowerCamelCase, removing hyphens and underscores
    CamelCase,
    /// UpperCamelCase, removing hyphens and underscores
    PascalCase,
    /// lower_snake_case, removing hyphens
    SnakeCase,
    /// Every character uppercased
    Uppercase,
}

impl NamingConvention {
    /// All conventions, in the order they are listed to users.
    pub const ALL: [NamingConvention; 5] = [
        NamingConvention::Original,
        NamingConvention::CamelCase,
        NamingConvention::PascalCase,
        NamingConvention::SnakeCase,
        NamingConvention::Uppercase,
    ];

    /// Returns the configuration value for this convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingConvention::Original => "original",
            NamingConvention::CamelCase => "camelCase",
            NamingConvention::PascalCase => "PascalCase",
            NamingConvention::SnakeCase => "snake_case",
            NamingConvention::Uppercase => "UPPERCASE",
        }
    }

    /// Apply this convention to an already sanitized token.
    pub fn apply(&self, token: &str) -> String {
        match self {
            NamingConvention::Original => token.to_string(),
            NamingConvention::CamelCase => camelize(token, true),
            NamingConvention::PascalCase => title_case(&camelize(token, false)),
            NamingConvention::SnakeCase => underscore(token),
            NamingConvention::Uppercase => token.to_uppercase(),
        }
    }

    /// Comma separated list of every accepted value.
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(NamingConvention::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a configuration value names no known convention.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "'{value}' is an invalid enum property naming option, choose from: {}",
    NamingConvention::valid_values()
)]
pub struct UnknownConvention {
    pub value: String,
}

impl FromStr for NamingConvention {
    type Err = UnknownConvention;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|convention| convention.as_str() == s)
            .ok_or_else(|| UnknownConvention {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            NamingConvention::from_str("original").unwrap(),
            NamingConvention::Original
        );
        assert_eq!(
            NamingConvention::from_str("camelCase").unwrap(),
            NamingConvention::CamelCase
        );
        assert_eq!(
            NamingConvention::from_str("PascalCase").unwrap(),
            NamingConvention::PascalCase
        );
        assert_eq!(
            NamingConvention::from_str("snake_case").unwrap(),
            NamingConvention::SnakeCase
        );
        assert_eq!(
            NamingConvention::from_str("UPPERCASE").unwrap(),
            NamingConvention::Uppercase
        );
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!(NamingConvention::from_str("camelcase").is_err());
        assert!(NamingConvention::from_str("uppercase").is_err());
        assert!(NamingConvention::from_str("").is_err());
    }

    #[test]
    fn test_unknown_convention_lists_valid_values() {
        let err = NamingConvention::from_str("kebab-case").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("'kebab-case' is an invalid enum property naming option"));
        for convention in NamingConvention::ALL {
            assert!(message.contains(convention.as_str()));
        }
    }

    #[test]
    fn test_display_round_trips() {
        for convention in NamingConvention::ALL {
            assert_eq!(
                convention.to_string().parse::<NamingConvention>().unwrap(),
                convention
            );
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(NamingConvention::Original.apply("some_value"), "some_value");
        assert_eq!(NamingConvention::CamelCase.apply("some_value"), "someValue");
        assert_eq!(NamingConvention::PascalCase.apply("some_value"), "SomeValue");
        assert_eq!(NamingConvention::SnakeCase.apply("SomeValue"), "some_value");
        assert_eq!(NamingConvention::Uppercase.apply("some_value"), "SOME_VALUE");
    }

    #[test]
    fn test_apply_hyphenated() {
        assert_eq!(NamingConvention::CamelCase.apply("some-value"), "someValue");
        assert_eq!(NamingConvention::SnakeCase.apply("some-value"), "some_value");
        assert_eq!(NamingConvention::SnakeCase.apply("IPv4Address"), "ipv4_address");
        assert_eq!(NamingConvention::Uppercase.apply("some-value"), "SOME-VALUE");
    }

    #[test]
    fn test_default_is_original() {
        assert_eq!(NamingConvention::default(), NamingConvention::Original);
    }
}
