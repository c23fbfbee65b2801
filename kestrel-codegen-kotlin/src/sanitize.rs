//! Identifier sanitizers.
//!
//! [`SpecialCharacterTranscoder`] spells special characters out as words and
//! is used for model names and enum constants. [`sanitize_name`] drops them
//! and is used for variables and parameters.

use std::sync::LazyLock;

use indexmap::IndexMap;

static NON_WORD: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"[^A-Za-z0-9_]+").expect("valid non-word pattern"));

/// Replacement for names made only of underscores, which Kotlin reserves.
pub const UNDERSCORE_FALLBACK: &str = "Underscore";

/// Multi-character operators come first so they win over their parts.
/// Hyphens are not listed, they separate words.
const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    ("<=", "Less_Than_Or_Equal_To"),
    (">=", "Greater_Than_Or_Equal_To"),
    ("!=", "Not_Equal"),
    ("~=", "Tilde_Equal"),
    (";", "Semicolon"),
    ("$", "Dollar"),
    ("^", "Caret"),
    ("|", "Pipe"),
    ("=", "Equal"),
    ("*", "Star"),
    ("&", "Ampersand"),
    ("%", "Percent"),
    ("#", "Hash"),
    ("@", "At"),
    ("!", "Exclamation"),
    ("+", "Plus"),
    (":", "Colon"),
    (">", "Greater_Than"),
    ("<", "Less_Than"),
    (".", "Period"),
    ("_", "Underscore"),
    ("?", "Question_Mark"),
    (",", "Comma"),
    ("'", "Quote"),
    ("\"", "Double_Quote"),
    ("/", "Slash"),
    ("\\", "Back_Slash"),
    ("(", "Left_Parenthesis"),
    (")", "Right_Parenthesis"),
    ("{", "Left_Curly_Bracket"),
    ("}", "Right_Curly_Bracket"),
    ("[", "Left_Square_Bracket"),
    ("]", "Right_Square_Bracket"),
    ("~", "Tilde"),
    ("`", "Backtick"),
];

/// Rewrites raw schema identifiers into Kotlin-safe tokens.
#[derive(Debug, Clone)]
pub struct SpecialCharacterTranscoder {
    replacements: IndexMap<String, String>,
}

impl Default for SpecialCharacterTranscoder {
    fn default() -> Self {
        Self::new(
            DEFAULT_REPLACEMENTS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl SpecialCharacterTranscoder {
    /// Create a transcoder from an ordered replacement table.
    pub fn new(replacements: IndexMap<String, String>) -> Self {
        Self { replacements }
    }

    /// Sanitize a raw identifier.
    ///
    /// Table replacements run first (the underscore entry is skipped), then
    /// every other run of non-identifier characters becomes one underscore.
    /// A leading digit gets an underscore prefix and an all-underscore result
    /// becomes [`UNDERSCORE_FALLBACK`]. Never fails; the empty string stays
    /// empty.
    pub fn sanitize(&self, raw: &str) -> String {
        let replaced = self.replace_special(raw);
        let mut word = NON_WORD.replace_all(&replaced, "_").into_owned();

        if kestrel_core::starts_with_digit(&word) {
            word.insert(0, '_');
        }

        if !word.is_empty() && word.chars().all(|c| c == '_') {
            return UNDERSCORE_FALLBACK.to_string();
        }

        word
    }

    fn replace_special(&self, raw: &str) -> String {
        self.replacements
            .iter()
            .filter(|(key, _)| !key.is_empty() && key.as_str() != "_")
            .fold(raw.to_string(), |word, (key, replacement)| {
                word.replace(key.as_str(), replacement)
            })
    }
}

/// Generic identifier sanitizer for variables and parameters.
///
/// Brackets and parentheses open a new word, separators become
/// underscores and anything else outside `[A-Za-z0-9_]` is dropped.
pub fn sanitize_name(name: &str) -> String {
    if name == "$" {
        return "value".to_string();
    }

    name.replace("[]", "")
        .replace('[', "_")
        .replace(']', "")
        .replace('(', "_")
        .replace(')', "")
        .replace(['.', '-', ' '], "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
