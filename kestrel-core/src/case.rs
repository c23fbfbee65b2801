//! Casing primitives shared by the naming pipelines.
//!
//! These follow the classic generator casing rules rather than a strict
//! word-splitting algorithm, so their output is stable for names that were
//! already cased by an earlier pass.

use std::sync::LazyLock;

use regex::Regex;

static UPPER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z][a-z]+)").expect("valid upper-run pattern"));
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("valid lower-upper pattern"));

/// Uppercase the first character and leave the rest untouched
/// (e.g., "pet_store" -> "Pet_store").
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Camelize a word (e.g., "pet_id" -> "PetId", or "petId" with `lowercase_first`).
///
/// Path (`/`) and package (`.`) separators start a new word and are removed.
/// An underscore is removed and the following character uppercased; when
/// that character has no lowercase form (digits, capitals, another
/// underscore) only the underscore is dropped. Hyphens uppercase the
/// following character. A trailing separator is kept.
pub fn camelize(word: &str, lowercase_first: bool) -> String {
    let mut word: String = word.replace('/', ".").split('.').map(title_case).collect();

    if let Some(pos) = word.find(|c: char| c.is_ascii_alphanumeric() || c == '_') {
        let upper = word[pos..pos + 1].to_ascii_uppercase();
        word.replace_range(pos..pos + 1, &upper);
    }

    let word = join_underscores(&word);
    let word = join_hyphens(&word);

    if lowercase_first {
        lower_first(&word)
    } else {
        word
    }
}

fn join_underscores(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '_' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            None => out.push(c),
            Some(next) => {
                let upper: String = next.to_uppercase().collect();
                if upper.chars().eq(std::iter::once(next)) {
                    // Drop the separator, the next character is handled on its own.
                    continue;
                }
                chars.next();
                out.push_str(&upper);
            }
        }
    }
    out
}

fn join_hyphens(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '-' {
            out.push(c);
            continue;
        }
        while chars.peek() == Some(&'-') {
            chars.next();
        }
        match chars.next() {
            None => out.push(c),
            Some(next) => out.extend(next.to_uppercase()),
        }
    }
    out
}

/// Convert a word to lower snake case (e.g., "SomeValue" -> "some_value").
///
/// Hyphens and spaces become underscores, existing underscores are kept,
/// `.` becomes `/` and `$` becomes `__`.
pub fn underscore(word: &str) -> String {
    let word = word.replace('.', "/").replace('$', "__");
    let word = UPPER_RUN.replace_all(&word, "${1}_${2}");
    let word = LOWER_UPPER.replace_all(&word, "${1}_${2}");
    word.replace(['-', ' '], "_").to_lowercase()
}

/// Returns true if the word starts with an ASCII digit.
pub fn starts_with_digit(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_digit())
}

/// Returns true if the word only contains capitals and underscores.
///
/// Such names are treated as constants and left untouched by variable naming.
pub fn is_constant_style(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}
