//! Reserved words for different programming languages.

/// A language's reserved words and how to escape them.
///
/// Membership is case-sensitive: `Class` is not `class`.
#[derive(Debug, Clone, Copy)]
pub struct ReservedWords {
    /// List of reserved words in the language
    pub words: &'static [&'static str],
    /// Escape a reserved word (e.g., "when" -> "`when`" in Kotlin)
    pub escape_with: fn(&str) -> String,
}

impl ReservedWords {
    /// Check if a word is reserved.
    pub fn is_reserved(&self, word: &str) -> bool {
        self.words.contains(&word)
    }

    /// Escape a word regardless of whether it is reserved.
    pub fn escape(&self, word: &str) -> String {
        (self.escape_with)(word)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            self.escape(name)
        } else {
            name.to_string()
        }
    }

    /// Iterate over every reserved word.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.words.iter().copied()
    }
}
