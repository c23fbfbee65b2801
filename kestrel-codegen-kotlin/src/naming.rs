//! Kotlin reserved words.

use kestrel_codegen::ReservedWords;

fn escape_kotlin_reserved(name: &str) -> String {
    format!("`{}`", name)
}

/// Strip the backtick escape from an identifier, if present.
pub fn unescape(name: &str) -> &str {
    name.strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
        .unwrap_or(name)
}

/// Kotlin hard keywords plus the soft and modifier keywords that collide in
/// generated sources. `data` is left out so it stays usable as a field name.
pub const KOTLIN_RESERVED: ReservedWords = ReservedWords {
    words: &[
        "abstract",
        "annotation",
        "as",
        "break",
        "case",
        "catch",
        "class",
        "companion",
        "const",
        "constructor",
        "continue",
        "crossinline",
        "delegate",
        "do",
        "else",
        "enum",
        "external",
        "false",
        "final",
        "finally",
        "for",
        "fun",
        "if",
        "in",
        "infix",
        "init",
        "inline",
        "inner",
        "interface",
        "internal",
        "is",
        "it",
        "lateinit",
        "lazy",
        "noinline",
        "null",
        "object",
        "open",
        "operator",
        "out",
        "override",
        "package",
        "private",
        "protected",
        "public",
        "reified",
        "return",
        "sealed",
        "super",
        "suspend",
        "tailrec",
        "this",
        "throw",
        "true",
        "try",
        "typealias",
        "typeof",
        "val",
        "var",
        "vararg",
        "when",
        "while",
    ],
    escape_with: escape_kotlin_reserved,
};
