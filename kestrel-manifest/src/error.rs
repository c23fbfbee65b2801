use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename so configuration errors can
/// point at the offending value. Options built in code use
/// [`SourceContext::detached`], which carries no source text.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Context for options that were not read from a file.
    pub fn detached() -> Self {
        Self::new(String::new(), "<options>")
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an invalid naming convention error, pointing at the value if it
    /// can be found in the source.
    pub fn invalid_naming_convention(&self, value: impl Into<String>) -> Box<Error> {
        let value = value.into();
        Box::new(Error::InvalidNamingConvention {
            src: self.named_source(),
            span: find_value_span(&self.src, &value),
            valid: kestrel_core::NamingConvention::valid_values(),
            value,
        })
    }
}

/// Locate a quoted string value in TOML source.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let patterns = [format!("\"{}\"", value), format!("'{}'", value)];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }

    None
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(kestrel::io),
        help("pass the path of an existing kestrel.toml with --config")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse kestrel.toml")]
    #[diagnostic(code(kestrel::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("'{value}' is an invalid enum property naming option, choose from: {valid}")]
    #[diagnostic(
        code(kestrel::invalid_naming_convention),
        help("set enumPropertyNaming to one of: {valid}")
    )]
    InvalidNamingConvention {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown naming convention")]
        span: Option<SourceSpan>,
        value: String,
        valid: String,
    },
}
