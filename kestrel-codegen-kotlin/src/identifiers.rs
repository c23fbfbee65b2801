//! Identifier resolution: variables, parameters, enum constants, models and services.
//!
//! Each pipeline is an ordered sequence of stages; reordering them changes
//! the output, so the model pipeline keeps its stages as separate functions.

use kestrel_codegen::Namer;
use kestrel_core::{camelize, is_constant_style, starts_with_digit, title_case};

use crate::{KotlinCodegen, naming::unescape, sanitize::sanitize_name, tables::TypeMappingTable};

/// Enum constant used for an empty enum value.
pub const EMPTY_ENUM_VALUE: &str = "EMPTY";

/// Service name used for operations without a tag.
pub const DEFAULT_SERVICE: &str = "DefaultService";

const SERVICE_SUFFIX: &str = "Service";

impl KotlinCodegen {
    /// Model names that are used verbatim (`kotlin.*`, `java.*`, already
    /// escaped model names) or through the import mapping.
    fn canonical_model_name(&self, name: &str) -> Option<String> {
        if TypeMappingTable::has_builtin_prefix(name) || is_escaped_model_name(name) {
            return Some(name.to_string());
        }
        self.tables.import_path(name).map(str::to_string)
    }

    /// Strip dots, turn hyphens into underscores, then sanitize.
    fn sanitize_model_name(&self, name: &str) -> String {
        let stripped = name.replace('.', "").replace('-', "_");
        self.transcoder.sanitize(&stripped)
    }

    /// Title-case, camelize, then title-case again. Also runs on escaped
    /// names, where camelize capitalizes the first letter inside the
    /// backticks.
    fn pascalize_model_name(escaped: &str) -> String {
        title_case(&camelize(&title_case(escaped), false))
    }

    fn escape_var_name(&self, name: String) -> String {
        if self.reserved.is_reserved(&name) || starts_with_digit(&name) {
            self.reserved.escape(&name)
        } else {
            name
        }
    }
}

/// Returns true for a backtick-escaped, capitalized name such as `` `Class` ``.
fn is_escaped_model_name(name: &str) -> bool {
    let inner = unescape(name);
    inner != name && !inner.is_empty() && title_case(inner) == inner
}

impl Namer for KotlinCodegen {
    fn var_name(&self, name: &str) -> String {
        let name = sanitize_name(name).replace('-', "_");

        // Constant-style names are left alone.
        if is_constant_style(&name) {
            return name;
        }

        // pet_id => petId
        self.escape_var_name(camelize(&name, true))
    }

    fn enum_var_name(&self, value: &str, _datatype: &str) -> String {
        let token = if value.is_empty() {
            EMPTY_ENUM_VALUE.to_string()
        } else {
            self.transcoder.sanitize(value)
        };

        let cased = self.enum_naming.apply(&token);
        self.reserved.safe_name(&cased)
    }

    fn enum_name(&self, property_name: &str) -> String {
        title_case(property_name)
    }

    fn model_name(&self, name: &str) -> String {
        if let Some(canonical) = self.canonical_model_name(name) {
            return canonical;
        }

        let sanitized = self.sanitize_model_name(name);
        let escaped = self.reserved.safe_name(&sanitized);
        Self::pascalize_model_name(&escaped)
    }

    fn model_filename(&self, name: &str) -> String {
        self.model_name(&name.replace('-', "_"))
    }

    fn api_name(&self, tag: &str) -> String {
        if tag.is_empty() {
            return DEFAULT_SERVICE.to_string();
        }
        format!("{}{}", title_case(tag), SERVICE_SUFFIX)
    }
}
