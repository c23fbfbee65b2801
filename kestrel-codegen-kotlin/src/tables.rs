//! Kotlin type mapping tables.

use indexmap::IndexMap;

/// Namespaces whose types are always written fully-qualified.
const BUILTIN_PREFIXES: &[&str] = &["kotlin.", "java."];

/// Kotlin primitives. Never escaped, never imported.
pub const LANGUAGE_PRIMITIVES: &[&str] = &[
    "Byte", "Short", "Int", "Long", "Float", "Double", "Boolean",
];

/// Types available in every Kotlin file without an import.
pub const DEFAULT_INCLUDES: &[&str] = &[
    "Byte",
    "Short",
    "Int",
    "Long",
    "Float",
    "Double",
    "Boolean",
    "Char",
    "String",
    "Array",
    "List",
    "Set",
    "Map",
    "Any",
    "ByteArray",
];

const DEFAULT_TYPE_MAPPING: &[(&str, &str)] = &[
    ("string", "String"),
    ("boolean", "Boolean"),
    ("integer", "Int"),
    ("float", "Float"),
    ("long", "Long"),
    ("double", "Double"),
    ("number", "Double"),
    ("date-time", "Calendar"),
    ("date", "Calendar"),
    ("file", "java.io.File"),
    ("array", "Array"),
    ("list", "Array"),
    ("map", "Map"),
    ("object", "Any"),
    ("binary", "ByteArray"),
    ("Date", "Calendar"),
    ("DateTime", "Calendar"),
];

const DEFAULT_IMPORT_MAPPING: &[(&str, &str)] = &[
    ("BigDecimal", "Double"),
    ("UUID", "java.util.UUID"),
    ("File", "java.io.File"),
    ("Date", "java.util.Date"),
    ("Timestamp", "java.sql.Timestamp"),
    ("DateTime", "java.time.LocalDateTime"),
    ("LocalDateTime", "java.time.LocalDateTime"),
    ("LocalDate", "java.time.LocalDate"),
    ("LocalTime", "java.time.LocalTime"),
    ("Calendar", "java.util.Calendar"),
];

/// Schema type keyword and import lookups for Kotlin.
///
/// Built from the defaults plus any configured overrides, then never
/// modified.
#[derive(Debug, Clone)]
pub struct TypeMappingTable {
    type_mapping: IndexMap<String, String>,
    import_mapping: IndexMap<String, String>,
}

impl Default for TypeMappingTable {
    fn default() -> Self {
        Self::new(&IndexMap::new(), &IndexMap::new())
    }
}

impl TypeMappingTable {
    /// Build the tables, letting `type_overrides` and `import_overrides`
    /// replace or extend the defaults.
    pub fn new(
        type_overrides: &IndexMap<String, String>,
        import_overrides: &IndexMap<String, String>,
    ) -> Self {
        Self {
            type_mapping: with_overrides(DEFAULT_TYPE_MAPPING, type_overrides),
            import_mapping: with_overrides(DEFAULT_IMPORT_MAPPING, import_overrides),
        }
    }

    /// The Kotlin type mapped to a schema keyword.
    pub fn mapped_type(&self, schema_type: &str) -> Option<&str> {
        self.type_mapping.get(schema_type).map(String::as_str)
    }

    /// The fully-qualified path mapped to a type name.
    pub fn import_path(&self, name: &str) -> Option<&str> {
        self.import_mapping.get(name).map(String::as_str)
    }

    /// The Kotlin type used for arrays.
    pub fn array_type(&self) -> &str {
        self.mapped_type("array").unwrap_or("Array")
    }

    /// Returns true for `kotlin.*` and `java.*` names.
    pub fn has_builtin_prefix(name: &str) -> bool {
        BUILTIN_PREFIXES
            .iter()
            .any(|prefix| name.starts_with(prefix))
    }

    pub fn is_primitive(name: &str) -> bool {
        LANGUAGE_PRIMITIVES.contains(&name)
    }

    pub fn is_default_include(name: &str) -> bool {
        DEFAULT_INCLUDES.contains(&name)
    }
}

fn with_overrides(
    defaults: &[(&str, &str)],
    overrides: &IndexMap<String, String>,
) -> IndexMap<String, String> {
    let mut table: IndexMap<String, String> = defaults
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    table.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    table
}
