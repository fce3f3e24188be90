//! Enumeration mining from option descriptions.
//!
//! Option descriptions in the docker reference often embed their accepted
//! values as a parenthesized, pipe-separated, quoted list:
//!
//! ```text
//! Set the orchestrator to use ("swarm"|"kubernetes"|"all")
//! ```
//!
//! [`extract_enumeration`] recognizes that convention and nothing else. Text
//! that merely looks like it is misclassified; keep the heuristic here so its
//! scope stays auditable.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;
use wrapgen_core::EnumerationSchema;

// SAFETY: compile-time constant, exercised by tests.
static ENUMERATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\(("[\w+-]+"(?:\|"[\w+-]+")+)\)"#).expect("static regex must compile")
});

/// Extracts the literal set embedded in a description.
///
/// Only the first match is used. Literals keep their order; repeats are
/// dropped. At least two alternatives are required.
///
/// # Examples
///
/// ```
/// use wrapgen_generator::enumeration::extract_enumeration;
///
/// let values = extract_enumeration(r#"Output format ("json"|"table"|"wide")"#).unwrap();
/// assert_eq!(values, ["json", "table", "wide"]);
///
/// assert!(extract_enumeration("Output format (default \"table\")").is_none());
/// ```
pub fn extract_enumeration(description: &str) -> Option<Vec<String>> {
    let caps = ENUMERATION_RE.captures(description)?;
    let mut values: Vec<String> = Vec::new();
    for literal in caps[1].split('|') {
        let literal = literal.trim_matches('"');
        if !values.iter().any(|v| v == literal) {
            values.push(literal.to_string());
        }
    }
    Some(values)
}

/// Tool-scoped enumerations keyed by name.
///
/// Output order is the order in which names were first registered. Registering
/// an existing name overwrites its values (last writer wins); a collision
/// with different values is logged.
///
/// # Examples
///
/// ```
/// use wrapgen_generator::enumeration::EnumerationRegistry;
///
/// let mut registry = EnumerationRegistry::new();
/// registry.register("Format", vec!["json".into(), "table".into()]);
/// registry.register("Orchestrator", vec!["swarm".into(), "all".into()]);
/// registry.register("Format", vec!["json".into(), "yaml".into()]);
///
/// let enumerations = registry.into_enumerations();
/// assert_eq!(enumerations.len(), 2);
/// assert_eq!(enumerations[0].name, "Format");
/// assert_eq!(enumerations[0].values, ["json", "yaml"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnumerationRegistry {
    entries: Vec<EnumerationSchema>,
    index: HashMap<String, usize>,
}

impl EnumerationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with existing enumerations.
    pub fn with_enumerations(enumerations: Vec<EnumerationSchema>) -> Self {
        let mut registry = Self::new();
        for enumeration in enumerations {
            registry.insert(enumeration);
        }
        registry
    }

    /// Registers `values` under `name`. Returns `true` when a different value
    /// set was overwritten.
    pub fn register(&mut self, name: &str, values: Vec<String>) -> bool {
        self.insert(EnumerationSchema::new(name, values))
    }

    /// Inserts an enumeration with last-writer-wins semantics.
    pub fn insert(&mut self, enumeration: EnumerationSchema) -> bool {
        match self.index.get(&enumeration.name) {
            Some(&slot) => {
                let existing = &mut self.entries[slot];
                let collided = existing.values != enumeration.values;
                if collided {
                    warn!(
                        enumeration = %enumeration.name,
                        previous = ?existing.values,
                        current = ?enumeration.values,
                        "Enumeration name collision; last registration wins"
                    );
                }
                existing.values = enumeration.values;
                collided
            }
            None => {
                self.index
                    .insert(enumeration.name.clone(), self.entries.len());
                self.entries.push(enumeration);
                false
            }
        }
    }

    /// Looks up an enumeration by name.
    pub fn get(&self, name: &str) -> Option<&EnumerationSchema> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the registry, returning enumerations in first-registration
    /// order.
    pub fn into_enumerations(self) -> Vec<EnumerationSchema> {
        self.entries
    }
}
