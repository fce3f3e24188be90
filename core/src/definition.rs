//! Raw command definition records.
//!
//! These types mirror the per-command YAML documents published with the
//! docker CLI reference (`_data/engine-cli/*.yaml`). They are the input of the
//! model builder and are never mutated once deserialized.

use serde::{Deserialize, Serialize};

/// Availability flags shared by commands and options.
///
/// Carried through to the generated model untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionFlags {
    pub deprecated: bool,
    pub experimental: bool,
    #[serde(rename = "experimentalcli")]
    pub experimental_cli: bool,
    pub kubernetes: bool,
    pub swarm: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_api_version: Option<String>,
}

/// A declared option of a command, e.g. `--format`.
///
/// # Examples
///
/// ```
/// use wrapgen_core::RawOptionDefinition;
///
/// let option = RawOptionDefinition::new("log-level", "string")
///     .with_description(r#"Set the logging level ("debug"|"info")"#);
/// assert_eq!(option.name, "log-level");
/// assert_eq!(option.value_type.as_deref(), Some("string"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawOptionDefinition {
    /// Long flag name without leading dashes (hyphenated).
    #[serde(rename = "option")]
    pub name: String,
    pub shorthand: Option<String>,
    /// Free-text value classification (`string`, `bool`, `list`, `map`, ...).
    pub value_type: Option<String>,
    pub default_value: Option<String>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub flags: DefinitionFlags,
}

impl RawOptionDefinition {
    /// Creates an option with a name and value-type tag.
    pub fn new(name: &str, value_type: &str) -> Self {
        Self {
            name: name.to_string(),
            value_type: Some(value_type.to_string()),
            ..Default::default()
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Adds a short form.
    pub fn with_shorthand(mut self, shorthand: &str) -> Self {
        self.shorthand = Some(shorthand.to_string());
        self
    }

    /// Returns the value-type tag, or an empty string when absent.
    pub fn value_type_tag(&self) -> &str {
        self.value_type.as_deref().unwrap_or_default()
    }
}

/// One command of the documented CLI, e.g. `docker container ls`.
///
/// # Examples
///
/// ```
/// use wrapgen_core::{RawCommandDefinition, RawOptionDefinition};
///
/// let definition = RawCommandDefinition::new("docker container ls", "docker container ls [OPTIONS]")
///     .with_parent("docker container")
///     .with_option(RawOptionDefinition::new("all", "bool"));
///
/// assert_eq!(definition.command, "docker container ls");
/// assert_eq!(definition.options.len(), 1);
/// assert!(definition.inherited_options.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCommandDefinition {
    /// Full command path (e.g. `"docker commit"`).
    pub command: String,
    pub aliases: Option<String>,
    #[serde(rename = "short")]
    pub short_description: Option<String>,
    #[serde(rename = "long")]
    pub long_description: Option<String>,
    /// Usage template (e.g. `docker commit [OPTIONS] CONTAINER`).
    pub usage: String,
    #[serde(rename = "pname")]
    pub parent_name: Option<String>,
    #[serde(rename = "plink")]
    pub parent_link: Option<String>,
    pub examples: Option<String>,
    /// Options declared directly on this command.
    pub options: Vec<RawOptionDefinition>,
    /// Options inherited from ancestor commands.
    pub inherited_options: Vec<RawOptionDefinition>,
    #[serde(rename = "cname")]
    pub child_names: Vec<String>,
    #[serde(rename = "clink")]
    pub child_links: Vec<String>,
    #[serde(flatten)]
    pub flags: DefinitionFlags,
    /// Provenance of the record; stamped by the loader, never read from YAML.
    #[serde(skip)]
    pub reference: String,
}

impl RawCommandDefinition {
    /// Creates a definition with a command path and usage template.
    pub fn new(command: &str, usage: &str) -> Self {
        Self {
            command: command.to_string(),
            usage: usage.to_string(),
            ..Default::default()
        }
    }

    /// Sets the parent command name.
    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent_name = Some(parent.to_string());
        self
    }

    /// Adds a declared option.
    pub fn with_option(mut self, option: RawOptionDefinition) -> Self {
        self.options.push(option);
        self
    }

    /// Adds an inherited option.
    pub fn with_inherited_option(mut self, option: RawOptionDefinition) -> Self {
        self.inherited_options.push(option);
        self
    }

    /// Sets the provenance string.
    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference = reference.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_docker_reference_yaml() {
        let yaml = r#"
command: docker container ls
aliases: docker container list, docker ps
short: List containers
long: List containers
usage: docker container ls [OPTIONS]
pname: docker container
plink: docker_container.yaml
options:
- option: all
  shorthand: a
  value_type: bool
  default_value: "false"
  description: Show all containers (default shows just running)
  deprecated: false
  experimental: false
  experimentalcli: false
  kubernetes: false
  swarm: false
inherited_options:
- option: help
  value_type: bool
  default_value: "false"
  description: Print usage
deprecated: false
min_api_version: "1.25"
experimental: false
experimentalcli: true
kubernetes: false
swarm: false
"#;
        let definition: RawCommandDefinition = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(definition.command, "docker container ls");
        assert_eq!(definition.short_description.as_deref(), Some("List containers"));
        assert_eq!(definition.parent_name.as_deref(), Some("docker container"));
        assert_eq!(definition.options.len(), 1);
        assert_eq!(definition.options[0].name, "all");
        assert_eq!(definition.options[0].shorthand.as_deref(), Some("a"));
        assert_eq!(definition.options[0].value_type_tag(), "bool");
        assert_eq!(definition.inherited_options.len(), 1);
        assert!(definition.flags.experimental_cli);
        assert_eq!(definition.flags.min_api_version.as_deref(), Some("1.25"));
        assert!(definition.reference.is_empty());
    }

    #[test]
    fn test_missing_keys_default() {
        let definition: RawCommandDefinition =
            serde_yaml::from_str("command: docker\nusage: docker [OPTIONS] COMMAND\n").unwrap();

        assert!(definition.options.is_empty());
        assert!(definition.child_names.is_empty());
        assert_eq!(definition.flags, DefinitionFlags::default());
    }
}
