//! Wrapper model type definitions.
//!
//! This module defines the normalized model handed to the code-emission
//! collaborator: a [`ToolSchema`] owning its tasks, each task owning its
//! settings class, and a tool-scoped list of enumerations. The types are
//! designed for serialization with [`serde`] and round-trip through JSON and
//! YAML.

use serde::{Deserialize, Serialize};

use crate::DefinitionFlags;

/// Version of the model contract (semver).
pub const MODEL_CONTRACT_VERSION: &str = "1.0.0";

/// Semantic type of a generated property.
///
/// # Examples
///
/// ```
/// use wrapgen_core::PropertyType;
///
/// assert_eq!(PropertyType::StringList.to_string(), "list-of-string");
/// assert_eq!(PropertyType::Enumeration("LogLevel".into()).to_string(), "LogLevel");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    /// Plain string (the default).
    #[default]
    String,
    Bool,
    Int,
    Long,
    Float,
    Decimal,
    /// List of strings.
    #[serde(rename = "list-of-string")]
    StringList,
    /// Map of string to string.
    #[serde(rename = "map-of-string-to-string")]
    StringMap,
    /// Reference to a synthesized [`EnumerationSchema`] by name.
    Enumeration(String),
    /// Reference to a hand-authored type (e.g. `CliSettings`).
    Custom(String),
}

impl PropertyType {
    /// Returns the referenced enumeration name, if any.
    pub fn enumeration(&self) -> Option<&str> {
        match self {
            Self::Enumeration(name) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Long => f.write_str("long"),
            Self::Float => f.write_str("float"),
            Self::Decimal => f.write_str("decimal"),
            Self::StringList => f.write_str("list-of-string"),
            Self::StringMap => f.write_str("map-of-string-to-string"),
            Self::Enumeration(name) | Self::Custom(name) => f.write_str(name),
        }
    }
}

/// Validation hint attached to a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Assertion {
    /// Must be an existing file.
    File,
    /// Must be an existing directory.
    Directory,
    FileOrNull,
    DirectoryOrNull,
}

/// A property of a settings or data class.
///
/// The `format` template describes how the property renders into arguments:
/// `--log-level={value}` for options, `{value}` for positionals.
///
/// # Examples
///
/// ```
/// use wrapgen_core::{PropertySchema, PropertyType};
///
/// let prop = PropertySchema::new("Format", PropertyType::String, "--format={value}")
///     .with_help("Pretty-print using a template");
/// assert_eq!(prop.name, "Format");
/// assert_eq!(prop.help.as_deref(), Some("Pretty-print using a template"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PropertySchema {
    /// PascalCase property name.
    pub name: String,
    #[serde(rename = "type")]
    pub ty: PropertyType,
    /// Whether the generated property is nullable (numeric/boolean options).
    pub nullable: bool,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion: Option<Assertion>,
    pub custom_impl: bool,
    pub custom_value: bool,
}

impl PropertySchema {
    /// Creates a property with a name, type and format template.
    pub fn new(name: &str, ty: PropertyType, format: &str) -> Self {
        Self {
            name: name.to_string(),
            ty,
            format: format.to_string(),
            ..Default::default()
        }
    }

    /// Adds help text.
    pub fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    /// Adds a validation hint.
    pub fn with_assertion(mut self, assertion: Assertion) -> Self {
        self.assertion = Some(assertion);
        self
    }
}

/// The property bag of one task.
///
/// `base_class` is either the shared root settings name (e.g.
/// `DockerSettings`) or the parent command's settings-class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SettingsClassSchema {
    pub name: String,
    pub base_class: String,
    pub properties: Vec<PropertySchema>,
}

impl SettingsClassSchema {
    /// Finds a property by name.
    pub fn find_property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// A hand-authored data class (e.g. `CliSettings`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataClassSchema {
    pub name: String,
    pub properties: Vec<PropertySchema>,
}

/// A generated wrapper for one command.
///
/// # Examples
///
/// ```
/// use wrapgen_core::{SettingsClassSchema, TaskSchema};
///
/// let task = TaskSchema {
///     postfix: "ContainerLs".into(),
///     definite_argument: "container ls".into(),
///     settings_class: SettingsClassSchema {
///         name: "DockerContainerLsSettings".into(),
///         base_class: "DockerSettings".into(),
///         properties: Vec::new(),
///     },
///     ..Default::default()
/// };
/// assert_eq!(task.settings_class.base_class, "DockerSettings");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TaskSchema {
    /// Task name derived from the command path (e.g. `ContainerLs`).
    pub postfix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Literal tokens of the usage template joined by spaces.
    pub definite_argument: String,
    pub settings_class: SettingsClassSchema,
    pub flags: DefinitionFlags,
}

/// A closed set of string literals mined from option descriptions.
///
/// # Examples
///
/// ```
/// use wrapgen_core::EnumerationSchema;
///
/// let e = EnumerationSchema::new("Format", vec!["json".into(), "table".into()]);
/// assert_eq!(e.values, ["json", "table"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EnumerationSchema {
    pub name: String,
    pub values: Vec<String>,
}

impl EnumerationSchema {
    /// Creates an enumeration.
    pub fn new(name: &str, values: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            values,
        }
    }
}

/// The complete model of one wrapped tool.
///
/// Tasks own their settings classes; enumerations are tool-scoped.
///
/// # Examples
///
/// ```
/// use wrapgen_core::{EnumerationSchema, ToolSchema};
///
/// let mut tool = ToolSchema::new("Docker", "docker");
/// tool.enumerations.push(EnumerationSchema::new("LogLevel", vec!["debug".into()]));
///
/// assert_eq!(tool.root_settings_name(), "DockerSettings");
/// assert!(tool.find_enumeration("LogLevel").is_some());
/// assert_eq!(tool.settings_classes().count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ToolSchema {
    /// Model contract version (populated from [`MODEL_CONTRACT_VERSION`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    pub name: String,
    /// Executable name (e.g. `docker`).
    pub executable: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_url: Option<String>,
    pub license: Vec<String>,
    /// Provenance of every input definition, in input order.
    pub references: Vec<String>,
    pub common_task_properties: Vec<PropertySchema>,
    pub data_classes: Vec<DataClassSchema>,
    pub tasks: Vec<TaskSchema>,
    pub enumerations: Vec<EnumerationSchema>,
}

impl ToolSchema {
    /// Creates an empty tool model.
    pub fn new(name: &str, executable: &str) -> Self {
        Self {
            model_version: Some(MODEL_CONTRACT_VERSION.to_string()),
            name: name.to_string(),
            executable: executable.to_string(),
            ..Default::default()
        }
    }

    /// Name of the shared root settings class (e.g. `DockerSettings`).
    pub fn root_settings_name(&self) -> String {
        format!("{}Settings", self.name)
    }

    /// Iterates the settings classes referenced by tasks.
    pub fn settings_classes(&self) -> impl Iterator<Item = &SettingsClassSchema> {
        self.tasks.iter().map(|task| &task.settings_class)
    }

    /// Finds a task by postfix.
    pub fn find_task(&self, postfix: &str) -> Option<&TaskSchema> {
        self.tasks.iter().find(|t| t.postfix == postfix)
    }

    /// Finds an enumeration by name.
    pub fn find_enumeration(&self, name: &str) -> Option<&EnumerationSchema> {
        self.enumerations.iter().find(|e| e.name == name)
    }
}
