//! Tool model validation.
//!
//! Validates structural invariants of a [`ToolSchema`] before it is handed to
//! code emission: empty names, duplicate tasks, duplicate properties within a
//! class, and property types referring to enumerations the tool does not
//! declare.
//!
//! # Examples
//!
//! ```
//! use wrapgen_core::*;
//!
//! let mut tool = ToolSchema::new("Docker", "docker");
//! assert!(validate_tool(&tool).is_empty());
//!
//! // Invalid: property refers to an undeclared enumeration
//! tool.data_classes.push(DataClassSchema {
//!     name: "CliSettings".into(),
//!     properties: vec![PropertySchema::new(
//!         "LogLevel",
//!         PropertyType::Enumeration("LogLevel".into()),
//!         "--log-level {value}",
//!     )],
//! });
//! assert!(!validate_tool(&tool).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{PropertySchema, ToolSchema};

/// Tool model validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Tool name is empty or whitespace-only.
    #[error("tool name cannot be empty")]
    EmptyToolName,
    /// A task has an empty postfix.
    #[error("task name cannot be empty")]
    EmptyTaskName,
    /// Two tasks share the same postfix.
    #[error("duplicate task: {0}")]
    DuplicateTask(String),
    /// Two properties in the same class share a name.
    #[error("duplicate property {property} in {class}")]
    DuplicateProperty { class: String, property: String },
    /// A property type names an enumeration the tool does not declare.
    #[error("property {property} in {class} refers to unknown enumeration {enumeration}")]
    UnknownEnumeration {
        class: String,
        property: String,
        enumeration: String,
    },
    /// An enumeration declares no values.
    #[error("enumeration {0} has no values")]
    EmptyEnumeration(String),
    /// An enumeration lists the same literal twice.
    #[error("enumeration {enumeration} repeats value {value}")]
    DuplicateEnumerationValue { enumeration: String, value: String },
}

/// Validates a tool model and returns every problem found.
///
/// Unlike a fail-fast check, all findings are collected so that a generation
/// run can report them together.
///
/// # Examples
///
/// ```
/// use wrapgen_core::*;
///
/// let mut tool = ToolSchema::new("Docker", "docker");
/// tool.enumerations.push(EnumerationSchema::new("Format", vec![]));
///
/// let errors = validate_tool(&tool);
/// assert_eq!(errors, vec![ValidationError::EmptyEnumeration("Format".into())]);
/// ```
pub fn validate_tool(tool: &ToolSchema) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if tool.name.trim().is_empty() {
        errors.push(ValidationError::EmptyToolName);
        return errors;
    }

    let enumerations: HashSet<&str> = tool.enumerations.iter().map(|e| e.name.as_str()).collect();

    for enumeration in &tool.enumerations {
        if enumeration.values.is_empty() {
            errors.push(ValidationError::EmptyEnumeration(enumeration.name.clone()));
            continue;
        }
        let mut seen = HashSet::new();
        for value in &enumeration.values {
            if !seen.insert(value.as_str()) {
                errors.push(ValidationError::DuplicateEnumerationValue {
                    enumeration: enumeration.name.clone(),
                    value: value.clone(),
                });
            }
        }
    }

    for class in &tool.data_classes {
        errors.extend(validate_properties(&class.name, &class.properties, &enumerations));
    }

    let mut seen_tasks = HashSet::new();
    for task in &tool.tasks {
        if task.postfix.trim().is_empty() {
            errors.push(ValidationError::EmptyTaskName);
            continue;
        }
        if !seen_tasks.insert(task.postfix.as_str()) {
            errors.push(ValidationError::DuplicateTask(task.postfix.clone()));
        }
        let class = &task.settings_class;
        errors.extend(validate_properties(&class.name, &class.properties, &enumerations));
    }

    errors
}

fn validate_properties(
    class: &str,
    properties: &[PropertySchema],
    enumerations: &HashSet<&str>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for property in properties {
        if !seen.insert(property.name.as_str()) {
            errors.push(ValidationError::DuplicateProperty {
                class: class.to_string(),
                property: property.name.clone(),
            });
        }
        if let Some(enumeration) = property.ty.enumeration()
            && !enumerations.contains(enumeration)
        {
            errors.push(ValidationError::UnknownEnumeration {
                class: class.to_string(),
                property: property.name.clone(),
                enumeration: enumeration.to_string(),
            });
        }
    }

    errors
}
