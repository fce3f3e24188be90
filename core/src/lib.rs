//! Core model types for CLI wrapper generation.
//!
//! This crate defines both ends of the generator:
//!
//! - [`RawCommandDefinition`] / [`RawOptionDefinition`] — the documented
//!   command records the generator consumes.
//! - [`ToolSchema`] — the normalized model it produces: [`TaskSchema`]s, each
//!   owning a [`SettingsClassSchema`] of [`PropertySchema`]s, plus tool-scoped
//!   [`EnumerationSchema`]s.
//!
//! Validation ([`validate_tool`]) catches structural errors such as duplicate
//! tasks, duplicate properties and dangling enumeration references.
//!
//! # Example
//!
//! ```
//! use wrapgen_core::*;
//!
//! let mut tool = ToolSchema::new("Docker", "docker");
//! tool.tasks.push(TaskSchema {
//!     postfix: "Attach".into(),
//!     definite_argument: "attach".into(),
//!     settings_class: SettingsClassSchema {
//!         name: "DockerAttachSettings".into(),
//!         base_class: tool.root_settings_name(),
//!         properties: vec![PropertySchema::new("Container", PropertyType::String, "{value}")],
//!     },
//!     ..Default::default()
//! });
//!
//! assert!(tool.find_task("Attach").is_some());
//! assert!(validate_tool(&tool).is_empty());
//! ```

mod definition;
mod types;
mod validate;

pub use definition::{DefinitionFlags, RawCommandDefinition, RawOptionDefinition};
pub use types::*;
pub use validate::{ValidationError, validate_tool};
