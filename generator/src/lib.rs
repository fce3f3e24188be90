//! Usage-grammar parsing and definition-to-model transformation.
//!
//! This crate turns documented command definitions into a [`ToolSchema`]
//! suitable for generating strongly-typed command wrappers.
//!
//! # Main entry points
//!
//! - [`usage::parse_usage`] — split a usage template such as
//!   `docker commit [OPTIONS] CONTAINER [REPOSITORY[:TAG]]` into typed
//!   parameters.
//! - [`DefinitionModelBuilder::build`] — convert a set of
//!   [`RawCommandDefinition`]s into a tool model.
//! - [`output::format_tool`] — render a model as JSON, YAML, Markdown or a
//!   summary table.
//!
//! # Example
//!
//! ```
//! use wrapgen_core::{PropertyType, RawCommandDefinition, RawOptionDefinition};
//! use wrapgen_generator::build_tool;
//!
//! let definitions = vec![
//!     RawCommandDefinition::new("docker node inspect", "docker node inspect [OPTIONS] self|NODE [NODE...]")
//!         .with_option(
//!             RawOptionDefinition::new("format", "string")
//!                 .with_description(r#"Format output ("json"|"table"|"wide")"#),
//!         ),
//! ];
//!
//! let tool = build_tool(&definitions);
//! let inspect = tool.find_task("NodeInspect").unwrap();
//! assert_eq!(inspect.definite_argument, "node inspect");
//!
//! let nodes = inspect.settings_class.find_property("Nodes").unwrap();
//! assert_eq!(nodes.ty, PropertyType::StringList);
//!
//! let format = tool.find_enumeration("Format").unwrap();
//! assert_eq!(format.values, ["json", "table", "wide"]);
//! ```
//!
//! All transformations are total: malformed usage text or unknown value
//! types degrade to literal tokens and plain strings instead of errors.
//!
//! [`ToolSchema`]: wrapgen_core::ToolSchema
//! [`RawCommandDefinition`]: wrapgen_core::RawCommandDefinition

pub mod builder;
pub mod enumeration;
pub mod naming;
pub mod output;
pub mod tool;
pub mod usage;
pub mod value_type;

pub use builder::{CommandModel, DefinitionModelBuilder, build_tool};
pub use output::{OutputFormat, format_tool};
pub use tool::ToolConfig;
pub use usage::{UsageParameter, parse_usage};
