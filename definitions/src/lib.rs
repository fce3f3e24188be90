//! Loading of command definition documents and generator configuration.
//!
//! This crate reads the per-command YAML documents a CLI's reference
//! documentation is built from, and the configuration file that drives a
//! generation run.
//!
//! # Quick start
//!
//! ```no_run
//! use wrapgen_definitions::{DefinitionSource, GeneratorConfig};
//!
//! let config = GeneratorConfig::load("wrapgen.yml").unwrap();
//! let source = DefinitionSource::from_dir_with_template(
//!     &config.definitions.path,
//!     &config.definitions.reference_url,
//!     &config.definitions.reference,
//!     &config.definitions.skip,
//! )
//! .unwrap();
//! println!("loaded {} definitions", source.len());
//! ```

mod config;
mod error;
mod loader;

pub use config::{DefinitionsConfig, GeneratorConfig, OutputConfig};
pub use error::{DefinitionError, Result};
pub use loader::{DEFAULT_REFERENCE_URL, DefinitionSource, parse_definition, reference_url};
