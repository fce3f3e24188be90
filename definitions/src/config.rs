//! Generator configuration file.
//!
//! Names the wrapped tool, where its definitions live and where the model is
//! written. Every section is optional; omitted values fall back to the Docker
//! defaults.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! tool:
//!   name: Docker
//!   executable: docker
//! definitions:
//!   path: docker.github.io/_data/engine-cli
//!   reference: master
//!   skip:
//!     - docker_container_cp
//!     - docker_cp
//! output:
//!   path: Docker.json
//!   format: json
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wrapgen_generator::{OutputFormat, ToolConfig};

use crate::error::Result;
use crate::loader::DEFAULT_REFERENCE_URL;

/// Where definitions are read from and how they are stamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionsConfig {
    /// Directory holding one YAML document per command.
    pub path: PathBuf,
    /// Documentation revision substituted into `reference_url`.
    pub reference: String,
    pub reference_url: String,
    /// File stems to ignore.
    pub skip: Vec<String>,
}

impl Default for DefinitionsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("engine-cli"),
            reference: "master".to_string(),
            reference_url: DEFAULT_REFERENCE_URL.to_string(),
            skip: vec!["docker_container_cp".to_string(), "docker_cp".to_string()],
        }
    }
}

/// Where the generated model is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file; `None` writes to stdout.
    pub path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: OutputFormat::Json,
        }
    }
}

/// Top-level generator configuration.
///
/// # Examples
///
/// ```
/// use wrapgen_definitions::GeneratorConfig;
///
/// let config: GeneratorConfig = serde_yaml::from_str("version: \"1.0\"\n").unwrap();
/// assert_eq!(config.tool.name, "Docker");
/// assert_eq!(config.definitions.reference, "master");
/// assert!(config.definitions.skip.iter().any(|stem| stem == "docker_cp"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    pub tool: ToolConfig,
    pub definitions: DefinitionsConfig,
    pub output: OutputConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            tool: ToolConfig::default(),
            definitions: DefinitionsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::DefinitionError::Io) if the file cannot be read,
    /// or [`Yaml`](crate::DefinitionError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::DefinitionError::Io) if the file cannot be
    /// written, or [`Yaml`](crate::DefinitionError::Yaml) if serialization
    /// fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}
