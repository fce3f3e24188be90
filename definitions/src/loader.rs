//! Loading command definitions from a directory of YAML documents.
//!
//! The docker reference ships one document per command under
//! `_data/engine-cli/`, named after the command path
//! (`docker_container_ls.yaml`). [`DefinitionSource::from_dir`] reads such a
//! directory in file-name order and stamps every definition with the URL it
//! was documented at.
//!
//! ```no_run
//! use wrapgen_definitions::DefinitionSource;
//!
//! let source = DefinitionSource::from_dir("engine-cli/", "master", &["docker_cp".into()]).unwrap();
//! for definition in source.definitions() {
//!     println!("{} <- {}", definition.command, definition.reference);
//! }
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use wrapgen_core::RawCommandDefinition;

use crate::error::{DefinitionError, Result};

/// Default provenance template. `{reference}` is the documentation revision,
/// `{file}` the document's file name.
pub const DEFAULT_REFERENCE_URL: &str =
    "https://raw.githubusercontent.com/docker/docker.github.io/{reference}/_data/engine-cli/{file}";

const EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Expands a provenance template.
///
/// # Examples
///
/// ```
/// use wrapgen_definitions::{DEFAULT_REFERENCE_URL, reference_url};
///
/// assert_eq!(
///     reference_url(DEFAULT_REFERENCE_URL, "v20.10", "docker_attach.yaml"),
///     "https://raw.githubusercontent.com/docker/docker.github.io/v20.10/_data/engine-cli/docker_attach.yaml"
/// );
/// ```
pub fn reference_url(template: &str, reference: &str, file: &str) -> String {
    template
        .replace("{reference}", reference)
        .replace("{file}", file)
}

/// Parses a single definition document and stamps its provenance.
///
/// # Errors
///
/// Returns [`DefinitionError::Yaml`] if the document is not a definition, or
/// [`DefinitionError::InvalidDefinition`] if it names no command.
///
/// # Examples
///
/// ```
/// use wrapgen_definitions::parse_definition;
///
/// let yaml = "command: docker attach\nusage: docker attach [OPTIONS] CONTAINER\n";
/// let definition = parse_definition(yaml, "docker_attach.yaml").unwrap();
/// assert_eq!(definition.command, "docker attach");
/// assert_eq!(definition.reference, "docker_attach.yaml");
/// ```
pub fn parse_definition(yaml: &str, reference: &str) -> Result<RawCommandDefinition> {
    let mut definition: RawCommandDefinition = serde_yaml::from_str(yaml)?;
    if definition.command.trim().is_empty() {
        return Err(DefinitionError::InvalidDefinition {
            file: reference.to_string(),
            message: "missing command".to_string(),
        });
    }
    definition.reference = reference.to_string();
    Ok(definition)
}

/// Command definitions read from one directory.
#[derive(Debug, Clone)]
pub struct DefinitionSource {
    path: PathBuf,
    definitions: Vec<RawCommandDefinition>,
    skipped: Vec<String>,
}

impl DefinitionSource {
    /// Loads every `*.yaml`/`*.yml` document in `path`, using
    /// [`DEFAULT_REFERENCE_URL`] for provenance.
    ///
    /// Files whose stem appears in `skip` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::Io`] if the directory cannot be read,
    /// [`DefinitionError::InvalidDefinition`] naming the first malformed
    /// document, or [`DefinitionError::NoDefinitions`] if nothing was loaded.
    pub fn from_dir(path: impl AsRef<Path>, reference: &str, skip: &[String]) -> Result<Self> {
        Self::from_dir_with_template(path, DEFAULT_REFERENCE_URL, reference, skip)
    }

    /// Like [`from_dir`](Self::from_dir) with a custom provenance template.
    pub fn from_dir_with_template(
        path: impl AsRef<Path>,
        template: &str,
        reference: &str,
        skip: &[String],
    ) -> Result<Self> {
        let path = path.as_ref();

        let mut files = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let file_path = entry?.path();
            let is_definition = file_path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| EXTENSIONS.contains(&e));
            if is_definition && file_path.is_file() {
                files.push(file_path);
            }
        }
        files.sort();

        let mut definitions = Vec::with_capacity(files.len());
        let mut skipped = Vec::new();
        for file_path in files {
            let stem = file_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            if skip.iter().any(|s| s == stem) {
                debug!(file = %file_path.display(), "Skipping definition");
                skipped.push(stem.to_string());
                continue;
            }

            let file_name = file_path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            let yaml = std::fs::read_to_string(&file_path)?;
            let reference = reference_url(template, reference, &file_name);
            let definition = parse_definition(&yaml, &reference).map_err(|e| match e {
                DefinitionError::Yaml(e) => DefinitionError::InvalidDefinition {
                    file: file_name.clone(),
                    message: e.to_string(),
                },
                DefinitionError::InvalidDefinition { message, .. } => {
                    DefinitionError::InvalidDefinition {
                        file: file_name.clone(),
                        message,
                    }
                }
                other => other,
            })?;
            definitions.push(definition);
        }

        if definitions.is_empty() {
            return Err(DefinitionError::NoDefinitions(path.to_path_buf()));
        }

        info!(
            path = %path.display(),
            definitions = definitions.len(),
            skipped = skipped.len(),
            "Loaded definitions"
        );

        Ok(Self {
            path: path.to_path_buf(),
            definitions,
            skipped,
        })
    }

    /// Definitions in file-name order.
    pub fn definitions(&self) -> &[RawCommandDefinition] {
        &self.definitions
    }

    /// Stems of the files that were skipped.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// The directory definitions were read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
