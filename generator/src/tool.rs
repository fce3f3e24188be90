//! Tool identity and hand-authored model parts.
//!
//! [`ToolConfig`] names the wrapped program and supplies the parts of the
//! model that are not derived from definitions: the shared `CliSettings`
//! data class, the common task property that carries it, and the `LogLevel`
//! enumeration.

use serde::{Deserialize, Serialize};
use wrapgen_core::{
    Assertion, DataClassSchema, EnumerationSchema, PropertySchema, PropertyType, ToolSchema,
};

/// Placeholder that stands for "all declared options" in usage templates.
pub const DEFAULT_OPTIONS_MARKER: &str = "[OPTIONS]";

const CLI_SETTINGS: &str = "CliSettings";
const LOG_LEVEL: &str = "LogLevel";

/// Identity of the wrapped tool.
///
/// Loadable from YAML; every field falls back to the Docker defaults.
///
/// # Examples
///
/// ```
/// use wrapgen_generator::tool::ToolConfig;
///
/// let config = ToolConfig::default();
/// assert_eq!(config.name, "Docker");
/// assert_eq!(config.executable, "docker");
/// assert_eq!(config.options_marker, "[OPTIONS]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// PascalCase tool name, prefix of every settings class.
    pub name: String,
    /// Program name as it appears first in command paths and usage strings.
    pub executable: String,
    pub help: Option<String>,
    pub official_url: Option<String>,
    /// License header lines for generated sources.
    pub license: Vec<String>,
    pub options_marker: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            name: "Docker".to_string(),
            executable: "docker".to_string(),
            help: Some(
                "Docker is an open platform for developing, shipping, and running applications. \
                 Docker enables you to separate your applications from your infrastructure so you \
                 can deliver software quickly. With Docker, you can manage your infrastructure in \
                 the same ways you manage your applications. By taking advantage of Docker’s \
                 methodologies for shipping, testing, and deploying code quickly, you can \
                 significantly reduce the delay between writing code and running it in \
                 production."
                    .to_string(),
            ),
            official_url: Some("https://www.docker.com/".to_string()),
            license: Vec::new(),
            options_marker: DEFAULT_OPTIONS_MARKER.to_string(),
        }
    }
}

impl ToolConfig {
    /// Name of the shared root settings class (e.g. `DockerSettings`).
    pub fn root_settings_name(&self) -> String {
        format!("{}Settings", self.name)
    }

    /// Builds the tool skeleton: identity, references and the hand-authored
    /// properties, data classes and enumerations. Tasks are added by the
    /// model builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use wrapgen_generator::tool::ToolConfig;
    ///
    /// let tool = ToolConfig::default().base_tool(vec!["docker_attach.yaml".into()]);
    /// assert_eq!(tool.references, ["docker_attach.yaml"]);
    /// assert_eq!(tool.common_task_properties[0].name, "CliSettings");
    /// assert!(tool.find_enumeration("LogLevel").is_some());
    /// assert!(tool.tasks.is_empty());
    /// ```
    pub fn base_tool(&self, references: Vec<String>) -> ToolSchema {
        let mut tool = ToolSchema::new(&self.name, &self.executable);
        tool.help = self.help.clone();
        tool.official_url = self.official_url.clone();
        tool.license = self.license.clone();
        tool.references = references;

        let mut cli_settings = PropertySchema::new(
            CLI_SETTINGS,
            PropertyType::Custom(CLI_SETTINGS.to_string()),
            "{value}",
        );
        cli_settings.custom_impl = true;
        cli_settings.custom_value = true;
        tool.common_task_properties.push(cli_settings);

        tool.data_classes.push(DataClassSchema {
            name: CLI_SETTINGS.to_string(),
            properties: cli_settings_properties(),
        });

        tool.enumerations.push(EnumerationSchema::new(
            LOG_LEVEL,
            ["debug", "info", "warn", "error", "fatal"]
                .into_iter()
                .map(String::from)
                .collect(),
        ));

        tool
    }
}

fn cli_settings_properties() -> Vec<PropertySchema> {
    let flag = |name: &str, help: &str, format: &str| {
        let mut property = PropertySchema::new(name, PropertyType::Bool, format).with_help(help);
        property.nullable = true;
        property
    };
    let text = |name: &str, help: &str, format: &str| {
        PropertySchema::new(name, PropertyType::String, format).with_help(help)
    };

    vec![
        PropertySchema::new(
            LOG_LEVEL,
            PropertyType::Enumeration(LOG_LEVEL.to_string()),
            "--log-level {value}",
        )
        .with_help("Set the logging level."),
        text(
            "Config",
            "Location of client config files (default ~/.docker).",
            "--config {value}",
        )
        .with_assertion(Assertion::Directory),
        flag("Debug", "Enable debug mode.", "--debug"),
        flag("TLS", "Use TLS; implied by --tlsverify.", "--tls"),
        flag("TLSVerify", "Use TLS and verify the remote.", "--tlsverify"),
        text(
            "TLSCaCert",
            "Trust certs signed only by this CA (default ~/.docker/ca.pem).",
            "--tlscacert {value}",
        ),
        text(
            "TLSCert",
            "Path to TLS certificate file (default ~/.docker/cert.pem).",
            "--tlscert {value}",
        ),
        text(
            "TLSKey",
            "Path to TLS key file (default ~/.docker/key.pem).",
            "--tlskey {value}",
        ),
    ]
}
