//! Definition-to-model transformation.
//!
//! [`DefinitionModelBuilder`] turns raw command definitions into a
//! [`ToolSchema`]. Each definition is converted independently (in parallel);
//! enumerations are then merged sequentially in input order, so the result
//! does not depend on scheduling.

use rayon::prelude::*;
use tracing::{debug, info};
use wrapgen_core::{
    EnumerationSchema, PropertySchema, PropertyType, RawCommandDefinition, RawOptionDefinition,
    SettingsClassSchema, TaskSchema, ToolSchema,
};

use crate::enumeration::{EnumerationRegistry, extract_enumeration};
use crate::naming::{
    remove_new_lines, settings_class_name, task_postfix, to_pascal_case, to_plural,
};
use crate::tool::ToolConfig;
use crate::usage::{UsageParameter, parse_usage};
use crate::value_type::OptionValueType;

/// Format of every positional property.
pub const POSITIONAL_FORMAT: &str = "{value}";

/// Item format of positional map placeholders (`KEY=VALUE`).
pub const POSITIONAL_MAP_ITEM_FORMAT: &str = "{key}={value}";

/// The placeholder both `secret create` and `config create` use for their
/// content source.
const FILE_OR_STDIN: &str = "[file|-]";
const BUILD_CONTEXT: &str = "PATH|URL|-";

/// Model of a single command before enumerations are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandModel {
    pub task: TaskSchema,
    /// Enumerations mined from this command's options, in option order.
    pub enumerations: Vec<EnumerationSchema>,
}

/// Builds a [`ToolSchema`] from raw command definitions.
///
/// # Examples
///
/// ```
/// use wrapgen_core::{PropertyType, RawCommandDefinition, RawOptionDefinition};
/// use wrapgen_generator::{DefinitionModelBuilder, ToolConfig};
///
/// let definitions = vec![
///     RawCommandDefinition::new("docker", "docker [OPTIONS] COMMAND"),
///     RawCommandDefinition::new("docker commit", "docker commit [OPTIONS] CONTAINER [REPOSITORY[:TAG]]")
///         .with_option(RawOptionDefinition::new("pause", "bool")),
/// ];
///
/// let tool = DefinitionModelBuilder::new(ToolConfig::default()).build(&definitions);
/// assert_eq!(tool.tasks.len(), 1);
///
/// let commit = tool.find_task("Commit").unwrap();
/// assert_eq!(commit.definite_argument, "commit");
/// let pause = commit.settings_class.find_property("Pause").unwrap();
/// assert_eq!(pause.ty, PropertyType::Bool);
/// assert_eq!(pause.format, "--pause={value}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefinitionModelBuilder {
    config: ToolConfig,
}

impl DefinitionModelBuilder {
    /// Creates a builder for the given tool.
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Returns the tool configuration.
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Converts all definitions into one tool model.
    ///
    /// Definitions whose derived task name is empty (the root command) are
    /// dropped. Never fails.
    pub fn build(&self, definitions: &[RawCommandDefinition]) -> ToolSchema {
        let references = definitions
            .iter()
            .map(|definition| definition.reference.clone())
            .filter(|reference| !reference.is_empty())
            .collect();
        let mut tool = self.config.base_tool(references);

        let models: Vec<Option<CommandModel>> = definitions
            .par_iter()
            .map(|definition| self.build_command(definition))
            .collect();

        let mut registry =
            EnumerationRegistry::with_enumerations(std::mem::take(&mut tool.enumerations));
        for model in models.into_iter().flatten() {
            for enumeration in model.enumerations {
                registry.insert(enumeration);
            }
            tool.tasks.push(model.task);
        }
        tool.enumerations = registry.into_enumerations();

        info!(
            tool = %tool.name,
            definitions = definitions.len(),
            tasks = tool.tasks.len(),
            enumerations = tool.enumerations.len(),
            "Built tool model"
        );

        tool
    }

    /// Converts one definition. Returns `None` for the root command.
    pub fn build_command(&self, definition: &RawCommandDefinition) -> Option<CommandModel> {
        let postfix = task_postfix(&self.config.executable, &definition.command);
        if postfix.is_empty() {
            debug!(command = %definition.command, "Skipping command with empty task name");
            return None;
        }

        let mut literals: Vec<&str> = Vec::new();
        let mut properties = Vec::new();
        let mut enumerations = Vec::new();

        let params = parse_usage(&definition.usage);
        for param in &params {
            if !param.is_argument() {
                if param.raw != self.config.executable {
                    literals.push(&param.raw);
                }
                continue;
            }

            if param.raw == self.config.options_marker {
                for option in &definition.options {
                    let (property, enumeration) = option_property(option);
                    properties.push(property);
                    enumerations.extend(enumeration);
                }
                continue;
            }

            properties.push(self.positional_property(param, definition));
        }

        let settings_class = SettingsClassSchema {
            name: settings_class_name(&self.config.name, &postfix),
            base_class: self.base_class(definition),
            properties,
        };

        debug!(
            command = %definition.command,
            task = %postfix,
            base_class = %settings_class.base_class,
            properties = settings_class.properties.len(),
            "Built task"
        );

        let help = definition
            .short_description
            .as_deref()
            .map(|short| remove_new_lines(short).trim().to_string())
            .filter(|short| !short.is_empty());

        Some(CommandModel {
            task: TaskSchema {
                postfix,
                help,
                definite_argument: literals.join(" "),
                settings_class,
                flags: definition.flags.clone(),
            },
            enumerations,
        })
    }

    /// Commands documented with inherited options extend their parent's
    /// settings class; everything else extends the shared root.
    fn base_class(&self, definition: &RawCommandDefinition) -> String {
        if definition.inherited_options.is_empty() {
            return self.config.root_settings_name();
        }

        let parent = match definition
            .parent_name
            .as_deref()
            .filter(|parent| !parent.trim().is_empty())
        {
            Some(parent) => parent.to_string(),
            None => {
                let mut path = definition.command.split_whitespace().collect::<Vec<_>>();
                path.pop();
                path.join(" ")
            }
        };

        let postfix = task_postfix(&self.config.executable, &parent);
        if postfix.is_empty() {
            self.config.root_settings_name()
        } else {
            settings_class_name(&self.config.name, &postfix)
        }
    }

    fn positional_property(
        &self,
        param: &UsageParameter,
        definition: &RawCommandDefinition,
    ) -> PropertySchema {
        let name = if param.is_list || param.is_dictionary {
            to_plural(&param.name())
        } else {
            param.name()
        };
        let ty = if param.is_list {
            PropertyType::StringList
        } else if param.is_dictionary {
            PropertyType::StringMap
        } else {
            PropertyType::String
        };

        let mut property = PropertySchema::new(&name, ty, POSITIONAL_FORMAT)
            .with_help(&self.positional_help(param, definition));
        property.separator = param.is_list.then_some(' ');
        property.item_format = param
            .is_dictionary
            .then(|| POSITIONAL_MAP_ITEM_FORMAT.to_string());
        property
    }

    fn positional_help(&self, param: &UsageParameter, definition: &RawCommandDefinition) -> String {
        let program = &self.config.executable;
        if param.raw == FILE_OR_STDIN {
            if definition.command == format!("{program} secret create") {
                return "Path to file to create the secret from.".to_string();
            }
            if definition.command == format!("{program} config create") {
                return "Path to file to create the config from.".to_string();
            }
        }
        if param.raw == BUILD_CONTEXT {
            return "Path or url where the build context is located.".to_string();
        }
        remove_new_lines(&param.raw)
    }
}

/// Converts a declared option into a property, returning the enumeration
/// mined from its description, if any.
///
/// A mined enumeration takes precedence over the declared value type.
///
/// # Examples
///
/// ```
/// use wrapgen_core::{PropertyType, RawOptionDefinition};
/// use wrapgen_generator::builder::option_property;
///
/// let option = RawOptionDefinition::new("format", "string")
///     .with_description(r#"Output format ("json"|"table"|"wide")"#);
/// let (property, enumeration) = option_property(&option);
///
/// assert_eq!(property.ty, PropertyType::Enumeration("Format".into()));
/// assert_eq!(enumeration.unwrap().values, ["json", "table", "wide"]);
/// ```
pub fn option_property(option: &RawOptionDefinition) -> (PropertySchema, Option<EnumerationSchema>) {
    let name = to_pascal_case(&option.name, '-');
    let description = option.description.as_deref().unwrap_or_default();

    let mut property = PropertySchema::new(
        &name,
        PropertyType::String,
        &format!("--{}={{value}}", option.name),
    );
    let help = remove_new_lines(description);
    if !help.trim().is_empty() {
        property.help = Some(help.trim().to_string());
    }

    if let Some(values) = extract_enumeration(description) {
        property.ty = PropertyType::Enumeration(name.clone());
        return (property, Some(EnumerationSchema::new(&name, values)));
    }

    let mapping = OptionValueType::from_tag(option.value_type_tag()).mapping();
    property.ty = mapping.ty;
    property.nullable = mapping.nullable;
    property.item_format = mapping.item_format;
    (property, None)
}

/// Builds a model with the default (Docker) tool configuration.
pub fn build_tool(definitions: &[RawCommandDefinition]) -> ToolSchema {
    DefinitionModelBuilder::default().build(definitions)
}

#[cfg(test)]
mod tests {
    use wrapgen_core::validate_tool;

    use super::*;

    fn builder() -> DefinitionModelBuilder {
        DefinitionModelBuilder::new(ToolConfig::default())
    }

    fn task<'a>(tool: &'a ToolSchema, postfix: &str) -> &'a TaskSchema {
        tool.find_task(postfix)
            .unwrap_or_else(|| panic!("missing task {postfix}"))
    }

    #[test]
    fn test_root_command_is_dropped() {
        let tool = builder().build(&[
            RawCommandDefinition::new("docker", "docker [OPTIONS] COMMAND"),
            RawCommandDefinition::new("docker attach", "docker attach [OPTIONS] CONTAINER"),
        ]);

        assert_eq!(tool.tasks.len(), 1);
        assert_eq!(tool.tasks[0].postfix, "Attach");
    }

    #[test]
    fn test_literals_form_definite_argument() {
        let tool = builder().build(&[RawCommandDefinition::new(
            "docker container diff",
            "docker container diff CONTAINER",
        )]);
        let diff = task(&tool, "ContainerDiff");

        assert_eq!(diff.definite_argument, "container diff");
        assert_eq!(diff.settings_class.name, "DockerContainerDiffSettings");
        let container = &diff.settings_class.properties[0];
        assert_eq!(container.name, "Container");
        assert_eq!(container.format, "{value}");
        assert_eq!(container.help.as_deref(), Some("CONTAINER"));
    }

    #[test]
    fn test_options_marker_expands_declared_options_in_place() {
        let definition = RawCommandDefinition::new(
            "docker commit",
            "docker commit [OPTIONS] CONTAINER [REPOSITORY[:TAG]]",
        )
        .with_option(RawOptionDefinition::new("author", "string").with_shorthand("a"))
        .with_option(RawOptionDefinition::new("change", "list"))
        .with_option(RawOptionDefinition::new("pause", "bool"));
        let tool = builder().build(&[definition]);
        let commit = task(&tool, "Commit");

        let names = commit
            .settings_class
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Author", "Change", "Pause", "Container", "Repository"]);
        assert!(commit.settings_class.find_property("Options").is_none());

        let change = commit.settings_class.find_property("Change").unwrap();
        assert_eq!(change.ty, PropertyType::StringList);
        assert_eq!(change.format, "--change={value}");

        let pause = commit.settings_class.find_property("Pause").unwrap();
        assert!(pause.nullable);
    }

    #[test]
    fn test_options_without_marker_are_not_emitted() {
        let definition = RawCommandDefinition::new("docker secret rm", "docker secret rm SECRET [SECRET...]")
            .with_option(RawOptionDefinition::new("force", "bool"));
        let tool = builder().build(&[definition]);
        let rm = task(&tool, "SecretRm");

        assert!(rm.settings_class.find_property("Force").is_none());
        let secrets = rm.settings_class.find_property("Secrets").unwrap();
        assert_eq!(secrets.ty, PropertyType::StringList);
        assert_eq!(secrets.separator, Some(' '));
    }

    #[test]
    fn test_inherited_options_are_modeled_by_base_class() {
        let definition =
            RawCommandDefinition::new("docker container ls", "docker container ls [OPTIONS]")
                .with_parent("docker container")
                .with_inherited_option(RawOptionDefinition::new("help", "bool"));
        let tool = builder().build(&[definition]);
        let ls = task(&tool, "ContainerLs");

        assert_eq!(ls.settings_class.base_class, "DockerContainerSettings");
        assert!(ls.settings_class.properties.is_empty());
    }

    #[test]
    fn test_help_parent_without_inherited_options_uses_root() {
        let definition =
            RawCommandDefinition::new("docker container ls", "docker container ls [OPTIONS]")
                .with_parent("docker container");
        let tool = builder().build(&[definition]);

        assert_eq!(task(&tool, "ContainerLs").settings_class.base_class, "DockerSettings");
    }

    #[test]
    fn test_inherited_options_without_parent_fall_back_to_command_path() {
        let definition = RawCommandDefinition::new("docker node ls", "docker node ls [OPTIONS]")
            .with_inherited_option(RawOptionDefinition::new("help", "bool"));
        let tool = builder().build(&[definition]);

        assert_eq!(task(&tool, "NodeLs").settings_class.base_class, "DockerNodeSettings");
    }

    #[test]
    fn test_list_and_map_positionals_are_pluralized() {
        let tool = builder().build(&[
            RawCommandDefinition::new(
                "docker node inspect",
                "docker node inspect [OPTIONS] self|NODE [NODE...]",
            ),
            RawCommandDefinition::new(
                "docker plugin install",
                "docker plugin install [OPTIONS] PLUGIN [KEY=VALUE...]",
            ),
        ]);

        let nodes = task(&tool, "NodeInspect")
            .settings_class
            .find_property("Nodes")
            .unwrap();
        assert_eq!(nodes.ty, PropertyType::StringList);
        assert_eq!(nodes.help.as_deref(), Some("self|NODE"));

        let install = task(&tool, "PluginInstall");
        let pairs = install.settings_class.find_property("KeyValues").unwrap();
        assert_eq!(pairs.ty, PropertyType::StringMap);
        assert_eq!(pairs.item_format.as_deref(), Some("{key}={value}"));
        assert!(install.settings_class.find_property("Plugin").is_some());
    }

    #[test]
    fn test_positional_help_special_cases() {
        let tool = builder().build(&[
            RawCommandDefinition::new("docker secret create", "docker secret create [OPTIONS] SECRET [file|-]"),
            RawCommandDefinition::new("docker config create", "docker config create [OPTIONS] CONFIG [file|-]"),
            RawCommandDefinition::new("docker build", "docker build [OPTIONS] PATH | URL | -"),
        ]);

        let help = |postfix: &str, property: &str| {
            task(&tool, postfix)
                .settings_class
                .find_property(property)
                .and_then(|p| p.help.clone())
                .unwrap()
        };
        assert_eq!(help("SecretCreate", "File"), "Path to file to create the secret from.");
        assert_eq!(help("ConfigCreate", "File"), "Path to file to create the config from.");
        assert_eq!(help("Build", "Path"), "Path or url where the build context is located.");
        assert_eq!(help("SecretCreate", "Secret"), "SECRET");
    }

    #[test]
    fn test_enumeration_precedes_value_type() {
        let definition = RawCommandDefinition::new("docker stack ls", "docker stack ls [OPTIONS]")
            .with_option(
                RawOptionDefinition::new("orchestrator", "string")
                    .with_description("Orchestrator to use (\"swarm\"|\"kubernetes\"|\"all\")"),
            );
        let tool = builder().build(&[definition]);

        let orchestrator = task(&tool, "StackLs")
            .settings_class
            .find_property("Orchestrator")
            .unwrap();
        assert_eq!(orchestrator.ty, PropertyType::Enumeration("Orchestrator".into()));
        assert_eq!(
            tool.find_enumeration("Orchestrator").unwrap().values,
            ["swarm", "kubernetes", "all"]
        );
        assert!(validate_tool(&tool).is_empty());
    }

    #[test]
    fn test_enumeration_last_writer_wins_across_commands() {
        let format = |values: &str| {
            RawOptionDefinition::new("format", "string").with_description(values)
        };
        let tool = builder().build(&[
            RawCommandDefinition::new("docker a", "docker a [OPTIONS]")
                .with_option(format("(\"json\"|\"table\")")),
            RawCommandDefinition::new("docker b", "docker b [OPTIONS]")
                .with_option(format("(\"yaml\"|\"toml\")")),
        ]);

        let formats = tool
            .enumerations
            .iter()
            .filter(|e| e.name == "Format")
            .collect::<Vec<_>>();
        assert_eq!(formats.len(), 1);
        assert_eq!(formats[0].values, ["yaml", "toml"]);
    }

    #[test]
    fn test_map_option_item_format() {
        let definition = RawCommandDefinition::new("docker run", "docker run [OPTIONS] IMAGE")
            .with_option(RawOptionDefinition::new("label", "map"))
            .with_option(RawOptionDefinition::new("mount", "mount"))
            .with_option(RawOptionDefinition::new("memory", "bytes"));
        let tool = builder().build(&[definition]);
        let run = task(&tool, "Run");

        let label = run.settings_class.find_property("Label").unwrap();
        assert_eq!(label.ty, PropertyType::StringMap);
        assert_eq!(label.item_format.as_deref(), Some("{key}:{value}"));
        assert_eq!(
            run.settings_class.find_property("Mount").unwrap().ty,
            PropertyType::String
        );
        assert_eq!(
            run.settings_class.find_property("Memory").unwrap().ty,
            PropertyType::Long
        );
    }

    #[test]
    fn test_option_help_strips_new_lines() {
        let option = RawOptionDefinition::new("detach-keys", "string")
            .with_description("Override the key sequence\nfor detaching a container\n");
        let (property, enumeration) = option_property(&option);

        assert_eq!(property.name, "DetachKeys");
        assert_eq!(property.format, "--detach-keys={value}");
        assert_eq!(
            property.help.as_deref(),
            Some("Override the key sequencefor detaching a container")
        );
        assert!(enumeration.is_none());
    }

    #[test]
    fn test_empty_usage_yields_bare_task() {
        let definition = RawCommandDefinition::new("docker version", "")
            .with_option(RawOptionDefinition::new("format", "string"));
        let tool = builder().build(&[definition]);
        let version = task(&tool, "Version");

        assert_eq!(version.definite_argument, "");
        assert!(version.settings_class.properties.is_empty());
    }

    #[test]
    fn test_build_is_idempotent() {
        let definitions = vec![
            RawCommandDefinition::new("docker", "docker [OPTIONS] COMMAND"),
            RawCommandDefinition::new("docker ps", "docker ps [OPTIONS]").with_option(
                RawOptionDefinition::new("format", "string")
                    .with_description("(\"json\"|\"table\")"),
            ),
            RawCommandDefinition::new("docker rm", "docker rm [OPTIONS] CONTAINER [CONTAINER...]"),
        ];

        let first = builder().build(&definitions);
        let second = builder().build(&definitions);
        assert_eq!(first, second);
    }

    #[test]
    fn test_references_and_flags_are_carried() {
        let mut definition =
            RawCommandDefinition::new("docker swarm init", "docker swarm init [OPTIONS]")
                .with_reference("docker_swarm_init.yaml");
        definition.flags.swarm = true;
        let tool = builder().build(&[
            RawCommandDefinition::new("docker", "docker").with_reference("docker.yaml"),
            definition,
        ]);

        assert_eq!(tool.references, ["docker.yaml", "docker_swarm_init.yaml"]);
        assert!(task(&tool, "SwarmInit").flags.swarm);
    }

    #[test]
    fn test_custom_program_and_marker() {
        let config = ToolConfig {
            name: "Podman".into(),
            executable: "podman".into(),
            options_marker: "[flags]".into(),
            ..ToolConfig::default()
        };
        let definition = RawCommandDefinition::new("podman pod rm", "podman pod rm [flags] POD")
            .with_option(RawOptionDefinition::new("force", "bool"));
        let tool = DefinitionModelBuilder::new(config).build(&[definition]);
        let rm = tool.find_task("PodRm").unwrap();

        assert_eq!(rm.definite_argument, "pod rm");
        assert_eq!(rm.settings_class.name, "PodmanPodRmSettings");
        assert_eq!(rm.settings_class.base_class, "PodmanSettings");
        assert!(rm.settings_class.find_property("Force").is_some());
        assert!(rm.settings_class.find_property("Pod").is_some());
    }

    #[test]
    fn test_inherited_base_class_uses_tool_name() {
        let config = ToolConfig {
            name: "DockerCli".into(),
            ..ToolConfig::default()
        };
        let container = RawCommandDefinition::new("docker container", "docker container COMMAND")
            .with_parent("docker")
            .with_inherited_option(RawOptionDefinition::new("help", "bool"));
        let ls = RawCommandDefinition::new("docker container ls", "docker container ls [OPTIONS]")
            .with_parent("docker container")
            .with_inherited_option(RawOptionDefinition::new("help", "bool"));
        let tool = DefinitionModelBuilder::new(config).build(&[container, ls]);

        let container = tool.find_task("Container").unwrap();
        assert_eq!(container.settings_class.name, "DockerCliContainerSettings");
        assert_eq!(container.settings_class.base_class, "DockerCliSettings");

        let ls = tool.find_task("ContainerLs").unwrap();
        assert_eq!(ls.settings_class.base_class, "DockerCliContainerSettings");
    }
}
