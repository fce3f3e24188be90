//! Output formatting for tool models.

use serde::{Deserialize, Serialize};
use wrapgen_core::{PropertySchema, ToolSchema};

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Markdown,
    Table,
}

/// Formats a tool model in the requested output format.
///
/// JSON and YAML are the machine-readable forms handed to code emission;
/// Markdown and Table are for reviewing a generation run.
pub fn format_tool(tool: &ToolSchema, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(tool)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(tool).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markdown => Ok(tool_to_markdown(tool)),
        OutputFormat::Table => Ok(tool_to_table(tool)),
    }
}

fn tool_to_markdown(tool: &ToolSchema) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", tool.name));

    if let Some(ref help) = tool.help {
        out.push_str(&format!("{help}\n\n"));
    }
    out.push_str(&format!("**Executable:** `{}`\n\n", tool.executable));

    for task in &tool.tasks {
        out.push_str(&format!("## {}\n\n", task.postfix));
        if let Some(ref help) = task.help {
            out.push_str(&format!("{help}\n\n"));
        }
        out.push_str(&format!(
            "`{} {}` (extends `{}`)\n\n",
            tool.executable, task.definite_argument, task.settings_class.base_class
        ));
        push_property_table(&mut out, &task.settings_class.properties);
    }

    if !tool.enumerations.is_empty() {
        out.push_str("## Enumerations\n\n");
        out.push_str("| Enumeration | Values |\n");
        out.push_str("|-------------|--------|\n");
        for enumeration in &tool.enumerations {
            out.push_str(&format!(
                "| `{}` | {} |\n",
                enumeration.name,
                enumeration.values.join(", ")
            ));
        }
        out.push('\n');
    }

    out
}

fn push_property_table(out: &mut String, properties: &[PropertySchema]) {
    if properties.is_empty() {
        return;
    }
    out.push_str("| Property | Type | Format | Description |\n");
    out.push_str("|----------|------|--------|-------------|\n");
    for property in properties {
        let nullable = if property.nullable { "?" } else { "" };
        let help = property.help.as_deref().unwrap_or("");
        out.push_str(&format!(
            "| `{}` | {}{nullable} | `{}` | {help} |\n",
            property.name, property.ty, property.format
        ));
    }
    out.push('\n');
}

fn tool_to_table(tool: &ToolSchema) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Tool: {}  Tasks: {}  Enumerations: {}\n",
        tool.name,
        tool.tasks.len(),
        tool.enumerations.len()
    ));

    if !tool.tasks.is_empty() {
        out.push_str("\nTasks:\n");
        let max_name = tool
            .tasks
            .iter()
            .map(|t| t.postfix.len())
            .max()
            .unwrap_or(4);

        for task in &tool.tasks {
            out.push_str(&format!(
                "  {:<width$}  {:>3} props  {}\n",
                task.postfix,
                task.settings_class.properties.len(),
                task.definite_argument,
                width = max_name
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use wrapgen_core::{
        EnumerationSchema, PropertySchema, PropertyType, SettingsClassSchema, TaskSchema,
    };

    use super::*;

    fn sample_tool() -> ToolSchema {
        let mut tool = ToolSchema::new("Docker", "docker");
        tool.tasks.push(TaskSchema {
            postfix: "ContainerLs".into(),
            help: Some("List containers".into()),
            definite_argument: "container ls".into(),
            settings_class: SettingsClassSchema {
                name: "DockerContainerLsSettings".into(),
                base_class: "DockerContainerSettings".into(),
                properties: vec![{
                    let mut all = PropertySchema::new("All", PropertyType::Bool, "--all={value}");
                    all.nullable = true;
                    all
                }],
            },
            ..Default::default()
        });
        tool.enumerations
            .push(EnumerationSchema::new("Format", vec!["json".into(), "table".into()]));
        tool
    }

    #[test]
    fn test_format_tool_json() {
        let json = format_tool(&sample_tool(), OutputFormat::Json).unwrap();
        assert!(json.contains("\"name\": \"Docker\""));
        assert!(json.contains("\"definite_argument\": \"container ls\""));
    }

    #[test]
    fn test_format_tool_yaml() {
        let yaml = format_tool(&sample_tool(), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("name: Docker"));
        assert!(yaml.contains("postfix: ContainerLs"));
    }

    #[test]
    fn test_format_tool_markdown() {
        let md = format_tool(&sample_tool(), OutputFormat::Markdown).unwrap();
        assert!(md.contains("# Docker"));
        assert!(md.contains("## ContainerLs"));
        assert!(md.contains("`docker container ls`"));
        assert!(md.contains("| `All` | bool? | `--all={value}` |"));
        assert!(md.contains("| `Format` | json, table |"));
    }

    #[test]
    fn test_output_format_names() {
        let format: OutputFormat = serde_yaml::from_str("markdown").unwrap();
        assert_eq!(format, OutputFormat::Markdown);
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn test_format_tool_table() {
        let table = format_tool(&sample_tool(), OutputFormat::Table).unwrap();
        assert!(table.contains("Tool: Docker  Tasks: 1  Enumerations: 1"));
        assert!(table.contains("ContainerLs"));
        assert!(table.contains("1 props"));
    }
}
