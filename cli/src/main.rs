use std::fs;
use std::path::PathBuf;

use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use wrapgen_core::{ToolSchema, validate_tool};
use wrapgen_definitions::{DefinitionSource, GeneratorConfig};
use wrapgen_generator::{DefinitionModelBuilder, OutputFormat, format_tool, parse_usage};

#[derive(Debug, Parser)]
#[command(name = "wrapgen")]
#[command(about = "Generate CLI wrapper models from command reference definitions")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a tool model from a directory of YAML definitions.
    Generate(GenerateArgs),
    /// Parse usage templates and print the parameters as JSON.
    ParseUsage(ParseUsageArgs),
    /// Validate a previously generated JSON model.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Generator configuration file (YAML).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory of per-command YAML definitions.
    #[arg(long)]
    definitions: Option<PathBuf>,
    /// Output file (default: stdout).
    #[arg(long)]
    output: Option<PathBuf>,
    /// Documentation revision used in reference URLs.
    #[arg(long)]
    reference: Option<String>,
    /// Comma-separated definition file stems to skip.
    #[arg(long)]
    skip: Option<String>,
    /// Output format.
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Fail when the generated model does not validate.
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Args)]
struct ParseUsageArgs {
    /// Usage templates, e.g. "docker commit [OPTIONS] CONTAINER".
    #[arg(required = true)]
    usages: Vec<String>,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Generated model JSON file.
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::ParseUsage(args) => run_parse_usage(args),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(path) = args.definitions {
        config.definitions.path = path;
    }
    if let Some(reference) = args.reference {
        config.definitions.reference = reference;
    }
    if args.skip.is_some() {
        config.definitions.skip = parse_csv_list(args.skip);
    }
    if let Some(path) = args.output {
        config.output.path = Some(path);
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if config.tool.license.is_empty() {
        config.tool.license = default_license(&config.tool.name);
    }
    debug!(?config, "Resolved generator configuration");

    let source = DefinitionSource::from_dir_with_template(
        &config.definitions.path,
        &config.definitions.reference_url,
        &config.definitions.reference,
        &config.definitions.skip,
    )
    .map_err(|err| err.to_string())?;

    let tool = DefinitionModelBuilder::new(config.tool.clone()).build(source.definitions());

    let errors = validate_tool(&tool);
    for error in &errors {
        warn!(%error, "Model validation finding");
    }
    if args.strict && !errors.is_empty() {
        return Err(format!("Generated model has {} validation error(s)", errors.len()));
    }

    let rendered = format_tool(&tool, config.output.format)?;
    let summary = summarize(&tool);

    match &config.output.path {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).map_err(|err| {
                    format!(
                        "Failed to create output directory '{}': {err}",
                        parent.display()
                    )
                })?;
            }
            fs::write(path, rendered)
                .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
            println!("{summary} Wrote '{}'.", path.display());
        }
        None => {
            println!("{rendered}");
            eprintln!("{summary}");
        }
    }

    Ok(())
}

fn run_parse_usage(args: ParseUsageArgs) -> Result<(), String> {
    let parsed = args
        .usages
        .iter()
        .map(|usage| {
            let parameters = parse_usage(usage)
                .iter()
                .map(|param| {
                    serde_json::json!({
                        "raw": param.raw,
                        "name": param.name(),
                        "is_argument": param.is_argument(),
                        "is_list": param.is_list,
                        "is_dictionary": param.is_dictionary,
                    })
                })
                .collect::<Vec<_>>();
            serde_json::json!({ "usage": usage, "parameters": parameters })
        })
        .collect::<Vec<_>>();

    let raw = serde_json::to_string_pretty(&parsed)
        .map_err(|err| format!("Failed to serialize parameters: {err}"))?;
    println!("{raw}");
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("Failed to read '{}': {err}", args.input.display()))?;
    let tool: ToolSchema = serde_json::from_str(&raw)
        .map_err(|err| format!("Failed to parse '{}': {err}", args.input.display()))?;

    let errors = validate_tool(&tool);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  {error}");
        }
        return Err(format!(
            "'{}' has {} validation error(s)",
            args.input.display(),
            errors.len()
        ));
    }

    println!(
        "Validated model '{}' with {} task(s).",
        tool.name,
        tool.tasks.len()
    );
    Ok(())
}

fn summarize(tool: &ToolSchema) -> String {
    format!(
        "Generated {} task(s), {} data class(es), {} enumeration(s), {} common propert(ies) for {}.",
        tool.tasks.len(),
        tool.data_classes.len(),
        tool.enumerations.len(),
        tool.common_task_properties.len(),
        tool.name
    )
}

fn default_license(tool_name: &str) -> Vec<String> {
    let year = chrono::Utc::now().year();
    vec![
        format!("Copyright {year} the {tool_name} wrapper authors."),
        "Distributed under the MIT License.".to_string(),
    ]
}

fn parse_csv_list(raw: Option<String>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_list_trims_and_drops_empty() {
        assert_eq!(
            parse_csv_list(Some(" docker_cp, ,docker_container_cp ,".to_string())),
            ["docker_cp", "docker_container_cp"]
        );
    }

    #[test]
    fn test_parse_csv_list_none_is_empty() {
        assert!(parse_csv_list(None).is_empty());
        assert!(parse_csv_list(Some(String::new())).is_empty());
    }
}
