//! Naming helpers shared by the usage parser and the model builder.

/// Removes every `separator` and upper-cases the character that follows it.
///
/// Leading separators are kept; consecutive separators collapse.
///
/// # Examples
///
/// ```
/// use wrapgen_generator::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("log-level", '-'), "logLevel");
/// assert_eq!(to_camel_case("container ls", ' '), "containerLs");
/// ```
pub fn to_camel_case(value: &str, separator: char) -> String {
    let mut out = String::with_capacity(value.len());
    let mut upper_next = false;

    for ch in value.chars() {
        if ch == separator && !out.is_empty() {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Like [`to_camel_case`], additionally upper-casing the first character.
///
/// # Examples
///
/// ```
/// use wrapgen_generator::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("log-level", '-'), "LogLevel");
/// assert_eq!(to_pascal_case("key=value", '='), "KeyValue");
/// assert_eq!(to_pascal_case("", '-'), "");
/// ```
pub fn to_pascal_case(value: &str, separator: char) -> String {
    let camel = to_camel_case(value, separator);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => camel,
    }
}

/// Strips carriage returns and line feeds.
pub fn remove_new_lines(value: &str) -> String {
    value.chars().filter(|ch| !matches!(ch, '\r' | '\n')).collect()
}

/// Endings of singular words that end in `s` and take `es`.
const SINGULAR_S_WORDS: &[&str] = &["alias", "status", "bus", "ss"];

/// Pluralizes a PascalCase identifier using English suffix rules.
///
/// Names already ending in `s` are treated as plural and kept, apart from
/// known singular words.
///
/// # Examples
///
/// ```
/// use wrapgen_generator::naming::to_plural;
///
/// assert_eq!(to_plural("Node"), "Nodes");
/// assert_eq!(to_plural("KeyValue"), "KeyValues");
/// assert_eq!(to_plural("ServiceReplicas"), "ServiceReplicas");
/// assert_eq!(to_plural("Alias"), "Aliases");
/// assert_eq!(to_plural("Registry"), "Registries");
/// ```
pub fn to_plural(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let lower = value.to_ascii_lowercase();
    if SINGULAR_S_WORDS.iter().any(|word| lower.ends_with(word)) {
        return format!("{value}es");
    }
    if lower.ends_with('s') {
        return value.to_string();
    }
    if ["x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return format!("{value}es");
    }

    let mut tail = lower.chars().rev();
    if let (Some('y'), Some(before)) = (tail.next(), tail.next())
        && !matches!(before, 'a' | 'e' | 'i' | 'o' | 'u')
    {
        return format!("{}ies", &value[..value.len() - 1]);
    }

    format!("{value}s")
}

/// Canonical PascalCase form of a placeholder segment (`SOURCE_IMAGE` →
/// `SourceImage`).
pub fn placeholder_name(segment: &str) -> String {
    let lower = segment.to_lowercase();
    to_pascal_case(&to_pascal_case(&lower, '-'), '_')
}

/// Derives a task postfix from a command path by dropping the program token.
///
/// Returns an empty string for the root command.
///
/// # Examples
///
/// ```
/// use wrapgen_generator::naming::task_postfix;
///
/// assert_eq!(task_postfix("docker", "docker container ls"), "ContainerLs");
/// assert_eq!(task_postfix("docker", "docker trust key-generate"), "TrustKeyGenerate");
/// assert_eq!(task_postfix("docker", "docker"), "");
/// ```
pub fn task_postfix(program: &str, command: &str) -> String {
    let mut tokens = command.split_whitespace().peekable();
    if tokens.peek() == Some(&program) {
        tokens.next();
    }
    let path = tokens.collect::<Vec<_>>().join(" ");
    command_path_to_pascal(&path)
}

/// Settings-class name of a task (`Docker` + `ContainerLs` →
/// `DockerContainerLsSettings`).
pub fn settings_class_name(tool_name: &str, postfix: &str) -> String {
    format!("{tool_name}{postfix}Settings")
}

fn command_path_to_pascal(path: &str) -> String {
    to_pascal_case(&to_pascal_case(path, ' '), '-')
}
