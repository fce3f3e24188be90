//! Usage-template grammar parser.
//!
//! Splits a documented usage string such as
//! `docker commit [OPTIONS] CONTAINER [REPOSITORY[:TAG]]` into
//! [`UsageParameter`]s. The grammar is regular, so parsing is a single
//! forward scan with bounded lookahead:
//!
//! - `PATH | URL | -` is re-joined into one alternation token;
//! - `KEY=VALUE [KEY=VALUE...]` collapses into one map placeholder;
//! - `NODE [NODE...]` and `self|NODE [NODE...]` collapse into one list
//!   placeholder.
//!
//! Parsing never fails: a token that matches nothing is kept as a literal.

use std::sync::LazyLock;

use regex::Regex;

use crate::naming::{placeholder_name, to_pascal_case};

// SAFETY: compile-time constant, exercised by tests.
static MAP_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[?([A-Z]+)=([A-Z]+)(?:\.\.\.\])?$").expect("static regex must compile")
});

/// One token of a parsed usage template.
///
/// A token is exactly one of: literal, positional scalar, positional list
/// (`is_list`) or positional map (`is_dictionary`).
///
/// # Examples
///
/// ```
/// use wrapgen_generator::usage::parse_usage;
///
/// let params = parse_usage("docker secret rm SECRET [SECRET...]");
/// assert_eq!(params.len(), 4);
///
/// let secret = &params[3];
/// assert!(secret.is_argument());
/// assert!(secret.is_list);
/// assert_eq!(secret.name(), "Secret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageParameter {
    /// Token text as written (alternations re-joined, lookahead dropped).
    pub raw: String,
    pub is_list: bool,
    pub is_dictionary: bool,
}

impl UsageParameter {
    /// Returns `true` when the token is a placeholder rather than a literal
    /// command word.
    pub fn is_argument(&self) -> bool {
        self.is_list
            || self.is_dictionary
            || self.raw.ends_with(']')
            || self.raw.contains('|')
            || self
                .raw
                .chars()
                .all(|ch| ch.is_uppercase() || ch == '_' || ch == '-')
    }

    /// Canonical PascalCase name of the placeholder.
    ///
    /// Map tokens join both sides (`KEY=VALUE` → `KeyValue`). Other tokens
    /// use the first placeholder segment before `:`, `|` or `[`
    /// (`[REPOSITORY[:TAG]]` → `Repository`, `self|NODE` → `Node`).
    pub fn name(&self) -> String {
        let trimmed = self.raw.trim_matches(|ch: char| {
            matches!(ch, '[' | ']' | '.' | ':' | '@' | '/' | '(' | ')')
        });

        if self.is_dictionary {
            return to_pascal_case(&trimmed.to_lowercase(), '=');
        }

        let segments = trimmed
            .split([':', '|', '['])
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();
        let segment = segments
            .iter()
            .find(|segment| looks_like_placeholder(segment))
            .or(segments.first())
            .copied()
            .unwrap_or_default();

        placeholder_name(segment)
    }
}

/// Parses a usage template into parameters.
///
/// # Examples
///
/// ```
/// use wrapgen_generator::usage::parse_usage;
///
/// let params = parse_usage("docker build [OPTIONS] PATH | URL | -");
/// assert_eq!(params.len(), 4);
/// assert_eq!(params[3].raw, "PATH|URL|-");
/// assert!(!params[0].is_argument());
/// ```
pub fn parse_usage(usage: &str) -> Vec<UsageParameter> {
    let tokens = usage.split_whitespace().collect::<Vec<_>>();
    parse_usage_tokens(&tokens)
}

/// Parses pre-split usage tokens.
pub fn parse_usage_tokens(tokens: &[&str]) -> Vec<UsageParameter> {
    let mut params = Vec::new();
    let mut idx = 0usize;

    while idx < tokens.len() {
        let mut value = tokens[idx].to_string();
        while tokens.get(idx + 1) == Some(&"|") {
            value.push('|');
            if let Some(alternative) = tokens.get(idx + 2) {
                value.push_str(alternative);
            }
            idx += 2;
        }

        let next = tokens.get(idx + 1).copied();
        let mut is_list = false;
        let mut is_dictionary = false;

        if let Some(caps) = MAP_PLACEHOLDER_RE.captures(&value) {
            is_dictionary = true;
            let repeated = format!("[{}={}...]", &caps[1], &caps[2]);
            if !value.starts_with('[') && next == Some(repeated.as_str()) {
                idx += 1;
            }
        } else if value.starts_with('[') && value.ends_with("...]") {
            is_list = true;
        } else if next.is_some_and(|next| repeats_as_list(&value, next)) {
            is_list = true;
            idx += 1;
        }

        params.push(UsageParameter {
            raw: value,
            is_list,
            is_dictionary,
        });
        idx += 1;
    }

    params
}

/// `NODE [NODE...]` or `self|NODE [NODE...]`.
fn repeats_as_list(value: &str, next: &str) -> bool {
    if next == format!("[{value}...]") {
        return true;
    }
    value.contains('|')
        && value
            .rsplit('|')
            .next()
            .is_some_and(|last| next == format!("[{last}...]"))
}

fn looks_like_placeholder(segment: &str) -> bool {
    segment.chars().any(|ch| ch.is_uppercase())
        && segment
            .chars()
            .all(|ch| ch.is_uppercase() || ch == '_' || ch == '-')
}
