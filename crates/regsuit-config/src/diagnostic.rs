// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Converts Figment deserialization errors into rich miette diagnostics
//! with source spans, valid key listings, and "did you mean?" suggestions
//! using Jaro-Winkler string similarity.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with rich diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(regsuit::config::unknown_key),
        help("{}", format_unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
        valid_keys: String,
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(regsuit::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        detail: String,
        expected: String,
    },

    /// A required configuration key is missing.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(regsuit::config::missing_key),
        help("add `\"{key}\": <value>` to your regconfig.json")
    )]
    MissingKey { key: String },

    /// A validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(regsuit::config::validation))]
    Validation { message: String },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(regsuit::config::other))]
    Other(String),
}

fn format_unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid_keys}"),
        None => format!("valid keys: {valid_keys}"),
    }
}

/// Convert a `figment::Error` into a list of `ConfigError` diagnostics.
///
/// `sources` holds `(path, content)` pairs used to locate unknown keys.
pub fn figment_to_config_errors(
    err: figment::Error,
    sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    let mut errors = Vec::new();

    for error in err {
        let config_error = match &error.kind {
            Kind::UnknownField(field, expected) => {
                let valid_keys: Vec<&str> = expected.to_vec();
                let suggestion = suggest_key(field, &valid_keys);
                let (span, src) = find_source_span(&error, field, sources);

                ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion,
                    valid_keys: valid_keys.join(", "),
                    span,
                    src,
                }
            }
            Kind::MissingField(field) => ConfigError::MissingKey {
                key: field.clone().into_owned(),
            },
            Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                key: error.path.join("."),
                detail: format!("found {actual}, expected {expected}"),
                expected: expected.to_string(),
            },
            _ => ConfigError::Other(format!("{error}")),
        };

        errors.push(config_error);
    }

    errors
}

fn find_source_span(
    error: &figment::error::Error,
    field: &str,
    sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let source_path = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|s| match s {
            figment::Source::File(path) => Some(path.display().to_string()),
            _ => None,
        });

    // Inline strings have no file source; fall back to the only source given.
    let source = match source_path {
        Some(path) => sources.iter().find(|(p, _)| *p == path),
        None if sources.len() == 1 => sources.first(),
        None => None,
    };

    if let Some((path, content)) = source {
        let offset = if path.ends_with(".toml") {
            find_toml_key_offset(content, &error.path, field)
        } else {
            find_json_key_offset(content, &error.path, field)
                .or_else(|| find_json_key_offset(content, &[], field))
        };
        if let Some(offset) = offset {
            let span = SourceSpan::new(offset.into(), field.len());
            return (Some(span), Some(NamedSource::new(path, content.clone())));
        }
    }

    (None, None)
}

/// Find the byte offset of a key name in JSON content.
///
/// For `path = ["core"]` and `field = "workDir"`, finds `"core"` first and
/// then the quoted field followed by a colon. The returned offset points at
/// the first character of the key, not at the quote.
pub fn find_json_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let mut start = 0;
    for section in path {
        start += find_quoted_key(&content[start..], section)? + section.len();
    }
    let rel = find_quoted_key(&content[start..], field)?;
    Some(start + rel)
}

fn find_quoted_key(haystack: &str, key: &str) -> Option<usize> {
    let needle = format!("\"{key}\"");
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let abs = from + pos;
        let after = haystack[abs + needle.len()..].trim_start();
        if after.starts_with(':') {
            return Some(abs + 1);
        }
        from = abs + needle.len();
    }
    None
}

/// Find the byte offset of a key in TOML content, relative to a section path.
///
/// For `path = ["core"]` and `field = "workDir"`, finds the `[core]` header
/// then searches for `workDir` after it.
pub fn find_toml_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let search_start = if path.is_empty() {
        0
    } else {
        let header = format!("[{}]", path.join("."));
        content.find(&header).map(|pos| pos + header.len())?
    };

    let remaining = &content[search_start..];
    let mut byte_offset = 0;
    for line in remaining.lines() {
        let trimmed = line.trim_start();
        if let Some(after) = trimmed.strip_prefix(field) {
            if after.starts_with(' ') || after.starts_with('=') || after.starts_with('\t') {
                let field_start_in_line = line.len() - trimmed.len();
                return Some(search_start + byte_offset + field_start_in_line);
            }
        }
        byte_offset += line.len() + 1;
    }

    None
}

/// Suggest a similar key name using Jaro-Winkler string similarity.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    let mut best_score = SUGGESTION_THRESHOLD;
    let mut best_match = None;

    for &key in valid_keys {
        let score = strsim::jaro_winkler(unknown, key);
        if score > best_score {
            best_score = score;
            best_match = Some(key.to_string());
        }
    }

    best_match
}

/// Render a list of `ConfigError`s to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_work_dir_for_working_dir() {
        let valid = &["workingDir", "actualDir", "thresholdRate"];
        assert_eq!(suggest_key("workinDir", valid), Some("workingDir".to_string()));
    }

    #[test]
    fn no_suggestion_for_distant_typo() {
        let valid = &["workingDir", "actualDir", "thresholdRate"];
        assert_eq!(suggest_key("zzzzzz", valid), None);
    }

    #[test]
    fn find_json_key_offset_in_section() {
        let content = "{\n  \"core\": {\n    \"workinDir\": \".reg\"\n  }\n}\n";
        let path = vec!["core".to_string()];
        let o = find_json_key_offset(content, &path, "workinDir").unwrap();
        assert_eq!(&content[o..o + 9], "workinDir");
    }

    #[test]
    fn find_json_key_offset_skips_values() {
        // "actualDir" appears first as a value, then as a key.
        let content = r#"{"core": {"workingDir": "actualDir", "actualDir": "shots"}}"#;
        let path = vec!["core".to_string()];
        let o = find_json_key_offset(content, &path, "actualDir").unwrap();
        assert_eq!(&content[o - 1..o + 11], "\"actualDir\":");
    }

    #[test]
    fn find_toml_key_offset_in_section() {
        let content = "[core]\nworkinDir = \".reg\"\n";
        let path = vec!["core".to_string()];
        let o = find_toml_key_offset(content, &path, "workinDir").unwrap();
        assert_eq!(&content[o..o + 9], "workinDir");
    }
}
