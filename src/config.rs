use std::path::PathBuf;

use serde_json::{Map, Value, json};

use crate::error::ConfigError;

/// Name of the lint rule toggled by `--nounusedvar`.
pub const UNUSED_VARIABLE_RULE: &str = "no-unused-variable";

/// Ignore pattern injected with the rule when the user does not provide one.
/// Matches the identifiers commonly imported for side effects.
pub const DEFAULT_IGNORE_PATTERN: &str = "([Rr]eact|Store)";

const BASE_TSLINT: &str = include_str!("../config/tslint.json");
const BASE_TSFMT: &str = include_str!("../config/tsfmt.json");
const BASE_TSCONFIG: &str = include_str!("../config/tsconfig.lint.json");

/// Lint rules document, keyed by rule name.
pub type LintConfig = Map<String, Value>;

/// The project document handed to the compiler: an `exclude` list of globs
/// plus whatever other fields the base document carries, passed through
/// untouched.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

pub fn base_lint_config() -> Result<LintConfig, ConfigError> {
    parse_base(BASE_TSLINT, "config/tslint.json")
}

/// The format document is an opaque settings mapping, serialized unchanged.
pub fn base_format_config() -> Result<Map<String, Value>, ConfigError> {
    parse_base(BASE_TSFMT, "config/tsfmt.json")
}

pub fn base_project_config() -> Result<ProjectConfig, ConfigError> {
    parse_base(BASE_TSCONFIG, "config/tsconfig.lint.json")
}

fn parse_base<T: serde::de::DeserializeOwned>(
    contents: &str,
    name: &str,
) -> Result<T, ConfigError> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::from(name), e))
}

/// Derive the lint document for this run from the base document and the
/// user's options. Pure so the rule munging can be tested without touching
/// the filesystem.
pub fn compose_lint_config(
    base: LintConfig,
    nounusedvar: bool,
    ignore_pattern: Option<&str>,
) -> LintConfig {
    apply_ignore_pattern(apply_unused_variable(base, nounusedvar), ignore_pattern)
}

/// When the flag is set, the rule is (re)written as enabled with the default
/// ignore pattern. When it is unset, the rule is dropped even if the base
/// document enabled it with custom settings.
pub fn apply_unused_variable(mut lint: LintConfig, nounusedvar: bool) -> LintConfig {
    if nounusedvar {
        lint.insert(
            UNUSED_VARIABLE_RULE.to_string(),
            json!([true, { "ignore-pattern": DEFAULT_IGNORE_PATTERN }]),
        );
    } else if lint.remove(UNUSED_VARIABLE_RULE).is_some() {
        tracing::warn!(
            "`{UNUSED_VARIABLE_RULE}` from the base lint configuration is dropped; \
             pass --nounusedvar to enable it"
        );
    }
    lint
}

/// Overrides the rule's ignore pattern with the user-supplied one. Only
/// meaningful when the rule survived [`apply_unused_variable`]; a pattern
/// given without the rule present is a no-op.
pub fn apply_ignore_pattern(mut lint: LintConfig, pattern: Option<&str>) -> LintConfig {
    if let Some(pattern) = pattern
        && let Some(setting) = lint.get_mut(UNUSED_VARIABLE_RULE)
        && let Some(options) = setting.get_mut(1)
        && let Some(options) = options.as_object_mut()
    {
        options.insert("ignore-pattern".to_string(), Value::String(pattern.to_string()));
    }
    lint
}

/// Appends the user's exclude globs to the base project's exclude list, in
/// order. Duplicates are kept; the compiler tolerates them and de-duplication
/// would reorder nothing anyway.
pub fn merge_excludes(mut project: ProjectConfig, user_excludes: &[String]) -> ProjectConfig {
    project.exclude.extend(user_excludes.iter().cloned());
    project
}
