use thiserror::Error;

use crate::expressions::{FilterError, PathError, TemplateError};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("input is empty")]
    Empty,
}

#[derive(Debug, Error)]
#[error("pipeline failed validation ({violations_len} violations)")]
pub struct ValidationError {
    pub violations: Vec<Violation>,
    violations_len: usize,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        let violations_len = violations.len();
        Self {
            violations,
            violations_len,
        }
    }
}

/// A problem with one of the pipeline's DSL strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub stage: Stage,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Select,
    Filter,
    Template,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Select => "select",
            Stage::Filter => "filter",
            Stage::Template => "template",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PathError> for Violation {
    fn from(e: PathError) -> Self {
        Self {
            stage: Stage::Select,
            message: e.to_string(),
        }
    }
}

impl From<FilterError> for Violation {
    fn from(e: FilterError) -> Self {
        Self {
            stage: Stage::Filter,
            message: e.to_string(),
        }
    }
}

impl From<TemplateError> for Violation {
    fn from(e: TemplateError) -> Self {
        Self {
            stage: Stage::Template,
            message: e.to_string(),
        }
    }
}
