use serde_json::Value as JsonValue;

use crate::error::{ValidationError, Violation};
use crate::expressions::{
    evaluate_filter, parse_filter, parse_path, parse_template, render_text, select_path,
    substitute_template,
};

/// select -> filter -> template, in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    /// Path selecting the candidate items. Empty selects the root (or its elements).
    pub select: String,
    /// Filter each candidate must pass. Empty keeps everything.
    pub filter: String,
    /// Template rendered per surviving item. Without one, items render as text.
    pub template: Option<String>,
    /// Keep at most this many surviving items.
    pub limit: Option<usize>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, path: impl Into<String>) -> Self {
        self.select = path.into();
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Selected items that pass the filter, in source order.
    pub fn items<'a>(&self, root: &'a JsonValue) -> Vec<&'a JsonValue> {
        let selected = select_path(root, &self.select);
        let candidates = selected.len();
        let kept: Vec<&JsonValue> = selected
            .into_iter()
            .filter(|item| evaluate_filter(item, &self.filter))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect();
        tracing::debug!(
            select = %self.select,
            filter = %self.filter,
            candidates,
            kept = kept.len(),
            "pipeline selection"
        );
        kept
    }

    /// One line per surviving item. `{{index}}` counts surviving items from 0.
    pub fn render(&self, root: &JsonValue) -> Vec<String> {
        let items = self.items(root);
        match &self.template {
            Some(template) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| substitute_template(template, item, i))
                .collect(),
            None => items.into_iter().map(render_text).collect(),
        }
    }

    /// Check every stage without running anything, reporting all problems.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        if let Err(e) = parse_path(&self.select) {
            violations.push(Violation::from(e));
        }
        if let Err(e) = parse_filter(&self.filter) {
            violations.push(Violation::from(e));
        }
        if let Some(template) = &self.template {
            if let Err(e) = parse_template(template) {
                violations.push(Violation::from(e));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }
}
