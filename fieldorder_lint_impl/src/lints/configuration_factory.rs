// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::FieldOrderLintRule;
use crate::lints::field_order_lint::FieldOrderLintPass;
use anyhow::Context;
use fieldorder_lint_config::{ConfiguredLint, LintBuilder};
use std::path::Path;

/// Turns lint configuration into runnable lint rules.
pub struct LintConfigurationFactory;

impl LintConfigurationFactory {
    ///
    /// Loads the lint configuration at `path`. With no path, the built-in
    /// default applies: one warning-level lint covering every type.
    ///
    pub fn load_builder(path: Option<&Path>) -> anyhow::Result<LintBuilder> {
        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading lint configuration");
                LintBuilder::read_from_file(path)
                    .with_context(|| format!("Failed to load lint configuration from {}", path.display()))
            }
            None => {
                tracing::debug!("no fieldorder.ron found, using the default configuration");
                Ok(LintBuilder::with_defaults())
            }
        }
    }

    /// Builds one rule per configured lint.
    pub fn from_builder(builder: &LintBuilder) -> Vec<Box<dyn FieldOrderLintRule + Send>> {
        builder
            .lints
            .iter()
            .map(|lint| match lint {
                ConfiguredLint::FieldOrder(_) => FieldOrderLintPass::new(lint),
            })
            .collect()
    }
}
