// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::field_order_lint::{FieldOrderLint, FieldOrderLintExt};
use crate::{ConfiguredLint, GenerateFromContext, Severity};
use fieldorder_common::project_context::ProjectContext;
use ron::de::from_reader;
use ron::ser::{PrettyConfig, to_writer_pretty};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io;

/// Name of the lint applied when no configuration file is present.
pub const DEFAULT_LINT_NAME: &str = "default_field_order";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintBuilder {
    pub lints: Vec<ConfiguredLint>,
}

impl LintBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration used when the project has no `fieldorder.ron`:
    /// every type, every field, warnings only.
    pub fn with_defaults() -> Self {
        let mut builder = Self::new();
        builder
            .field_order_lint()
            .lint_named(DEFAULT_LINT_NAME)
            .matching(|m| m.any())
            .with_severity(Severity::Warn)
            .must_follow_declaration_order()
            .build();
        builder
    }

    /// Proposes a configuration from the contexts the driver wrote out.
    pub fn generate_from_contexts(contexts: &[ProjectContext]) -> Self {
        let mut builder = Self::new();
        FieldOrderLint::generate_from_contexts(contexts, &mut builder);
        builder
    }

    /// Distinct tool names the configured optional markers use. The driver
    /// registers each one so `#[key::value]` field attributes compile.
    pub fn optional_marker_keys(&self) -> BTreeSet<&str> {
        self.lints
            .iter()
            .map(|lint| match lint {
                ConfiguredLint::FieldOrder(l) => l.optional_marker.key.as_str(),
            })
            .collect()
    }

    pub fn push(&mut self, lint: ConfiguredLint) {
        self.lints.push(lint);
    }

    // Method to write the LintBuilder to a file
    pub fn write_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        to_writer_pretty(file, &self.lints, PrettyConfig::default()).map_err(io::Error::other)?;
        Ok(())
    }

    // Method to read the LintBuilder from a file
    pub fn read_from_file<P: AsRef<std::path::Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let lints: Vec<ConfiguredLint> = from_reader(file).map_err(io::Error::other)?;
        Ok(LintBuilder { lints })
    }

    /// Parse lints from RON text
    pub fn read_from_str(content: &str) -> io::Result<Self> {
        let lints: Vec<ConfiguredLint> = ron::from_str(content).map_err(io::Error::other)?;
        Ok(LintBuilder { lints })
    }
}
