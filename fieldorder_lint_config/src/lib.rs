// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

pub mod field_order_lint;
pub mod lint_builder;

pub use field_order_lint::{
    FieldOrderLint, FieldOrderLintExt, FieldOrderRule, StructMatch, StructMatchNode, StructMatcher,
    matcher as struct_matcher,
};
pub use fieldorder_common::fields::OptionalMarker;
pub use lint_builder::LintBuilder;

use fieldorder_common::project_context::ProjectContext;
use serde::{Deserialize, Serialize};

/// How loudly a rule complains: `warn` or `deny` in rustc terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Warn,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConfiguredLint {
    FieldOrder(FieldOrderLint),
}

impl ConfiguredLint {
    pub fn name(&self) -> &str {
        match self {
            ConfiguredLint::FieldOrder(lint) => &lint.name,
        }
    }
}

/// Lint types that can propose a starting configuration from what the driver
/// discovered about the project.
pub trait GenerateFromContext {
    fn generate_from_contexts(contexts: &[ProjectContext], builder: &mut LintBuilder);
}
