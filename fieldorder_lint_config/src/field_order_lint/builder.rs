// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use super::matcher::{StructMatchNode, StructMatcher, matcher};
use super::types::{FieldOrderLint, FieldOrderRule, StructMatch};
use crate::lint_builder::LintBuilder;
use crate::{ConfiguredLint, Severity};
use fieldorder_common::fields::OptionalMarker;

/// Extension trait that adds field order linting to LintBuilder
pub trait FieldOrderLintExt {
    /// Start building a field order lint rule
    fn field_order_lint(&mut self) -> FieldOrderLintBuilder<'_>;
}

impl FieldOrderLintExt for LintBuilder {
    fn field_order_lint(&mut self) -> FieldOrderLintBuilder<'_> {
        FieldOrderLintBuilder { parent: self }
    }
}

/// Initial builder for creating a field order lint
pub struct FieldOrderLintBuilder<'a> {
    parent: &'a mut LintBuilder,
}

impl<'a> FieldOrderLintBuilder<'a> {
    /// Give the lint a name
    pub fn lint_named(self, name: impl Into<String>) -> FieldOrderNamedBuilder<'a> {
        FieldOrderNamedBuilder {
            parent: self.parent,
            name: name.into(),
        }
    }
}

/// Builder used after naming the lint
pub struct FieldOrderNamedBuilder<'a> {
    parent: &'a mut LintBuilder,
    name: String,
}

impl<'a> FieldOrderNamedBuilder<'a> {
    /// Directly provide a struct matcher
    pub fn matches(self, m: StructMatch) -> FieldOrderConstraintBuilder<'a> {
        FieldOrderConstraintBuilder {
            parent: self.parent,
            name: self.name,
            match_: m,
            rules: Vec::new(),
            current_severity: Severity::default(),
            only_exported: false,
            skip_optional: false,
            optional_marker: OptionalMarker::default(),
        }
    }

    /// Define type matching using the fluent DSL
    ///
    /// # Example
    /// ```
    /// use fieldorder_lint_config::{FieldOrderLintExt, LintBuilder, Severity};
    /// let mut lint_builder = LintBuilder::new();
    /// lint_builder.field_order_lint()
    ///     .lint_named("model_field_order")
    ///     .matching(|m| m.name("^shop::model::").and(m.name("Draft$").not()))
    ///     .with_severity(Severity::Error)
    ///     .must_follow_declaration_order()
    ///     .build();
    /// ```
    pub fn matching<F>(self, f: F) -> FieldOrderConstraintBuilder<'a>
    where
        F: FnOnce(&StructMatcher) -> StructMatchNode,
    {
        self.matches(matcher(f))
    }
}

/// Builder for adding rules to a field order lint
pub struct FieldOrderConstraintBuilder<'a> {
    parent: &'a mut LintBuilder,
    name: String,
    match_: StructMatch,
    rules: Vec<FieldOrderRule>,
    current_severity: Severity,
    only_exported: bool,
    skip_optional: bool,
    optional_marker: OptionalMarker,
}

impl<'a> FieldOrderConstraintBuilder<'a> {
    /// Add a custom rule to the lint
    pub fn add_rule(mut self, rule: FieldOrderRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set the severity level for all subsequently added rules
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.current_severity = severity;
        self
    }

    /// Only `pub` fields count for subsequently added rules
    pub fn only_exported(mut self) -> Self {
        self.only_exported = true;
        self
    }

    /// Optional fields may appear anywhere for subsequently added rules
    pub fn skip_optional_fields(mut self) -> Self {
        self.skip_optional = true;
        self
    }

    /// Use `#[key::value]` rather than `#[structfieldorder::optional]` to mark optional fields
    pub fn optional_marker(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.optional_marker = OptionalMarker::new(key, value);
        self
    }

    /// Require struct literals to name fields in declaration order
    pub fn must_follow_declaration_order(self) -> Self {
        let rule = FieldOrderRule::MustFollowDeclarationOrder {
            only_exported: self.only_exported,
            skip_optional: self.skip_optional,
            severity: self.current_severity,
        };
        self.add_rule(rule)
    }

    /// Finalize the lint and return to the parent builder
    pub fn build(self) -> &'a mut LintBuilder {
        let lint = ConfiguredLint::FieldOrder(FieldOrderLint {
            name: self.name,
            matches: self.match_,
            rules: self.rules,
            optional_marker: self.optional_marker,
        });
        self.parent.push(lint);
        self.parent
    }
}
