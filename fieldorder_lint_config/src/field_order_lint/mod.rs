// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//! Field order lints check that struct literals name their fields in the
//! order the type declares them.
//!
//! # Example
//! ```
//! use fieldorder_lint_config::{FieldOrderLintExt, LintBuilder, Severity};
//!
//! let mut builder = LintBuilder::new();
//!
//! // Public API types: only pub fields count, optional fields go anywhere
//! builder.field_order_lint()
//!     .lint_named("api_field_order")
//!     .matching(|m| m.name("^api::"))
//!     .with_severity(Severity::Error)
//!     .only_exported()
//!     .skip_optional_fields()
//!     .must_follow_declaration_order()
//!     .build();
//! ```

mod builder;
mod generate_config;
mod matcher;
mod types;

pub use types::{FieldOrderLint, FieldOrderRule, StructMatch};

pub use matcher::{StructMatchNode, StructMatcher, matcher};

pub use builder::{
    FieldOrderConstraintBuilder, FieldOrderLintBuilder, FieldOrderLintExt, FieldOrderNamedBuilder,
};
