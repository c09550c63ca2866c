// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

#![feature(rustc_private)]
#![feature(let_chains)]

pub mod helpers;

extern crate rustc_ast;
extern crate rustc_driver;
extern crate rustc_errors;
extern crate rustc_hir;
extern crate rustc_interface;
extern crate rustc_lint;
extern crate rustc_middle;
extern crate rustc_session;
extern crate rustc_span;

mod field_order_lint_rule;
pub mod lints;

// Re-export our public API
pub use field_order_lint_rule::FieldOrderLintRule;
pub use helpers::lint_collection::FieldOrderLintCollection;
pub use helpers::lint_runner::FieldOrderLintRunner;
pub use helpers::lint_runner::Mode;
pub use lints::configuration_factory::LintConfigurationFactory;
