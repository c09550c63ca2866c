// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use fieldorder_common::fields::OptionalMarker;
use rustc_lint::LintStore;

///
/// One of our lints. These are an abstraction over the top of the
/// core rustc 'LateLintPass' - which does the actual linting in the
/// compilation process.
///
/// They add:
/// * A name, which is used in the diagnostics to refer back to the configuration
///   item.
/// * The ability to check if a particular type is targeted by the lint, so that
///   `cargo fieldorder print-structs` can show which rules cover what.
pub trait FieldOrderLintRule: Sync + Send {
    ///
    /// Returns the name of the lint rule. This is the name given
    /// in fieldorder.ron
    ///
    fn name(&self) -> String;

    ///
    /// Returns true if literals of the type at `type_path`, defined in
    /// `crate_name`, are checked by this lint.
    ///
    fn applies_to_struct(&self, crate_name: &str, type_path: &str) -> bool;

    /// The attribute that marks a field optional for this lint.
    fn optional_marker(&self) -> OptionalMarker {
        OptionalMarker::default()
    }

    fn register_late_pass(&self, _lint_store: &mut LintStore) {}
}
