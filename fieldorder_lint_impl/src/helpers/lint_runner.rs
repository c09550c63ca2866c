// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::FieldOrderLintCollection;
use crate::helpers::queries;
use crate::lints::field_order_lint::declared_fields;
use fieldorder_common::cli::{CARGO_ARGS_ENV, CLI_ARGS_ENV, FieldOrderCommand};
use fieldorder_common::project_context::{ProjectContext, StructInfo};
use rustc_driver::Callbacks;
use rustc_hir::ItemKind;
use rustc_middle::ty::TyCtxt;
use rustc_span::Symbol;
use std::path::PathBuf;
use std::sync::Arc;

///
/// The mode our lint runner should operate in
///
#[derive(Clone, PartialEq, Debug)]
pub enum Mode {
    /// Run the lints
    Check,

    /// Collect struct declarations for `print-structs`
    PrintStructs,

    /// Collect struct declarations for `generate-config`
    GenerateConfig,
}

impl From<&FieldOrderCommand> for Mode {
    fn from(command: &FieldOrderCommand) -> Self {
        match command {
            FieldOrderCommand::Check => Mode::Check,
            FieldOrderCommand::PrintStructs => Mode::PrintStructs,
            FieldOrderCommand::GenerateConfig => Mode::GenerateConfig,
        }
    }
}

///
/// Runs field order lints
///
pub struct FieldOrderLintRunner {
    mode: Mode,
    lint_collection: Arc<FieldOrderLintCollection>,

    // Arguments to cargo-fieldorder, as passed through the environment.
    // Recorded in the dep-info so cargo re-runs us when they change.
    cli_args: String,

    // Cargo arguments that were passed through
    cargo_args: Vec<String>,

    // Configuration file in use, if any. Also recorded in the dep-info.
    config_path: Option<PathBuf>,

    // Output gathered inside the compiler callbacks
    result_text: String,
}

impl FieldOrderLintRunner {
    pub fn new(mode: Mode, cli_args: String, lint_collection: FieldOrderLintCollection) -> Self {
        FieldOrderLintRunner {
            mode,
            lint_collection: Arc::new(lint_collection),
            cli_args,
            cargo_args: Vec::new(),
            config_path: None,
            result_text: String::new(),
        }
    }

    /// Set cargo arguments that were passed through from the original command
    pub fn set_cargo_args(&mut self, args: Vec<String>) {
        self.cargo_args = args;
    }

    /// Set the configuration file the lints were loaded from
    pub fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    ///
    /// Borrow the runner's output in formatted text style.
    ///
    pub fn lint_results_text(&self) -> &String {
        &self.result_text
    }

    // Handles the different execution modes we have, potentially returning a failure
    fn handle_mode(&mut self, tcx: TyCtxt<'_>) -> anyhow::Result<()> {
        use anyhow::Context;
        match self.mode {
            // Checking happens in the late lint passes
            Mode::Check => Ok(()),
            Mode::PrintStructs | Mode::GenerateConfig => {
                // We don't print anything ourselves; cargo-fieldorder collects
                // the context files for every crate once the build is done.
                let context = self
                    .build_project_context(tcx)
                    .context("Failed to build project context")?;

                let path = context
                    .serialize_to_file()
                    .with_context(|| format!("Failed to write context for {}", context.module_root))?;

                self.result_text = format!(
                    "Project context for crate {} written to {}",
                    context.module_root,
                    path.display()
                );
                Ok(())
            }
        }
    }

    /// Build the ProjectContext: every struct and struct-like enum variant
    /// the crate declares, with its fields and the lints covering it.
    fn build_project_context(&self, tcx: TyCtxt<'_>) -> anyhow::Result<ProjectContext> {
        let crate_name = queries::local_crate_name(tcx);
        let mut structs = Vec::new();

        for item_id in tcx.hir_crate_items(()).free_items() {
            let item = tcx.hir_item(item_id);
            if !matches!(item.kind, ItemKind::Struct(..) | ItemKind::Enum(..)) {
                continue;
            }

            let adt = tcx.adt_def(item.owner_id);
            for variant in adt.variants().iter().filter(|v| queries::is_braced_variant(v)) {
                let name = queries::get_full_type_path(tcx, variant.def_id);
                let marker = self.lint_collection.marker_for(&crate_name, &name);
                let applicable_lints = self.lint_collection.applicable_lints(&crate_name, &name);

                tracing::trace!(%name, lints = applicable_lints.len(), "collected struct");
                structs.push(StructInfo {
                    fields: declared_fields(tcx, variant, &marker),
                    name,
                    applicable_lints,
                });
            }
        }

        let mut context = ProjectContext::new();
        context.module_root = crate_name;
        context.structs = structs;
        Ok(context)
    }
}

///
/// Adapt rustc's callbacks mechanism to our lints.
///
impl Callbacks for FieldOrderLintRunner {
    fn config(&mut self, config: &mut rustc_interface::interface::Config) {
        let cli_args = self.cli_args.clone();
        let mode = self.mode.clone();
        let cargo_args = self.cargo_args.clone();
        let config_path = self.config_path.clone();

        let lint_collection = Arc::clone(&self.lint_collection);
        config.register_lints = Some(Box::new(move |_sess, lint_store| {
            // Only register the passes if we're actually linting
            if let Mode::Check = mode {
                for lint in lint_collection.lints() {
                    lint.register_late_pass(lint_store);
                }
            }
        }));

        config.psess_created = Some(Box::new(move |psess| {
            psess.env_depinfo.get_mut().insert((
                Symbol::intern(CLI_ARGS_ENV),
                Some(Symbol::intern(&cli_args)),
            ));

            if !cargo_args.is_empty() {
                let cargo_args_str = cargo_args.join(" ");
                psess.env_depinfo.get_mut().insert((
                    Symbol::intern(CARGO_ARGS_ENV),
                    Some(Symbol::intern(&cargo_args_str)),
                ));
            }

            if let Some(path) = &config_path
                && path.exists()
            {
                psess
                    .file_depinfo
                    .get_mut()
                    .insert(Symbol::intern(&path.to_string_lossy()));
            }
        }));
    }

    fn after_expansion(
        &mut self,
        _compiler: &rustc_interface::interface::Compiler,
        tcx: TyCtxt<'_>,
    ) -> rustc_driver::Compilation {
        if let Err(e) = self.handle_mode(tcx) {
            // For fatal errors, print the error and exit
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        };
        rustc_driver::Compilation::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_command() {
        assert_eq!(Mode::from(&FieldOrderCommand::Check), Mode::Check);
        assert_eq!(Mode::from(&FieldOrderCommand::PrintStructs), Mode::PrintStructs);
        assert_eq!(
            Mode::from(&FieldOrderCommand::GenerateConfig),
            Mode::GenerateConfig
        );
    }

    #[test]
    fn test_new_runner_has_no_output() {
        let runner = FieldOrderLintRunner::new(
            Mode::PrintStructs,
            String::new(),
            FieldOrderLintCollection::new(Vec::new()),
        );
        assert!(runner.lint_results_text().is_empty());
        assert!(runner.config_path.is_none());
        assert!(runner.cargo_args.is_empty());
    }
}
