// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//!
//! fieldorder-driver
//!
//! A rustc proxy. cargo-fieldorder runs it once per crate with the compiler
//! command line cargo produced; it loads the lint configuration, hooks the
//! field order lints into the compilation, and otherwise behaves exactly
//! like rustc.
//!

#![feature(rustc_private)]
#![feature(let_chains)]
#![warn(rust_2018_idioms, unused_lifetimes)]

extern crate rustc_driver;
extern crate rustc_session;

use anyhow::{Context, Result};
use fieldorder_common::cli::{CARGO_ARGS_ENV, CLI_ARGS_ENV, FieldOrderCli, split_cargo_args};
use fieldorder_common::logging::init_logging;
use fieldorder_common::workspace::{CONFIG_FILE_NAME, resolve_config_path};
use fieldorder_lint_config::LintBuilder;
use fieldorder_lint_impl::{
    FieldOrderLintCollection, FieldOrderLintRunner, LintConfigurationFactory, Mode,
};
use rustc_session::{EarlyDiagCtxt, config::ErrorOutputType};
use std::collections::BTreeSet;
use std::env;
use std::path::{Path, PathBuf};
use std::process::{self, Command};

pub fn main() {
    let early_dcx = EarlyDiagCtxt::new(ErrorOutputType::default());
    rustc_driver::init_rustc_env_logger(&early_dcx);
    init_logging();

    process::exit(rustc_driver::catch_with_exit_code(|| {
        if let Err(e) = run() {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }));
}

fn run() -> Result<()> {
    let mut orig_args: Vec<String> = env::args().collect();

    // Handle wrapper mode
    let wrapper_mode =
        orig_args.get(1).map(Path::new).and_then(Path::file_stem) == Some("rustc".as_ref());
    if wrapper_mode {
        orig_args.remove(1);
    }

    // ui_test runs us directly, with no cargo-fieldorder in front
    let is_ui_testing = orig_args.iter().any(|arg| arg == "-Zui-testing");

    if !orig_args.iter().any(|arg| arg == "--sysroot") {
        orig_args.extend(["--sysroot".to_string(), find_sysroot()?]);
    }

    let cli_args = if is_ui_testing {
        String::new()
    } else {
        env::var(CLI_ARGS_ENV).unwrap_or_default()
    };
    let cli = if cli_args.is_empty() {
        FieldOrderCli::default()
    } else {
        FieldOrderCli::from_env_str(&cli_args)
            .with_context(|| format!("Invalid {CLI_ARGS_ENV} value"))?
    };
    let mode = Mode::from(&cli.command);

    let cargo_args = env::var(CARGO_ARGS_ENV)
        .map(|args| split_cargo_args(&args))
        .unwrap_or_default();

    tracing::debug!(?mode, args = %orig_args.join(" "), "fieldorder-driver invoked");

    let config_path = if is_ui_testing {
        // Each UI test directory carries its own configuration
        let source_file = find_source_file(&orig_args)?;
        let test_dir = source_file.parent().unwrap_or(Path::new("."));
        Some(test_dir.join(CONFIG_FILE_NAME)).filter(|path| path.exists())
    } else {
        resolve_config_path(cli.config_path.as_deref(), &env::current_dir()?)
    };

    let builder = match LintConfigurationFactory::load_builder(config_path.as_deref()) {
        Ok(builder) => builder,
        // Generating a configuration must work despite a broken one
        Err(e) if mode == Mode::GenerateConfig => {
            tracing::warn!("ignoring lint configuration: {e:#}");
            LintBuilder::with_defaults()
        }
        Err(e) => return Err(e),
    };
    orig_args.extend(tool_args(&builder.optional_marker_keys()));

    let lint_collection = if mode == Mode::GenerateConfig {
        FieldOrderLintCollection::new(Vec::new())
    } else {
        FieldOrderLintCollection::new(LintConfigurationFactory::from_builder(&builder))
    };

    let mut runner = FieldOrderLintRunner::new(mode, cli_args, lint_collection);
    runner.set_cargo_args(cargo_args);
    runner.set_config_path(config_path);

    rustc_driver::run_compiler(&orig_args, &mut runner);

    let results_text = runner.lint_results_text();
    if !results_text.is_empty() {
        tracing::info!("{results_text}");
    }

    Ok(())
}

///
/// Compiler arguments that make `#[key::value]` field attributes legal for
/// every optional marker key in use, and set `--cfg key` so code can write
/// `#[cfg_attr(key, key::value)]` and still build without us.
///
fn tool_args(keys: &BTreeSet<&str>) -> Vec<String> {
    if keys.is_empty() {
        return Vec::new();
    }

    let mut args = vec!["-Zcrate-attr=feature(register_tool)".to_string()];
    for key in keys {
        args.push(format!("-Zcrate-attr=register_tool({key})"));
        args.push(format!("--cfg={key}"));
        args.push(format!("--check-cfg=cfg({key})"));
    }
    args
}

/// Find the source file from the command line arguments
fn find_source_file(args: &[String]) -> Result<PathBuf> {
    args.iter()
        .find(|arg| arg.ends_with(".rs") && !arg.starts_with('-'))
        .map(PathBuf::from)
        .context("No source file found in arguments")
}

fn find_sysroot() -> Result<String> {
    if let Ok(sysroot) = env::var("SYSROOT") {
        return Ok(sysroot);
    }

    if let Ok(rustup_home) = env::var("RUSTUP_HOME")
        && let Ok(toolchain) = env::var("RUSTUP_TOOLCHAIN")
    {
        return Ok(format!("{rustup_home}/toolchains/{toolchain}"));
    }

    let output = Command::new("rustc")
        .arg("--print")
        .arg("sysroot")
        .output()
        .context("Could not determine sysroot: failed to run rustc")?;
    if !output.status.success() {
        anyhow::bail!("Could not determine sysroot: rustc --print sysroot failed");
    }

    let sysroot = String::from_utf8(output.stdout).context("Invalid UTF-8 in sysroot output")?;
    Ok(sysroot.trim().to_string())
}
