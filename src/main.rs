// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//!
//! cargo-fieldorder
//! This is the entry point for our cargo extension, and what is ultimately run
//! when you type `cargo fieldorder` on the command line. To run, it must be present
//! in the user's path.
//!
//!  # Running fieldorder-driver
//!
//!   fieldorder-driver links against librustc_driver, which is only available on
//!   nightly and only dynamically. The user must therefore have the exact nightly we
//!   were built against. This entry point has no dependency on librustc, so while
//!   trampolining (see below) we use rustup to install that toolchain if it's missing.
//!
//!  # Proxying rustc
//!
//! What we need from cargo is the full rustc command line for every crate in the
//! workspace: paths, editions, cfgs, dependencies. We get it by pointing
//! RUSTC_WORKSPACE_WRAPPER back at ourselves, the same trick clippy uses.
//!
//!   ## Initial execution
//!
//!   1. User types `cargo fieldorder [COMMAND]`.
//!   2. cargo-fieldorder checks it is in a cargo project.
//!   3. cargo-fieldorder makes sure the pinned nightly is installed.
//!   4. cargo-fieldorder runs `cargo check` through `rustup run <toolchain>`, with
//!      RUSTC_WORKSPACE_WRAPPER pointing at its own executable and the command
//!      serialized into FIELDORDER_CLI_ARGS.
//!
//!   ## Trampoline execution
//!
//!   5. Cargo invokes cargo-fieldorder as `cargo-fieldorder /path/to/rustc ARGS...`.
//!   6. cargo-fieldorder notices the rustc path and forks fieldorder-driver with ARGS.
//!
//!   ## Compilation
//!
//!   7. fieldorder-driver compiles the crate with the field order lints hooked in, or,
//!      for `print-structs` and `generate-config`, writes the crate's struct inventory
//!      to `.fieldorder/`.
//!   8. Back in the initial execution, cargo-fieldorder reads those inventories to print
//!      them or to generate `fieldorder.ron`.
//!

#![warn(rust_2018_idioms, unused_lifetimes)]

mod utils;

use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;
use anyhow::Context;
use fieldorder_common::cli::{CLI_ARGS_ENV, CARGO_ARGS_ENV, FieldOrderArgs, FieldOrderCli, FieldOrderCommand};
use fieldorder_common::logging::init_logging;
use fieldorder_common::project_context::{FIELDORDER_DIR, ProjectContext};
use std::env;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, exit};
use utils::config_generation;
use utils::struct_printer;

#[derive(Debug, PartialEq)]
enum ProjectType {
    RustProject,
    OtherDirectory,
}

/// Simple error type that wraps a command exit code
#[derive(Debug)]
struct CommandExitStatus(i32);

impl fmt::Display for CommandExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command failed with exit code: {}", self.0)
    }
}

impl Error for CommandExitStatus {}

/// Validates that `dir` is a cargo project
fn validate_project(dir: &Path) -> ProjectType {
    if dir.join("Cargo.toml").exists() {
        ProjectType::RustProject
    } else {
        ProjectType::OtherDirectory
    }
}

fn show_help() {
    println!("{}", help_message());
}

fn show_version() {
    println!(
        "{} {}",
        Style::new().bold().paint("cargo-fieldorder version"),
        Green.paint(env!("CARGO_PKG_VERSION"))
    );
}

pub fn main() {
    // Handle help and version flags
    if env::args().any(|a| a == "--help" || a == "-h") {
        show_help();
        return;
    }

    if env::args().any(|a| a == "--version" || a == "-V") {
        show_version();
        return;
    }

    init_logging();

    // Are we being invoked as a rustc wrapper?
    if let Some(rustc) = env::args().nth(1).filter(|a| a.ends_with("rustc")) {
        // Cargo asks the wrapper for rustc's version; answer with the real one
        if env::args().nth(2).is_some_and(|a| a == "-vV") {
            let code = match Command::new(&rustc).arg("-vV").status() {
                Ok(status) => status.code().unwrap_or(-1),
                Err(e) => {
                    eprintln!("Failed to run {rustc}: {e}");
                    -1
                }
            };
            exit(code);
        }

        if let Err(err) = run_fieldorder_driver() {
            exit(err.0);
        }
        return;
    }

    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("Error: cannot read the current directory: {e}");
            exit(1);
        }
    };

    if validate_project(&cwd) == ProjectType::OtherDirectory {
        println!("{}", Red.bold().paint("Not in a Cargo project directory!"));
        println!(
            "{}",
            Yellow.paint("cargo-fieldorder checks that struct literals follow declaration order.")
        );
        println!("It needs to be run from a directory containing a Cargo.toml file.");
        exit(-1)
    }

    let args = FieldOrderArgs::parse(env::args());
    let command = args.command.clone();

    if command == FieldOrderCommand::GenerateConfig {
        if let Err(code) = refuse_existing_generated_configs(&cwd) {
            exit(code.0);
        }
    }

    if let Err(code) = process(args) {
        exit(code.0);
    }

    let result = match command {
        FieldOrderCommand::Check => Ok(()),
        FieldOrderCommand::PrintStructs => process_print_structs(),
        FieldOrderCommand::GenerateConfig => process_generate_config(&cwd),
    };
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        exit(1);
    }
}

fn refuse_existing_generated_configs(dir: &Path) -> Result<(), CommandExitStatus> {
    let existing = config_generation::existing_generated_configs(dir).map_err(|e| {
        eprintln!("Error: {e:#}");
        CommandExitStatus(1)
    })?;

    if existing.is_empty() {
        return Ok(());
    }

    println!("Error: Generated config files already exist:");
    for path in existing {
        println!("  - {}", path.display());
    }
    println!("Remove these files if you want to regenerate the configuration.");
    Err(CommandExitStatus(1))
}

/// Runs `cargo check` over the workspace with ourselves as the rustc wrapper.
fn process(args: FieldOrderArgs) -> Result<(), CommandExitStatus> {
    let fail = |msg: String| {
        eprintln!("{msg}");
        CommandExitStatus(-1)
    };

    // The driver runs from the workspace root; pin the config path down now
    let config_path = args
        .config_path
        .as_deref()
        .map(absolute_config_path)
        .transpose()
        .map_err(|e| fail(format!("Invalid --fieldorder-config: {e:#}")))?;

    let cli = FieldOrderCli {
        command: args.command.clone(),
        config_path,
    };
    let cli_args = cli
        .to_env_str()
        .map_err(|e| fail(format!("Failed to encode command line: {e:#}")))?;

    let toolchain = get_toolchain().map_err(|e| fail(format!("{e:#}")))?;
    let rustup = find_rustup().map_err(|e| fail(format!("{e:#}")))?;

    if let Err(e) = rustup_toolchain::install(&toolchain) {
        return Err(fail(format!("Failed to install toolchain: {e}")));
    }

    let self_path = env::current_exe().map_err(|e| fail(format!("Current executable path invalid: {e}")))?;

    // Build the cargo command using rustup to ensure consistent toolchain
    let mut cmd = Command::new(&rustup);
    cmd.arg("run")
        .arg(&toolchain)
        .arg("cargo")
        .env("RUSTC_WORKSPACE_WRAPPER", self_path)
        .env(CLI_ARGS_ENV, cli_args)
        .env(CARGO_ARGS_ENV, args.cargo_args_env_str())
        .arg("check")
        .arg("--target-dir")
        .arg(FIELDORDER_DIR)
        .args(&args.cargo_args);

    tracing::debug!(?cmd, "running cargo");
    run_to_completion(cmd, "cargo")
}

fn absolute_config_path(path: &str) -> anyhow::Result<String> {
    let path = std::path::absolute(path).with_context(|| format!("cannot resolve {path}"))?;
    if !path.exists() {
        anyhow::bail!("{} does not exist", path.display());
    }
    Ok(path.to_string_lossy().into_owned())
}

fn find_rustup() -> anyhow::Result<PathBuf> {
    which::which("rustup").context("couldn't find rustup")
}

fn run_to_completion(mut cmd: Command, what: &str) -> Result<(), CommandExitStatus> {
    let exit_status = match cmd.status() {
        Ok(status) => status,
        Err(e) => {
            eprintln!("could not run {what}: {e}");
            return Err(CommandExitStatus(-1));
        }
    };

    if exit_status.success() {
        Ok(())
    } else {
        Err(CommandExitStatus(exit_status.code().unwrap_or(-1)))
    }
}

/// Forwards a rustc invocation from cargo to fieldorder-driver.
fn run_fieldorder_driver() -> Result<(), CommandExitStatus> {
    let args: Vec<String> = env::args().collect();
    let rustc_args = driver_args(&args);

    let toolchain = get_toolchain().map_err(|e| {
        eprintln!("{e:#}");
        CommandExitStatus(-1)
    })?;

    let rustup = find_rustup().map_err(|e| {
        eprintln!("{e:#}");
        CommandExitStatus(-1)
    })?;

    let driver_path = match env::current_exe() {
        Ok(exe) => driver_path_next_to(&exe),
        Err(e) => {
            eprintln!("Current executable path invalid: {e}");
            return Err(CommandExitStatus(-1));
        }
    };

    let mut cmd = Command::new(rustup);
    cmd.arg("run").arg(&toolchain).arg(driver_path).args(rustc_args);

    run_to_completion(cmd, "fieldorder-driver")
}

/// The arguments for fieldorder-driver: everything after the rustc path.
fn driver_args(args: &[String]) -> &[String] {
    if args.len() > 1 && args[1].ends_with("rustc") {
        &args[2..]
    } else {
        args.get(1..).unwrap_or_default()
    }
}

fn driver_path_next_to(exe: &Path) -> PathBuf {
    let mut driver_path = exe.with_file_name("fieldorder-driver");
    if cfg!(windows) {
        driver_path.set_extension("exe");
    }
    driver_path
}

/// Loads the struct inventories the driver wrote and prints them
fn process_print_structs() -> anyhow::Result<()> {
    let contexts =
        ProjectContext::load_all_contexts().context("Failed to load project context data")?;
    struct_printer::print_structs(&contexts);
    Ok(())
}

/// Loads the struct inventories the driver wrote and proposes a configuration
fn process_generate_config(dir: &Path) -> anyhow::Result<()> {
    let contexts =
        ProjectContext::load_all_contexts().context("Failed to load project context data")?;
    let written = config_generation::write_generated_config(dir, &contexts)?;
    println!("Created {}", Green.paint(written.display().to_string()));
    Ok(())
}

fn get_toolchain() -> anyhow::Result<String> {
    // We want to run with the same toolchain we were built with. This deals
    // with the dynamic-linking-against-librustc_driver piece, but _will_ add that toolchain
    // to the user's local rustup installs.
    toolchain_from_config(include_str!("../rust-toolchain.toml"))
}

fn toolchain_from_config(toolchain_config: &str) -> anyhow::Result<String> {
    let toml = toml::from_str::<toml::Value>(toolchain_config)
        .context("rust-toolchain.toml is not valid TOML")?;

    toml.get("toolchain")
        .and_then(|t| t.get("channel"))
        .and_then(|c| c.as_str())
        .map(str::to_string)
        .context("rust-toolchain.toml has no toolchain.channel")
}

#[must_use]
pub fn help_message() -> String {
    format!("
{title}: Checks that struct literals name their fields in declaration order.

{usage_label}:
    cargo fieldorder [COMMAND] [OPTIONS] [--] [CARGO_ARGS...]

{commands_label}:
    {check}            Run the field order lint (default)
    {print_structs}    Print all structs, their field order and applicable lints
    {generate_config}  Generates an initial fieldorder.ron for your project

{options_label}:
    --fieldorder-config PATH   Use this lint configuration instead of fieldorder.ron
    -h, --help                 Print this message
    -V, --version              Print version info and exit

Any additional arguments will be passed directly to cargo:
    --features=FEATURES    Cargo features to enable
    --manifest-path=PATH   Path to Cargo.toml

{note} to let a field go anywhere in a literal:
    #[cfg_attr(structfieldorder, structfieldorder::optional)]
",
        title = Style::new().bold().paint("cargo-fieldorder"),
        usage_label = Blue.bold().paint("Usage"),
        commands_label = Blue.bold().paint("Commands"),
        check = Green.paint("check"),
        print_structs = Green.paint("print-structs"),
        generate_config = Green.paint("generate-config"),
        options_label = Blue.bold().paint("Options"),
        note = Yellow.paint("Mark fields optional"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    mod toolchain_tests {
        use super::*;

        #[test]
        fn test_toolchain_matches_rust_toolchain_toml() {
            let toolchain = get_toolchain().unwrap();
            assert!(toolchain.starts_with("nightly-"));
            assert!(include_str!("../rust-toolchain.toml").contains(&toolchain));
        }

        #[test]
        fn test_malformed_toolchain_config() {
            assert!(toolchain_from_config("not = [valid").is_err());
            assert!(toolchain_from_config("[toolchain]\ncomponents = []\n").is_err());
            assert_eq!(
                toolchain_from_config("[toolchain]\nchannel = \"nightly-2025-01-01\"\n").unwrap(),
                "nightly-2025-01-01"
            );
        }
    }

    mod validate_project_tests {
        use super::*;

        #[test]
        fn test_rust_project() {
            let temp_dir = TempDir::new().expect("Failed to create temp directory");
            fs::write(
                temp_dir.path().join("Cargo.toml"),
                "[package]\nname = \"test\"\nversion = \"0.1.0\"\n",
            )
            .expect("Failed to write Cargo.toml");

            assert_eq!(validate_project(temp_dir.path()), ProjectType::RustProject);
        }

        #[test]
        fn test_other_directory() {
            let temp_dir = TempDir::new().expect("Failed to create temp directory");
            assert_eq!(validate_project(temp_dir.path()), ProjectType::OtherDirectory);
        }
    }

    mod wrapper_tests {
        use super::*;

        fn strings(args: &[&str]) -> Vec<String> {
            args.iter().map(|s| s.to_string()).collect()
        }

        #[test]
        fn test_driver_args_strip_rustc() {
            let args = strings(&["cargo-fieldorder", "/toolchain/bin/rustc", "--crate-name", "shop"]);
            assert_eq!(driver_args(&args), &strings(&["--crate-name", "shop"])[..]);
        }

        #[test]
        fn test_driver_args_without_rustc() {
            let args = strings(&["cargo-fieldorder", "--crate-name", "shop"]);
            assert_eq!(driver_args(&args), &strings(&["--crate-name", "shop"])[..]);
            assert!(driver_args(&[]).is_empty());
        }

        #[test]
        fn test_driver_path_next_to() {
            let driver = driver_path_next_to(Path::new("/opt/bin/cargo-fieldorder"));
            assert_eq!(driver.parent(), Some(Path::new("/opt/bin")));
            assert!(driver.to_string_lossy().contains("fieldorder-driver"));
        }
    }

    mod generate_config_tests {
        use super::*;

        #[test]
        fn test_refuses_when_generated_config_exists() {
            let temp_dir = TempDir::new().unwrap();
            assert!(refuse_existing_generated_configs(temp_dir.path()).is_ok());

            fs::write(temp_dir.path().join(config_generation::GENERATED_CONFIG_FILE), "[]").unwrap();
            let err = refuse_existing_generated_configs(temp_dir.path()).unwrap_err();
            assert_eq!(err.0, 1);
        }

        #[test]
        fn test_absolute_config_path() {
            let temp_dir = TempDir::new().unwrap();
            let config = temp_dir.path().join("custom.ron");
            fs::write(&config, "[]").unwrap();

            let resolved = absolute_config_path(config.to_str().unwrap()).unwrap();
            assert!(Path::new(&resolved).is_absolute());
            assert!(absolute_config_path(temp_dir.path().join("missing.ron").to_str().unwrap()).is_err());
        }
    }

    mod display_tests {
        use super::*;

        #[test]
        fn test_help_message_format() {
            let help = help_message();

            assert!(help.contains("cargo-fieldorder"));
            assert!(help.contains("Usage"));
            assert!(help.contains("check"));
            assert!(help.contains("print-structs"));
            assert!(help.contains("generate-config"));
            assert!(help.contains("--fieldorder-config"));
            assert!(help.contains("-h, --help"));
            assert!(help.contains("-V, --version"));
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_command_exit_status_display() {
            let status = CommandExitStatus(42);
            assert_eq!(status.to_string(), "Command failed with exit code: 42");

            let error: &dyn Error = &status;
            assert_eq!(error.to_string(), "Command failed with exit code: 42");
        }
    }
}
