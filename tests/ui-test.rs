#![feature(rustc_private)]
// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.
#![warn(rust_2018_idioms, unused_lifetimes)]

use std::env;
use std::path::{Path, PathBuf};
use ui_test::{Args, Config, ignore_output_conflict, status_emitter};

/// Run the UI tests.
///
/// Each directory under `tests/ui` is compiled by fieldorder-driver with the
/// `fieldorder.ron` it contains, or the built-in default when it has none.
/// Expected diagnostics are the `//~` annotations in the sources.
fn main() {
    let args = Args::test().expect("invalid ui test arguments");

    let target_dir =
        PathBuf::from(env::var_os("CARGO_TARGET_DIR").unwrap_or_else(|| "target".into()));

    let mut config = Config {
        output_conflict_handling: ignore_output_conflict,
        filter_files: env::var("TESTNAME")
            .map(|filters| filters.split(',').map(str::to_string).collect())
            .unwrap_or_default(),
        target: None,
        out_dir: target_dir.join("ui_test"),
        ..Config::rustc(Path::new("tests").join("ui"))
    };

    let defaults = config.comment_defaults.base();
    defaults.exit_status = None.into();
    defaults.require_annotations = Some(ui_test::spanned::Spanned::dummy(true)).into();

    config.with_args(&args);

    let current_exe_path = env::current_exe().expect("current executable path invalid");
    let deps_path = current_exe_path.parent().expect("test binary lives in deps/");
    let profile_path = deps_path.parent().expect("deps/ lives in the profile directory");

    config.program.args.extend(
        [
            "--emit=metadata",
            "-Aunused",
            "-Zui-testing",
            "-Zdeduplicate-diagnostics=no",
            &format!("-Ldependency={}", deps_path.display()),
        ]
        .iter()
        .map(|&s| s.into()),
    );

    config.program.program = profile_path.join(if cfg!(windows) {
        "fieldorder-driver.exe"
    } else {
        "fieldorder-driver"
    });

    let result = ui_test::run_tests_generic(
        vec![config],
        ui_test::default_file_filter,
        ui_test::default_per_file_config,
        status_emitter::Text::from(args.format),
    );

    if let Err(e) = result {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}
