// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use anyhow::Context;
use fieldorder_common::project_context::ProjectContext;
use fieldorder_common::workspace::CONFIG_FILE_NAME;
use fieldorder_lint_config::LintBuilder;
use std::fs;
use std::path::{Path, PathBuf};

pub const GENERATED_CONFIG_FILE: &str = "fieldorder.generated.ron";

/// Generated configuration files left in `dir` by an earlier run.
pub fn existing_generated_configs(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut found: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with("fieldorder.generated") && name.ends_with(".ron"))
        })
        .map(|entry| entry.path())
        .collect();
    found.sort();
    Ok(found)
}

///
/// Writes a configuration proposed from `contexts` to
/// `fieldorder.generated.ron` in `dir`. When the project has no
/// `fieldorder.ron` yet, the generated file takes its place.
///
/// Returns the path of the file that was written.
///
pub fn write_generated_config(dir: &Path, contexts: &[ProjectContext]) -> anyhow::Result<PathBuf> {
    let builder = LintBuilder::generate_from_contexts(contexts);
    let generated = dir.join(GENERATED_CONFIG_FILE);

    builder
        .write_to_file(&generated)
        .with_context(|| format!("Failed to write {}", generated.display()))?;
    tracing::debug!(lints = builder.lints.len(), path = %generated.display(), "generated configuration");

    let config = dir.join(CONFIG_FILE_NAME);
    if config.exists() {
        return Ok(generated);
    }

    fs::rename(&generated, &config).with_context(|| {
        format!("Failed to rename {} to {}", generated.display(), config.display())
    })?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldorder_common::fields::{DeclaredFields, OptionalMarker, RawField};
    use fieldorder_common::project_context::StructInfo;
    use tempfile::TempDir;

    fn contexts() -> Vec<ProjectContext> {
        let mut context = ProjectContext::new();
        context.module_root = "shop".into();
        context.structs.push(StructInfo {
            name: "shop::Order".into(),
            fields: DeclaredFields::extract(vec![RawField::new("id", true)], &OptionalMarker::default()),
            applicable_lints: vec![],
        });
        vec![context]
    }

    #[test]
    fn test_generated_config_becomes_fieldorder_ron() {
        let dir = TempDir::new().unwrap();

        let written = write_generated_config(dir.path(), &contexts()).unwrap();

        assert_eq!(written, dir.path().join(CONFIG_FILE_NAME));
        assert!(!dir.path().join(GENERATED_CONFIG_FILE).exists());
        let builder = LintBuilder::read_from_file(&written).unwrap();
        assert_eq!(builder.lints.len(), 1);
        assert_eq!(builder.lints[0].name(), "shop_field_order");
    }

    #[test]
    fn test_existing_config_is_left_alone() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[]").unwrap();

        let written = write_generated_config(dir.path(), &contexts()).unwrap();

        assert_eq!(written, dir.path().join(GENERATED_CONFIG_FILE));
        assert_eq!(fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap(), "[]");
        assert_eq!(
            existing_generated_configs(dir.path()).unwrap(),
            vec![dir.path().join(GENERATED_CONFIG_FILE)]
        );
    }

    #[test]
    fn test_no_generated_configs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fieldorder.ron"), "[]").unwrap();
        assert!(existing_generated_configs(dir.path()).unwrap().is_empty());
    }
}
