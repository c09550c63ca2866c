// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use cargo_metadata::MetadataCommand;
use std::path::{Path, PathBuf};

/// Name of the lint configuration file.
pub const CONFIG_FILE_NAME: &str = "fieldorder.ron";

/// Find fieldorder.ron in workspace root using cargo metadata
pub fn find_workspace_config() -> Option<PathBuf> {
    let metadata = MetadataCommand::new().no_deps().exec().ok()?;
    let config = metadata.workspace_root.join(CONFIG_FILE_NAME);
    if config.exists() {
        Some(config.into_std_path_buf())
    } else {
        None
    }
}

///
/// Resolves the configuration file to use: an explicit path wins, then
/// `fieldorder.ron` in `cwd`, then the one at the workspace root. `None`
/// means the built-in default applies.
///
pub fn resolve_config_path(explicit: Option<&str>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }

    let local = cwd.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    find_workspace_config()
}
