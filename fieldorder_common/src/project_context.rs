// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::fields::DeclaredFields;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub const FIELDORDER_DIR: &str = ".fieldorder";
pub const CONTEXT_FILE_SUFFIX: &str = "_context.json";

/// A struct (or struct-like enum variant) and its declared fields
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StructInfo {
    /// Fully qualified type path
    pub name: String,
    /// Declared fields, in declaration order
    pub fields: DeclaredFields,
    /// List of lint names that apply to this struct
    #[serde(default)]
    pub applicable_lints: Vec<String>,
}

/// Compile-time discoverable information about one crate we ran
/// cargo-fieldorder on. The driver writes one of these per crate; the
/// cargo-fieldorder front end reads them all back for `print-structs` and
/// `generate-config`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProjectContext {
    /// The crate name
    pub module_root: String,
    /// All structs defined in the crate
    pub structs: Vec<StructInfo>,
    /// Base directory for storing context files (not serialized)
    #[serde(skip)]
    base_dir: PathBuf,
}

impl Default for ProjectContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectContext {
    /// Creates a new empty project context with default base directory (.fieldorder)
    pub fn new() -> Self {
        Self::with_base_dir(FIELDORDER_DIR)
    }

    /// Creates a new empty project context with a custom base directory
    pub fn with_base_dir(dir_path: impl AsRef<Path>) -> Self {
        Self {
            module_root: String::new(),
            structs: Vec::new(),
            base_dir: dir_path.as_ref().to_path_buf(),
        }
    }

    /// Serialize this project context to a file in the base directory
    /// with a name based on the module_root
    pub fn serialize_to_file(&self) -> Result<PathBuf> {
        if self.module_root.is_empty() {
            return Err(anyhow::anyhow!(
                "Cannot serialize ProjectContext with empty module_root"
            ));
        }

        fs::create_dir_all(&self.base_dir)
            .with_context(|| format!("Failed to create directory: {}", self.base_dir.display()))?;

        let filename = format!("{}{}", self.module_root, CONTEXT_FILE_SUFFIX);
        let file_path = self.base_dir.join(&filename);
        tracing::debug!(path = %file_path.display(), "writing project context");

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&file_path)
            .with_context(|| format!("Failed to open file for writing: {}", file_path.display()))?;

        serde_json::to_writer_pretty(file, &self)
            .with_context(|| format!("Failed to serialize ProjectContext to: {}", file_path.display()))?;

        Ok(file_path)
    }

    /// Load all project contexts from the default .fieldorder directory
    pub fn load_all_contexts() -> Result<Vec<ProjectContext>> {
        Self::load_all_contexts_from_dir(Path::new(FIELDORDER_DIR))
    }

    /// Load all project contexts from a specific directory, sorted by crate name
    pub fn load_all_contexts_from_dir(dir_path: &Path) -> Result<Vec<ProjectContext>> {
        if !dir_path.exists() {
            return Err(anyhow::anyhow!("Directory not found: {}", dir_path.display()));
        }

        let entries = fs::read_dir(dir_path)
            .with_context(|| format!("Failed to read directory: {}", dir_path.display()))?;

        let mut contexts = Vec::new();
        for entry in entries.filter_map(Result::ok) {
            let path = entry.path();
            let is_context = path
                .file_name()
                .and_then(|f| f.to_str())
                .is_some_and(|f| f.ends_with(CONTEXT_FILE_SUFFIX));
            if !is_context {
                continue;
            }

            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            let mut context: ProjectContext = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON from: {}", path.display()))?;
            context.base_dir = dir_path.to_path_buf();
            context.structs.sort_by(|a, b| a.name.cmp(&b.name));
            contexts.push(context);
        }

        if contexts.is_empty() {
            return Err(anyhow::anyhow!(
                "No project context files found in {}",
                dir_path.display()
            ));
        }

        contexts.sort_by(|a, b| a.module_root.cmp(&b.module_root));
        Ok(contexts)
    }
}
