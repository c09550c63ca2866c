// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//! Declared fields of a struct (or struct-like enum variant), in declaration order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default tool name used to tag fields.
pub const DEFAULT_MARKER_KEY: &str = "structfieldorder";

/// Default attribute under [`DEFAULT_MARKER_KEY`] that marks a field as optional,
/// i.e. `#[structfieldorder::optional]`.
pub const DEFAULT_MARKER_VALUE: &str = "optional";

///
/// The (key, value) pair that marks a field as optional. In Rust source this
/// is the two-segment tool attribute `#[key::value]`.
///
/// Matching is exact on both halves; `#[structfieldorder::optionally]` or
/// `#[structfieldorder::optional::really]` do not count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalMarker {
    pub key: String,
    pub value: String,
}

impl Default for OptionalMarker {
    fn default() -> Self {
        Self {
            key: DEFAULT_MARKER_KEY.to_string(),
            value: DEFAULT_MARKER_VALUE.to_string(),
        }
    }
}

impl OptionalMarker {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// True if one of the tags carries our key with exactly our value.
    pub fn is_marked<'a>(&self, tags: impl IntoIterator<Item = &'a FieldTag>) -> bool {
        tags.into_iter()
            .any(|tag| tag.key == self.key && tag.value == self.value)
    }
}

/// A single piece of field metadata, already split into key and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTag {
    pub key: String,
    pub value: String,
}

impl FieldTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A field as the host compiler hands it to us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub name: String,
    pub exported: bool,
    pub tags: Vec<FieldTag>,
}

impl RawField {
    pub fn new(name: impl Into<String>, exported: bool) -> Self {
        Self {
            name: name.into(),
            exported,
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: FieldTag) -> Self {
        self.tags.push(tag);
        self
    }
}

/// One declared field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub exported: bool,
    pub optional: bool,
}

///
/// The declared fields of one type, in declaration order. Field names are
/// unique; the compiler has already rejected anything else.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclaredFields(Vec<FieldDescriptor>);

impl DeclaredFields {
    ///
    /// Builds the declared sequence from the compiler's field list. Order is
    /// preserved exactly; optionality is decided by `marker` alone.
    ///
    pub fn extract<I>(fields: I, marker: &OptionalMarker) -> Self
    where
        I: IntoIterator<Item = RawField>,
    {
        fields
            .into_iter()
            .map(|field| FieldDescriptor {
                optional: marker.is_marked(&field.tags),
                name: field.name,
                exported: field.exported,
            })
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|f| f.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<FieldDescriptor> for DeclaredFields {
    fn from_iter<T: IntoIterator<Item = FieldDescriptor>>(iter: T) -> Self {
        DeclaredFields(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DeclaredFields {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Comma-separated field names, e.g. `a, b, c`.
impl fmt::Display for DeclaredFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&field.name)?;
        }
        Ok(())
    }
}
