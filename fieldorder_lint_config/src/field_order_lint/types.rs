// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::Severity;
use fieldorder_common::fields::OptionalMarker;
use fieldorder_common::order::FieldFilter;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Specifies which types a field order lint looks at
#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum StructMatch {
    /// Match types by fully qualified path (exact path or regex pattern),
    /// e.g. `shop::Order` or `shop::Order::Shipped` for an enum variant
    Name(String),
    /// Match types defined in a crate (exact name or regex pattern)
    InCrate(String),
    /// Logical AND - both patterns must match
    AndMatches(Box<StructMatch>, Box<StructMatch>),
    /// Logical OR - either pattern must match
    OrMatches(Box<StructMatch>, Box<StructMatch>),
    /// Logical NOT - inverts the match
    NotMatch(Box<StructMatch>),
}

impl StructMatch {
    /// Evaluates the matcher against a type defined in `crate_name` at `type_path`.
    pub fn matches(&self, crate_name: &str, type_path: &str) -> bool {
        match self {
            StructMatch::Name(pattern) => string_matches_pattern(type_path, pattern),
            StructMatch::InCrate(pattern) => string_matches_pattern(crate_name, pattern),
            StructMatch::AndMatches(left, right) => {
                left.matches(crate_name, type_path) && right.matches(crate_name, type_path)
            }
            StructMatch::OrMatches(left, right) => {
                left.matches(crate_name, type_path) || right.matches(crate_name, type_path)
            }
            StructMatch::NotMatch(inner) => !inner.matches(crate_name, type_path),
        }
    }
}

// Regex match, falling back to plain equality for patterns that don't compile
fn string_matches_pattern(string: &str, pattern: &str) -> bool {
    match Regex::new(pattern) {
        Ok(regex) => regex.is_match(string),
        Err(e) => {
            tracing::debug!(%pattern, error = %e, "not a valid regex, comparing literally");
            string == pattern
        }
    }
}

/// A complete field order lint definition with matching criteria and rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldOrderLint {
    pub name: String,
    pub matches: StructMatch,
    pub rules: Vec<FieldOrderRule>,
    /// Which field attribute marks a field as optional
    #[serde(default)]
    pub optional_marker: OptionalMarker,
}

/// Rules that can be applied to the literals of matching types
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FieldOrderRule {
    /// Struct literals must name their fields in declaration order
    MustFollowDeclarationOrder {
        /// Only `pub` fields take part in the check
        #[serde(default)]
        only_exported: bool,
        /// Fields tagged optional may be written anywhere
        #[serde(default)]
        skip_optional: bool,
        severity: Severity,
    },
}

impl FieldOrderRule {
    pub fn severity(&self) -> Severity {
        match self {
            FieldOrderRule::MustFollowDeclarationOrder { severity, .. } => *severity,
        }
    }

    /// The field filter the validator should run with.
    pub fn field_filter(&self) -> FieldFilter {
        match self {
            FieldOrderRule::MustFollowDeclarationOrder {
                only_exported,
                skip_optional,
                ..
            } => FieldFilter {
                only_exported: *only_exported,
                skip_optional: *skip_optional,
            },
        }
    }
}
