// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//! The field-order check.
//!
//! A literal is in order when the names it uses form an ordered subsequence
//! of the declared names. Omitted fields are fine; a name used before one
//! declared ahead of it is not, and neither is a name that isn't declared at
//! all, since it can never be matched.

use crate::fields::{DeclaredFields, FieldDescriptor};
use crate::literal::{LiteralFieldUsage, LiteralShape};
use std::collections::HashSet;

///
/// Which declared fields take part in the check. Hidden fields are dropped
/// from the declared sequence, and their names from the literal, before the
/// comparison runs. Names that aren't declared at all are never dropped.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldFilter {
    /// Only `pub` fields count.
    pub only_exported: bool,
    /// Fields tagged optional may go anywhere.
    pub skip_optional: bool,
}

impl FieldFilter {
    pub fn exported_only() -> Self {
        Self {
            only_exported: true,
            skip_optional: false,
        }
    }

    fn hides(&self, field: &FieldDescriptor) -> bool {
        (self.only_exported && !field.exported) || (self.skip_optional && field.optional)
    }

    pub fn apply(
        &self,
        declared: &DeclaredFields,
        used: &LiteralFieldUsage,
    ) -> (DeclaredFields, LiteralFieldUsage) {
        if !self.only_exported && !self.skip_optional {
            return (declared.clone(), used.clone());
        }

        let hidden: HashSet<&str> = declared
            .iter()
            .filter(|f| self.hides(f))
            .map(|f| f.name.as_str())
            .collect();

        let visible = declared.iter().filter(|f| !self.hides(f)).cloned().collect();
        (visible, used.retain(|name| !hidden.contains(name)))
    }
}

/// Result of checking one literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub ordered: bool,
    /// Declared fields the literal touches, in declaration order. Empty when ordered.
    pub relevant_fields: DeclaredFields,
    /// Element index of the first used name that could not be matched.
    pub first_out_of_order: Option<usize>,
}

impl ValidationOutcome {
    fn in_order() -> Self {
        Self {
            ordered: true,
            ..Self::default()
        }
    }

    /// The expected order as a comma-separated list.
    pub fn expected_order(&self) -> String {
        self.relevant_fields.to_string()
    }
}

///
/// Checks a literal against the declared fields of its type.
///
/// Empty and unnamed literals are always in order. Otherwise `filter` is
/// applied and the used names are matched left to right against the declared
/// names. On failure the outcome carries the declared fields the literal
/// uses, in the order they should have been written.
///
pub fn validate(
    declared: &DeclaredFields,
    literal: &LiteralShape,
    filter: FieldFilter,
) -> ValidationOutcome {
    let used = match literal {
        LiteralShape::Empty | LiteralShape::Unnamed => return ValidationOutcome::in_order(),
        LiteralShape::Named(used) => used,
    };

    let (declared, used) = filter.apply(declared, used);

    let matched = ordered_prefix_len(declared.names(), used.names());
    if matched == used.len() {
        return ValidationOutcome::in_order();
    }

    ValidationOutcome {
        ordered: false,
        relevant_fields: ordered_intersection(&declared, &used),
        first_out_of_order: used.position(matched),
    }
}

// How many leading entries of `used` can be matched, in order, against `declared`.
fn ordered_prefix_len<'a>(declared: impl Iterator<Item = &'a str>, used: &[String]) -> usize {
    let mut matched = 0;
    for name in declared {
        if matched == used.len() {
            break;
        }
        if used[matched] == name {
            matched += 1;
        }
    }
    matched
}

// The declared fields whose names appear anywhere in `used`, in declaration order.
fn ordered_intersection(declared: &DeclaredFields, used: &LiteralFieldUsage) -> DeclaredFields {
    declared
        .iter()
        .filter(|field| used.contains(&field.name))
        .cloned()
        .collect()
}
