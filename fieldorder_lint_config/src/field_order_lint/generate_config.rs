// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use super::types::{FieldOrderLint, FieldOrderRule, StructMatch};
use crate::{ConfiguredLint, GenerateFromContext, LintBuilder, Severity};
use fieldorder_common::fields::OptionalMarker;
use fieldorder_common::project_context::ProjectContext;
use std::collections::BTreeSet;

impl GenerateFromContext for FieldOrderLint {
    fn generate_from_contexts(contexts: &[ProjectContext], builder: &mut LintBuilder) {
        // One lint per crate that actually declares something with fields
        let crates: BTreeSet<&str> = contexts
            .iter()
            .filter(|c| c.structs.iter().any(|s| !s.fields.is_empty()))
            .map(|c| c.module_root.as_str())
            .collect();

        for crate_name in crates {
            builder.push(ConfiguredLint::FieldOrder(FieldOrderLint {
                name: format!("{crate_name}_field_order"),
                matches: StructMatch::InCrate(format!("^{crate_name}$")),
                rules: vec![FieldOrderRule::MustFollowDeclarationOrder {
                    only_exported: false,
                    skip_optional: false,
                    severity: Severity::Warn,
                }],
                optional_marker: OptionalMarker::default(),
            }));
        }
    }
}
