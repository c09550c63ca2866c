// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use super::extract::{declared_fields, literal_shape};
use crate::FieldOrderLintRule;
use crate::declare_variable_severity_lint;
use crate::helpers::lint_helpers::span_lint_and_help;
use crate::helpers::queries;
use fieldorder_common::fields::OptionalMarker;
use fieldorder_common::order::validate;
use fieldorder_lint_config::{ConfiguredLint, FieldOrderRule, StructMatch};
use rustc_hir::{Expr, ExprKind};
use rustc_lint::{LateContext, LateLintPass, LintStore};
use rustc_middle::ty;
use rustc_session::impl_lint_pass;

pub struct FieldOrderLintPass {
    name: String,
    matches: StructMatch,
    rules: Vec<FieldOrderRule>,
    optional_marker: OptionalMarker,
}

impl FieldOrderLintPass {
    #[allow(clippy::new_ret_no_self)]
    pub fn new(config: &ConfiguredLint) -> Box<dyn FieldOrderLintRule + Send> {
        let ConfiguredLint::FieldOrder(lint) = config;
        Box::new(Self {
            name: lint.name.clone(),
            matches: lint.matches.clone(),
            rules: lint.rules.clone(),
            optional_marker: lint.optional_marker.clone(),
        })
    }
}

declare_variable_severity_lint!(
    pub,
    STRUCT_FIELD_ORDER,
    STRUCT_FIELD_ORDER_DENY,
    STRUCT_FIELD_ORDER_WARN,
    "struct literal fields must be written in declaration order"
);

impl_lint_pass!(FieldOrderLintPass => [STRUCT_FIELD_ORDER_DENY, STRUCT_FIELD_ORDER_WARN]);

impl FieldOrderLintRule for FieldOrderLintPass {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn applies_to_struct(&self, crate_name: &str, type_path: &str) -> bool {
        self.matches.matches(crate_name, type_path)
    }

    fn optional_marker(&self) -> OptionalMarker {
        self.optional_marker.clone()
    }

    fn register_late_pass(&self, lint_store: &mut LintStore) {
        let name = self.name.clone();
        let matches = self.matches.clone();
        let rules = self.rules.clone();
        let optional_marker = self.optional_marker.clone();

        lint_store.register_late_pass(move |_| {
            Box::new(FieldOrderLintPass {
                name: name.clone(),
                matches: matches.clone(),
                rules: rules.clone(),
                optional_marker: optional_marker.clone(),
            })
        });
    }
}

impl<'tcx> LateLintPass<'tcx> for FieldOrderLintPass {
    fn check_expr(&mut self, ctx: &LateContext<'tcx>, expr: &'tcx Expr<'tcx>) {
        let ExprKind::Struct(qpath, fields, _) = expr.kind else {
            return;
        };

        // Whoever wrote the macro owns the order
        if expr.span.from_expansion() {
            return;
        }

        let ty::Adt(adt, _) = ctx.typeck_results().expr_ty(expr).kind() else {
            return;
        };
        if adt.is_union() {
            return;
        }

        let res = ctx.typeck_results().qpath_res(qpath, expr.hir_id);
        let variant = adt.variant_of_res(res);
        let type_path = queries::get_full_type_path(ctx.tcx, variant.def_id);
        let crate_name = queries::defining_crate_name(ctx.tcx, variant.def_id);

        if !self.applies_to_struct(&crate_name, &type_path) {
            return;
        }

        let literal = literal_shape(fields);
        let declared = declared_fields(ctx.tcx, variant, &self.optional_marker);
        tracing::trace!(lint = %self.name, %type_path, ?literal, "checking struct literal");

        for rule in &self.rules {
            let outcome = validate(&declared, &literal, rule.field_filter());
            if outcome.ordered {
                continue;
            }

            // Point at the first field that broke the order
            let span = outcome
                .first_out_of_order
                .and_then(|i| fields.get(i))
                .map_or(expr.span, |field| field.span);

            tracing::debug!(
                lint = %self.name,
                %type_path,
                expected = %outcome.expected_order(),
                "struct literal out of order"
            );

            span_lint_and_help(
                ctx,
                STRUCT_FIELD_ORDER::get_by_severity(rule.severity()),
                &self.name,
                span,
                format!("fields of `{type_path}` are not written in declaration order"),
                None,
                format!("expected order: {}", outcome.expected_order()),
            );
        }
    }
}
