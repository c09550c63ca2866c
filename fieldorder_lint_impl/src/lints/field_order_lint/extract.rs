// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//! Reads field declarations and struct expressions out of rustc into the
//! compiler-independent shapes the validator works on.

use fieldorder_common::fields::{DeclaredFields, FieldTag, OptionalMarker, RawField};
use fieldorder_common::literal::{LiteralElement, LiteralKey, LiteralShape};
use rustc_ast::attr::AttributeExt;
use rustc_hir::ExprField;
use rustc_hir::def_id::DefId;
use rustc_middle::ty::{TyCtxt, VariantDef};

///
/// The declared fields of a struct or enum variant, in declaration order.
/// A field is optional when it carries the `#[key::value]` tool attribute
/// named by `marker`.
///
pub fn declared_fields(tcx: TyCtxt<'_>, variant: &VariantDef, marker: &OptionalMarker) -> DeclaredFields {
    let raw = variant.fields.iter().map(|field| {
        field_tags(tcx, field.did).into_iter().fold(
            RawField::new(field.name.as_str(), field.vis.is_public()),
            RawField::with_tag,
        )
    });
    DeclaredFields::extract(raw, marker)
}

// Two-segment tool attributes on a field, e.g. `#[structfieldorder::optional]`
fn field_tags(tcx: TyCtxt<'_>, did: DefId) -> Vec<FieldTag> {
    tcx.get_attrs_unchecked(did)
        .iter()
        .filter_map(|attr| attr.ident_path())
        .filter_map(|path| match path.as_slice() {
            [key, value] => Some(FieldTag::new(key.name.as_str(), value.name.as_str())),
            _ => None,
        })
        .collect()
}

///
/// Classifies the fields of a struct expression. Every HIR struct field is
/// keyed; a key that doesn't read as a field name becomes a placeholder.
///
pub fn literal_shape(fields: &[ExprField<'_>]) -> LiteralShape {
    LiteralShape::classify(
        fields
            .iter()
            .map(|field| LiteralElement::Keyed(LiteralKey::from_name(field.ident.name.as_str()))),
    )
}
