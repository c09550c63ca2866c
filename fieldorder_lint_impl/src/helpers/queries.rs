// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use rustc_hir::def_id::{DefId, LOCAL_CRATE};
use rustc_middle::ty::{TyCtxt, VariantDef};

///
/// Returns the crate-qualified definition path of a type or enum variant,
/// e.g. `shop::model::Order` or `shop::model::Event::Shipped`. This is the
/// path `StructMatch::Name` patterns are matched against.
///
pub fn get_full_type_path(tcx: TyCtxt<'_>, def_id: DefId) -> String {
    let krate_name = tcx.crate_name(def_id.krate).to_ident_string();
    let path = tcx.def_path(def_id).to_string_no_crate_verbose();
    format!("{krate_name}{path}")
}

/// The name of the crate being compiled.
pub fn local_crate_name(tcx: TyCtxt<'_>) -> String {
    tcx.crate_name(LOCAL_CRATE).to_ident_string()
}

/// The name of the crate that defines `def_id`.
pub fn defining_crate_name(tcx: TyCtxt<'_>, def_id: DefId) -> String {
    tcx.crate_name(def_id.krate).to_ident_string()
}

/// Variants written with braces: plain structs and struct-like enum variants.
pub fn is_braced_variant(variant: &VariantDef) -> bool {
    variant.ctor.is_none()
}
