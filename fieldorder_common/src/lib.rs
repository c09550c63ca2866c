// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//! Shared, compiler-independent pieces of cargo-fieldorder.
//!
//! The field-order check itself lives here: [`fields`] describes what a type
//! declares, [`literal`] describes what a struct expression uses, and
//! [`order`] compares the two. None of it knows about rustc; the lint
//! implementation feeds it from HIR and reports whatever comes back.

pub mod cli;
pub mod fields;
pub mod literal;
pub mod logging;
pub mod order;
pub mod project_context;
pub mod workspace;

pub use fields::{DeclaredFields, FieldDescriptor, FieldTag, OptionalMarker, RawField};
pub use literal::{LiteralElement, LiteralFieldUsage, LiteralKey, LiteralShape};
pub use order::{FieldFilter, ValidationOutcome, validate};
