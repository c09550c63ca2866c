// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

mod extract;
mod field_order_lint;

pub use extract::{declared_fields, literal_shape};
pub use field_order_lint::{FieldOrderLintPass, STRUCT_FIELD_ORDER};
