// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use ansi_term::Colour::{Blue, Green, Yellow};
use ansi_term::Style;
use fieldorder_common::fields::FieldDescriptor;
use fieldorder_common::project_context::ProjectContext;
use std::fmt::Write;

///
/// Renders every struct of every crate with its declared field order and the
/// lints that cover it. Exported fields are prefixed with `pub`, optional
/// fields are flagged.
///
pub fn format_structs(contexts: &[ProjectContext]) -> String {
    let mut output = String::new();

    for context in contexts {
        let _ = writeln!(output, "{}", Blue.bold().paint(&context.module_root));

        if context.structs.is_empty() {
            let _ = writeln!(output, "  (no structs)");
        }

        for info in &context.structs {
            let lints = if info.applicable_lints.is_empty() {
                Yellow.paint("not checked").to_string()
            } else {
                Green.paint(info.applicable_lints.join(", ")).to_string()
            };
            let _ = writeln!(output, "  {} [{}]", Style::new().bold().paint(&info.name), lints);

            for field in &info.fields {
                let _ = writeln!(output, "    {}", describe_field(field));
            }
        }
        output.push('\n');
    }

    output
}

fn describe_field(field: &FieldDescriptor) -> String {
    let mut line = String::new();
    if field.exported {
        line.push_str("pub ");
    }
    line.push_str(&field.name);
    if field.optional {
        line.push_str(&format!(" {}", Yellow.paint("(optional)")));
    }
    line
}

/// Prints the structs of all crates to stdout.
pub fn print_structs(contexts: &[ProjectContext]) {
    print!("{}", format_structs(contexts));
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldorder_common::fields::{DeclaredFields, FieldTag, OptionalMarker, RawField};
    use fieldorder_common::project_context::StructInfo;

    fn shop_context() -> ProjectContext {
        let fields = DeclaredFields::extract(
            vec![
                RawField::new("id", true),
                RawField::new("note", false)
                    .with_tag(FieldTag::new("structfieldorder", "optional")),
            ],
            &OptionalMarker::default(),
        );

        let mut context = ProjectContext::new();
        context.module_root = "shop".into();
        context.structs = vec![
            StructInfo {
                name: "shop::Order".into(),
                fields,
                applicable_lints: vec!["shop_field_order".into()],
            },
            StructInfo {
                name: "shop::Marker".into(),
                fields: DeclaredFields::default(),
                applicable_lints: vec![],
            },
        ];
        context
    }

    #[test]
    fn test_format_structs() {
        let output = format_structs(&[shop_context()]);

        assert!(output.contains("shop"));
        assert!(output.contains("shop::Order"));
        assert!(output.contains("shop_field_order"));
        assert!(output.contains("pub id"));
        assert!(output.contains("note"));
        assert!(!output.contains("pub note"));
        assert!(output.contains("(optional)"));
        assert!(output.contains("not checked"));
    }

    #[test]
    fn test_fields_listed_in_declaration_order() {
        let output = format_structs(&[shop_context()]);
        let id = output.find("pub id").unwrap();
        let note = output.find("note").unwrap();
        assert!(id < note);
    }

    #[test]
    fn test_empty_crate() {
        let mut context = ProjectContext::new();
        context.module_root = "empty".into();
        assert!(format_structs(&[context]).contains("(no structs)"));
    }
}
