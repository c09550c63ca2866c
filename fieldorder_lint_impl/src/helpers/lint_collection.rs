// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::FieldOrderLintRule;
use fieldorder_common::fields::OptionalMarker;

///
/// Collects a set of field order lints configured
/// and ready to run.
///
pub struct FieldOrderLintCollection {
    lints: Vec<Box<dyn FieldOrderLintRule + Send>>,
}

impl FieldOrderLintCollection {
    pub fn new(lints: Vec<Box<dyn FieldOrderLintRule + Send>>) -> FieldOrderLintCollection {
        FieldOrderLintCollection { lints }
    }

    pub fn lints(&self) -> &Vec<Box<dyn FieldOrderLintRule + Send>> {
        &self.lints
    }

    /// Names of the lints covering a type, in configuration order.
    pub fn applicable_lints(&self, crate_name: &str, type_path: &str) -> Vec<String> {
        self.lints
            .iter()
            .filter(|lint| lint.applies_to_struct(crate_name, type_path))
            .map(|lint| lint.name())
            .collect()
    }

    /// The optional marker of the first lint covering a type, or the default
    /// marker when nothing covers it.
    pub fn marker_for(&self, crate_name: &str, type_path: &str) -> OptionalMarker {
        self.lints
            .iter()
            .find(|lint| lint.applies_to_struct(crate_name, type_path))
            .map(|lint| lint.optional_marker())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CrateRule {
        name: &'static str,
        krate: &'static str,
        marker: OptionalMarker,
    }

    impl FieldOrderLintRule for CrateRule {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn applies_to_struct(&self, crate_name: &str, _type_path: &str) -> bool {
            crate_name == self.krate
        }

        fn optional_marker(&self) -> OptionalMarker {
            self.marker.clone()
        }
    }

    fn collection() -> FieldOrderLintCollection {
        FieldOrderLintCollection::new(vec![
            Box::new(CrateRule {
                name: "shop_order",
                krate: "shop",
                marker: OptionalMarker::new("shop", "maybe"),
            }),
            Box::new(CrateRule {
                name: "shop_strict",
                krate: "shop",
                marker: OptionalMarker::default(),
            }),
        ])
    }

    #[test]
    fn test_applicable_lints() {
        let lints = collection();
        assert_eq!(
            lints.applicable_lints("shop", "shop::Order"),
            vec!["shop_order", "shop_strict"]
        );
        assert!(lints.applicable_lints("bank", "bank::Account").is_empty());
    }

    #[test]
    fn test_marker_for() {
        let lints = collection();
        assert_eq!(
            lints.marker_for("shop", "shop::Order"),
            OptionalMarker::new("shop", "maybe")
        );
        assert_eq!(
            lints.marker_for("bank", "bank::Account"),
            OptionalMarker::default()
        );
    }
}
