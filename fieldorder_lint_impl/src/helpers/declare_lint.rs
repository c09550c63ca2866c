// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

/// Declares a lint twice, once at `deny` and once at `warn`, under a
/// single name, plus a unit struct with a `get_by_severity` accessor.
///
/// The configured severity of a rule is only known at runtime, so the lint
/// pass picks the matching static when it reports.
#[macro_export]
macro_rules! declare_variable_severity_lint {
    ($(#[$attr:meta])* $vis: vis, $NAME: ident, $NAME_DENY: ident, $NAME_WARN: ident, $desc: expr) => (
        $(#[$attr])*
        $vis static $NAME_DENY: &rustc_session::lint::Lint = &rustc_session::lint::Lint {
            name: stringify!($NAME),
            default_level: rustc_session::lint::Level::Deny,
            desc: $desc,
            is_externally_loaded: false,
            ..rustc_session::lint::Lint::default_fields_for_macro()
        };

        $(#[$attr])*
        $vis static $NAME_WARN: &rustc_session::lint::Lint = &rustc_session::lint::Lint {
            name: stringify!($NAME),
            default_level: rustc_session::lint::Level::Warn,
            desc: $desc,
            is_externally_loaded: false,
            ..rustc_session::lint::Lint::default_fields_for_macro()
        };

        // rustc prints the lint name from the struct, so keep it SCREAMING_CASE
        #[allow(non_camel_case_types)]
        $vis struct $NAME;

        impl $NAME {
            /// The lint to report with for a configured severity
            pub fn get_by_severity(severity: fieldorder_lint_config::Severity) -> &'static rustc_session::lint::Lint {
                match severity {
                    fieldorder_lint_config::Severity::Warn => $NAME_WARN,
                    fieldorder_lint_config::Severity::Error => $NAME_DENY,
                }
            }
        }
    );
}
