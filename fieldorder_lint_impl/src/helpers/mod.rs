// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

mod declare_lint;
pub mod lint_collection;
pub mod lint_helpers;
pub mod lint_runner;
pub mod queries;
