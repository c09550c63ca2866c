// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use serde::{Deserialize, Serialize};

/// Environment variable carrying [`FieldOrderCli`] from cargo-fieldorder to the driver.
pub const CLI_ARGS_ENV: &str = "FIELDORDER_CLI_ARGS";

/// Environment variable carrying the pass-through cargo arguments to the driver.
pub const CARGO_ARGS_ENV: &str = "FIELDORDER_CARGO_ARGS";

/// Separator used when flattening cargo arguments into [`CARGO_ARGS_ENV`].
pub const CARGO_ARG_SEPARATOR: &str = "__FIELDORDER_ARG_SEP__";

// cargo-fieldorder commands
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum FieldOrderCommand {
    Check,
    PrintStructs,
    GenerateConfig,
}

/// What the driver needs to know about the original invocation.
#[derive(Debug, Serialize, Deserialize)]
pub struct FieldOrderCli {
    pub command: FieldOrderCommand,
    pub config_path: Option<String>,
}

impl Default for FieldOrderCli {
    fn default() -> Self {
        Self {
            command: FieldOrderCommand::Check,
            config_path: None,
        }
    }
}

impl FieldOrderCli {
    pub fn to_env_str(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_env_str(env_str: &str) -> anyhow::Result<FieldOrderCli> {
        Ok(serde_json::from_str(env_str)?)
    }
}

/// The command line as typed by the user, split into our part and cargo's part.
pub struct FieldOrderArgs {
    pub command: FieldOrderCommand,
    pub config_path: Option<String>,
    pub cargo_args: Vec<String>,
}

impl FieldOrderArgs {
    pub fn parse<I>(args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        let mut command = FieldOrderCommand::Check;
        let mut config_path = None;

        let args: Vec<String> = args.collect();

        // Skip the program name, and `fieldorder` when run as `cargo fieldorder`
        let mut start_idx = 1;
        if args.get(1).map(String::as_str) == Some("fieldorder") {
            start_idx = 2;
        }

        if let Some(arg) = args.get(start_idx) {
            let parsed = match arg.as_str() {
                "check" => Some(FieldOrderCommand::Check),
                "print-structs" => Some(FieldOrderCommand::PrintStructs),
                "generate-config" => Some(FieldOrderCommand::GenerateConfig),
                _ => None,
            };
            if let Some(parsed) = parsed {
                command = parsed;
                start_idx += 1;
            }
        }

        let mut cargo_args = Vec::new();
        let mut i = start_idx;
        while i < args.len() {
            if args[i] == "--fieldorder-config" {
                if let Some(path) = args.get(i + 1) {
                    config_path = Some(path.clone());
                    i += 2;
                } else {
                    tracing::warn!("--fieldorder-config requires a path argument");
                    i += 1;
                }
            } else if let Some(path) = args[i].strip_prefix("--fieldorder-config=") {
                config_path = Some(path.to_string());
                i += 1;
            } else {
                cargo_args.push(args[i].clone());
                i += 1;
            }
        }

        Self {
            command,
            config_path,
            cargo_args,
        }
    }

    /// Flattens the cargo arguments for [`CARGO_ARGS_ENV`].
    pub fn cargo_args_env_str(&self) -> String {
        self.cargo_args.join(CARGO_ARG_SEPARATOR)
    }
}

/// Inverse of [`FieldOrderArgs::cargo_args_env_str`].
pub fn split_cargo_args(env_str: &str) -> Vec<String> {
    env_str
        .split(CARGO_ARG_SEPARATOR)
        .filter(|arg| !arg.is_empty())
        .map(str::to_string)
        .collect()
}
