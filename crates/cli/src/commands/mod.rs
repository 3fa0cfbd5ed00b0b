pub mod ask;
pub mod catalog;
pub mod config;
pub mod doctor;

use std::sync::Arc;

use happycore_core::config::{AppConfig, LoadOptions};
use happycore_core::{Catalog, ChatEngine};
use serde::Serialize;

pub const CONFIG_FAILURE_EXIT_CODE: u8 = 2;
pub const CATALOG_FAILURE_EXIT_CODE: u8 = 3;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Config plus catalog, or the failure result `command` should print.
fn load_catalog(command: &str) -> Result<(AppConfig, Catalog), CommandResult> {
    let config = AppConfig::load(LoadOptions::default()).map_err(|error| {
        CommandResult::failure(
            command,
            "config_validation",
            format!("configuration issue: {error}"),
            CONFIG_FAILURE_EXIT_CODE,
        )
    })?;

    let catalog = Catalog::load(&config.catalog.path).map_err(|error| {
        CommandResult::failure(
            command,
            error.error_class(),
            error.to_string(),
            CATALOG_FAILURE_EXIT_CODE,
        )
    })?;

    Ok((config, catalog))
}

fn load_engine(command: &str) -> Result<ChatEngine, CommandResult> {
    let (_, catalog) = load_catalog(command)?;
    Ok(ChatEngine::new(Arc::new(catalog)))
}
