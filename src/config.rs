use std::env;

use crate::constants::{DEFAULT_PORT, ENV_CREDENTIALS, ENV_PORT, ENV_SHEET_ID};
use crate::error::{AppError, Result};

/// Startup configuration assembled from the environment.
///
/// Missing credentials or spreadsheet id is fatal: the process must refuse
/// to register any route rather than serve requests that can only fail.
#[derive(Debug, Clone)]
pub struct Config {
    pub spreadsheet_id: String,
    /// Service-account key as raw JSON; parsed when the client connects
    pub credentials_json: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Pick up a local .env if present; real deployments set env directly
        dotenvy::dotenv().ok();

        let spreadsheet_id = require_var(ENV_SHEET_ID)?;
        let credentials_json = load_credentials(&require_var(ENV_CREDENTIALS)?)?;

        let port = match env::var(ENV_PORT) {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::Config(format!("{} must be a port number, got {:?}", ENV_PORT, raw))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            spreadsheet_id,
            credentials_json,
            port,
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Config(format!("{} is not set", name))),
    }
}

/// `GOOGLE_CREDENTIALS` carries either the key JSON itself or `@<path>`
/// pointing at a key file.
fn load_credentials(raw: &str) -> Result<String> {
    if let Some(path) = raw.strip_prefix('@') {
        std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read credentials file {}: {}", path, e))
        })
    } else {
        Ok(raw.to_string())
    }
}
