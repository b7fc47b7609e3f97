use crate::config::RawConfig;
use crate::error::{Error, Result};

use serde_json::Value;

/// JSON Schema of the configuration file.
pub(crate) fn config_schema() -> Result<Value> {
    let schema = schemars::schema_for!(RawConfig);
    serde_json::to_value(&schema)
        .map_err(|e| Error::Internal(format!("Failed to serialize schema: {e}")))
}

/// Print the JSON Schema for configuration.
pub(crate) fn run() -> Result<()> {
    let schema = config_schema()?;
    let json = serde_json::to_string_pretty(&schema)
        .map_err(|e| Error::Internal(format!("Failed to serialize schema: {e}")))?;
    println!("{json}");
    Ok(())
}
