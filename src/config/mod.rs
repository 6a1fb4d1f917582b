//! Loading and saving definitions as YAML or JSON.
//!
//! Every loaded definition is validated before it is returned, so a
//! machine built from config never hits a dangling state or event
//! reference at run time.
//!
//! # Format
//!
//! ```yaml
//! property: status
//! whinyTransitions: false
//! noDirectAssignment: false
//! states:
//!   - name: sleeping
//!   - name: running
//!     enter: startClock
//! events:
//!   - name: run
//!     transitions:
//!       - from: sleeping
//!         to: running
//!   - name: sleep
//!     transitions:
//!       - from: [running, cleaning]
//!         to: sleeping
//!         after: notify
//! ```

use crate::core::Definition;
use crate::validation::validate;
use std::fs;
use std::path::Path;
use stillwater::validation::Validation;

pub mod error;

pub use error::ConfigError;

/// Parse and validate a YAML definition.
pub fn from_yaml_str(source: &str) -> Result<Definition, ConfigError> {
    let definition: Definition =
        serde_yaml::from_str(source).map_err(|e| ConfigError::Parse {
            format: "YAML",
            reason: e.to_string(),
        })?;
    checked(definition)
}

/// Parse and validate a JSON definition.
pub fn from_json_str(source: &str) -> Result<Definition, ConfigError> {
    let definition: Definition =
        serde_json::from_str(source).map_err(|e| ConfigError::Parse {
            format: "JSON",
            reason: e.to_string(),
        })?;
    checked(definition)
}

/// Load a definition file, choosing the format from its extension
/// (`yaml`, `yml` or `json`, case-insensitive).
pub fn from_path(path: impl AsRef<Path>) -> Result<Definition, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let parse: fn(&str) -> Result<Definition, ConfigError> = match extension.as_str() {
        "yaml" | "yml" => from_yaml_str,
        "json" => from_json_str,
        _ => return Err(ConfigError::UnsupportedFormat { extension }),
    };

    let source = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let definition = parse(&source)?;
    tracing::debug!(
        path = %path.display(),
        states = definition.states().len(),
        events = definition.events().len(),
        "definition loaded"
    );
    Ok(definition)
}

pub fn to_yaml_string(definition: &Definition) -> Result<String, ConfigError> {
    serde_yaml::to_string(definition).map_err(|e| ConfigError::Serialization(e.to_string()))
}

pub fn to_json_string(definition: &Definition) -> Result<String, ConfigError> {
    serde_json::to_string_pretty(definition).map_err(|e| ConfigError::Serialization(e.to_string()))
}

fn checked(definition: Definition) -> Result<Definition, ConfigError> {
    match validate(&definition) {
        Validation::Success(_) => Ok(definition),
        Validation::Failure(issues) => {
            Err(ConfigError::Invalid(issues.iter().cloned().collect()))
        }
    }
}
