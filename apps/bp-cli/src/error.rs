//! Error types for the bp-cli front-end.

use bp_blend::BlendError;

/// Everything that can stop a CLI command: bad text, a failed blend, or a
/// report that could not be serialized.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("No numbers given for {field}")]
    Empty { field: &'static str },

    #[error("Could not parse '{token}' in {field} as a number")]
    Parse { field: &'static str, token: String },

    #[error("{what}")]
    Unsupported { what: String },

    #[error("Blend failed: {0}")]
    Blend(#[from] BlendError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML output failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for bp-cli commands.
pub type CliResult<T> = Result<T, CliError>;
