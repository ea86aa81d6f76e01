// File: crates/engagement-core/src/error.rs
// Summary: Error type shared by loading, coercion, configuration and rendering.

use std::path::PathBuf;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A record has no value for a field the pipeline reads.
    #[error("row {row}: missing field `{field}`")]
    MissingField { row: usize, field: String },

    #[error("row {row}: field `{field}` is not a number: {value:?}")]
    InvalidNumber { row: usize, field: String, value: String },

    #[error("cannot build {what} from an empty domain")]
    EmptyDomain { what: &'static str },

    #[error("invalid color {value:?}: {reason}")]
    Color { value: String, reason: String },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("cannot encode config defaults: {0}")]
    ConfigDefaults(#[from] toml::ser::Error),

    #[error("render failed: {0}")]
    Render(String),
}
