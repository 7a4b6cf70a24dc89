use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings file could not be read.
    #[error("Failed to read settings file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML or has a field of the wrong type.
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// Required setting is empty or absent.
    ///
    /// Check `settings.toml` for the named key.
    #[error("Missing required setting: {0}")]
    MissingField(String),

    /// Setting present but unusable.
    #[error("Invalid setting {field}: {reason}")]
    InvalidField { field: String, reason: String },
}
