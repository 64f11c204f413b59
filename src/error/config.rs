use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// The template file could not be read from disk.
    #[error("Failed to read template file '{path}': {source}")]
    TemplateRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The template file is not valid JSON for the template schema.
    #[error("Failed to parse template: {0}")]
    TemplateParse(#[from] serde_json::Error),

    /// The template parsed but breaks an invariant the game relies on.
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}
