use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("No catalog files (*.json) found in {path}")]
    EmptyCatalogDir { path: String },

    #[error("Invalid catalog path pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("No items file given (use --items or set `items` in the config file)")]
    MissingItems,
}
