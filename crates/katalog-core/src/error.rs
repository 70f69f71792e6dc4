use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum KatalogError {
    #[error("the uploaded file appears to be empty")]
    EmptyInput,

    #[error("failed to load ruleset from {path}: {reason}")]
    RulesetLoad { path: PathBuf, reason: String },

    #[error("invalid ruleset: {0}")]
    RulesetInvalid(String),

    #[error("{count} row(s) matched no category rule (first Kod: '{first_kod}'). Add a catch-all rule to the ruleset")]
    UnmatchedRows { count: usize, first_kod: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("nothing to export: the catalog has no columns")]
    NoColumns,

    #[error("no product with Kod '{0}' in the catalog")]
    ProductNotFound(String),

    #[error("catalog store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
