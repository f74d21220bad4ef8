#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Rule `{rule}` is not part of the {source_name} vocabulary")]
    UnknownRule { rule: String, source_name: String },

    #[error("Invalid glyph table: {0}")]
    GlyphTable(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
