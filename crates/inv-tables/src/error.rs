use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    #[error("failed to read tables file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML tables {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {table} table: {message}")]
    Invalid { table: &'static str, message: String },
}

impl TablesError {
    pub(crate) fn invalid(table: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            table,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TablesError>;
