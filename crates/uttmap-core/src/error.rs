use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, DeployError>;

/// Every failure aborts the run; nothing here is recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: expected at least 2 fields, found {found}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        found: usize,
    },

    #[error("no '-'-separated token of '{utt_id}' contains prefix '{prefix}'")]
    UnresolvableId { utt_id: String, prefix: String },

    #[error("'{key}' (from '{utt_id}') has no entry in the source utt2dur")]
    UnknownKey { utt_id: String, key: String },
}

impl DeployError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeployError::Io {
            path: path.into(),
            source,
        }
    }
}
