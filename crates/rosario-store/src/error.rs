//! Error types for preference storage.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse preferences")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize preferences")]
    Serialize(#[from] toml::ser::Error),
    #[error("could not determine the configuration directory")]
    NoConfigDir,
    /// Failure reported by a custom [`PreferenceStore`](crate::PreferenceStore)
    /// backend that has no more specific variant.
    #[error("{0}")]
    Message(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::*;

    #[test]
    fn io_message_leaves_the_cause_to_the_source_chain() {
        let error = StoreError::io(
            "/tmp/settings.toml",
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only file system"),
        );
        assert_eq!(error.to_string(), "io error on /tmp/settings.toml");
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("read-only file system"));
    }

    #[test]
    fn parse_message_leaves_the_cause_to_the_source_chain() {
        let Err(cause) = toml::from_str::<toml::Table>("language = = ") else {
            panic!("expected a parse error");
        };
        let error = StoreError::from(cause);
        assert_eq!(error.to_string(), "failed to parse preferences");
        assert!(error.source().is_some());
    }
}
