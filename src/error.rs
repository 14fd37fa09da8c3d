use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can stop a generation run. Nothing here is retried; the
/// first error ends the run and already written icons stay on disk.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("read tower document {path:?}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse tower document {path:?}")]
    ParseDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("tower document has no `towers` array")]
    MissingTowers,
    #[error("tower #{index} has no string `name`")]
    MissingName { index: usize },
    #[error("tower #{index} has an empty `name`")]
    EmptyName { index: usize },
    #[error("create output directory {path:?}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write icon {path:?}")]
    WriteIcon {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("serialize tower document")]
    SerializeDocument(#[source] serde_json::Error),
    #[error("write tower document {path:?}")]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
