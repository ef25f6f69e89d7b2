use std::{io, path::PathBuf};

use thiserror::Error;

use iconir::types::GlyphName;

#[derive(Debug, Error)]
pub enum Error {
    #[error("'{0}' exists but is not a directory")]
    ExpectedDirectory(PathBuf),
    #[error("io failed for '{path}': '{source}'")]
    FileIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unrecognized source {0}")]
    UnrecognizedSource(PathBuf),
    #[error("Duplicate icon name '{0}'")]
    DuplicateGlyphName(GlyphName),
    #[error(transparent)]
    YamlSerError(#[from] serde_yaml::Error),
    #[error(transparent)]
    IconIrError(#[from] iconir::error::Error),
    #[error(transparent)]
    Backend(#[from] iconbe::error::Error),
}
