use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to compile a binary font")]
    Compile(#[source] Box<dyn StdError + Send + Sync>),
    #[error("unable to compress to woff2")]
    Compress(#[source] Box<dyn StdError + Send + Sync>),
}
