use std::error::Error as StdError;

/// Errors that can occur while estimating π.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("dart source error: {0}")]
    Source(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn dart_source<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Source(Box::new(err))
    }
}
