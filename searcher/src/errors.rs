use thiserror::Error;

/// Error produced when a search fails.
///
/// The error holds the endpoints of the failed search, so the
/// message is rendered from them on demand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError<N> {
    /// The frontier was exhausted before reaching the destination.
    #[error("A path from source {{{origin}}} to target {{{destination}}} not found.")]
    PathNotFound { origin: N, destination: N },
}

impl<N> SearchError<N> {
    /// The node the search started from.
    pub fn origin(&self) -> &N {
        match self {
            SearchError::PathNotFound { origin, .. } => origin,
        }
    }

    /// The node the search was looking for.
    pub fn destination(&self) -> &N {
        match self {
            SearchError::PathNotFound { destination, .. } => destination,
        }
    }
}

/// Result when a search method might fail.
pub type Result<T, N> = std::result::Result<T, SearchError<N>>;
