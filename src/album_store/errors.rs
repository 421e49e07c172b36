use super::models::AlbumId;
use thiserror::Error;

/// Conditions signaled by an [`AlbumStore`](super::AlbumStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Album {id} not found")]
    NotFound { id: AlbumId },

    #[error("{0}")]
    InvalidArgument(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
