//! Album API Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod album_store;
pub mod config;
pub mod server;
pub mod stats;

// Re-export commonly used types for convenience
pub use album_store::{Album, AlbumStore, InMemoryAlbumStore};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
