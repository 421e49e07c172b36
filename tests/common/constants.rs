//! Shared constants for end-to-end tests
//!
//! When the sample catalog changes, update only this file.

// ============================================================================
// Sample Catalog
// ============================================================================

/// Number of albums a seeded server starts with
pub const SEEDED_ALBUM_COUNT: usize = 6;

/// Id the first album created on a seeded server receives
pub const NEXT_SEEDED_ID: i64 = 7;

/// Album 1 title
pub const ALBUM_1_TITLE: &str = "You, Me and an App Id";

/// Album 1 artist
pub const ALBUM_1_ARTIST: &str = "Daprize";

/// Album 3 artist
pub const ALBUM_3_ARTIST: &str = "KEDA Club";

/// Title of the most expensive sample album (14.99)
pub const MOST_EXPENSIVE_TITLE: &str = "Sweet Container O' Mine";

/// Mean price of the sample albums, rounded to cents
pub const SEEDED_AVERAGE_PRICE: f64 = 13.32;

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
