//! Shared constants for end-to-end tests
//!
//! When the fixture jobs change, update only this file and fixtures.rs.

// ============================================================================
// Fixture Jobs
// ============================================================================

/// Deadline three days out, inside "This Week"
pub const TAX_OFFICER_TITLE: &str = "Income Tax Officer";

/// Deadline twenty days out, inside "This Month" only
pub const MEDICAL_OFFICER_TITLE: &str = "Medical Officer - MBBS";

/// Deadline forty days out, outside both buckets
pub const ENGINEER_TITLE: &str = "Junior Engineer - Civil";

/// Deadline in the past, never listed
pub const EXPIRED_TITLE: &str = "Railway Ticket Clerk";

/// Deadline that cannot be parsed, always listed but never in a bucket
pub const UNDATED_TITLE: &str = "Archive Assistant";

pub const RAILWAYS_DEPARTMENT: &str = "Indian Railways";

/// Jobs put in the store at spawn, expired one included
pub const FIXTURE_JOBS_COUNT: usize = 5;

/// Jobs visible through the listing endpoint
pub const ACTIVE_FIXTURE_JOBS_COUNT: usize = 4;

/// Jobs produced by one run of the mock scraper
pub const SCRAPED_JOBS_COUNT: usize = 3;

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for the server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness checks
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// Timeout for HTTP requests made by TestClient
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
