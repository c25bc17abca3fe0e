//! Integration tests for Balade.
//!
//! The tests under `tests/` run every generator over the built-in registry.
//!
//! ```bash
//! cargo test -p balade-integration-tests
//! ```
