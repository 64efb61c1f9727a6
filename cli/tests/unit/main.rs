//! Unit tests for the irons CLI
//!
//! These tests use hand-written port doubles and a paused tokio clock, so they
//! run fast without network or terminal I/O.

mod lifecycle_service;
mod property_tests;
