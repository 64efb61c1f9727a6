//! Integration tests for the irons CLI
//!
//! These tests spawn the actual binary and check argument parsing, config
//! resolution and error reporting end to end. None of them reach the network.

mod cli_tests;
mod config_resolution;
