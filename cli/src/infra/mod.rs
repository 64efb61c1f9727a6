//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: HTTP, the config file,
//! process execution, signals, and log setup.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod api;
pub mod config;
pub mod logging;
pub mod signal;
pub mod ssh;
