//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod audit;
pub mod config;
pub mod device;
pub mod error;
pub mod poll;
pub mod ssh;
pub mod status;

pub use audit::{AuditCursor, Verdict, classify_verdict};
pub use config::IronsConfig;
pub use device::{DevicePollStatus, next_device_step};
pub use error::{ConfigError, PollError, StatusError};
pub use poll::{PollOutcome, PollSettings};
pub use status::{ExpectedStates, Health, StatusClass, classify_status};
