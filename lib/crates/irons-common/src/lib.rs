pub mod audit;
pub mod device;
pub mod types;

pub use audit::{AuditEvent, AuditPage};
pub use device::{DeviceCodeResponse, DevicePollResponse};
pub use types::*;
