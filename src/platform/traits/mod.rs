//! Platform abstraction traits
//!
//! This module defines the services board code consumes from the platform.

pub mod i2c;
pub mod identity;

// Re-export trait interfaces
pub use i2c::{AdapterGuard, BoardInfo, Client, I2cCore};
pub use identity::{BoardIdentity, HardwareIdentity};
