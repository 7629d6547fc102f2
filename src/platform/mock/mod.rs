//! Mock platform implementation for testing
//!
//! This module provides a recording I2C core that can be used to unit test
//! board code without hardware or a HAL.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use ux500_sensors::platform::mock::MockI2cCore;
//!
//! let mut i2c = MockI2cCore::new()
//!     .with_adapter(2)
//!     .with_register(0x19, 0x0F, 0x33);
//! ```

#![cfg(any(test, feature = "mock"))]

mod i2c;

pub use i2c::{I2cOp, MockAdapter, MockI2cCore};
