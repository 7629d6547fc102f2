//! Platform abstraction layer
//!
//! This module isolates everything board code needs from the outside world:
//! the I2C core and the hardware identification service.

pub mod error;
pub mod hal;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{BusError, I2cError, Result};
pub use hal::HalI2cCore;
pub use traits::{AdapterGuard, BoardIdentity, BoardInfo, Client, HardwareIdentity, I2cCore};
