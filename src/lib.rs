#![cfg_attr(not(test), no_std)]

//! ux500_sensors - Sensor bus bring-up for Ux500 reference boards
//!
//! Registers the LSM303DLH accelerometer/magnetometer, the L3G4200D gyroscope
//! and the LPS001WP barometer on I2C bus 2, choosing interrupt wiring, axis
//! orientation and accelerometer address from the detected board and UIB.
//!
//! The I2C core and the hardware identification service are consumed through
//! the traits in [`platform::traits`]. [`board::bringup::run`] is the entry
//! point executed once at boot.

#[cfg(all(feature = "mock", not(test)))]
extern crate std;

// Logging macros (log_info!, log_warn!, log_error!, log_debug!) are exported
// at crate root via #[macro_export]
pub mod core;

// Bus and hardware-identity abstractions
pub mod platform;

// Sensor platform data consumed by the chip drivers
pub mod devices;

// Board tables, variant detection and the bring-up sequence
pub mod board;
