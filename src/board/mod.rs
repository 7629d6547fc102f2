//! Ux500 board sensor support
//!
//! ## Modules
//!
//! - `config`: Addresses, interrupt lines, orientations and per-boot configuration
//! - `variant`: Board/UIB/CPU detection and per-variant lookups
//! - `identify`: Accelerometer WHO_AM_I probe
//! - `registration`: Direct and probed device registration
//! - `bringup`: The boot-time sequence tying it together

pub mod bringup;
pub mod config;
pub mod identify;
pub mod registration;
pub mod variant;

pub use bringup::{run, BringupReport, BringupState};
pub use config::SensorConfigs;
pub use variant::BoardVariant;
