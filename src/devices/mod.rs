//! Sensor platform data
//!
//! Each chip driver receives one of these records through its device
//! descriptor. Field layout follows what the drivers read: axis maps and
//! signs, interrupt lines, chip id and polling intervals.
//!
//! ## Modules
//!
//! - `orientation`: Axis permutation and sign mapping
//! - `lsm303dlh`: Accelerometer + magnetometer platform data
//! - `l3g4200d`: Gyroscope platform data
//! - `lps001wp`: Barometer platform data

pub mod l3g4200d;
pub mod lps001wp;
pub mod lsm303dlh;
pub mod orientation;

pub use l3g4200d::L3g4200dPlatformData;
pub use lps001wp::Lps001wpPlatformData;
pub use lsm303dlh::{AccelChip, Lsm303dlhPlatformData};
pub use orientation::Orientation;

/// Opaque GPIO line number used as a sensor interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioLine(pub u16);

/// Platform data attached to a device descriptor
///
/// Holds a copy of the final configuration; descriptors are built only after
/// configuration selection is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformData {
    /// LSM303DLH / LSM303DLHC (both accelerometer and magnetometer halves)
    Lsm303dlh(Lsm303dlhPlatformData),
    /// L3G4200D gyroscope
    L3g4200d(L3g4200dPlatformData),
    /// LPS001WP pressure sensor
    Lps001wp(Lps001wpPlatformData),
}
