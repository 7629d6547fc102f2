//! LSM303DLH accelerometer + magnetometer platform data
//!
//! The same record is handed to both halves of the chip: the accelerometer
//! reads `name_a`, `irq_a1`, `irq_a2` and `chip_id`, the magnetometer reads
//! `name_m` and `irq_m`. Both use the orientation.

use super::{GpioLine, Orientation};

/// Accelerometer identity register (WHO_AM_I)
pub const WHO_AM_I: u8 = 0x0F;

/// WHO_AM_I value of the original LSM303DLH accelerometer
pub const WHO_AM_I_LSM303DLH: u8 = 0x32;

/// WHO_AM_I value of the LSM303DLHC accelerometer
pub const WHO_AM_I_LSM303DLHC: u8 = 0x33;

/// Accelerometer silicon variant, decoded from WHO_AM_I
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelChip {
    Lsm303dlh,
    Lsm303dlhc,
    /// Answered with an id we do not know
    Unknown(u8),
}

impl AccelChip {
    pub fn from_who_am_i(id: u8) -> Self {
        match id {
            WHO_AM_I_LSM303DLH => AccelChip::Lsm303dlh,
            WHO_AM_I_LSM303DLHC => AccelChip::Lsm303dlhc,
            other => AccelChip::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lsm303dlhPlatformData {
    /// Accelerometer instance name
    pub name_a: &'static str,
    /// Magnetometer instance name
    pub name_m: &'static str,
    pub orientation: Orientation,
    /// Accelerometer interrupt 1
    pub irq_a1: Option<GpioLine>,
    /// Accelerometer interrupt 2
    pub irq_a2: Option<GpioLine>,
    /// Magnetometer data-ready
    pub irq_m: Option<GpioLine>,
    /// Raw WHO_AM_I byte, if the identification read succeeded
    pub chip_id: Option<u8>,
}

impl Lsm303dlhPlatformData {
    /// Decoded accelerometer variant, `None` if identification failed
    pub fn chip(&self) -> Option<AccelChip> {
        self.chip_id.map(AccelChip::from_who_am_i)
    }
}
