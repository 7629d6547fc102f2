//! L3G4200D gyroscope platform data

use super::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct L3g4200dPlatformData {
    /// Gyroscope instance name
    pub name_gyr: &'static str,
    pub orientation: Orientation,
}
