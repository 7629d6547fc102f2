//! Board sensor tables
//!
//! Bus wiring, interrupt lines, orientations and driver names for the
//! sensors on I2C bus 2 of the Ux500 reference boards, plus the per-boot
//! [`SensorConfigs`] built from them.

use crate::devices::{
    GpioLine, L3g4200dPlatformData, Lps001wpPlatformData, Lsm303dlhPlatformData, Orientation,
    PlatformData,
};
use crate::platform::BoardInfo;

/// Bus all three sensor chips sit on
pub const SENSOR_BUS: u8 = 2;

/// Accelerometer address on MOP500/HREF and early Snowball
pub const ACCEL_ADDR: u8 = 0x18;
/// Accelerometer address on Snowball V7 and later
pub const ACCEL_ADDR_SNOWBALL: u8 = 0x19;
pub const MAGNETOMETER_ADDR: u8 = 0x1E;
pub const GYROSCOPE_ADDR: u8 = 0x68;
pub const BAROMETER_ADDR: u8 = 0x5C;

/// Candidate accelerometer addresses, in probe order
pub const ACCEL_CANDIDATE_ADDRS: [u8; 2] = [ACCEL_ADDR, ACCEL_ADDR_SNOWBALL];

// Driver type names
pub const LSM303DLH_A: &str = "lsm303dlh_a";
pub const LSM303DLHC_A: &str = "lsm303dlhc_a";
pub const LSM303DLH_M: &str = "lsm303dlh_m";
pub const L3G4200D: &str = "l3g4200d";
pub const LPS001WP_PRS: &str = "lps001wp_prs";

/// Interrupt lines of the accelerometer/magnetometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IrqLines {
    pub accel_int1: GpioLine,
    pub accel_int2: GpioLine,
    pub magnet_drdy: GpioLine,
}

/// MOP500 and anything not listed below
pub const MOP500_IRQS: IrqLines = IrqLines {
    accel_int1: GpioLine(66),
    accel_int2: GpioLine(67),
    magnet_drdy: GpioLine(32),
};

/// HREF v60, U8520 and U9540
pub const HREFV60_IRQS: IrqLines = IrqLines {
    accel_int1: GpioLine(82),
    accel_int2: GpioLine(83),
    magnet_drdy: GpioLine(31),
};

pub const SNOWBALL_IRQS: IrqLines = IrqLines {
    accel_int1: GpioLine(163),
    accel_int2: GpioLine(164),
    magnet_drdy: GpioLine(165),
};

pub const LSM303DLH_ORIENTATION: Orientation = Orientation {
    axis_map_x: 0,
    axis_map_y: 1,
    axis_map_z: 2,
    negative_x: true,
    negative_y: true,
    negative_z: false,
};

pub const L3G4200D_ORIENTATION: Orientation = Orientation {
    axis_map_x: 1,
    axis_map_y: 0,
    axis_map_z: 2,
    negative_x: false,
    negative_y: false,
    negative_z: true,
};

/// Accelerometer/magnetometer as mounted on the U8500 UIBs
pub const U8500_UIB_LSM303DLH_ORIENTATION: Orientation = Orientation {
    axis_map_x: 1,
    axis_map_y: 0,
    axis_map_z: 2,
    negative_x: false,
    negative_y: false,
    negative_z: true,
};

/// Gyroscope as mounted on the U8500 UIBs
pub const U8500_UIB_L3G4200D_ORIENTATION: Orientation = Orientation {
    axis_map_x: 0,
    axis_map_y: 1,
    axis_map_z: 2,
    negative_x: true,
    negative_y: false,
    negative_z: true,
};

pub const LPS001WP_PDATA: Lps001wpPlatformData = Lps001wpPlatformData {
    poll_interval_ms: 1000,
    min_interval_ms: 10,
};

/// Configuration of the three sensor chips for one bring-up
///
/// Starts from the board defaults; the bring-up writes interrupt lines,
/// orientation overrides and the chip id before registering anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfigs {
    pub accel_mag: Lsm303dlhPlatformData,
    pub gyro: L3g4200dPlatformData,
    pub baro: Lps001wpPlatformData,
}

impl Default for SensorConfigs {
    fn default() -> Self {
        Self {
            accel_mag: Lsm303dlhPlatformData {
                name_a: "lsm303dlh.0",
                name_m: "lsm303dlh.1",
                orientation: LSM303DLH_ORIENTATION,
                irq_a1: None,
                irq_a2: None,
                irq_m: None,
                chip_id: None,
            },
            gyro: L3g4200dPlatformData {
                name_gyr: "l3g4200d",
                orientation: L3G4200D_ORIENTATION,
            },
            baro: LPS001WP_PDATA,
        }
    }
}

impl SensorConfigs {
    pub fn set_irq_lines(&mut self, irqs: IrqLines) {
        self.accel_mag.irq_a1 = Some(irqs.accel_int1);
        self.accel_mag.irq_a2 = Some(irqs.accel_int2);
        self.accel_mag.irq_m = Some(irqs.magnet_drdy);
    }

    /// Accelerometer descriptor under the given driver name and address
    pub fn accelerometer(&self, type_name: &'static str, addr: u8) -> BoardInfo {
        BoardInfo::new(type_name, addr, PlatformData::Lsm303dlh(self.accel_mag))
    }

    /// Magnetometer, gyroscope and barometer descriptors
    ///
    /// These never move between boards.
    pub fn fixed_devices(&self) -> [BoardInfo; 3] {
        [
            BoardInfo::new(
                LSM303DLH_M,
                MAGNETOMETER_ADDR,
                PlatformData::Lsm303dlh(self.accel_mag),
            ),
            BoardInfo::new(L3G4200D, GYROSCOPE_ADDR, PlatformData::L3g4200d(self.gyro)),
            BoardInfo::new(LPS001WP_PRS, BAROMETER_ADDR, PlatformData::Lps001wp(self.baro)),
        ]
    }
}
