//! Board variant detection
//!
//! The identification predicates are queried exactly once and folded into a
//! [`BoardVariant`]. Everything that differs between boards is then a
//! `match` on that value.

use super::config::{
    IrqLines, ACCEL_ADDR, ACCEL_ADDR_SNOWBALL, HREFV60_IRQS, L3G4200D_ORIENTATION, LSM303DLHC_A,
    LSM303DLH_A, LSM303DLH_ORIENTATION, MOP500_IRQS, SNOWBALL_IRQS, U8500_UIB_L3G4200D_ORIENTATION,
    U8500_UIB_LSM303DLH_ORIENTATION,
};
use crate::devices::Orientation;
use crate::platform::HardwareIdentity;

/// Machine (main board) type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Machine {
    HrefV60,
    U8520,
    U9540,
    Snowball,
    /// MOP500 or any board not listed above
    Mop500,
}

/// User interface board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Uib {
    Stuib,
    U8500,
    U8500R3,
    /// No UIB, or one without these sensors
    Other,
}

/// DB8500 silicon revision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CpuRevision {
    U8500V21,
    Other,
}

/// How the accelerometer gets registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRegistration {
    /// Address cannot be known on this hardware; probe the candidates
    Probe,
    /// Register directly at a fixed address
    Direct {
        type_name: &'static str,
        addr: u8,
    },
}

/// Resolved hardware variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardVariant {
    pub machine: Machine,
    pub uib: Uib,
    pub cpu: CpuRevision,
}

impl BoardVariant {
    /// Query the identification service once
    ///
    /// Machine and UIB predicates are expected to be mutually exclusive;
    /// if several hold, the first in declaration order wins.
    pub fn detect<H: HardwareIdentity + ?Sized>(id: &H) -> Self {
        let machine = if id.machine_is_hrefv60() {
            Machine::HrefV60
        } else if id.machine_is_u8520() {
            Machine::U8520
        } else if id.machine_is_u9540() {
            Machine::U9540
        } else if id.machine_is_snowball() {
            Machine::Snowball
        } else {
            Machine::Mop500
        };

        let uib = if id.uib_is_stuib() {
            Uib::Stuib
        } else if id.uib_is_u8500uib() {
            Uib::U8500
        } else if id.uib_is_u8500uibr3() {
            Uib::U8500R3
        } else {
            Uib::Other
        };

        let cpu = if id.cpu_is_u8500v21() {
            CpuRevision::U8500V21
        } else {
            CpuRevision::Other
        };

        Self { machine, uib, cpu }
    }

    /// Snowball carries the sensors on board; everything else needs a
    /// sensor-equipped UIB
    pub fn sensors_present(&self) -> bool {
        self.machine == Machine::Snowball || self.uib != Uib::Other
    }

    /// Accelerometer/magnetometer interrupt wiring
    pub fn irq_lines(&self) -> IrqLines {
        match self.machine {
            Machine::HrefV60 | Machine::U8520 | Machine::U9540 => HREFV60_IRQS,
            Machine::Snowball => SNOWBALL_IRQS,
            Machine::Mop500 => MOP500_IRQS,
        }
    }

    /// Orientation of the accelerometer/magnetometer and of the gyroscope
    pub fn orientations(&self) -> (Orientation, Orientation) {
        match self.uib {
            Uib::U8500 | Uib::U8500R3 => (
                U8500_UIB_LSM303DLH_ORIENTATION,
                U8500_UIB_L3G4200D_ORIENTATION,
            ),
            Uib::Stuib | Uib::Other => (LSM303DLH_ORIENTATION, L3G4200D_ORIENTATION),
        }
    }

    pub fn accel_registration(&self) -> AccelRegistration {
        match (self.machine, self.cpu) {
            // V7 moved the accelerometer and nothing tells us which board this is
            (Machine::Snowball, CpuRevision::U8500V21) => AccelRegistration::Probe,
            (Machine::Snowball, CpuRevision::Other) => AccelRegistration::Direct {
                type_name: LSM303DLHC_A,
                addr: ACCEL_ADDR_SNOWBALL,
            },
            _ => AccelRegistration::Direct {
                type_name: LSM303DLH_A,
                addr: ACCEL_ADDR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::GpioLine;
    use crate::platform::BoardIdentity;

    fn variant(id: BoardIdentity) -> BoardVariant {
        BoardVariant::detect(&id)
    }

    #[test]
    fn test_no_sensors_without_snowball_or_uib() {
        for id in [
            BoardIdentity::default(),
            BoardIdentity {
                hrefv60: true,
                ..Default::default()
            },
            BoardIdentity {
                u9540: true,
                u8500v21: true,
                ..Default::default()
            },
        ] {
            assert!(!variant(id).sensors_present(), "{:?}", id);
        }
    }

    #[test]
    fn test_sensors_present() {
        for id in [
            BoardIdentity {
                snowball: true,
                ..Default::default()
            },
            BoardIdentity {
                stuib: true,
                ..Default::default()
            },
            BoardIdentity {
                u8500uib: true,
                ..Default::default()
            },
            BoardIdentity {
                u8500uibr3: true,
                ..Default::default()
            },
        ] {
            assert!(variant(id).sensors_present(), "{:?}", id);
        }
    }

    #[test]
    fn test_irq_groups() {
        for id in [
            BoardIdentity {
                hrefv60: true,
                stuib: true,
                ..Default::default()
            },
            BoardIdentity {
                u8520: true,
                stuib: true,
                ..Default::default()
            },
            BoardIdentity {
                u9540: true,
                stuib: true,
                ..Default::default()
            },
        ] {
            assert_eq!(variant(id).irq_lines(), HREFV60_IRQS);
        }

        let snowball = variant(BoardIdentity {
            snowball: true,
            ..Default::default()
        });
        assert_eq!(snowball.irq_lines(), SNOWBALL_IRQS);
        assert_eq!(snowball.irq_lines().accel_int1, GpioLine(163));

        let mop500 = variant(BoardIdentity {
            stuib: true,
            ..Default::default()
        });
        assert_eq!(mop500.machine, Machine::Mop500);
        assert_eq!(mop500.irq_lines(), MOP500_IRQS);
    }

    #[test]
    fn test_u8500_uibs_override_orientation() {
        for id in [
            BoardIdentity {
                u8500uib: true,
                ..Default::default()
            },
            BoardIdentity {
                u8500uibr3: true,
                ..Default::default()
            },
        ] {
            let (accel, gyro) = variant(id).orientations();
            assert_eq!(
                (accel.axis_map_x, accel.axis_map_y, accel.axis_map_z),
                (1, 0, 2)
            );
            assert_eq!(
                (accel.negative_x, accel.negative_y, accel.negative_z),
                (false, false, true)
            );
            assert_eq!((gyro.axis_map_x, gyro.axis_map_y, gyro.axis_map_z), (0, 1, 2));
            assert_eq!(
                (gyro.negative_x, gyro.negative_y, gyro.negative_z),
                (true, false, true)
            );
        }
    }

    #[test]
    fn test_other_uibs_keep_default_orientation() {
        for id in [
            BoardIdentity {
                stuib: true,
                ..Default::default()
            },
            BoardIdentity {
                snowball: true,
                ..Default::default()
            },
        ] {
            assert_eq!(
                variant(id).orientations(),
                (LSM303DLH_ORIENTATION, L3G4200D_ORIENTATION)
            );
        }
    }

    #[test]
    fn test_accel_registration() {
        let ambiguous = variant(BoardIdentity {
            snowball: true,
            u8500v21: true,
            ..Default::default()
        });
        assert_eq!(ambiguous.accel_registration(), AccelRegistration::Probe);

        let snowball = variant(BoardIdentity {
            snowball: true,
            ..Default::default()
        });
        assert_eq!(
            snowball.accel_registration(),
            AccelRegistration::Direct {
                type_name: "lsm303dlhc_a",
                addr: 0x19
            }
        );

        // The CPU revision only matters on Snowball
        let href = variant(BoardIdentity {
            hrefv60: true,
            u8500uib: true,
            u8500v21: true,
            ..Default::default()
        });
        assert_eq!(
            href.accel_registration(),
            AccelRegistration::Direct {
                type_name: "lsm303dlh_a",
                addr: 0x18
            }
        );
    }
}
