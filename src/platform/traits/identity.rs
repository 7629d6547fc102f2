//! Hardware identification interface
//!
//! Boolean queries answered by the machine/board identification service.
//! Board code resolves these once into a `BoardVariant` and never asks again.

/// Hardware identification queries
pub trait HardwareIdentity {
    /// Snowball community board
    fn machine_is_snowball(&self) -> bool;
    /// HREF v60 reference board
    fn machine_is_hrefv60(&self) -> bool;
    /// U8520 reference board
    fn machine_is_u8520(&self) -> bool;
    /// U9540 reference board
    fn machine_is_u9540(&self) -> bool;
    /// ST user interface board
    fn uib_is_stuib(&self) -> bool;
    /// U8500 user interface board
    fn uib_is_u8500uib(&self) -> bool;
    /// U8500 user interface board, revision 3
    fn uib_is_u8500uibr3(&self) -> bool;
    /// DB8500 silicon revision v2.1
    fn cpu_is_u8500v21(&self) -> bool;
}

/// Fixed answers to the identification queries
///
/// Firmware that knows its hardware at build time can use this directly;
/// it is also the natural test double.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardIdentity {
    pub snowball: bool,
    pub hrefv60: bool,
    pub u8520: bool,
    pub u9540: bool,
    pub stuib: bool,
    pub u8500uib: bool,
    pub u8500uibr3: bool,
    pub u8500v21: bool,
}

impl HardwareIdentity for BoardIdentity {
    fn machine_is_snowball(&self) -> bool {
        self.snowball
    }

    fn machine_is_hrefv60(&self) -> bool {
        self.hrefv60
    }

    fn machine_is_u8520(&self) -> bool {
        self.u8520
    }

    fn machine_is_u9540(&self) -> bool {
        self.u9540
    }

    fn uib_is_stuib(&self) -> bool {
        self.stuib
    }

    fn uib_is_u8500uib(&self) -> bool {
        self.u8500uib
    }

    fn uib_is_u8500uibr3(&self) -> bool {
        self.u8500uibr3
    }

    fn cpu_is_u8500v21(&self) -> bool {
        self.u8500v21
    }
}
