//! Axis orientation
//!
//! Maps a chip's physical sensing axes onto the board's logical X/Y/Z.

/// Axis permutation and sign mapping
///
/// `axis_map_x = 1` means logical X is read from the chip's physical Y axis.
/// `negative_*` inverts the logical axis after the permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Orientation {
    pub axis_map_x: u8,
    pub axis_map_y: u8,
    pub axis_map_z: u8,
    pub negative_x: bool,
    pub negative_y: bool,
    pub negative_z: bool,
}

impl Orientation {
    /// Identity mapping, no inversion
    pub const IDENTITY: Self = Self {
        axis_map_x: 0,
        axis_map_y: 1,
        axis_map_z: 2,
        negative_x: false,
        negative_y: false,
        negative_z: false,
    };

    /// Check that the axis map is a permutation of {0, 1, 2}
    pub const fn is_valid(&self) -> bool {
        let (x, y, z) = (self.axis_map_x, self.axis_map_y, self.axis_map_z);
        x < 3 && y < 3 && z < 3 && x != y && y != z && x != z
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}
