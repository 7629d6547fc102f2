//! LPS001WP pressure sensor platform data

/// Polling configuration for the barometer
///
/// Both intervals are in milliseconds. The driver never polls faster than
/// `min_interval_ms`, whatever userspace asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lps001wpPlatformData {
    pub poll_interval_ms: u32,
    pub min_interval_ms: u32,
}
