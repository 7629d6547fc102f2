//! Platform error types
//!
//! This module defines error types for I2C core operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, BusError>;

/// I2C core errors
///
/// Backends map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Adapter for the given bus number is not registered (or already taken)
    AdapterUnavailable(u8),
    /// Raw transfer failed
    Transfer(I2cError),
    /// A client is already bound to this address
    AddressBusy(u8),
    /// No candidate address answered a probe
    NoResponder,
    /// Device was rejected by the core (driver refused it, bad descriptor, ...)
    Rejected,
    /// Fixed-capacity client or deferred table is full
    TableFull,
}

/// I2C transfer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cError {
    /// Bus error occurred
    Bus,
    /// No acknowledgment received
    Nack,
    /// Arbitration lost
    ArbitrationLost,
    /// Timeout occurred
    Timeout,
    /// Invalid address
    InvalidAddress,
}

impl From<embedded_hal::i2c::ErrorKind> for I2cError {
    fn from(kind: embedded_hal::i2c::ErrorKind) -> Self {
        use embedded_hal::i2c::ErrorKind;

        match kind {
            ErrorKind::NoAcknowledge(_) => I2cError::Nack,
            ErrorKind::ArbitrationLoss => I2cError::ArbitrationLost,
            ErrorKind::Bus | ErrorKind::Overrun => I2cError::Bus,
            // ErrorKind is non_exhaustive; anything new is reported as a bus fault
            _ => I2cError::Bus,
        }
    }
}

impl From<I2cError> for BusError {
    fn from(e: I2cError) -> Self {
        BusError::Transfer(e)
    }
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::AdapterUnavailable(bus) => write!(f, "I2C adapter {} unavailable", bus),
            BusError::Transfer(e) => write!(f, "I2C transfer failed: {}", e),
            BusError::AddressBusy(addr) => write!(f, "Address {:#04x} already in use", addr),
            BusError::NoResponder => write!(f, "No device answered at any candidate address"),
            BusError::Rejected => write!(f, "Device registration rejected"),
            BusError::TableFull => write!(f, "Device table full"),
        }
    }
}

impl fmt::Display for I2cError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            I2cError::Bus => write!(f, "bus error"),
            I2cError::Nack => write!(f, "no acknowledge"),
            I2cError::ArbitrationLost => write!(f, "arbitration lost"),
            I2cError::Timeout => write!(f, "timeout"),
            I2cError::InvalidAddress => write!(f, "invalid address"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};

    #[test]
    fn test_hal_error_kind_mapping() {
        assert_eq!(
            I2cError::from(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)),
            I2cError::Nack
        );
        assert_eq!(I2cError::from(ErrorKind::ArbitrationLoss), I2cError::ArbitrationLost);
        assert_eq!(I2cError::from(ErrorKind::Overrun), I2cError::Bus);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            BusError::AdapterUnavailable(2).to_string(),
            "I2C adapter 2 unavailable"
        );
        assert_eq!(
            BusError::Transfer(I2cError::Nack).to_string(),
            "I2C transfer failed: no acknowledge"
        );
        assert_eq!(
            BusError::AddressBusy(0x18).to_string(),
            "Address 0x18 already in use"
        );
    }
}
