//! Accelerometer chip identification
//!
//! The LSM303DLH and LSM303DLHC are pin compatible but sit at different
//! addresses and need different driver settings. Reading WHO_AM_I tells
//! them apart; the result is advisory only.

use super::config::{ACCEL_CANDIDATE_ADDRS, SENSOR_BUS};
use crate::devices::lsm303dlh::WHO_AM_I;
use crate::platform::{AdapterGuard, BusError, I2cCore, Result};

/// Read the accelerometer WHO_AM_I byte
///
/// Tries each candidate address in turn and returns the first byte read.
///
/// # Errors
///
/// Returns `BusError::AdapterUnavailable` without touching the bus if the
/// adapter cannot be acquired, otherwise the error of the last attempt.
pub fn read_accel_chip_id<C: I2cCore>(i2c: &mut C) -> Result<u8> {
    read_chip_id(i2c, SENSOR_BUS, &ACCEL_CANDIDATE_ADDRS, WHO_AM_I)
}

/// Read one identity register, trying `addrs` in order
pub fn read_chip_id<C: I2cCore>(i2c: &mut C, bus: u8, addrs: &[u8], reg: u8) -> Result<u8> {
    let Ok(mut guard) = AdapterGuard::acquire(i2c, bus) else {
        crate::log_error!("failed to get i2c adapter {}", bus);
        return Err(BusError::AdapterUnavailable(bus));
    };

    let mut last = BusError::NoResponder;
    for &addr in addrs {
        match guard.read_byte_data(addr, reg) {
            Ok(id) => return Ok(id),
            Err(e) => {
                crate::log_debug!("no id at {:#x} on i2c{}: {}", addr, bus, e);
                last = e;
            }
        }
    }
    Err(last)
}
