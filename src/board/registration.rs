//! Device registration
//!
//! Two ways of putting a sensor on the bus:
//!
//! - [`add_devices`]: fixed descriptors. If the bus is not up yet the
//!   descriptors are queued with the core and bound later.
//! - [`probe_add`]: one descriptor whose address is ambiguous. Needs a live
//!   bus to probe, so there is no deferred path.
//!
//! Failures are logged and reported in the outcome, never propagated.

use crate::platform::{AdapterGuard, BoardInfo, Client, I2cCore};

/// Result of [`add_devices`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddOutcome {
    /// Bus not up yet; descriptors handed to the core's deferred queue
    Deferred { queued: usize },
    /// Bus present; each descriptor either bound or failed
    Registered { registered: usize, failed: usize },
}

/// Register `infos` on `bus`
///
/// A failing descriptor does not stop the others. The adapter is released
/// once, after the last descriptor.
pub fn add_devices<C: I2cCore>(i2c: &mut C, bus: u8, infos: &[BoardInfo]) -> AddOutcome {
    let mut guard = match AdapterGuard::acquire(i2c, bus) {
        Ok(guard) => guard,
        Err(i2c) => {
            crate::log_info!("i2c adapter {} not up yet, queueing devices", bus);
            let queued = match i2c.register_board_info(bus, infos) {
                Ok(()) => infos.len(),
                Err(e) => {
                    crate::log_error!("failed to queue devices for i2c{}: {}", bus, e);
                    0
                }
            };
            return AddOutcome::Deferred { queued };
        }
    };

    let mut registered = 0;
    let mut failed = 0;
    for info in infos {
        match guard.new_device(info) {
            Ok(client) => {
                crate::log_debug!(
                    "registered {} at {:#x} on i2c{}",
                    client.type_name,
                    client.addr,
                    bus
                );
                registered += 1;
            }
            Err(e) => {
                crate::log_error!("failed to register {} to i2c{}: {}", info.type_name, bus, e);
                failed += 1;
            }
        }
    }

    AddOutcome::Registered { registered, failed }
}

/// Register `info` at the first of `candidates` that answers
///
/// Returns `None` if the bus is not up or nothing answered.
pub fn probe_add<C: I2cCore>(
    i2c: &mut C,
    bus: u8,
    info: &BoardInfo,
    candidates: &[u8],
) -> Option<Client> {
    let Ok(mut guard) = AdapterGuard::acquire(i2c, bus) else {
        crate::log_error!("Could not get adapter {}", bus);
        return None;
    };

    match guard.new_probed_device(info, candidates) {
        Ok(client) => {
            crate::log_info!(
                "found {} at {:#x} on i2c{}",
                client.type_name,
                client.addr,
                bus
            );
            Some(client)
        }
        Err(e) => {
            crate::log_error!("failed to register {} to i2c{}: {}", info.type_name, bus, e);
            None
        }
    }
}
