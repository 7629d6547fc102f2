//! embedded-hal I2C core
//!
//! This module provides an [`I2cCore`] backed by any blocking
//! `embedded_hal::i2c::I2c` bus. One instance serves one bus number and keeps
//! fixed-capacity tables of bound clients and of descriptors queued before the
//! bus came up.
//!
//! # Example
//!
//! ```ignore
//! use ux500_sensors::platform::HalI2cCore;
//!
//! // Bus 2 is registered later in boot
//! let mut i2c2: HalI2cCore<_> = HalI2cCore::new_offline(i2c, 2);
//! ux500_sensors::board::bringup::run(&mut i2c2, &identity);
//!
//! // Queued descriptors are bound when the bus comes up
//! let bound = i2c2.bring_online();
//! ```

use crate::platform::{
    error::{BusError, I2cError},
    traits::{BoardInfo, Client, I2cCore},
    Result,
};
use embedded_hal::i2c::{Error as _, I2c};
use heapless::Vec;

/// Default number of clients and deferred descriptors tracked per bus
pub const DEFAULT_CAPACITY: usize = 8;

/// Highest valid 7-bit address
const MAX_ADDR: u8 = 0x7F;

/// Token for the single bus a [`HalI2cCore`] serves
#[derive(Debug)]
pub struct HalAdapter {
    bus: u8,
}

/// I2C core over an embedded-hal bus
///
/// # Type Parameters
///
/// * `I` - Blocking embedded-hal I2C bus
/// * `N` - Capacity of the client table and of the deferred queue
pub struct HalI2cCore<I, const N: usize = DEFAULT_CAPACITY> {
    i2c: I,
    bus: u8,
    online: bool,
    adapter_taken: bool,
    clients: Vec<Client, N>,
    deferred: Vec<BoardInfo, N>,
}

impl<I: I2c, const N: usize> HalI2cCore<I, N> {
    /// Create a core whose bus is already registered
    pub fn new(i2c: I, bus: u8) -> Self {
        Self {
            i2c,
            bus,
            online: true,
            adapter_taken: false,
            clients: Vec::new(),
            deferred: Vec::new(),
        }
    }

    /// Create a core whose bus is not registered yet
    ///
    /// `get_adapter` returns `None` until [`bring_online`](Self::bring_online).
    pub fn new_offline(i2c: I, bus: u8) -> Self {
        Self {
            online: false,
            ..Self::new(i2c, bus)
        }
    }

    /// Bus number served by this core
    pub fn bus(&self) -> u8 {
        self.bus
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Clients bound so far
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Descriptors waiting for the bus to come up
    pub fn deferred(&self) -> &[BoardInfo] {
        &self.deferred
    }

    /// Register the bus and bind every queued descriptor
    ///
    /// Returns the number of descriptors bound. Descriptors that cannot be
    /// bound are logged and dropped.
    pub fn bring_online(&mut self) -> usize {
        self.online = true;

        let pending = core::mem::take(&mut self.deferred);
        let mut bound = 0;
        for info in &pending {
            match self.attach(info.addr, info) {
                Ok(_) => bound += 1,
                Err(e) => {
                    crate::log_error!(
                        "failed to register {} to i2c{}: {}",
                        info.type_name,
                        self.bus,
                        e
                    );
                }
            }
        }
        bound
    }

    /// Give back the underlying bus
    pub fn release(self) -> I {
        self.i2c
    }

    fn attach(&mut self, addr: u8, info: &BoardInfo) -> Result<Client> {
        if addr > MAX_ADDR {
            return Err(BusError::Transfer(I2cError::InvalidAddress));
        }
        if self.is_busy(addr) {
            return Err(BusError::AddressBusy(addr));
        }

        let client = Client {
            bus: self.bus,
            addr,
            type_name: info.type_name,
        };
        self.clients.push(client).map_err(|_| BusError::TableFull)?;
        Ok(client)
    }

    fn is_busy(&self, addr: u8) -> bool {
        self.clients.iter().any(|c| c.addr == addr)
    }

    /// Check whether something acknowledges at `addr`
    ///
    /// EEPROM-style ranges can be corrupted by a quick write, so they are
    /// probed with a one byte read instead.
    fn probe(&mut self, addr: u8) -> bool {
        let result = match addr {
            0x30..=0x37 | 0x50..=0x5F => {
                let mut byte = [0u8; 1];
                self.i2c.read(addr, &mut byte)
            }
            _ => self.i2c.write(addr, &[]),
        };
        result.is_ok()
    }
}

impl<I: I2c, const N: usize> I2cCore for HalI2cCore<I, N> {
    type Adapter = HalAdapter;

    fn get_adapter(&mut self, bus: u8) -> Option<HalAdapter> {
        if bus != self.bus || !self.online || self.adapter_taken {
            return None;
        }
        self.adapter_taken = true;
        Some(HalAdapter { bus })
    }

    fn put_adapter(&mut self, adapter: HalAdapter) {
        debug_assert_eq!(adapter.bus, self.bus);
        self.adapter_taken = false;
    }

    fn new_device(&mut self, _adapter: &mut HalAdapter, info: &BoardInfo) -> Result<Client> {
        self.attach(info.addr, info)
    }

    fn new_probed_device(
        &mut self,
        _adapter: &mut HalAdapter,
        info: &BoardInfo,
        candidates: &[u8],
    ) -> Result<Client> {
        for &addr in candidates {
            if addr > MAX_ADDR {
                crate::log_warn!("invalid probe address {:#x} on i2c{}", addr, self.bus);
                continue;
            }
            // Bound addresses are someone else's device
            if self.is_busy(addr) {
                continue;
            }
            if self.probe(addr) {
                return self.attach(addr, info);
            }
        }
        Err(BusError::NoResponder)
    }

    fn read_byte_data(&mut self, _adapter: &mut HalAdapter, addr: u8, reg: u8) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.i2c
            .write_read(addr, &[reg], &mut byte)
            .map_err(|e| BusError::Transfer(e.kind().into()))?;
        Ok(byte[0])
    }

    fn register_board_info(&mut self, bus: u8, infos: &[BoardInfo]) -> Result<()> {
        if bus != self.bus {
            return Err(BusError::AdapterUnavailable(bus));
        }
        // All or nothing, so a failed call leaves nothing half-queued
        if self.deferred.capacity() - self.deferred.len() < infos.len() {
            return Err(BusError::TableFull);
        }
        for info in infos {
            self.deferred.push(*info).map_err(|_| BusError::TableFull)?;
        }
        Ok(())
    }
}
