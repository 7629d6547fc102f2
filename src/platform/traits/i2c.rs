//! I2C core interface
//!
//! This module defines the bus-level services the bring-up consumes: adapter
//! lookup and release, device instantiation (direct or probed), a single
//! register read, and deferred registration for buses that are not up yet.

use crate::devices::PlatformData;
use crate::platform::Result;

/// Device descriptor: one chip instance to bind on a bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardInfo {
    /// Driver type name (e.g. "lsm303dlh_m")
    pub type_name: &'static str,
    /// 7-bit address; ignored by probed registration
    pub addr: u8,
    /// Configuration handed to the driver
    pub platform_data: PlatformData,
}

impl BoardInfo {
    pub const fn new(type_name: &'static str, addr: u8, platform_data: PlatformData) -> Self {
        Self {
            type_name,
            addr,
            platform_data,
        }
    }

    /// Same descriptor bound to another address
    pub const fn at(self, addr: u8) -> Self {
        Self { addr, ..self }
    }
}

/// Handle of an instantiated device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Client {
    pub bus: u8,
    pub addr: u8,
    pub type_name: &'static str,
}

/// I2C core interface
///
/// Backends provide this to expose their buses to board code.
///
/// # Invariants
///
/// - Every adapter returned by `get_adapter` is handed back exactly once via
///   `put_adapter` (use [`AdapterGuard`] rather than calling it directly)
/// - Addresses are 7-bit (valid range: 0x00..=0x7F)
pub trait I2cCore {
    /// Handle to one acquired bus
    type Adapter;

    /// Look up the adapter for `bus`
    ///
    /// Returns `None` if the bus has not been registered yet.
    fn get_adapter(&mut self, bus: u8) -> Option<Self::Adapter>;

    /// Release an adapter obtained from `get_adapter`
    fn put_adapter(&mut self, adapter: Self::Adapter);

    /// Bind a device at `info.addr` without touching the hardware
    ///
    /// # Errors
    ///
    /// Returns `BusError::AddressBusy` if a client already owns the address,
    /// `BusError::TableFull` if the backend cannot track more clients, or
    /// `BusError::Rejected` if the core refuses the descriptor.
    fn new_device(&mut self, adapter: &mut Self::Adapter, info: &BoardInfo) -> Result<Client>;

    /// Probe `candidates` in order and bind the device at the first address
    /// that answers; `info.addr` is ignored
    ///
    /// # Errors
    ///
    /// Returns `BusError::NoResponder` if no candidate answered.
    fn new_probed_device(
        &mut self,
        adapter: &mut Self::Adapter,
        info: &BoardInfo,
        candidates: &[u8],
    ) -> Result<Client>;

    /// Read one register byte (SMBus "read byte data")
    ///
    /// # Errors
    ///
    /// Returns `BusError::Transfer` if the device does not acknowledge or the
    /// transfer fails.
    fn read_byte_data(&mut self, adapter: &mut Self::Adapter, addr: u8, reg: u8) -> Result<u8>;

    /// Queue descriptors for a bus that has no adapter yet
    ///
    /// The backend binds them once the bus comes up.
    fn register_board_info(&mut self, bus: u8, infos: &[BoardInfo]) -> Result<()>;
}

/// Scoped adapter acquisition
///
/// Holds the adapter for the lifetime of the guard and hands it back to the
/// core on drop, on every exit path.
pub struct AdapterGuard<'a, C: I2cCore> {
    core: &'a mut C,
    adapter: Option<C::Adapter>,
    bus: u8,
}

impl<'a, C: I2cCore> AdapterGuard<'a, C> {
    /// Acquire the adapter for `bus`
    ///
    /// On failure the core reference is handed back so the caller can fall
    /// back to another path (e.g. deferred registration).
    pub fn acquire(i2c: &'a mut C, bus: u8) -> core::result::Result<Self, &'a mut C> {
        match i2c.get_adapter(bus) {
            Some(adapter) => Ok(Self {
                core: i2c,
                adapter: Some(adapter),
                bus,
            }),
            None => Err(i2c),
        }
    }

    /// Bus number this guard holds
    pub fn bus(&self) -> u8 {
        self.bus
    }

    pub fn new_device(&mut self, info: &BoardInfo) -> Result<Client> {
        let (core, adapter) = self.split();
        core.new_device(adapter, info)
    }

    pub fn new_probed_device(&mut self, info: &BoardInfo, candidates: &[u8]) -> Result<Client> {
        let (core, adapter) = self.split();
        core.new_probed_device(adapter, info, candidates)
    }

    pub fn read_byte_data(&mut self, addr: u8, reg: u8) -> Result<u8> {
        let (core, adapter) = self.split();
        core.read_byte_data(adapter, addr, reg)
    }

    fn split(&mut self) -> (&mut C, &mut C::Adapter) {
        // Only `drop` takes the adapter out
        match self.adapter.as_mut() {
            Some(adapter) => (&mut *self.core, adapter),
            None => unreachable!("adapter released before guard was dropped"),
        }
    }
}

impl<C: I2cCore> Drop for AdapterGuard<'_, C> {
    fn drop(&mut self) {
        if let Some(adapter) = self.adapter.take() {
            self.core.put_adapter(adapter);
        }
    }
}
