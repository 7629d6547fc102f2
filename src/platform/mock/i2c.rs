//! Mock I2C core implementation for testing

use crate::devices::PlatformData;
use crate::platform::{
    error::{BusError, I2cError},
    traits::{BoardInfo, Client, I2cCore},
    Result,
};
use std::collections::HashMap;
use std::vec::Vec;

/// I2C core operation, recorded for test verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cOp {
    GetAdapter { bus: u8 },
    PutAdapter { bus: u8 },
    NewDevice {
        bus: u8,
        type_name: &'static str,
        addr: u8,
        platform_data: PlatformData,
    },
    NewProbedDevice {
        bus: u8,
        type_name: &'static str,
        candidates: Vec<u8>,
        platform_data: PlatformData,
    },
    ReadByteData { bus: u8, addr: u8, reg: u8 },
    RegisterBoardInfo { bus: u8, type_names: Vec<&'static str> },
}

/// Adapter handed out by [`MockI2cCore`]
#[derive(Debug)]
pub struct MockAdapter {
    bus: u8,
}

/// Mock I2C core
///
/// Records every operation and lets tests decide which buses exist, which
/// addresses answer, what registers read back and which descriptors the
/// core rejects.
#[derive(Debug, Default)]
pub struct MockI2cCore {
    adapters: Vec<u8>,
    registers: HashMap<(u8, u8), u8>,
    responders: Vec<u8>,
    rejected: Vec<&'static str>,
    ops: Vec<I2cOp>,
    clients: Vec<Client>,
    deferred: Vec<(u8, BoardInfo)>,
}

impl MockI2cCore {
    /// Create a mock core with no buses
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter for `bus`
    pub fn with_adapter(mut self, bus: u8) -> Self {
        self.adapters.push(bus);
        self
    }

    /// Make `addr` answer probes and reads, with `reg` reading back `value`
    pub fn with_register(mut self, addr: u8, reg: u8, value: u8) -> Self {
        self.registers.insert((addr, reg), value);
        self.with_responder(addr)
    }

    /// Make `addr` answer probes
    pub fn with_responder(mut self, addr: u8) -> Self {
        if !self.responders.contains(&addr) {
            self.responders.push(addr);
        }
        self
    }

    /// Fail `new_device`/`new_probed_device` for this driver type
    pub fn rejecting(mut self, type_name: &'static str) -> Self {
        self.rejected.push(type_name);
        self
    }

    /// Get operation log (for test verification)
    pub fn ops(&self) -> &[I2cOp] {
        &self.ops
    }

    /// Clients successfully bound
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Descriptors queued with `register_board_info`
    pub fn deferred(&self) -> &[(u8, BoardInfo)] {
        &self.deferred
    }

    /// Number of `get_adapter` calls that returned an adapter
    pub fn adapters_acquired(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, I2cOp::GetAdapter { bus } if self.adapters.contains(bus)))
            .count()
    }

    /// Number of `put_adapter` calls
    pub fn adapters_released(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, I2cOp::PutAdapter { .. }))
            .count()
    }

    /// Number of registration attempts, direct or probed
    pub fn registration_attempts(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    I2cOp::NewDevice { .. } | I2cOp::NewProbedDevice { .. }
                )
            })
            .count()
    }

    fn bind(&mut self, bus: u8, addr: u8, info: &BoardInfo) -> Result<Client> {
        if self.rejected.contains(&info.type_name) {
            return Err(BusError::Rejected);
        }
        if self.clients.iter().any(|c| c.bus == bus && c.addr == addr) {
            return Err(BusError::AddressBusy(addr));
        }
        let client = Client {
            bus,
            addr,
            type_name: info.type_name,
        };
        self.clients.push(client);
        Ok(client)
    }
}

impl I2cCore for MockI2cCore {
    type Adapter = MockAdapter;

    fn get_adapter(&mut self, bus: u8) -> Option<MockAdapter> {
        self.ops.push(I2cOp::GetAdapter { bus });
        self.adapters.contains(&bus).then_some(MockAdapter { bus })
    }

    fn put_adapter(&mut self, adapter: MockAdapter) {
        self.ops.push(I2cOp::PutAdapter { bus: adapter.bus });
    }

    fn new_device(&mut self, adapter: &mut MockAdapter, info: &BoardInfo) -> Result<Client> {
        self.ops.push(I2cOp::NewDevice {
            bus: adapter.bus,
            type_name: info.type_name,
            addr: info.addr,
            platform_data: info.platform_data,
        });
        self.bind(adapter.bus, info.addr, info)
    }

    fn new_probed_device(
        &mut self,
        adapter: &mut MockAdapter,
        info: &BoardInfo,
        candidates: &[u8],
    ) -> Result<Client> {
        self.ops.push(I2cOp::NewProbedDevice {
            bus: adapter.bus,
            type_name: info.type_name,
            candidates: candidates.to_vec(),
            platform_data: info.platform_data,
        });
        let addr = candidates
            .iter()
            .copied()
            .find(|a| self.responders.contains(a))
            .ok_or(BusError::NoResponder)?;
        self.bind(adapter.bus, addr, info)
    }

    fn read_byte_data(&mut self, adapter: &mut MockAdapter, addr: u8, reg: u8) -> Result<u8> {
        self.ops.push(I2cOp::ReadByteData {
            bus: adapter.bus,
            addr,
            reg,
        });
        if !self.responders.contains(&addr) {
            return Err(BusError::Transfer(I2cError::Nack));
        }
        Ok(self.registers.get(&(addr, reg)).copied().unwrap_or(0))
    }

    fn register_board_info(&mut self, bus: u8, infos: &[BoardInfo]) -> Result<()> {
        self.ops.push(I2cOp::RegisterBoardInfo {
            bus,
            type_names: infos.iter().map(|i| i.type_name).collect(),
        });
        self.deferred.extend(infos.iter().map(|i| (bus, *i)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::{Lps001wpPlatformData, PlatformData};
    use crate::platform::traits::AdapterGuard;

    fn baro() -> BoardInfo {
        BoardInfo::new(
            "lps001wp_prs",
            0x5C,
            PlatformData::Lps001wp(Lps001wpPlatformData {
                poll_interval_ms: 1000,
                min_interval_ms: 10,
            }),
        )
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let mut i2c = MockI2cCore::new().with_adapter(2);
        {
            let mut guard = AdapterGuard::acquire(&mut i2c, 2).unwrap();
            assert_eq!(guard.bus(), 2);
            guard.new_device(&baro()).unwrap();
        }
        assert_eq!(i2c.adapters_acquired(), 1);
        assert_eq!(i2c.adapters_released(), 1);
        assert_eq!(
            i2c.ops().last(),
            Some(&I2cOp::PutAdapter { bus: 2 })
        );
    }

    #[test]
    fn test_guard_not_created_without_adapter() {
        let mut i2c = MockI2cCore::new();
        assert!(AdapterGuard::acquire(&mut i2c, 2).is_err());
        assert_eq!(i2c.adapters_acquired(), 0);
        assert_eq!(i2c.adapters_released(), 0);
    }

    #[test]
    fn test_rejected_type() {
        let mut i2c = MockI2cCore::new().with_adapter(2).rejecting("lps001wp_prs");
        let mut adapter = i2c.get_adapter(2).unwrap();
        assert_eq!(i2c.new_device(&mut adapter, &baro()), Err(BusError::Rejected));
        i2c.put_adapter(adapter);
        assert!(i2c.clients().is_empty());
    }

    #[test]
    fn test_read_unknown_address_nacks() {
        let mut i2c = MockI2cCore::new()
            .with_adapter(2)
            .with_register(0x19, 0x0F, 0x33);
        let mut adapter = i2c.get_adapter(2).unwrap();
        assert_eq!(
            i2c.read_byte_data(&mut adapter, 0x18, 0x0F),
            Err(BusError::Transfer(I2cError::Nack))
        );
        assert_eq!(i2c.read_byte_data(&mut adapter, 0x19, 0x0F), Ok(0x33));
        i2c.put_adapter(adapter);
    }

    #[test]
    fn test_register_board_info_records() {
        let mut i2c = MockI2cCore::new();
        i2c.register_board_info(2, &[baro()]).unwrap();
        assert_eq!(i2c.deferred(), &[(2, baro())]);
    }
}
