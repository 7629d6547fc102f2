//! Sensor bus bring-up
//!
//! Runs once at boot:
//!
//! 1. Resolve the board variant; stop silently if no sensors are fitted
//! 2. Select interrupt lines and orientation for the variant
//! 3. Read the accelerometer chip id (advisory)
//! 4. Register the accelerometer (probed on Snowball v2.1 silicon, at a fixed
//!    address elsewhere)
//! 5. Register magnetometer, gyroscope and barometer
//!
//! No step can fail the boot. Problems are logged and the sequence moves on.

use super::config::{SensorConfigs, ACCEL_CANDIDATE_ADDRS, LSM303DLH_A, SENSOR_BUS};
use super::identify::read_accel_chip_id;
use super::registration::{add_devices, probe_add, AddOutcome};
use super::variant::{AccelRegistration, BoardVariant};
use crate::platform::{Client, HardwareIdentity, I2cCore, Result};

/// Bring-up progress
///
/// Strictly forward; each state is entered at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringupState {
    NotStarted,
    VariantChecked,
    ConfigSelected,
    ChipIdProbed,
    AccelRegistered,
    AllRegistered,
}

/// How the accelerometer registration went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelOutcome {
    /// Probed over the candidate addresses; `None` if nothing answered
    Probed(Option<Client>),
    /// Registered at a fixed address
    Added(AddOutcome),
}

/// What a bring-up did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BringupReport {
    pub state: BringupState,
    pub variant: BoardVariant,
    /// Configuration as handed to the drivers
    pub configs: SensorConfigs,
    /// `None` if identification was never attempted
    pub chip_id: Option<Result<u8>>,
    pub accel: Option<AccelOutcome>,
    /// Magnetometer, gyroscope and barometer
    pub sensors: Option<AddOutcome>,
}

impl BringupReport {
    fn new(variant: BoardVariant) -> Self {
        Self {
            state: BringupState::NotStarted,
            variant,
            configs: SensorConfigs::default(),
            chip_id: None,
            accel: None,
            sensors: None,
        }
    }

    fn advance(&mut self, next: BringupState) {
        debug_assert!(next > self.state, "{:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// True if the board has no sensors and nothing was attempted
    pub fn skipped(&self) -> bool {
        self.state == BringupState::VariantChecked
    }
}

/// Configuration for `variant`, before chip identification
pub fn select_config(variant: &BoardVariant) -> SensorConfigs {
    let mut configs = SensorConfigs::default();
    configs.set_irq_lines(variant.irq_lines());

    let (accel_mag, gyro) = variant.orientations();
    debug_assert!(accel_mag.is_valid() && gyro.is_valid());
    configs.accel_mag.orientation = accel_mag;
    configs.gyro.orientation = gyro;
    configs
}

/// Run the bring-up against `i2c`, identifying the board through `identity`
pub fn run<C, H>(i2c: &mut C, identity: &H) -> BringupReport
where
    C: I2cCore,
    H: HardwareIdentity + ?Sized,
{
    let variant = BoardVariant::detect(identity);
    let mut report = BringupReport::new(variant);
    report.advance(BringupState::VariantChecked);

    if !variant.sensors_present() {
        crate::log_debug!("no sensor board fitted, skipping sensor bring-up");
        return report;
    }

    let mut configs = select_config(&variant);
    report.advance(BringupState::ConfigSelected);

    let chip_id = read_accel_chip_id(i2c);
    match chip_id {
        Ok(id) => configs.accel_mag.chip_id = Some(id),
        Err(e) => crate::log_error!("Failed to get Accelerometer chip ID: {}", e),
    }
    report.chip_id = Some(chip_id);
    report.advance(BringupState::ChipIdProbed);

    // No writes past this point; descriptors carry copies
    report.configs = configs;

    let accel = match variant.accel_registration() {
        AccelRegistration::Probe => AccelOutcome::Probed(probe_add(
            i2c,
            SENSOR_BUS,
            &configs.accelerometer(LSM303DLH_A, 0),
            &ACCEL_CANDIDATE_ADDRS,
        )),
        AccelRegistration::Direct { type_name, addr } => AccelOutcome::Added(add_devices(
            i2c,
            SENSOR_BUS,
            &[configs.accelerometer(type_name, addr)],
        )),
    };
    report.accel = Some(accel);
    report.advance(BringupState::AccelRegistered);

    report.sensors = Some(add_devices(i2c, SENSOR_BUS, &configs.fixed_devices()));
    report.advance(BringupState::AllRegistered);

    report
}
