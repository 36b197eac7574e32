pub mod config;
pub mod domain;
pub mod utils;

pub use config::RecordsConfig;
pub use domain::{
    ApplianceColor, ApplianceFields, ApplianceRecord, Clock, EnergyClass, FixedClock, FuelType,
    ReferenceClock, SystemClock, VehicleFields, VehicleRecord,
};
pub use utils::error::{RecordError, Result};
