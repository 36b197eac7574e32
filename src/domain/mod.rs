// Domain layer: the two self-validating records and the clock port they read "today" from.

pub mod appliance;
pub mod ports;
pub mod vehicle;

pub use appliance::{ApplianceColor, ApplianceFields, ApplianceRecord, EnergyClass};
pub use ports::{Clock, FixedClock, ReferenceClock, SystemClock};
pub use vehicle::{FuelType, VehicleFields, VehicleRecord};
