//! Table models, grouped by the logical database that owns them

pub mod fdc;
pub mod feature;
pub mod metadata;
pub mod plc;
pub mod service;

pub use fdc::FdcConfig;
pub use feature::{
    Trigger, UniformSpeedExternalFeature, UniformSpeedTensionFeature, VariableSpeedPhase3Feature,
};
pub use metadata::Metadata;
pub use plc::{MemoryMapping, PlcLog, PlcModel};
pub use service::{Motor, MotorBearing};
