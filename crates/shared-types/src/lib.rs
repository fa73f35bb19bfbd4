pub mod resolution;
pub mod types;

pub use resolution::Resolution;
pub use types::{
    BottleneckReport, BottleneckSeverity, BuildClass, ComponentKind, FpsEstimate, FpsTier,
    GameProfile, HardwareComponent, LimitingComponent, PeripheralLoadout, Rating,
    ResolutionProjection, WattageEstimate,
};
