// Domain layer: the boundary value type and the ports the engine depends on.

pub mod model;
pub mod ports;
