// Domain layer: build records, derived mappings and the ports the core pipeline depends on.

pub mod model;
pub mod ports;
