// Domain layer: wire models and the ports the transport depends on.

pub mod model;
pub mod ports;
