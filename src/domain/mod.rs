// Domain layer: plain models and ports (interfaces). Adapters in src/adapters implement the ports.

pub mod model;
pub mod ports;
