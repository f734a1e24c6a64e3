// Domain layer: tarot models and ports. No network or console code here.

pub mod model;
pub mod ports;
