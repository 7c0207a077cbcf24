// Domain layer: request/response models and ports (interfaces) only.

pub mod model;
pub mod ports;
