// Domain layer: entities, lending rules and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod rules;
