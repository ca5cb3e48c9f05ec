// Domain layer: run models and the filesystem port. No external dependencies beyond std.

pub mod model;
pub mod ports;
