// Domain layer: catalog and pricing models plus the ports the core talks through.

pub mod model;
pub mod ports;
