// Domain layer: API records, dashboard statistics and the ports the UI and config plug into.

pub mod model;
pub mod ports;
pub mod stats;
