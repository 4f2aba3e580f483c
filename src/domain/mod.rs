// Domain layer: card records and the ports the fetcher talks through.

pub mod model;
pub mod ports;
