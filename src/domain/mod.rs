// Domain layer: soil models and ports (interfaces) implemented by adapters under config/ and core/.

pub mod model;
pub mod ports;
