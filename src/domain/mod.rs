// Domain layer: Foyer entity, persistence ports and the Foyer service.

pub mod model;
pub mod ports;
pub mod services;
