// Domain layer: core models and ports (interfaces). No dependencies on the
// rest of the crate beyond utils::error.

pub mod model;
pub mod ports;
