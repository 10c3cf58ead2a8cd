//! Domain layer: the typed bookmark tree and the ports the renderer depends on.

pub mod model;
pub mod traits;
