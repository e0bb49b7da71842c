// Domain layer: numeric model and ports. Depends only on std/serde and the crate error type.

pub mod model;
pub mod ports;
