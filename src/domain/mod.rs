// Domain layer: core models. No external dependencies beyond std/serde.

pub mod model;
