// Domain layer: cleaning step model and the transform port the pipeline runs on.

pub mod model;
pub mod ports;
