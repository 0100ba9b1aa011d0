pub mod control;
pub mod render;
pub mod rng;
#[cfg(feature = "vectors")]
pub mod vector;
