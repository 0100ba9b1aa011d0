pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{
    BodyFieldConfig, CameraConfig, ControlConfig, SceneConfig, StarFieldConfig, SunConfig,
};
pub use api::types::HudInfo;
pub use components::body::{generate_bodies, Orbit, OrbitingBody, Sun};
pub use components::star::{Star, StarField};
pub use core::scene::Scene;
pub use core::time::{FixedTimestep, FrameClock};
pub use renderer::camera::{Camera, Projection, Viewport};
pub use renderer::draw::{Color, DrawCommand, DrawList};
pub use input::queue::{Command, CommandQueue, UnknownCommand};
pub use bridge::protocol::{DrawInstance, FrameBuffer, FrameHeader, HEADER_FLOATS};
pub use systems::control::CameraController;
pub use systems::rng::Rng;

#[cfg(feature = "vectors")]
pub use systems::vector::{VectorState, VectorVertex};
