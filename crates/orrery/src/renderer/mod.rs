pub mod camera;
pub mod draw;

// Re-export key types for convenient access
pub use camera::{Camera, Projection, Viewport};
pub use draw::{Color, DrawCommand, DrawList};
