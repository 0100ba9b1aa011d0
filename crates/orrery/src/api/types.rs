use glam::Vec3;

/// Values behind the host's status overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudInfo {
    /// Camera position in world space.
    pub camera: Vec3,
    /// Display-only frame rate estimate.
    pub fps: f32,
    /// Simulation ticks since the scene was built.
    pub ticks: u64,
}

impl HudInfo {
    /// One-line status text, truncated to whole units.
    pub fn label(&self) -> String {
        format!(
            "X: {} Y: {} Z: {} FPS: {}",
            self.camera.x as i32, self.camera.y as i32, self.camera.z as i32, self.fps as i32
        )
    }
}
