use glam::Vec3;

use crate::api::config::ControlConfig;
use crate::input::queue::Command;
use crate::renderer::camera::Camera;

/// Applies movement and zoom intents to a camera.
///
/// Zoom slides the camera along Z; its distance to the `z = 0` plane is kept in
/// `[min_distance, max_distance]`, so the scene plane always stays in front of the eye.
#[derive(Debug, Clone)]
pub struct CameraController {
    pub pan_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl CameraController {
    pub fn new(config: &ControlConfig) -> Self {
        let min_distance = config.min_distance.max(0.0);
        Self {
            pan_speed: config.pan_speed,
            zoom_speed: config.zoom_speed,
            min_distance,
            max_distance: config.max_distance.max(min_distance),
        }
    }

    /// Apply one command for a frame of length `dt`.
    /// Returns false for commands that are not camera intents.
    pub fn apply(&self, camera: &mut Camera, command: Command, dt: f32) -> bool {
        let pan = self.pan_speed * dt;
        let zoom = self.zoom_speed * dt;
        match command {
            Command::MoveUp => camera.translate(Vec3::new(0.0, -pan, 0.0)),
            Command::MoveDown => camera.translate(Vec3::new(0.0, pan, 0.0)),
            Command::MoveLeft => camera.translate(Vec3::new(-pan, 0.0, 0.0)),
            Command::MoveRight => camera.translate(Vec3::new(pan, 0.0, 0.0)),
            Command::ZoomIn => {
                camera.translate(Vec3::new(0.0, 0.0, zoom));
                self.clamp_distance(camera);
            }
            Command::ZoomOut => {
                camera.translate(Vec3::new(0.0, 0.0, -zoom));
                self.clamp_distance(camera);
            }
            Command::ToggleAxes | Command::Quit | Command::Resize { .. } => return false,
        }
        true
    }

    fn clamp_distance(&self, camera: &mut Camera) {
        camera.position.z = camera.position.z.clamp(-self.max_distance, -self.min_distance);
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(&ControlConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::camera::Viewport;

    fn camera() -> Camera {
        Camera::new(Viewport::new(1000, 800))
    }

    #[test]
    fn moves_scale_with_dt() {
        let ctl = CameraController::default();
        let mut cam = camera();
        assert!(ctl.apply(&mut cam, Command::MoveRight, 0.5));
        assert!(ctl.apply(&mut cam, Command::MoveUp, 0.1));
        assert!((cam.position.x - 250.0).abs() < 1e-4);
        assert!((cam.position.y + 50.0).abs() < 1e-4);
        assert!(ctl.apply(&mut cam, Command::MoveLeft, 0.5));
        assert!(ctl.apply(&mut cam, Command::MoveDown, 0.1));
        assert!(cam.position.x.abs() < 1e-4);
        assert!(cam.position.y.abs() < 1e-4);
    }

    #[test]
    fn zoom_in_moves_toward_scene_and_clamps() {
        let ctl = CameraController::default();
        let mut cam = camera();
        ctl.apply(&mut cam, Command::ZoomIn, 1.0);
        assert!((cam.position.z + 300.0).abs() < 1e-4);
        // 200 units/s for 10 s would overshoot the plane
        ctl.apply(&mut cam, Command::ZoomIn, 10.0);
        assert_eq!(cam.position.z, -10.0);
        assert!(cam.project_xy(0.0, 0.0).scale > 0.0);
    }

    #[test]
    fn zoom_out_clamps_to_max_distance() {
        let ctl = CameraController::default();
        let mut cam = camera();
        ctl.apply(&mut cam, Command::ZoomOut, 100.0);
        assert_eq!(cam.position.z, -5000.0);
    }

    #[test]
    fn zooming_out_shrinks_scale() {
        let ctl = CameraController::default();
        let mut cam = camera();
        let before = cam.project_xy(0.0, 0.0).scale;
        ctl.apply(&mut cam, Command::ZoomOut, 1.0);
        assert!(cam.project_xy(0.0, 0.0).scale < before);
    }

    #[test]
    fn non_camera_commands_are_ignored() {
        let ctl = CameraController::default();
        let mut cam = camera();
        let before = cam.clone();
        assert!(!ctl.apply(&mut cam, Command::ToggleAxes, 1.0));
        assert!(!ctl.apply(&mut cam, Command::Quit, 1.0));
        assert!(!ctl.apply(&mut cam, Command::Resize { width: 1, height: 1 }, 1.0));
        assert_eq!(cam, before);
    }
}
