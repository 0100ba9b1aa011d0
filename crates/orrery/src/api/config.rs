use serde::{Deserialize, Serialize};

use crate::renderer::draw::Color;

/// Scene configuration, provided by the host.
/// Every field has a default, so partial JSON is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for star and body placement.
    pub seed: u64,
    /// Initial viewport width in pixels.
    pub width: u32,
    /// Initial viewport height in pixels.
    pub height: u32,
    pub camera: CameraConfig,
    pub controls: ControlConfig,
    pub stars: StarFieldConfig,
    pub bodies: BodyFieldConfig,
    pub sun: SunConfig,
    /// Whether the axes overlay starts visible.
    pub show_axes: bool,
    /// Draw a spin indicator line on each body.
    pub orientation_lines: bool,
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum draw commands written to the frame buffer (default: 4096).
    pub max_draw_commands: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: 1000,
            height: 800,
            camera: CameraConfig::default(),
            controls: ControlConfig::default(),
            stars: StarFieldConfig::default(),
            bodies: BodyFieldConfig::default(),
            sun: SunConfig::default(),
            show_axes: true,
            orientation_lines: true,
            fixed_dt: 1.0 / 60.0,
            max_draw_commands: 4096,
        }
    }
}

impl SceneConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial camera position (x, y, z).
    pub position: [f32; 3],
    pub focal_length: f32,
    /// Points closer than this to the eye are not drawn.
    pub near_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, -500.0],
            focal_length: 500.0,
            near_plane: 10.0,
        }
    }
}

/// Camera movement rates and zoom limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// World units per second for directional moves.
    pub pan_speed: f32,
    /// World units per second along Z for zoom.
    pub zoom_speed: f32,
    /// Closest the camera may get to the `z = 0` plane.
    pub min_distance: f32,
    /// Farthest the camera may get from the `z = 0` plane.
    pub max_distance: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            pan_speed: 500.0,
            zoom_speed: 200.0,
            min_distance: 10.0,
            max_distance: 5000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarFieldConfig {
    pub count: usize,
    /// Stars are placed in `[-x, x) x [-y, y)`.
    pub half_extent: [f32; 2],
    /// Depth range `[near, far)` in world units.
    pub depth: [f32; 2],
    /// World radius range.
    pub radius: [f32; 2],
    /// Grey level range (inclusive, 0-255).
    pub brightness: [u8; 2],
    /// Smallest on-screen radius in pixels.
    pub min_radius_px: f32,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            count: 200,
            half_extent: [500.0, 400.0],
            depth: [50.0, 1000.0],
            radius: [0.5, 2.0],
            brightness: [150, 255],
            min_radius_px: 0.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyFieldConfig {
    pub count: usize,
    pub orbit_radius: [f32; 2],
    /// World radius range.
    pub radius: [f32; 2],
    /// Radians per tick.
    pub angular_speed: [f32; 2],
    pub vertical_amplitude: [f32; 2],
    /// Vertical oscillation frequency relative to the orbital phase.
    pub vertical_speed: f32,
    /// Spin in radians per tick.
    pub rotation_speed: f32,
    /// Smallest on-screen radius in pixels.
    pub min_radius_px: f32,
    pub color: Color,
}

impl Default for BodyFieldConfig {
    fn default() -> Self {
        Self {
            count: 8,
            orbit_radius: [120.0, 900.0],
            radius: [10.0, 40.0],
            angular_speed: [0.01, 0.03],
            vertical_amplitude: [0.0, 50.0],
            vertical_speed: 0.5,
            rotation_speed: 2.0_f32.to_radians(),
            min_radius_px: 2.0,
            color: Color::SKY,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    pub radius: f32,
    pub color: Color,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            radius: 50.0,
            color: Color::ORANGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_config() {
        let json = r#"{
            "seed": 7,
            "width": 1920,
            "stars": { "count": 1000, "half_extent": [5000.0, 5000.0] },
            "controls": { "min_distance": 25.0 }
        }"#;
        let config = SceneConfig::from_json(json).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.width, 1920);
        assert_eq!(config.height, 800);
        assert_eq!(config.stars.count, 1000);
        assert_eq!(config.stars.depth, [50.0, 1000.0]);
        assert_eq!(config.controls.min_distance, 25.0);
        assert_eq!(config.controls.pan_speed, 500.0);
        assert_eq!(config.camera.near_plane, 10.0);
    }

    #[test]
    fn parse_empty_object_gives_defaults() {
        let config = SceneConfig::from_json("{}").unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.bodies.count, 8);
        assert!(config.show_axes);
        assert_eq!(config.sun.color, Color::ORANGE);
    }

    #[test]
    fn parse_color() {
        let json = r#"{ "sun": { "color": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 } } }"#;
        let config = SceneConfig::from_json(json).unwrap();
        assert_eq!(config.sun.color, Color::RED);
        assert_eq!(config.sun.radius, 50.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SceneConfig::from_json("{ \"seed\": \"x\" }").is_err());
        assert!(SceneConfig::from_json("not json").is_err());
    }
}
