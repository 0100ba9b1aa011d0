use std::f32::consts::TAU;
use std::f64::consts::TAU as TAU_F64;

use glam::Vec3;

use crate::api::config::{BodyFieldConfig, SunConfig};
use crate::renderer::draw::Color;
use crate::systems::rng::Rng;

/// Closed 2.5D orbit: a circle in the XZ plane with a vertical bob on Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub center: Vec3,
    pub radius: f32,
    /// Radians per tick.
    pub angular_speed: f32,
    pub vertical_amplitude: f32,
    /// Vertical oscillation frequency relative to the orbital phase.
    pub vertical_speed: f32,
}

impl Orbit {
    /// Flat circular orbit around `center`.
    pub fn circular(center: Vec3, radius: f32, angular_speed: f32) -> Self {
        Self {
            center,
            radius,
            angular_speed,
            vertical_amplitude: 0.0,
            vertical_speed: 0.0,
        }
    }

    pub fn with_vertical(mut self, amplitude: f32, speed: f32) -> Self {
        self.vertical_amplitude = amplitude;
        self.vertical_speed = speed;
        self
    }

    /// Position on the orbit at phase `angle`.
    ///
    /// The phase is reduced to one turn in f64 before the f32 trigonometry, so
    /// a phase that has accumulated for hours still lands on the right point.
    pub fn position_at(&self, angle: f64) -> Vec3 {
        let orbital = angle.rem_euclid(TAU_F64) as f32;
        let vertical = (angle * self.vertical_speed as f64).rem_euclid(TAU_F64) as f32;
        Vec3::new(
            self.center.x + orbital.cos() * self.radius,
            self.center.y + vertical.sin() * self.vertical_amplitude,
            self.center.z + orbital.sin() * self.radius,
        )
    }

    /// Ticks for one full turn, `round(2π / angular_speed)`. None for a stationary orbit.
    pub fn period_ticks(&self) -> Option<u32> {
        if self.angular_speed.abs() <= f32::EPSILON {
            return None;
        }
        Some((TAU / self.angular_speed.abs()).round() as u32)
    }
}

/// A planet on a closed orbit, with an independent spin used for its orientation line.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitingBody {
    orbit: Orbit,
    /// World-space radius.
    radius: f32,
    color: Color,
    /// Unbounded orbital phase. f64 so every tick adds the same step.
    orbit_angle: f64,
    /// Spin, kept within one turn.
    rotation_angle: f32,
    /// Spin in radians per tick.
    rotation_speed: f32,
    position: Vec3,
}

impl OrbitingBody {
    /// Create a body at phase 0 of its orbit.
    pub fn new(orbit: Orbit, radius: f32) -> Self {
        Self {
            orbit,
            radius,
            color: Color::SKY,
            orbit_angle: 0.0,
            rotation_angle: 0.0,
            rotation_speed: 0.0,
            position: orbit.position_at(0.0),
        }
    }

    // -- Builder pattern --

    pub fn with_phase(mut self, angle: f64) -> Self {
        self.orbit_angle = angle;
        self.position = self.orbit.position_at(angle);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    /// Advance one tick: orbital phase, position, then spin.
    pub fn tick(&mut self) {
        self.orbit_angle += self.orbit.angular_speed as f64;
        self.position = self.orbit.position_at(self.orbit_angle);
        self.rotation_angle = (self.rotation_angle + self.rotation_speed).rem_euclid(TAU);
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn orbit_angle(&self) -> f64 {
        self.orbit_angle
    }

    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }
}

/// Generate `config.count` bodies orbiting the origin with random parameters.
pub fn generate_bodies(config: &BodyFieldConfig, rng: &mut Rng) -> Vec<OrbitingBody> {
    (0..config.count)
        .map(|_| {
            let orbit_radius = rng.range_f32(config.orbit_radius[0], config.orbit_radius[1]);
            let speed = rng.range_f32(config.angular_speed[0], config.angular_speed[1]);
            let amplitude = rng.range_f32(config.vertical_amplitude[0], config.vertical_amplitude[1]);
            let radius = rng.range_f32(config.radius[0], config.radius[1]);
            let phase = rng.range_f32(0.0, TAU) as f64;

            let orbit = Orbit::circular(Vec3::ZERO, orbit_radius, speed)
                .with_vertical(amplitude, config.vertical_speed);
            OrbitingBody::new(orbit, radius)
                .with_phase(phase)
                .with_color(config.color)
                .with_rotation_speed(config.rotation_speed)
        })
        .collect()
}

/// The sun: fixed at the world origin, never updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sun {
    pub radius: f32,
    pub color: Color,
}

impl Sun {
    pub const POSITION: Vec3 = Vec3::ZERO;

    pub fn new(radius: f32, color: Color) -> Self {
        Self { radius, color }
    }

    pub fn position(&self) -> Vec3 {
        Self::POSITION
    }
}

impl From<&SunConfig> for Sun {
    fn from(config: &SunConfig) -> Self {
        Self::new(config.radius, config.color)
    }
}

impl Default for Sun {
    fn default() -> Self {
        Self::from(&SunConfig::default())
    }
}
