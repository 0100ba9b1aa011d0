use glam::Vec3;

use crate::api::config::SceneConfig;
use crate::api::types::HudInfo;
use crate::components::body::{generate_bodies, OrbitingBody, Sun};
use crate::components::star::StarField;
use crate::input::queue::Command;
use crate::renderer::camera::{Camera, Viewport};
use crate::renderer::draw::DrawCommand;
use crate::systems::control::CameraController;
use crate::systems::render::render_scene;
use crate::systems::rng::Rng;

/// The whole toy solar system: camera, background stars, sun and orbiting bodies.
///
/// One frame is `apply` (for each host command), then `update` (once per tick),
/// then `render`.
pub struct Scene {
    camera: Camera,
    controller: CameraController,
    stars: StarField,
    sun: Sun,
    bodies: Vec<OrbitingBody>,
    body_min_radius_px: f32,
    show_axes: bool,
    orientation_lines: bool,
    quit_requested: bool,
    ticks: u64,
}

impl Scene {
    /// Build a scene. Stars are placed first, then bodies, from one seeded RNG.
    pub fn new(config: &SceneConfig) -> Self {
        let mut rng = Rng::new(config.seed);
        let stars = StarField::generate(&config.stars, &mut rng);
        let bodies = generate_bodies(&config.bodies, &mut rng);

        let [x, y, z] = config.camera.position;
        let camera = Camera::new(Viewport::new(config.width, config.height))
            .with_position(Vec3::new(x, y, z))
            .with_focal_length(config.camera.focal_length)
            .with_near_plane(config.camera.near_plane);

        log::info!(
            "scene: {} stars, {} bodies, seed {}",
            stars.len(),
            bodies.len(),
            config.seed
        );

        Self {
            camera,
            controller: CameraController::new(&config.controls),
            stars,
            sun: Sun::from(&config.sun),
            bodies,
            body_min_radius_px: config.bodies.min_radius_px,
            show_axes: config.show_axes,
            orientation_lines: config.orientation_lines,
            quit_requested: false,
            ticks: 0,
        }
    }

    /// Add a body to the scene.
    pub fn spawn_body(&mut self, body: OrbitingBody) {
        self.bodies.push(body);
    }

    /// Advance every body by one tick.
    pub fn update(&mut self) {
        for body in &mut self.bodies {
            body.tick();
        }
        self.ticks += 1;
    }

    /// Apply one host command for a frame of length `dt` seconds.
    pub fn apply(&mut self, command: Command, dt: f32) {
        if self.controller.apply(&mut self.camera, command, dt) {
            return;
        }
        match command {
            Command::ToggleAxes => self.show_axes = !self.show_axes,
            Command::Quit => {
                if !self.quit_requested {
                    log::info!("scene: quit requested");
                }
                self.quit_requested = true;
            }
            Command::Resize { width, height } => self.resize(width, height),
            _ => {}
        }
    }

    /// Resize the viewport; the projection center follows.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("scene: viewport resized to {}x{}", width, height);
        self.camera.resize(width, height);
    }

    /// This frame's draw commands: stars, sun, bodies, then axes.
    /// Derived entirely from current state, so calling it twice yields the same sequence.
    pub fn render(&self) -> impl Iterator<Item = DrawCommand> + '_ {
        render_scene(self)
    }

    pub fn hud(&self, fps: f32) -> HudInfo {
        HudInfo {
            camera: self.camera.position,
            fps,
            ticks: self.ticks,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn body_min_radius_px(&self) -> f32 {
        self.body_min_radius_px
    }

    pub fn show_axes(&self) -> bool {
        self.show_axes
    }

    pub fn orientation_lines(&self) -> bool {
        self.orientation_lines
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
