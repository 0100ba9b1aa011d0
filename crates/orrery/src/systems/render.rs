use std::iter;

use glam::Vec2;

use crate::components::body::{OrbitingBody, Sun};
use crate::components::star::Star;
use crate::core::scene::Scene;
use crate::renderer::camera::Camera;
use crate::renderer::draw::{Color, DrawCommand};

/// Line width for the axes overlay.
pub const AXIS_WIDTH: f32 = 2.0;
/// Line width for body spin indicators.
pub const ORIENTATION_WIDTH: f32 = 1.0;
pub const ORIENTATION_COLOR: Color = Color::WHITE;

/// Build the frame's draw commands from the scene's current state.
///
/// Order: visible stars, sun, each body (disc, then its spin line), axes overlay.
/// Nothing is mutated; entities behind the eye are skipped.
pub fn render_scene(scene: &Scene) -> impl Iterator<Item = DrawCommand> + '_ {
    let camera = scene.camera();

    let star_min = scene.stars().min_radius_px();
    let stars = scene
        .stars()
        .iter()
        .filter_map(move |star| star_command(camera, star, star_min));

    let sun = sun_command(camera, scene.sun());

    let body_min = scene.body_min_radius_px();
    let lines = scene.orientation_lines();
    let bodies = scene
        .bodies()
        .iter()
        .filter_map(move |body| body_commands(camera, body, body_min))
        .flat_map(move |(disc, line)| iter::once(disc).chain(lines.then_some(line)));

    let axes = scene
        .show_axes()
        .then(|| axes_commands(camera))
        .into_iter()
        .flatten();

    stars.chain(sun).chain(bodies).chain(axes)
}

/// A star's disc, or None when it is behind the eye or off screen.
pub fn star_command(camera: &Camera, star: &Star, min_radius_px: f32) -> Option<DrawCommand> {
    let proj = camera.project(star.position());
    if !proj.is_in_front() || !camera.viewport().contains(proj.pos) {
        return None;
    }
    Some(DrawCommand::FilledCircle {
        center: proj.pos,
        radius: proj.radius(star.radius()).max(min_radius_px),
        color: star.color(),
    })
}

pub fn sun_command(camera: &Camera, sun: &Sun) -> Option<DrawCommand> {
    let proj = camera.project(sun.position());
    proj.is_in_front().then(|| DrawCommand::FilledCircle {
        center: proj.pos,
        radius: proj.radius(sun.radius),
        color: sun.color,
    })
}

/// A body's disc and the line from its center to the rim at its spin angle.
pub fn body_commands(
    camera: &Camera,
    body: &OrbitingBody,
    min_radius_px: f32,
) -> Option<(DrawCommand, DrawCommand)> {
    let proj = camera.project(body.position());
    if !proj.is_in_front() {
        return None;
    }
    let radius = proj.radius(body.radius()).max(min_radius_px);
    let disc = DrawCommand::FilledCircle {
        center: proj.pos,
        radius,
        color: body.color(),
    };
    let angle = body.rotation_angle();
    let line = DrawCommand::Line {
        from: proj.pos,
        to: proj.pos + Vec2::new(angle.cos(), angle.sin()) * radius,
        color: ORIENTATION_COLOR,
        width: ORIENTATION_WIDTH,
    };
    Some((disc, line))
}

/// X (red), Y (green) and Z (blue, diagonal) lines through the projected origin,
/// each spanning the viewport.
pub fn axes_commands(camera: &Camera) -> [DrawCommand; 3] {
    let origin = camera.project_xy(0.0, 0.0).pos;
    let viewport = camera.viewport();
    let (w, h) = (viewport.width as f32, viewport.height as f32);
    let reach = Vec2::splat(w.max(h));
    [
        DrawCommand::Line {
            from: Vec2::new(0.0, origin.y),
            to: Vec2::new(w, origin.y),
            color: Color::RED,
            width: AXIS_WIDTH,
        },
        DrawCommand::Line {
            from: Vec2::new(origin.x, 0.0),
            to: Vec2::new(origin.x, h),
            color: Color::GREEN,
            width: AXIS_WIDTH,
        },
        DrawCommand::Line {
            from: origin - reach,
            to: origin + reach,
            color: Color::BLUE,
            width: AXIS_WIDTH,
        },
    ]
}
