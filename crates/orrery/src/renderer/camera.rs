use glam::{Vec2, Vec3};

/// Host viewport in pixels. Origin top-left, Y-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Screen center (`width / 2`, `height / 2`).
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Check if a screen point lies in `[0, width) x [0, height)`.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0
            && point.x < self.width as f32
            && point.y >= 0.0
            && point.y < self.height as f32
    }
}

/// Result of projecting a world point onto the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Screen position in pixels (not rounded).
    pub pos: Vec2,
    /// Size multiplier for world radii at this depth.
    pub scale: f32,
    in_front: bool,
}

impl Projection {
    /// False for points behind the camera's near plane; those are not drawn.
    pub fn is_in_front(&self) -> bool {
        self.in_front
    }

    /// Screen radius for a world-space radius.
    pub fn radius(&self, world_radius: f32) -> f32 {
        world_radius * self.scale
    }
}

/// Perspective camera looking down +Z.
///
/// Only translates; there is no camera rotation. Zoom is a translation along Z.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Focal length in world units. The eye sits `focal_length` behind `position.z`.
    pub focal_length: f32,
    /// Minimum distance from the eye for a point to count as visible.
    /// Caps the scale at `focal_length / near_plane`.
    pub near_plane: f32,
    viewport: Viewport,
}

impl Camera {
    pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, -500.0);
    pub const DEFAULT_FOCAL_LENGTH: f32 = 500.0;
    pub const DEFAULT_NEAR_PLANE: f32 = 10.0;

    pub fn new(viewport: Viewport) -> Self {
        Self {
            position: Self::DEFAULT_POSITION,
            focal_length: Self::DEFAULT_FOCAL_LENGTH,
            near_plane: Self::DEFAULT_NEAR_PLANE,
            viewport,
        }
    }

    // -- Builder pattern --

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_focal_length(mut self, focal_length: f32) -> Self {
        self.focal_length = focal_length;
        self
    }

    pub fn with_near_plane(mut self, near_plane: f32) -> Self {
        self.near_plane = near_plane;
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize the viewport (e.g. on window resize). The screen center follows.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Scale factor for a point `depth` units in front of the camera plane.
    ///
    /// `focal_length / (focal_length + depth)`, or 1.0 when the denominator vanishes.
    pub fn depth_scale(&self, depth: f32) -> f32 {
        let denom = self.focal_length + depth;
        if denom.abs() <= f32::EPSILON {
            1.0
        } else {
            self.focal_length / denom
        }
    }

    /// Project a world point to screen space.
    pub fn project(&self, world: Vec3) -> Projection {
        let depth = world.z - self.position.z;
        let eye_distance = self.focal_length + depth;
        let scale = self.depth_scale(depth);
        let offset = Vec2::new(world.x - self.position.x, world.y - self.position.y);
        Projection {
            pos: offset * scale + self.viewport.center(),
            scale,
            in_front: eye_distance > 0.0 && eye_distance >= self.near_plane,
        }
    }

    /// Project a point on the `z = 0` plane.
    pub fn project_xy(&self, x: f32, y: f32) -> Projection {
        self.project(Vec3::new(x, y, 0.0))
    }

    /// Move the camera by a world-space offset.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Viewport::new(1000, 800))
    }

    #[test]
    fn viewport_center_and_bounds() {
        let vp = Viewport::new(1000, 800);
        assert_eq!(vp.center(), Vec2::new(500.0, 400.0));
        assert!(vp.contains(Vec2::new(0.0, 0.0)));
        assert!(vp.contains(Vec2::new(999.5, 799.5)));
        assert!(!vp.contains(Vec2::new(1000.0, 10.0)));
        assert!(!vp.contains(Vec2::new(10.0, -0.1)));
    }

    #[test]
    fn camera_position_projects_to_center() {
        let cam = camera().with_position(Vec3::new(120.0, -45.0, -500.0));
        for z in [0.0, 250.0, 1000.0] {
            let p = cam.project(Vec3::new(120.0, -45.0, z));
            assert_eq!(p.pos, Vec2::new(500.0, 400.0));
        }
    }

    #[test]
    fn origin_at_default_distance_scales_by_half() {
        let p = camera().project_xy(200.0, 0.0);
        assert!((p.scale - 0.5).abs() < 1e-6);
        assert!((p.pos.x - 600.0).abs() < 1e-4);
        assert!((p.pos.y - 400.0).abs() < 1e-4);
    }

    #[test]
    fn projection_is_affine_about_camera() {
        let cam = camera().with_position(Vec3::new(30.0, 70.0, -400.0));
        let center = cam.viewport().center();
        let base = cam.project_xy(30.0 + 40.0, 70.0 - 25.0).pos - center;
        for s in [0.5_f32, 2.0, 3.0, -1.0] {
            let scaled = cam.project_xy(30.0 + 40.0 * s, 70.0 - 25.0 * s).pos - center;
            assert!((scaled - base * s).length() < 1e-3, "s = {s}");
        }
    }

    #[test]
    fn scale_decreases_with_depth() {
        let cam = camera();
        let mut prev = f32::INFINITY;
        for depth in [-400.0, -100.0, 0.0, 1.0, 50.0, 500.0, 5000.0] {
            let scale = cam.depth_scale(depth);
            assert!(scale < prev, "depth {depth}: {scale} !< {prev}");
            prev = scale;
        }
    }

    #[test]
    fn degenerate_denominator_falls_back_to_one() {
        let cam = camera().with_position(Vec3::new(0.0, 0.0, -500.0));
        // depth = -500 => focal + depth = 0
        let p = cam.project(Vec3::new(10.0, 20.0, -1000.0));
        assert_eq!(p.scale, 1.0);
        assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
        assert_eq!(p.pos, Vec2::new(510.0, 420.0));

        let zero = Camera::new(Viewport::new(10, 10)).with_focal_length(0.0);
        assert_eq!(zero.depth_scale(0.0), 1.0);
    }

    #[test]
    fn behind_eye_is_not_in_front() {
        let p = camera().project(Vec3::new(0.0, 0.0, -1200.0));
        assert!(!p.is_in_front());
        assert!(camera().project_xy(0.0, 0.0).is_in_front());
    }

    #[test]
    fn near_plane_clips_points_close_to_the_eye() {
        // Eye at z = -510; near plane 10 units in front of it.
        let cam = camera().with_position(Vec3::new(0.0, 0.0, -10.0));
        let grazing = cam.project(Vec3::new(900.0, 0.0, -509.9));
        assert!(!grazing.is_in_front());

        let inside = cam.project(Vec3::new(900.0, 0.0, -499.0));
        assert!(inside.is_in_front());
        assert!(inside.scale <= cam.focal_length / cam.near_plane);

        let degenerate = cam.project(Vec3::new(0.0, 0.0, -510.0));
        assert_eq!(degenerate.scale, 1.0);
        assert!(!degenerate.is_in_front());

        let no_near = cam.with_near_plane(0.0);
        assert!(no_near.project(Vec3::new(900.0, 0.0, -509.9)).is_in_front());
    }

    #[test]
    fn resize_moves_center() {
        let mut cam = camera();
        cam.resize(1920, 1080);
        let p = cam.project(Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(p.pos, Vec2::new(960.0, 540.0));
    }

    #[test]
    fn translate_shifts_projection_opposite() {
        let mut cam = camera();
        let before = cam.project_xy(0.0, 0.0).pos;
        cam.translate(Vec3::new(100.0, 0.0, 0.0));
        let after = cam.project_xy(0.0, 0.0).pos;
        assert!((before.x - after.x - 50.0).abs() < 1e-4);
    }
}
