use glam::Vec3;

use crate::api::config::StarFieldConfig;
use crate::renderer::draw::Color;
use crate::systems::rng::Rng;

/// A fixed background star. Never moves after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    position: Vec3,
    radius: f32,
    color: Color,
}

impl Star {
    pub fn new(position: Vec3, radius: f32, color: Color) -> Self {
        Self {
            position,
            radius,
            color,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World-space radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Background stars, created once in bulk when the scene is built.
#[derive(Debug, Clone, Default)]
pub struct StarField {
    stars: Vec<Star>,
    min_radius_px: f32,
}

impl StarField {
    pub fn new(stars: Vec<Star>, min_radius_px: f32) -> Self {
        Self {
            stars,
            min_radius_px,
        }
    }

    /// Scatter `config.count` stars with random position, depth, size and brightness.
    pub fn generate(config: &StarFieldConfig, rng: &mut Rng) -> Self {
        let [hx, hy] = config.half_extent;
        let stars = (0..config.count)
            .map(|_| {
                let x = rng.range_f32(-hx, hx);
                let y = rng.range_f32(-hy, hy);
                let z = rng.range_f32(config.depth[0], config.depth[1]);
                let r = rng.range_f32(config.radius[0], config.radius[1]);
                let level = rng.range_u32(config.brightness[0] as u32, config.brightness[1] as u32);
                Star::new(Vec3::new(x, y, z), r, Color::grey8(level.min(255) as u8))
            })
            .collect();
        Self::new(stars, config.min_radius_px)
    }

    /// Smallest on-screen radius in pixels.
    pub fn min_radius_px(&self) -> f32 {
        self.min_radius_px
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_respects_config_ranges() {
        let config = StarFieldConfig::default();
        let mut rng = Rng::new(1);
        let field = StarField::generate(&config, &mut rng);
        assert_eq!(field.len(), 200);
        for star in field.iter() {
            let p = star.position();
            assert!(p.x >= -500.0 && p.x < 500.0);
            assert!(p.y >= -400.0 && p.y < 400.0);
            assert!(p.z >= 50.0 && p.z < 1000.0);
            assert!(star.radius() >= 0.5 && star.radius() < 2.0);
            let c = star.color();
            assert!(c.r >= 150.0 / 255.0 - 1e-6);
            assert_eq!(c.r, c.b);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let config = StarFieldConfig::default();
        let a = StarField::generate(&config, &mut Rng::new(42));
        let b = StarField::generate(&config, &mut Rng::new(42));
        let c = StarField::generate(&config, &mut Rng::new(43));
        assert!(a.iter().eq(b.iter()));
        assert!(!a.iter().eq(c.iter()));
    }

    #[test]
    fn empty_field() {
        let config = StarFieldConfig {
            count: 0,
            ..Default::default()
        };
        let field = StarField::generate(&config, &mut Rng::new(5));
        assert!(field.is_empty());
        assert_eq!(field.min_radius_px(), 0.2);
    }
}
