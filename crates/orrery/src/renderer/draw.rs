use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color (components in 0.0 - 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Opaque grey with all three channels at `level`.
    pub const fn grey8(level: u8) -> Self {
        Self::rgb8(level, level, level)
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Sun orange (255, 165, 0).
    pub const ORANGE: Self = Self::rgb8(255, 165, 0);
    /// Planet blue (#4da6ff).
    pub const SKY: Self = Self::rgb8(0x4d, 0xa6, 0xff);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// One primitive for the external renderer, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FilledCircle { center: Vec2, radius: f32, color: Color },
    Line { from: Vec2, to: Vec2, color: Color, width: f32 },
}

impl DrawCommand {
    pub fn color(&self) -> Color {
        match *self {
            DrawCommand::FilledCircle { color, .. } | DrawCommand::Line { color, .. } => color,
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, DrawCommand::FilledCircle { .. })
    }
}

/// A frame's draw commands, rebuilt from scratch every frame.
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(512),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Replace the contents with a fresh frame.
    pub fn rebuild(&mut self, commands: impl Iterator<Item = DrawCommand>) {
        self.commands.clear();
        self.commands.extend(commands);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
