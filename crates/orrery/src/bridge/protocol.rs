//! Flat frame buffer shared with the JavaScript renderer.
//! Must stay in sync with the host's reader.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 12 floats]
//! [Draw instances: max_commands × 10 floats]
//! ```
//!
//! Only `command_count` instances are valid each frame; the rest of the
//! capacity is left as-is.

use bytemuck::{Pod, Zeroable};

use crate::api::types::HudInfo;
use crate::renderer::camera::Viewport;
use crate::renderer::draw::DrawCommand;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_COMMAND_COUNT: usize = 2;
pub const HEADER_MAX_COMMANDS: usize = 3;
pub const HEADER_VIEWPORT_WIDTH: usize = 4;
pub const HEADER_VIEWPORT_HEIGHT: usize = 5;
pub const HEADER_CAMERA_X: usize = 6;
pub const HEADER_CAMERA_Y: usize = 7;
pub const HEADER_CAMERA_Z: usize = 8;
pub const HEADER_FPS: usize = 9;
pub const HEADER_SHOW_AXES: usize = 10;
pub const HEADER_QUIT: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

pub const KIND_FILLED_CIRCLE: f32 = 0.0;
pub const KIND_LINE: f32 = 1.0;

/// One draw command in wire form: 10 floats = 40 bytes.
///
/// Circles use `(x0, y0)` as center and `size` as radius.
/// Lines run from `(x0, y0)` to `(x1, y1)` with `size` as width.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawInstance {
    pub kind: f32,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub size: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl DrawInstance {
    pub const FLOATS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

impl From<&DrawCommand> for DrawInstance {
    fn from(command: &DrawCommand) -> Self {
        let color = command.color();
        let (kind, x0, y0, x1, y1, size) = match *command {
            DrawCommand::FilledCircle { center, radius, .. } => {
                (KIND_FILLED_CIRCLE, center.x, center.y, 0.0, 0.0, radius)
            }
            DrawCommand::Line { from, to, width, .. } => {
                (KIND_LINE, from.x, from.y, to.x, to.y, width)
            }
        };
        Self {
            kind,
            x0,
            y0,
            x1,
            y1,
            size,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

/// Per-frame values written to the header alongside the draw instances.
#[derive(Debug, Clone, Copy)]
pub struct FrameHeader {
    pub frame: u64,
    pub viewport: Viewport,
    pub hud: HudInfo,
    pub show_axes: bool,
    pub quit_requested: bool,
}

/// Fixed-capacity frame buffer: header followed by draw instances.
pub struct FrameBuffer {
    max_commands: usize,
    data: Vec<f32>,
}

impl FrameBuffer {
    pub fn new(max_commands: usize) -> Self {
        let mut data = vec![0.0; HEADER_FLOATS + max_commands * DrawInstance::FLOATS];
        data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        data[HEADER_MAX_COMMANDS] = max_commands as f32;
        Self { max_commands, data }
    }

    pub fn max_commands(&self) -> usize {
        self.max_commands
    }

    /// Total buffer size in floats.
    pub fn total_floats(&self) -> usize {
        self.data.len()
    }

    /// Write one frame. Commands beyond capacity are dropped.
    /// Returns the number of commands written.
    pub fn write_frame<'a>(
        &mut self,
        header: &FrameHeader,
        commands: impl IntoIterator<Item = &'a DrawCommand>,
    ) -> usize {
        let mut count = 0;
        let mut dropped = 0;
        for command in commands {
            if count == self.max_commands {
                dropped += 1;
                continue;
            }
            let offset = HEADER_FLOATS + count * DrawInstance::FLOATS;
            let instance = DrawInstance::from(command);
            self.data[offset..offset + DrawInstance::FLOATS]
                .copy_from_slice(bytemuck::cast_slice(std::slice::from_ref(&instance)));
            count += 1;
        }
        if dropped > 0 {
            log::debug!("frame {}: dropped {} draw commands over capacity", header.frame, dropped);
        }

        let d = &mut self.data;
        d[HEADER_FRAME_COUNTER] = header.frame as f32;
        d[HEADER_COMMAND_COUNT] = count as f32;
        d[HEADER_VIEWPORT_WIDTH] = header.viewport.width as f32;
        d[HEADER_VIEWPORT_HEIGHT] = header.viewport.height as f32;
        d[HEADER_CAMERA_X] = header.hud.camera.x;
        d[HEADER_CAMERA_Y] = header.hud.camera.y;
        d[HEADER_CAMERA_Z] = header.hud.camera.z;
        d[HEADER_FPS] = header.hud.fps;
        d[HEADER_SHOW_AXES] = if header.show_axes { 1.0 } else { 0.0 };
        d[HEADER_QUIT] = if header.quit_requested { 1.0 } else { 0.0 };
        count
    }

    pub fn command_count(&self) -> usize {
        self.data[HEADER_COMMAND_COUNT] as usize
    }

    /// Valid draw instances of the last written frame.
    pub fn instances(&self) -> &[DrawInstance] {
        let end = HEADER_FLOATS + self.command_count() * DrawInstance::FLOATS;
        bytemuck::cast_slice(&self.data[HEADER_FLOATS..end])
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }
}
