use orrery::{
    Command, CommandQueue, DrawList, FixedTimestep, FrameBuffer, FrameClock, FrameHeader, Scene,
    SceneConfig, UnknownCommand,
};
#[cfg(feature = "vectors")]
use orrery::VectorState;

/// Drives a `Scene` from the host's frame loop.
///
/// The host calls `tick` once per animation frame with the elapsed seconds,
/// then reads the frame buffer (and the vector buffer, when enabled) through
/// the pointer accessors.
pub struct SceneRunner {
    scene: Scene,
    commands: CommandQueue,
    timestep: FixedTimestep,
    clock: FrameClock,
    draw_list: DrawList,
    frame_buffer: FrameBuffer,
    #[cfg(feature = "vectors")]
    vectors: VectorState,
    frame: u64,
}

impl SceneRunner {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            scene: Scene::new(config),
            commands: CommandQueue::new(),
            timestep: FixedTimestep::new(config.fixed_dt),
            clock: FrameClock::new(),
            draw_list: DrawList::with_capacity(config.max_draw_commands),
            frame_buffer: FrameBuffer::new(config.max_draw_commands),
            #[cfg(feature = "vectors")]
            vectors: VectorState::new(),
            frame: 0,
        }
    }

    /// Queue a command for the next frame.
    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Queue a command by its host-facing name.
    pub fn push_named(&mut self, name: &str) -> Result<(), UnknownCommand> {
        let command = name.parse()?;
        self.push_command(command);
        Ok(())
    }

    /// Run one frame: commands, fixed ticks, render, pack buffers.
    pub fn tick(&mut self, dt: f32) {
        self.clock.record(dt);

        // Commands act on the state the user was looking at.
        for command in self.commands.drain() {
            self.scene.apply(command, dt);
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.scene.update();
        }

        self.draw_list.rebuild(self.scene.render());

        self.frame += 1;
        let header = FrameHeader {
            frame: self.frame,
            viewport: self.scene.camera().viewport(),
            hud: self.scene.hud(self.clock.fps()),
            show_axes: self.scene.show_axes(),
            quit_requested: self.scene.quit_requested(),
        };
        self.frame_buffer.write_frame(&header, self.draw_list.iter());

        #[cfg(feature = "vectors")]
        self.vectors.tessellate(self.draw_list.iter());
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn quit_requested(&self) -> bool {
        self.scene.quit_requested()
    }

    /// Status line for the host overlay.
    pub fn hud_label(&self) -> String {
        self.scene.hud(self.clock.fps()).label()
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame_buffer.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame_buffer.total_floats() as u32
    }

    pub fn command_count(&self) -> u32 {
        self.frame_buffer.command_count() as u32
    }

    pub fn max_commands(&self) -> u32 {
        self.frame_buffer.max_commands() as u32
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.vectors.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.vectors.vertex_count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery::bridge::protocol::{
        HEADER_CAMERA_X, HEADER_FRAME_COUNTER, HEADER_QUIT, HEADER_SHOW_AXES,
    };

    #[test]
    fn first_tick_fills_the_frame_buffer() {
        let mut runner = SceneRunner::new(&SceneConfig::default());
        assert_eq!(runner.command_count(), 0);
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.frame(), 1);
        assert_eq!(runner.command_count() as usize, runner.draw_list().len());
        assert!(runner.command_count() > 0);
        assert_eq!(runner.frame_buffer().as_slice()[HEADER_FRAME_COUNTER], 1.0);
    }

    #[test]
    fn commands_apply_before_the_frame_is_packed() {
        let mut runner = SceneRunner::new(&SceneConfig::default());
        runner.push_command(Command::MoveRight);
        runner.push_command(Command::ToggleAxes);
        runner.tick(0.1);

        let data = runner.frame_buffer().as_slice();
        assert!((data[HEADER_CAMERA_X] - 50.0).abs() < 1e-3);
        assert_eq!(data[HEADER_SHOW_AXES], 0.0);

        // Queue is drained: the next frame does not move the camera again.
        runner.tick(0.1);
        assert!((runner.scene().camera().position.x - 50.0).abs() < 1e-3);
    }

    #[test]
    fn ticks_follow_the_fixed_timestep() {
        let mut runner = SceneRunner::new(&SceneConfig::default());
        runner.tick(0.0);
        assert_eq!(runner.scene().ticks(), 0);
        runner.tick(0.1);
        let ticks = runner.scene().ticks();
        assert!((5..=6).contains(&ticks), "ticks = {}", ticks);

        // A long stall is capped.
        runner.tick(10.0);
        assert!(runner.scene().ticks() - ticks <= 10);
    }

    #[test]
    fn named_commands_and_quit() {
        let mut runner = SceneRunner::new(&SceneConfig::default());
        assert!(runner.push_named("warp").is_err());
        assert!(runner.push_named("quit").is_ok());
        assert!(!runner.quit_requested());
        runner.tick(0.016);
        assert!(runner.quit_requested());
        assert_eq!(runner.frame_buffer().as_slice()[HEADER_QUIT], 1.0);
    }

    #[test]
    fn hud_label_tracks_camera() {
        let mut runner = SceneRunner::new(&SceneConfig::default());
        runner.tick(0.016);
        assert!(runner.hud_label().starts_with("X: 0 Y: 0 Z: -500 FPS: "));
    }

    #[cfg(feature = "vectors")]
    #[test]
    fn vectors_follow_the_draw_list() {
        let mut runner = SceneRunner::new(&SceneConfig::default());
        runner.tick(0.016);
        assert!(runner.vector_vertex_count() > 0);
        assert_eq!(runner.vector_vertex_count() % 3, 0);
    }
}
