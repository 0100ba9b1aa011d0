pub mod runner;

pub use runner::SceneRunner;

use std::cell::RefCell;

use orrery::{Command, SceneConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SceneRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut SceneRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Scene not initialized. Call scene_init() first.");
        f(runner)
    })
}

/// Build the scene. `config_json` may override any subset of the defaults;
/// a config that fails to parse is reported and the defaults are used.
#[wasm_bindgen]
pub fn scene_init(config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json.as_deref().map(SceneConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            log::warn!("orrery: bad config, using defaults: {}", err);
            SceneConfig::default()
        }
        None => SceneConfig::default(),
    };

    let runner = SceneRunner::new(&config);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized");
}

#[wasm_bindgen]
pub fn scene_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// Queue a command by name (`"move_up"`, `"zoom_in"`, `"quit"`, ...).
/// Returns false for unknown names.
#[wasm_bindgen]
pub fn scene_command(name: &str) -> bool {
    with_runner(|r| match r.push_named(name) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("orrery: {}", err);
            false
        }
    })
}

/// Queue a command by numeric code. Returns false for unknown codes.
#[wasm_bindgen]
pub fn scene_command_code(code: u32) -> bool {
    match Command::from_code(code) {
        Some(command) => {
            with_runner(|r| r.push_command(command));
            true
        }
        None => false,
    }
}

#[wasm_bindgen]
pub fn scene_resize(width: u32, height: u32) {
    with_runner(|r| r.push_command(Command::Resize { width, height }));
}

#[wasm_bindgen]
pub fn scene_quit_requested() -> bool {
    with_runner(|r| r.quit_requested())
}

#[wasm_bindgen]
pub fn scene_hud_label() -> String {
    with_runner(|r| r.hud_label())
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr())
}

#[wasm_bindgen]
pub fn get_frame_len() -> u32 {
    with_runner(|r| r.frame_len())
}

#[wasm_bindgen]
pub fn get_command_count() -> u32 {
    with_runner(|r| r.command_count())
}

#[wasm_bindgen]
pub fn get_max_commands() -> u32 {
    with_runner(|r| r.max_commands())
}

/// Copy of the frame buffer, for hosts that cannot read linear memory.
#[wasm_bindgen]
pub fn get_frame_data() -> js_sys::Float32Array {
    with_runner(|r| js_sys::Float32Array::from(r.frame_buffer().as_slice()))
}

// ---- Vector accessors ----

#[cfg(feature = "vectors")]
#[wasm_bindgen]
pub fn get_vector_vertices_ptr() -> *const f32 {
    with_runner(|r| r.vector_vertices_ptr())
}

#[cfg(feature = "vectors")]
#[wasm_bindgen]
pub fn get_vector_vertex_count() -> u32 {
    with_runner(|r| r.vector_vertex_count())
}
