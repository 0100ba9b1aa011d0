use std::fmt;
use std::str::FromStr;

/// Host intents the scene understands.
/// Decoupled from any key binding; the host maps its keys onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ZoomIn,
    ZoomOut,
    ToggleAxes,
    Quit,
    /// The host viewport changed size (pixels).
    Resize { width: u32, height: u32 },
}

impl Command {
    /// Commands that can be named by the host (everything except `Resize`).
    pub const NAMED: [Command; 8] = [
        Command::MoveUp,
        Command::MoveDown,
        Command::MoveLeft,
        Command::MoveRight,
        Command::ZoomIn,
        Command::ZoomOut,
        Command::ToggleAxes,
        Command::Quit,
    ];

    /// Snake-case name, or None for `Resize`.
    pub fn name(&self) -> Option<&'static str> {
        Some(match self {
            Command::MoveUp => "move_up",
            Command::MoveDown => "move_down",
            Command::MoveLeft => "move_left",
            Command::MoveRight => "move_right",
            Command::ZoomIn => "zoom_in",
            Command::ZoomOut => "zoom_out",
            Command::ToggleAxes => "toggle_axes",
            Command::Quit => "quit",
            Command::Resize { .. } => return None,
        })
    }

    /// Numeric code used across the WASM boundary (index into `NAMED`).
    pub fn code(&self) -> Option<u32> {
        Self::NAMED.iter().position(|c| c == self).map(|i| i as u32)
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::NAMED.get(code as usize).copied()
    }
}

/// Error returned when parsing an unknown command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command `{}`", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMED
            .iter()
            .find(|c| c.name() == Some(s))
            .copied()
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// A queue of commands for the current frame.
/// The host pushes; the runner applies and drains them once per frame.
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Drain all pending commands. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}
