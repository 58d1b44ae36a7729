//! Adapters connecting the assessment engine to the outside world.
//!
//! - `terminal` - Line-oriented presentation shell over stdin/stdout

pub mod terminal;

pub use terminal::{ShellError, TerminalShell};
