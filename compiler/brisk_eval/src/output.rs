//! Where the rendered stack goes.
//!
//! - `Stdout`: the command-line driver
//! - `Buffer`: tests and embedders that want the text back
//! - `Silent`: discard
//!
//! Enum dispatch keeps the handler a plain value with no vtable.

use parking_lot::Mutex;

use brisk_value::Stack;

use crate::render::render_stack;

/// Writes to stdout.
#[derive(Default)]
pub struct StdoutOutputHandler;

impl StdoutOutputHandler {
    pub fn print(&self, msg: &str) {
        print!("{msg}");
    }
}

/// Captures everything printed.
#[derive(Default)]
pub struct BufferOutputHandler {
    buffer: Mutex<String>,
}

impl BufferOutputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    /// Everything captured so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Output destination for stack renders.
pub enum OutputHandler {
    Stdout(StdoutOutputHandler),
    Buffer(BufferOutputHandler),
    Silent,
}

impl OutputHandler {
    pub fn stdout() -> Self {
        Self::Stdout(StdoutOutputHandler)
    }

    pub fn buffer() -> Self {
        Self::Buffer(BufferOutputHandler::new())
    }

    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
            Self::Silent => {}
        }
    }

    /// Print the whole stack, bottom to top, followed by a newline.
    pub fn print_stack(&self, stack: &Stack) {
        self.print(&render_stack(stack));
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}
