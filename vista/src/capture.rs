//! Output capture.
use crate::{Error, Result, Writer};

/// Stack of output buffers.
///
/// A render owns one [`Capture`] with a single base buffer. Sections push a buffer on open and
/// pop it on close, so output always lands in the innermost open capture. Buffers are plain owned
/// values: when a render bails out early the whole stack is dropped with it and the enclosing
/// render's capture is untouched.
#[derive(Debug)]
pub struct Capture {
    stack: Vec<String>,
}

impl Capture {
    pub fn new() -> Self {
        Self { stack: vec![String::with_capacity(128)] }
    }

    /// Start capturing into a new buffer.
    pub fn push(&mut self) {
        self.stack.push(String::new());
    }

    /// Stop capturing into the innermost buffer and return its content.
    ///
    /// The base buffer cannot be popped.
    pub fn pop(&mut self) -> Result<String> {
        if self.stack.len() == 1 {
            return Err(Error::Logic("no output capture is open".into()));
        }
        Ok(self.stack.pop().unwrap_or_default())
    }

    /// Number of open captures above the base buffer.
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Consume the capture, returning the base buffer.
    pub fn finish(mut self) -> String {
        self.stack.swap_remove(0)
    }
}

impl Default for Capture {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for Capture {
    fn write_str(&mut self, value: &str) -> Result<()> {
        if let Some(buffer) = self.stack.last_mut() {
            buffer.push_str(value);
        }
        Ok(())
    }
}
