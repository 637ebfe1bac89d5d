//! Explicit stack of open containers maintained during a parse.
//!
//! Replaces call-stack recursion: the chain of currently open arrays, objects and pending
//! key/value slots is held as plain [Value] frames, so nesting depth is bounded by memory
//! rather than stack space. The trace must drain to empty by the time a parse completes.

use crate::store::Value;

#[derive(Debug, Default)]
pub(crate) struct ContainerTrace {
    frames: Vec<Value>,
}

impl ContainerTrace {
    pub fn push(&mut self, frame: Value) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.frames.pop()
    }

    /// The innermost open container, if any
    pub fn top(&self) -> Option<Value> {
        self.frames.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
