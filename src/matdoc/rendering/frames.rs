//! Prefix frames
//!
//! Each nesting level the renderer enters pushes a frame. A frame has a steady prefix that
//! goes in front of every line emitted while it is active, and can carry a one-shot prefix
//! for the first line only (the `+   ` of a bullet or the `*   ` of a definition).
//!
//! The one-shot prefix overlays the tail of the steady prefix: with steady `"    "` and
//! one-shot `"+   "` the first line gets `"+   "` and every later line gets `"    "`.

/// One prefix descriptor on the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    prefix: String,
    first: Option<String>,
}

impl Frame {
    /// A frame that only indents.
    pub fn indent(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            first: None,
        }
    }

    /// A frame whose first line gets `first` instead of the steady prefix.
    pub fn marked(prefix: impl Into<String>, first: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            first: Some(first.into()),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.first.is_some()
    }

    /// The contribution of this frame to the next line, consuming the one-shot prefix.
    fn take(&mut self) -> String {
        match self.first.take() {
            Some(first) => {
                let keep = self
                    .prefix
                    .chars()
                    .count()
                    .saturating_sub(first.chars().count());
                let mut out: String = self.prefix.chars().take(keep).collect();
                out.push_str(&first);
                out
            }
            None => self.prefix.clone(),
        }
    }
}

/// The stack of active frames, outermost first.
#[derive(Debug, Clone, Default)]
pub struct FrameStack {
    frames: Vec<Frame>,
}

impl FrameStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Prefix for the next emitted line. Pending one-shot prefixes are used up.
    pub fn line_prefix(&mut self) -> String {
        self.frames.iter_mut().map(Frame::take).collect()
    }

    /// Drop every pending one-shot prefix without emitting anything.
    pub fn clear_pending(&mut self) {
        for frame in &mut self.frames {
            frame.first = None;
        }
    }

    pub fn has_pending(&self) -> bool {
        self.frames.iter().any(Frame::is_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_prefix_is_used_once() {
        let mut stack = FrameStack::new();
        stack.push(Frame::marked("    ", "+   "));
        assert_eq!(stack.line_prefix(), "+   ");
        assert_eq!(stack.line_prefix(), "    ");
    }

    #[test]
    fn test_nested_frames_concatenate() {
        let mut stack = FrameStack::new();
        stack.push(Frame::marked("    ", "+   "));
        assert_eq!(stack.line_prefix(), "+   ");
        stack.push(Frame::marked("    ", "*   "));
        assert_eq!(stack.line_prefix(), "    *   ");
        stack.push(Frame::indent("    "));
        assert_eq!(stack.line_prefix(), "            ");
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn test_short_one_shot_overlays_tail() {
        let mut stack = FrameStack::new();
        stack.push(Frame::marked("    ", "- "));
        assert_eq!(stack.line_prefix(), "  - ");
    }

    #[test]
    fn test_clear_pending() {
        let mut stack = FrameStack::new();
        stack.push(Frame::marked("    ", "+   "));
        assert!(stack.has_pending());
        stack.clear_pending();
        assert!(!stack.has_pending());
        assert_eq!(stack.line_prefix(), "    ");
    }
}
