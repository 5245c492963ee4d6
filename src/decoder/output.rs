//! Per-call output accumulation
//!
//! The decoder threads one [`Output`] through header rendering and token
//! rendering. It is an append-only list of finished lines plus one open line
//! that successive fragments extend; a statement can therefore span several
//! tokens (wind shear `WS ALL RWY`) before its line is closed. The final
//! string is joined exactly once.

/// Ordered accumulator for rendered text fragments
#[derive(Debug, Default)]
pub struct Output {
    lines: Vec<String>,
    current: String,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment to the open line
    pub fn push(&mut self, fragment: &str) {
        self.current.push_str(fragment);
    }

    /// Close the open line, committing it to the line list
    pub fn end_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
    }

    /// Append a complete line
    pub fn line(&mut self, text: &str) {
        self.push(text);
        self.end_line();
    }

    /// Insert a blank separator line ahead of a new section, closing any
    /// open line first
    pub fn blank_line(&mut self) {
        if !self.current.is_empty() {
            self.end_line();
        }
        self.lines.push(String::new());
    }

    /// Join all fragments into the final line-broken text
    pub fn finish(mut self) -> String {
        if !self.current.is_empty() {
            self.end_line();
        }
        self.lines.join("\n")
    }
}
