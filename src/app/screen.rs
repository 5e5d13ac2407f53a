//! Text frame for the 128x64 OLED: up to four lines of 21 characters
//! (6x8 font). Longer text is truncated, extra lines are dropped.

use core::fmt;

use heapless::{String, Vec};

pub const SCREEN_LINES: usize = 4;
pub const LINE_CHARS: usize = 21;

pub type Line = String<LINE_CHARS>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    lines: Vec<Line, SCREEN_LINES>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut screen = Self::new();
        for line in lines {
            screen.push_line(line.as_ref());
        }
        screen
    }

    /// Append a line; returns `false` if the screen was already full.
    pub fn push_line(&mut self, text: &str) -> bool {
        let mut line = Line::new();
        for c in text.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.lines.push(line).is_ok()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(Line::as_str)
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(Line::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
