//! src/model/viewport.rs
//! ============================================================================
//! # `Viewport`: cursor and scroll state over the flattened tree
//!
//! The number of visible lines changes whenever a directory is toggled, so
//! nothing here holds an absolute tree size. Downward movement is bounded by
//! `visible_lines`, the count reported by the most recent render.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Line the cursor targets.
    pub selected_line: usize,

    /// First line drawn on screen.
    pub top_line: usize,

    /// Rows available for drawing.
    pub height: usize,

    /// Total lines counted by the last render.
    pub visible_lines: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(height: usize) -> Self {
        Self {
            selected_line: 0,
            top_line: 0,
            height: height.max(1),
            visible_lines: 0,
        }
    }

    /// Move the cursor one line up, scrolling up when it leaves the top.
    pub const fn move_up(&mut self) {
        if self.selected_line > 0 {
            self.selected_line -= 1;
        }
        if self.selected_line < self.top_line {
            self.top_line -= 1;
        }
    }

    /// Move the cursor one line down, scrolling down when it leaves the bottom.
    pub const fn move_down(&mut self) {
        // recover from an earlier upward scroll past the cursor
        if self.selected_line <= self.top_line {
            self.top_line = self.selected_line;
        }
        if self.selected_line + 1 < self.visible_lines {
            self.selected_line += 1;
        }
        if self.selected_line >= self.top_line + self.height {
            self.top_line += 1;
        }
    }

    /// Page up (one viewport height of single steps)
    pub fn page_up(&mut self) {
        for _ in 0..self.height {
            self.move_up();
        }
    }

    /// Page down (one viewport height of single steps)
    pub fn page_down(&mut self) {
        for _ in 0..self.height {
            self.move_down();
        }
    }

    /// Update the height after a terminal resize and keep the cursor on screen.
    pub const fn set_height(&mut self, height: usize) {
        self.height = if height == 0 { 1 } else { height };
        if self.selected_line >= self.top_line + self.height {
            self.top_line = self.selected_line + 1 - self.height;
        }
    }

    /// Record the line count of a finished render.
    pub const fn set_visible_lines(&mut self, count: usize) {
        self.visible_lines = count;
    }

    /// Is `line` inside the drawn window?
    pub const fn contains(&self, line: usize) -> bool {
        line >= self.top_line && line < self.top_line + self.height
    }

    /// Screen row for `line`, if it is drawn.
    pub const fn row_of(&self, line: usize) -> Option<usize> {
        if self.contains(line) {
            Some(line - self.top_line)
        } else {
            None
        }
    }
}
