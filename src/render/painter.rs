//! In-place redraw for animated charts.
//!
//! The painter remembers how many lines it printed last time, walks the
//! cursor back over them and overwrites them with the next frame.

use std::io::{self, Write, stdout};

/// Hides the cursor on construction and shows it again on Drop
pub struct HiddenCursor;

impl HiddenCursor {
    #[must_use]
    pub fn new() -> Self {
        let _ = write!(stdout(), "\x1b[?25l");
        HiddenCursor
    }
}

impl Default for HiddenCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HiddenCursor {
    fn drop(&mut self) {
        let _ = write!(stdout(), "\x1b[?25h");
        let _ = stdout().flush();
    }
}

/// Move up `lines` lines and back to column 0.
#[inline]
#[must_use]
pub fn lines_back(lines: usize) -> String {
    format!("\x1b[{lines}A\r")
}

/// Redraws multi-line text over its previous output.
pub struct Painter<W: Write> {
    out: W,
    /// Lines written by the previous `draw`, trailing newline included.
    prev_lines: Option<usize>,
}

impl Painter<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W: Write> Painter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            prev_lines: None,
        }
    }

    /// Erase the previous frame (if any) and print `content` plus a newline.
    pub fn draw(&mut self, content: &str) -> io::Result<()> {
        if let Some(n) = self.prev_lines {
            self.out.write_all(lines_back(n).as_bytes())?;
            // clear to end of screen
            self.out.write_all(b"\x1b[J")?;
        }
        self.out.write_all(content.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        self.prev_lines = Some(content.matches('\n').count() + 1);
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
