use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;

/// Line based frame output on top of any writer, stdout by default.
pub struct Terminal<W: Write = io::Stdout> {
    out: W,
}

impl Terminal {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Clear the whole screen and move the cursor back to the top left corner
    pub fn clear(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )
    }

    /// Print a frame line by line, then flush.
    pub fn draw(&mut self, frame: &str) -> io::Result<()> {
        for line in frame.lines() {
            queue!(self.out, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod test {
    use super::Terminal;

    #[test]
    fn draws_every_line() {
        let mut term = Terminal::new(Vec::new());

        term.draw("#.\n.#\n").unwrap();

        let out = String::from_utf8(term.into_inner()).unwrap();
        let pos = out.find("#.").unwrap();

        assert!(out[pos..].contains(".#"));
    }
}
