// Console reporter: the human-readable progress lines. Markers get a
// little colour through `crossterm` when stdout is a terminal; paths are
// always printed plain.

use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use std::io::{self, Write};
use std::path::Path;

pub const START_MARKER: &str = "🚧 Building...";
pub const DONE_MARKER: &str = "Component boilerplate created! 🤖✨";

/// Writes progress lines to any `io::Write`. The binaries use
/// `Reporter::stdout()`; tests pass a `Vec<u8>`.
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl Reporter<io::Stdout> {
    /// Reporter on stdout, coloured only when stdout is a terminal.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let color = out.is_tty();
        Reporter::new(out).with_color(color)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter { out, color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn start(&mut self) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", START_MARKER.yellow())
        } else {
            writeln!(self.out, "{START_MARKER}")
        }
    }

    pub fn file(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "|-- {}", path.display())
    }

    pub fn done(&mut self) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", DONE_MARKER.green().bold())?;
        } else {
            writeln!(self.out, "{DONE_MARKER}")?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_in_order() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.start().unwrap();
        reporter.file(Path::new("./Card/Card.tsx")).unwrap();
        reporter.file(Path::new("./Card/Card.styles.js")).unwrap();
        reporter.done().unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            text,
            "🚧 Building...\n\
             |-- ./Card/Card.tsx\n\
             |-- ./Card/Card.styles.js\n\
             Component boilerplate created! 🤖✨\n"
        );
    }

    #[test]
    fn color_leaves_paths_plain() {
        let mut reporter = Reporter::new(Vec::new()).with_color(true);
        reporter.start().unwrap();
        reporter.file(Path::new("./Card/Card.tsx")).unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.contains(START_MARKER));
        assert!(text.contains("\n|-- ./Card/Card.tsx\n"));
    }
}
