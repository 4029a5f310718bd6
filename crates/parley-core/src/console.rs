//! Line-oriented console abstraction.
//!
//! The prompt engine talks to a [`Console`] rather than to stdin/stdout
//! directly, so the same flow runs against a terminal in production and
//! against a scripted transcript in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// A textual channel that can display messages and read lines.
///
/// `read_line` returns `Ok(None)` at end of input. The prompt engine treats
/// that as an ordinary rejected attempt, never as a panic or a distinct
/// error.
pub trait Console {
    /// Write text without a trailing newline (and make it visible).
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write text followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Read one line, without its line terminator. `None` means end of
    /// input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// The real console: stdout for display, stdin for input.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        // Prompts end mid-line; without a flush the user sees nothing.
        stdout.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// A console driven by a pre-scripted list of input lines, capturing all
/// output. Used by tests and by non-interactive callers that replay a
/// transcript.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    /// Build a console that will yield the given lines in order, then
    /// report end of input.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Everything written so far, prompts and notices interleaved.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of scripted lines not yet consumed.
    pub fn remaining_lines(&self) -> usize {
        self.lines.len()
    }
}

impl Console for ScriptedConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_yields_lines_in_order() {
        let mut console = ScriptedConsole::new(["first", "second"]);
        assert_eq!(console.read_line().unwrap(), Some("first".to_string()));
        assert_eq!(console.read_line().unwrap(), Some("second".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
        assert_eq!(console.remaining_lines(), 0);
    }

    #[test]
    fn test_scripted_console_captures_output() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        console.write("Name: ").unwrap();
        console.write_line("Invalid value []").unwrap();
        assert_eq!(console.output(), "Name: Invalid value []\n");
    }
}
