//! Line-based console
//!
//! Reads player lines from any `BufRead` and writes to any `Write`, so the
//! interactive loop runs the same against stdin or an in-memory script.

use std::io::{self, BufRead, Write};

use lab_core::action::Prompt;

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Show `prompt` and read one line. `None` on end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn write_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> io::Result<()> {
        for line in lines {
            writeln!(self.writer, "{}", line.as_ref())?;
        }
        self.writer.flush()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn ask(&mut self, question: &str) -> Option<String> {
        match self.read_line(question) {
            Ok(answer) => answer,
            Err(err) => {
                log::warn!("prompt read failed: {}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_newline() {
        let mut console = Console::new(Cursor::new("look\r\nnorth\n"), Vec::new());
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("look"));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("north"));
        assert_eq!(console.read_line("> ").unwrap(), None);
        assert_eq!(String::from_utf8(console.into_writer()).unwrap(), "> > > ");
    }

    #[test]
    fn test_eof_interrupts_prompt() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert_eq!(console.ask("Your answer: "), None);
    }

    #[test]
    fn test_prompt_shows_question() {
        let mut console = Console::new(Cursor::new("piano\n"), Vec::new());
        assert_eq!(console.ask("Riddle?\nYour answer: ").as_deref(), Some("piano"));
        let out = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(out, "Riddle?\nYour answer: ");
    }
}
