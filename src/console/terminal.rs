//! Terminal I/O collaborator: one line in, free-form text out.
//!
//! The session only ever needs `read_line` and `write`, so the trait stays that
//! small. [`StreamTerminal`] adapts any `BufRead` + `Write` pair, which is how
//! the binary talks to stdin/stdout and how tests feed scripted input.

use std::io::{self, BufRead, Write};

/// Line-oriented terminal used by prompts and the command loop.
pub trait Terminal {
    /// Read the next line without its trailing newline.
    ///
    /// Returns `Ok(None)` once the input stream is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write `text` verbatim and flush it. Output failures are not reported.
    fn write(&mut self, text: &str);
}

/// [`Terminal`] over an arbitrary reader/writer pair.
#[derive(Debug)]
pub struct StreamTerminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamTerminal<R, W> {
    /// Wrap a reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the reader and writer, e.g. to inspect captured output.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl StreamTerminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal for StreamTerminal<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(
            line.trim_end_matches('\n').trim_end_matches('\r').to_string(),
        ))
    }

    fn write(&mut self, text: &str) {
        let _ = self.writer.write_all(text.as_bytes());
        let _ = self.writer.flush();
    }
}
