//! Output sinks for generated code.
//!
//! The generator never opens files itself; it writes through an [`Output`]
//! owned by the caller, who decides when to close it.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Destination for generated source text.
pub trait Output {
    /// Writes `line` followed by a newline.
    ///
    /// # Errors
    /// Returns the underlying IO error.
    fn writeln(&mut self, line: &str) -> io::Result<()> {
        self.write(line)?;
        self.write("\n")
    }

    /// Writes raw text.
    ///
    /// # Errors
    /// Returns the underlying IO error.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Flushes and finalizes the output.
    ///
    /// # Errors
    /// Returns the underlying IO error.
    fn close(&mut self) -> io::Result<()>;
}

/// Buffered file output.
#[derive(Debug)]
pub struct FileOutput {
    writer: BufWriter<File>,
}

impl FileOutput {
    /// Creates (or truncates) the file at `path`.
    ///
    /// # Errors
    /// Returns an IO error if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Output for FileOutput {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn close(&mut self) -> io::Result<()> {
        self.writer.flush()?;
        self.writer.get_ref().sync_all()
    }
}

/// In-memory output.
#[derive(Debug, Default, Clone)]
pub struct StringOutput {
    buffer: String,
}

impl StringOutput {
    /// Creates an empty output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consumes the output and returns the generated text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Output for StringOutput {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.buffer.push_str(text);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}
