//! Line-oriented output sinks

use std::io::{self, Write};

/// Append-only destination for formatted lines
pub trait LineSink: Send {
    /// Write one line. Called once per emitted record, in order.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<S: LineSink + ?Sized> LineSink for Box<S> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// Sink over any writer, flushed after every line
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

/// Collects lines in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LineSink for MemorySink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_sink_appends_newlines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();

        assert_eq!(sink.into_inner(), b"first\nsecond\n");
    }

    #[test]
    fn test_boxed_sink() {
        let mut sink: Box<dyn LineSink> = Box::new(MemorySink::new());
        sink.write_line("boxed").unwrap();
    }

    #[test]
    fn test_memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        sink.write_line("a").unwrap();
        sink.write_line("b").unwrap();

        assert_eq!(sink.lines(), ["a", "b"]);
    }
}
