use crate::model::Statement;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;

/// Totals reported when a writer is finished
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteStats {
    pub statements: u64,
    pub lines: u64,
    pub bytes: u64,
}

/// Buffered, append-only sink for seed-file statements.
///
/// Statements land in call order, one per line. `finish` consumes the
/// writer, so the destination is flushed and released exactly once.
pub struct StatementWriter<W: Write> {
    writer: BufWriter<W>,
    stats: WriteStats,
}

impl StatementWriter<File> {
    /// Create (or truncate) `path` and write statements to it.
    pub fn create(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> StatementWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(WRITER_BUFFER_SIZE, inner),
            stats: WriteStats::default(),
        }
    }

    /// Render `stmt` and append it followed by a newline.
    pub fn write_statement<S: Statement + ?Sized>(&mut self, stmt: &S) -> std::io::Result<()> {
        let text = stmt.create_command();
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(b"\n")?;

        self.stats.statements += 1;
        self.stats.lines += stmt.line_count() as u64;
        self.stats.bytes += text.len() as u64 + 1;
        Ok(())
    }

    pub fn stats(&self) -> WriteStats {
        self.stats
    }

    /// Flush all buffered output and release the destination.
    pub fn finish(self) -> std::io::Result<WriteStats> {
        let (_inner, stats) = self.into_parts()?;
        Ok(stats)
    }

    /// Flush and hand back the underlying destination with the totals.
    pub fn into_parts(self) -> std::io::Result<(W, WriteStats)> {
        let stats = self.stats;
        let inner = self.writer.into_inner().map_err(|e| e.into_error())?;
        Ok((inner, stats))
    }
}
