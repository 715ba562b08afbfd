//! Output sinks for population summaries
//!
//! A sink receives the finished [`StatisticsSummary`] for display. Formatting
//! is the sink's concern; the statistics engine never writes output itself.

use std::io::{self, Write};

use crate::algorithm::population::StatisticsSummary;
use crate::error::Result;

/// Receiver of finished summaries
pub trait SummarySink {
    /// Emit one summary
    fn emit(&mut self, summary: &StatisticsSummary) -> Result<()>;
}

/// Writes summaries as pretty-printed JSON
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    /// Create a sink writing to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleSink<io::Stdout> {
    /// Create a sink writing to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SummarySink for ConsoleSink<W> {
    fn emit(&mut self, summary: &StatisticsSummary) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, summary)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Logs the human-readable summary at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SummarySink for LogSink {
    fn emit(&mut self, summary: &StatisticsSummary) -> Result<()> {
        for line in summary.to_string().lines() {
            log::info!("{line}");
        }
        Ok(())
    }
}
