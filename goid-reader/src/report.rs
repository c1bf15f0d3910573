//! Report events and sinks
//!
//! The reader never prints. Everything a user should see about a read is a
//! [`ReadEvent`] handed to a [`ReportSink`]:
//!
//! - [`NoReport`] drops events
//! - [`WriterSink`] writes one line per event to any `io::Write`
//! - `Vec<ReadEvent>` records events, handy in tests

use crate::summary::SectionSummary;
use std::fmt;
use std::io::Write;
use tracing::warn;

/// Something worth telling the user about a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    /// A declared section never received a GO ID
    UnusedSection { name: String },
    /// A file without sections was read
    GoidsRead { count: usize, file: String },
    /// A file with sections was read
    SectionsRead { summary: SectionSummary, file: String },
    /// Nothing usable was found
    NoIdentifiers,
    /// The file could not be opened
    CannotRead { path: String },
}

impl fmt::Display for ReadEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadEvent::UnusedSection { name } => write!(f, "  UNUSED SECTION: {}", name),
            ReadEvent::GoidsRead { count, file } => write!(f, "  {} GO IDs READ: {}", count, file),
            ReadEvent::SectionsRead { summary, file } => write!(
                f,
                "  READ: {:>3} sections, {:>5} hdr GO IDs, {:>5} ungrouped: {}",
                summary.sections, summary.identifiers, summary.ungrouped, file
            ),
            ReadEvent::NoIdentifiers => {
                write!(f, "**WARNING: GO IDs MUST BE THE FIRST 10 CHARACTERS OF EACH LINE")
            }
            ReadEvent::CannotRead { path } => write!(f, "CANNOT READ: {}", path),
        }
    }
}

pub trait ReportSink {
    fn report(&mut self, event: ReadEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReport;

impl ReportSink for NoReport {
    fn report(&mut self, _event: ReadEvent) {}
}

impl ReportSink for Vec<ReadEvent> {
    fn report(&mut self, event: ReadEvent) {
        self.push(event);
    }
}

/// Writes each event as a line.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn report(&mut self, event: ReadEvent) {
        // A failing report stream must not fail the read.
        if let Err(err) = writeln!(self.out, "{}", event) {
            warn!(error = %err, "failed to write report line");
        }
    }
}
