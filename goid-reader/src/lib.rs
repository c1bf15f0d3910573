//! # goid-reader
//!
//! Reads GO identifiers out of plain text files.
//!
//! A GO list file is line oriented. Lines starting with a GO ID contribute the
//! first 10 characters of the line; everything after that is free text. Lines
//! such as `# SECTION: Immune response` open a named section, and the GO IDs
//! that follow are filed under it until the next marker. Every other line is
//! ignored.
//!
//!     # SECTION: Immune response
//!     GO:0006955 immune response
//!     GO:0045087 innate immune response
//!     # SECTION: Development
//!     GO:0032502 developmental process
//!
//! File Layout
//!
//!   identifier   GO ID shape, line prefix extraction and the validator seam
//!   section      section marker recognition and line classification
//!   accumulator  per-read state folded over the lines
//!   reader       entry points: `GoidReader`, `read_goids`, `read_sections`
//!   report       report events and sinks
//!   summary      section tallies used for the read summary
//!   render       writes a result back out in the list file format

pub mod accumulator;
pub mod error;
pub mod identifier;
pub mod reader;
pub mod render;
pub mod report;
pub mod section;
pub mod summary;

pub use accumulator::{ScanOutcome, SectionAccumulator};
pub use error::{ReadError, Result};
pub use identifier::{IdentifierValidator, StrictValidator, GO_ID_LEN, GO_PREFIX};
pub use reader::{read_goids, read_sections, GoidReader, ReadResult, ReaderOptions, Section};
pub use render::to_text;
pub use report::{NoReport, ReadEvent, ReportSink, WriterSink};
pub use section::{LineKind, DEFAULT_SECTION};
pub use summary::{SectionSummarizer, SectionSummary, Summarizer};
