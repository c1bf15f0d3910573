//! Reading GO list files
//!
//! [`GoidReader`] runs one pass over a line source and returns either the flat
//! list of GO IDs or the sections they were grouped into. It never writes to
//! the console on its own: warnings and the read summary are handed to the
//! [`ReportSink`] the caller passes in.
//!
//! The two free functions cover the common file-based calls:
//!
//! - [`read_goids`] reads a file and returns whatever it holds
//! - [`read_sections`] only cares about sections and tolerates a missing file

use crate::accumulator::{ScanOutcome, SectionAccumulator};
use crate::error::Result;
use crate::identifier::{IdentifierValidator, StrictValidator};
use crate::report::{ReadEvent, ReportSink};
use crate::section::DEFAULT_SECTION;
use crate::summary::{SectionSummarizer, Summarizer};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Knobs for a single read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Treat section markers as noise and return every GO ID as one flat list
    pub identifiers_only: bool,
    /// Drop the section named [`ReaderOptions::default_section`] and its GO IDs
    pub exclude_default_section: bool,
    /// Name of the ungrouped section, [`DEFAULT_SECTION`] unless configured
    pub default_section: String,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            identifiers_only: false,
            exclude_default_section: false,
            default_section: DEFAULT_SECTION.to_string(),
        }
    }
}

/// A named group of GO IDs, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub ids: Vec<String>,
}

impl Section {
    pub fn new<I, S>(name: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

// Sections serialize as `[name, [ids...]]` pairs.
impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (&self.name, &self.ids).serialize(serializer)
    }
}

/// What a GO list file held.
///
/// Serializes as `{"goids": [...]}` or `{"sections": [[name, [...]], ...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    /// The file declared no sections
    Goids(Vec<String>),
    /// Sections holding at least one GO ID, in order of first declaration
    Sections(Vec<Section>),
}

// A one-entry map rather than an enum variant, so YAML gets a plain
// `goids:` / `sections:` key instead of a `!tag`.
impl Serialize for ReadResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            ReadResult::Goids(ids) => map.serialize_entry("goids", ids)?,
            ReadResult::Sections(sections) => map.serialize_entry("sections", sections)?,
        }
        map.end()
    }
}

impl ReadResult {
    pub fn goids(&self) -> Option<&[String]> {
        match self {
            ReadResult::Goids(ids) => Some(ids),
            ReadResult::Sections(_) => None,
        }
    }

    pub fn sections(&self) -> Option<&[Section]> {
        match self {
            ReadResult::Goids(_) => None,
            ReadResult::Sections(sections) => Some(sections),
        }
    }

    pub fn into_sections(self) -> Option<Vec<Section>> {
        match self {
            ReadResult::Goids(_) => None,
            ReadResult::Sections(sections) => Some(sections),
        }
    }

    /// Number of GO IDs across all groups.
    pub fn identifier_count(&self) -> usize {
        match self {
            ReadResult::Goids(ids) => ids.len(),
            ReadResult::Sections(sections) => sections.iter().map(|s| s.ids.len()).sum(),
        }
    }
}

/// Reads GO list files with a pluggable validator and summarizer.
///
/// ```text
/// let reader = GoidReader::new(ReaderOptions::default());
/// let result = reader.read_path("goids.txt", &mut NoReport)?;
/// ```
#[derive(Debug, Clone)]
pub struct GoidReader<V = StrictValidator, S = SectionSummarizer> {
    options: ReaderOptions,
    validator: V,
    summarizer: S,
}

impl GoidReader {
    pub fn new(options: ReaderOptions) -> Self {
        let summarizer = SectionSummarizer::new(options.default_section.clone());
        Self {
            options,
            validator: StrictValidator,
            summarizer,
        }
    }
}

impl Default for GoidReader {
    fn default() -> Self {
        Self::new(ReaderOptions::default())
    }
}

impl<V: IdentifierValidator, S: Summarizer> GoidReader<V, S> {
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Swap the identifier validator.
    pub fn with_validator<V2: IdentifierValidator>(self, validator: V2) -> GoidReader<V2, S> {
        GoidReader {
            options: self.options,
            validator,
            summarizer: self.summarizer,
        }
    }

    /// Swap the summarizer used for the read summary.
    pub fn with_summarizer<S2: Summarizer>(self, summarizer: S2) -> GoidReader<V, S2> {
        GoidReader {
            options: self.options,
            validator: self.validator,
            summarizer,
        }
    }

    /// Classify every line of `input` without validating or reporting.
    pub fn scan<R: BufRead>(&self, input: R) -> Result<ScanOutcome> {
        let mut acc = SectionAccumulator::new(&self.options);
        for line in input.lines() {
            acc.accept(&line?);
        }
        Ok(acc.finish())
    }

    /// Read GO IDs from any line source.
    ///
    /// Unused sections and the "no GO IDs" warning go to `sink`. No summary
    /// line is written since the source has no file name.
    pub fn parse<R: BufRead>(
        &self,
        input: R,
        sink: &mut dyn ReportSink,
    ) -> Result<Option<ReadResult>> {
        let outcome = self.scan(input)?;
        self.finish(outcome, None, sink)
    }

    /// Convenience wrapper around [`GoidReader::parse`] for in-memory text.
    pub fn parse_str(&self, text: &str, sink: &mut dyn ReportSink) -> Result<Option<ReadResult>> {
        self.parse(text.as_bytes(), sink)
    }

    /// Read a GO list file and report a summary line naming it.
    ///
    /// The file is closed before this returns, on success or failure.
    pub fn read_path(
        &self,
        path: impl AsRef<Path>,
        sink: &mut dyn ReportSink,
    ) -> Result<Option<ReadResult>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        self.read_file(file, &path.display().to_string(), sink)
    }

    /// Like [`GoidReader::read_path`], but only returns sections and treats a
    /// file that cannot be opened as having none.
    pub fn read_sections(
        &self,
        path: impl AsRef<Path>,
        sink: &mut dyn ReportSink,
    ) -> Result<Option<Vec<Section>>> {
        let path = path.as_ref();
        let label = path.display().to_string();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                debug!(path = %label, error = %err, "cannot open sections file");
                sink.report(ReadEvent::CannotRead { path: label });
                return Ok(None);
            }
        };
        let result = self.read_file(file, &label, sink)?;
        Ok(result.and_then(ReadResult::into_sections))
    }

    fn read_file(
        &self,
        file: File,
        label: &str,
        sink: &mut dyn ReportSink,
    ) -> Result<Option<ReadResult>> {
        // The handle is dropped with the scan, before validation runs.
        let outcome = self.scan(BufReader::new(file))?;
        self.finish(outcome, Some(label), sink)
    }

    fn finish(
        &self,
        outcome: ScanOutcome,
        file: Option<&str>,
        sink: &mut dyn ReportSink,
    ) -> Result<Option<ReadResult>> {
        for name in outcome.unused_sections() {
            sink.report(ReadEvent::UnusedSection {
                name: name.to_string(),
            });
        }

        if let Some(file) = file {
            self.report_summary(&outcome, file, sink);
        }

        let result = outcome.into_result(&self.validator)?;
        match &result {
            Some(result) => {
                info!(
                    identifiers = result.identifier_count(),
                    sections = result.sections().map_or(0, <[Section]>::len),
                    "read GO IDs"
                );
            }
            None => {
                debug!("no GO IDs found");
                sink.report(ReadEvent::NoIdentifiers);
            }
        }
        Ok(result)
    }

    fn report_summary(&self, outcome: &ScanOutcome, file: &str, sink: &mut dyn ReportSink) {
        if outcome.has_sections() || self.options.exclude_default_section {
            let summary = self.summarizer.summarize(outcome.committed());
            sink.report(ReadEvent::SectionsRead {
                summary,
                file: file.to_string(),
            });
        } else if !outcome.flat().is_empty() {
            sink.report(ReadEvent::GoidsRead {
                count: outcome.flat().len(),
                file: file.to_string(),
            });
        }
    }
}

/// Read a GO list file with the default validator and summarizer.
pub fn read_goids(
    path: impl AsRef<Path>,
    options: ReaderOptions,
    sink: &mut dyn ReportSink,
) -> Result<Option<ReadResult>> {
    GoidReader::new(options).read_path(path, sink)
}

/// Sections of a GO list file, if it has any.
///
/// Returns `None` when no path is given, when the file declares no sections,
/// or when the file cannot be opened; the last case is reported to `sink` as
/// [`ReadEvent::CannotRead`] instead of failing. Malformed GO IDs and read
/// errors past the open still fail.
pub fn read_sections(
    path: Option<&Path>,
    exclude_ungrouped: bool,
    sink: &mut dyn ReportSink,
) -> Result<Option<Vec<Section>>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let options = ReaderOptions {
        exclude_default_section: exclude_ungrouped,
        ..ReaderOptions::default()
    };
    GoidReader::new(options).read_sections(path, sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_accessors() {
        let flat = ReadResult::Goids(vec!["GO:0000001".into(), "GO:0000002".into()]);
        assert_eq!(flat.goids().map(<[String]>::len), Some(2));
        assert!(flat.sections().is_none());
        assert_eq!(flat.identifier_count(), 2);

        let grouped = ReadResult::Sections(vec![
            Section::new("A", ["GO:0000001", "GO:0000002"]),
            Section::new("B", ["GO:0000003"]),
        ]);
        assert!(grouped.goids().is_none());
        assert_eq!(grouped.identifier_count(), 3);
        assert_eq!(grouped.into_sections().map(|s| s.len()), Some(2));
    }

    #[test]
    fn default_options_use_misc_section() {
        let options = ReaderOptions::default();
        assert_eq!(options.default_section, "Misc.");
        assert!(!options.identifiers_only);
        assert!(!options.exclude_default_section);
    }

    #[test]
    fn scan_propagates_invalid_utf8() {
        let reader = GoidReader::default();
        let bytes: &[u8] = b"GO:0000001\n\xff\xfe\n";
        assert!(reader.scan(bytes).is_err());
    }
}
