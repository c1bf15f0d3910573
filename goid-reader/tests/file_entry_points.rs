//! `read_goids` and `read_sections` against files on disk.

use goid_reader::{
    read_goids, read_sections, ReadEvent, ReadResult, ReaderOptions, Section, SectionSummary,
    WriterSink,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

const SECTIONED: &str = "\
# Immune and development terms
# SECTION: Immune response
GO:0006955 immune response
GO:0045087 innate immune response
# SECTION: Unused
# SECTION: Development
GO:0032502 developmental process
# SECTION: Misc.
GO:0008150 biological_process
";

#[test]
fn read_goids_reports_flat_summary() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "flat.txt", "GO:0008150\nGO:0003674\n");

    let mut events: Vec<ReadEvent> = Vec::new();
    let result = read_goids(&path, ReaderOptions::default(), &mut events).unwrap();

    assert_eq!(
        result,
        Some(ReadResult::Goids(vec![
            "GO:0008150".to_string(),
            "GO:0003674".to_string()
        ]))
    );
    assert_eq!(
        events,
        vec![ReadEvent::GoidsRead {
            count: 2,
            file: path.display().to_string(),
        }]
    );
}

#[test]
fn read_goids_reports_unused_then_section_summary() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sections.txt", SECTIONED);

    let mut events: Vec<ReadEvent> = Vec::new();
    let result = read_goids(&path, ReaderOptions::default(), &mut events).unwrap();

    assert_eq!(result.as_ref().and_then(ReadResult::sections).map(<[Section]>::len), Some(3));
    assert_eq!(
        events,
        vec![
            ReadEvent::UnusedSection {
                name: "Unused".to_string()
            },
            ReadEvent::SectionsRead {
                summary: SectionSummary {
                    sections: 3,
                    identifiers: 4,
                    ungrouped: 1,
                },
                file: path.display().to_string(),
            },
        ]
    );
}

#[test]
fn excluding_default_still_reports_section_summary() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "only-misc.txt", "# SECTION: Misc.\nGO:0008150\n");
    let options = ReaderOptions {
        exclude_default_section: true,
        ..ReaderOptions::default()
    };

    let mut events: Vec<ReadEvent> = Vec::new();
    let result = read_goids(&path, options, &mut events).unwrap();

    assert_eq!(result, None);
    assert_eq!(
        events,
        vec![
            ReadEvent::SectionsRead {
                summary: SectionSummary::default(),
                file: path.display().to_string(),
            },
            ReadEvent::NoIdentifiers,
        ]
    );
}

#[test]
fn read_goids_fails_on_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let mut events: Vec<ReadEvent> = Vec::new();
    let err = read_goids(&missing, ReaderOptions::default(), &mut events).unwrap_err();
    assert!(matches!(err, goid_reader::ReadError::Io(_)));
    assert!(events.is_empty());
}

#[test]
fn read_sections_returns_sections_without_default() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sections.txt", SECTIONED);

    let mut events: Vec<ReadEvent> = Vec::new();
    let sections = read_sections(Some(path.as_path()), true, &mut events).unwrap();

    assert_eq!(
        sections,
        Some(vec![
            Section::new("Immune response", ["GO:0006955", "GO:0045087"]),
            Section::new("Development", ["GO:0032502"]),
        ])
    );
}

#[test]
fn read_sections_tolerates_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");

    let mut events: Vec<ReadEvent> = Vec::new();
    let sections = read_sections(Some(missing.as_path()), false, &mut events).unwrap();

    assert_eq!(sections, None);
    assert_eq!(
        events,
        vec![ReadEvent::CannotRead {
            path: missing.display().to_string()
        }]
    );
}

#[test]
fn read_sections_without_path_is_none() {
    let mut events: Vec<ReadEvent> = Vec::new();
    assert_eq!(read_sections(None::<&Path>, false, &mut events).unwrap(), None);
    assert!(events.is_empty());
}

#[test]
fn read_sections_of_flat_file_is_none() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "flat.txt", "GO:0008150\n");
    let mut events: Vec<ReadEvent> = Vec::new();
    assert_eq!(read_sections(Some(path.as_path()), false, &mut events).unwrap(), None);
}

#[test]
fn writer_sink_renders_full_report() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sections.txt", SECTIONED);

    let mut sink = WriterSink::new(Vec::<u8>::new());
    read_goids(&path, ReaderOptions::default(), &mut sink).unwrap();
    let report = String::from_utf8(sink.into_inner()).unwrap();
    let report = report.replace(&path.display().to_string(), "<file>");

    assert_eq!(
        report,
        "  UNUSED SECTION: Unused\n  READ:   3 sections,     4 hdr GO IDs,     1 ungrouped: <file>\n"
    );
}
