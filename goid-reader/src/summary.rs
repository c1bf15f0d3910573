//! Section tallies for the read summary.

use std::collections::{HashMap, HashSet};

/// Counts shown in the summary line of a sectioned read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionSummary {
    /// Sections that received GO IDs
    pub sections: usize,
    /// Distinct GO IDs across those sections
    pub identifiers: usize,
    /// GO IDs filed under the default (ungrouped) section
    pub ungrouped: usize,
}

/// Turns committed sections into summary counts. Reporting only; never
/// affects the read result.
pub trait Summarizer {
    fn summarize(&self, sections: &HashMap<String, Vec<String>>) -> SectionSummary;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummarizer {
    default_section: String,
}

impl SectionSummarizer {
    pub fn new(default_section: impl Into<String>) -> Self {
        Self {
            default_section: default_section.into(),
        }
    }
}

impl Summarizer for SectionSummarizer {
    fn summarize(&self, sections: &HashMap<String, Vec<String>>) -> SectionSummary {
        let identifiers: HashSet<&str> = sections
            .values()
            .flat_map(|ids| ids.iter().map(String::as_str))
            .collect();
        let ungrouped = sections
            .get(&self.default_section)
            .map_or(0, |ids| ids.iter().collect::<HashSet<_>>().len());
        SectionSummary {
            sections: sections.len(),
            identifiers: identifiers.len(),
            ungrouped,
        }
    }
}
