//! Per-read state
//!
//! [`SectionAccumulator`] is folded over the lines of one file. It owns every
//! piece of state a read needs: the pending buffer, the open section, the
//! declared names and the committed groups. [`SectionAccumulator::finish`]
//! consumes it into a [`ScanOutcome`], so nothing carries over between reads.
//!
//! Commit rules:
//!
//! - a marker or the end of input commits the pending buffer under the open
//!   section, but only when both exist and the buffer is non-empty
//! - committing a name that already has a group replaces that group
//! - identifiers read while no section is open are dropped at the next marker
//! - a marker naming the excluded default section closes the open section and
//!   is not recorded as declared

use crate::error::Result;
use crate::identifier::IdentifierValidator;
use crate::reader::{ReadResult, ReaderOptions, Section};
use crate::section::{classify, LineKind};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Label used when validating a flat list of GO IDs.
pub const FLAT_CONTEXT: &str = "read_goids";

#[derive(Debug)]
pub struct SectionAccumulator<'o> {
    options: &'o ReaderOptions,
    pending: Vec<String>,
    current: Option<String>,
    declared: Vec<String>,
    committed: HashMap<String, Vec<String>>,
    marker_seen: bool,
    noise_lines: usize,
}

impl<'o> SectionAccumulator<'o> {
    pub fn new(options: &'o ReaderOptions) -> Self {
        Self {
            options,
            pending: Vec::new(),
            current: None,
            declared: Vec::new(),
            committed: HashMap::new(),
            marker_seen: false,
            noise_lines: 0,
        }
    }

    /// Feed one line, without its line terminator.
    pub fn accept(&mut self, line: &str) {
        match classify(line, self.options.identifiers_only) {
            LineKind::Identifier(id) => self.pending.push(id.to_string()),
            LineKind::Marker(name) => self.open_section(name),
            LineKind::Noise => {
                trace!(line, "ignored line");
                self.noise_lines += 1;
            }
        }
    }

    fn open_section(&mut self, name: &str) {
        self.marker_seen = true;
        self.commit_pending();
        if self.options.exclude_default_section && name == self.options.default_section {
            debug!(section = name, "skipping excluded default section");
            self.current = None;
        } else {
            debug!(section = name, "opened section");
            self.current = Some(name.to_string());
            self.declared.push(name.to_string());
        }
        self.pending.clear();
    }

    fn commit_pending(&mut self) {
        let Some(name) = &self.current else {
            return;
        };
        if self.pending.is_empty() {
            return;
        }
        let ids = std::mem::take(&mut self.pending);
        debug!(section = %name, count = ids.len(), "committed section");
        if let Some(previous) = self.committed.insert(name.clone(), ids) {
            debug!(
                section = %name,
                replaced = previous.len(),
                "section declared again; earlier GO IDs replaced"
            );
        }
    }

    /// Close the last section and hand back everything collected.
    pub fn finish(mut self) -> ScanOutcome {
        self.commit_pending();
        trace!(noise = self.noise_lines, "finished scan");
        // Once any marker was read, stray IDs outside a section are not a flat list.
        let flat = if self.marker_seen {
            Vec::new()
        } else {
            self.pending
        };
        ScanOutcome {
            flat,
            declared: self.declared,
            committed: self.committed,
        }
    }
}

/// Everything a scan collected, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    flat: Vec<String>,
    declared: Vec<String>,
    committed: HashMap<String, Vec<String>>,
}

impl ScanOutcome {
    /// GO IDs of a file without sections.
    pub fn flat(&self) -> &[String] {
        &self.flat
    }

    /// Section names in the order they were declared, repeats included.
    pub fn declared(&self) -> &[String] {
        &self.declared
    }

    /// Last committed group for each section that received GO IDs.
    pub fn committed(&self) -> &HashMap<String, Vec<String>> {
        &self.committed
    }

    pub fn has_sections(&self) -> bool {
        !self.declared.is_empty()
    }

    /// Declared sections that never received a GO ID, once each, in declaration order.
    pub fn unused_sections(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.declared
            .iter()
            .filter(|name| !self.committed.contains_key(name.as_str()))
            .filter(|name| seen.insert(name.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Validate every group and assemble the result.
    ///
    /// Returns `None` when there is nothing to return. Validation stops at the
    /// first bad group; no partial result is produced.
    pub fn into_result(self, validator: &dyn IdentifierValidator) -> Result<Option<ReadResult>> {
        if self.declared.is_empty() {
            if self.flat.is_empty() {
                return Ok(None);
            }
            validator.validate(&self.flat, FLAT_CONTEXT)?;
            return Ok(Some(ReadResult::Goids(self.flat)));
        }

        let mut committed = self.committed;
        let mut sections = Vec::with_capacity(committed.len());
        for name in self.declared {
            // Later declarations of a name were already folded into its first position.
            let Some(ids) = committed.remove(&name) else {
                continue;
            };
            validator.validate(&ids, &section_context(&name))?;
            sections.push(Section { name, ids });
        }
        if sections.is_empty() {
            return Ok(None);
        }
        Ok(Some(ReadResult::Sections(sections)))
    }
}

/// Label used when validating the GO IDs of one section.
pub fn section_context(name: &str) -> String {
    format!("GO IDs IN SECTION({name})")
}
