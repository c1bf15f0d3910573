//! Writes a result back out as a GO list file.
//!
//! The output reads back into the same result.

use crate::reader::ReadResult;

pub fn to_text(result: &ReadResult) -> String {
    let mut out = String::new();
    match result {
        ReadResult::Goids(ids) => {
            for id in ids {
                out.push_str(&format!("{}\n", id));
            }
        }
        ReadResult::Sections(sections) => {
            for section in sections {
                out.push_str(&format!("# SECTION: {}\n", section.name));
                for id in &section.ids {
                    out.push_str(&format!("{}\n", id));
                }
            }
        }
    }
    out
}
