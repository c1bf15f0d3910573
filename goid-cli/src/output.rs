//! Formatting of read results for stdout.

use goid_config::OutputFormat;
use goid_reader::{to_text, ReadResult};

pub fn render(result: &ReadResult, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(to_text(result)),
        OutputFormat::Json => serde_json::to_string_pretty(result)
            .map(|json| json + "\n")
            .map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(result).map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goid_reader::Section;

    fn sample() -> ReadResult {
        ReadResult::Sections(vec![
            Section::new("A", ["GO:0000001", "GO:0000002"]),
            Section::new("B", ["GO:0000003"]),
        ])
    }

    #[test]
    fn json_uses_section_pairs() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sections"][0][0], "A");
        assert_eq!(value["sections"][0][1][1], "GO:0000002");
        assert_eq!(value["sections"][1][1][0], "GO:0000003");
    }

    #[test]
    fn yaml_round_trips_through_serde_value() {
        let yaml = render(&sample(), OutputFormat::Yaml).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["sections"][1][0].as_str(), Some("B"));
    }

    #[test]
    fn yaml_uses_plain_keys_not_tags() {
        let sections = render(&sample(), OutputFormat::Yaml).unwrap();
        assert!(sections.starts_with("sections:\n"), "{}", sections);

        let flat = ReadResult::Goids(vec!["GO:0000001".to_string()]);
        let yaml = render(&flat, OutputFormat::Yaml).unwrap();
        assert_eq!(yaml, "goids:\n- GO:0000001\n");
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["goids"][0].as_str(), Some("GO:0000001"));
    }

    #[test]
    fn text_is_the_list_format() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("# SECTION: A\nGO:0000001\n"));
    }
}
