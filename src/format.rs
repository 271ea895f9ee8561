//! Output formats for reports.
//!
//! - [`Json`](OutputFormat::Json) - pretty-printed JSON, stable key order
//! - [`Pretty`](OutputFormat::Pretty) - indented plain text for terminals
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{NumberMap, StatsConfig};
//! use chatstats::format::{OutputFormat, to_format_string};
//! use chatstats::parser::ChatParser;
//! use chatstats::report::compute_report;
//!
//! let grouped = ChatParser::new(NumberMap::new())
//!     .parse_str("[01/01/2021, 10:00:00] Alice: hello")?;
//! let report = compute_report(&grouped, &StatsConfig::default())?;
//!
//! let json = to_format_string(&report, OutputFormat::Json)?;
//! assert!(json.contains("\"num_messages\": 1"));
//!
//! let text = to_format_string(&report, OutputFormat::Pretty)?;
//! assert!(text.starts_with("group:"));
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChatstatsError, Result};
use crate::report::Report;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,

    /// Indented plain text
    Pretty,
}

impl OutputFormat {
    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "pretty", "text", "txt"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Pretty]
    }

    /// Detects format from a file path based on extension.
    ///
    /// `.json` selects JSON, `.txt` and `.text` select the text report.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "txt" | "text" => Ok(OutputFormat::Pretty),
            _ => Err(ChatstatsError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Unknown file extension: '.{ext}'. Expected one of: json, txt"),
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Pretty => write!(f, "Pretty"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" | "text" | "txt" => Ok(OutputFormat::Pretty),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders a report in the given format.
pub fn to_format_string(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Pretty => to_pretty(report),
    }
}

/// Renders a report and writes it to `path`.
pub fn write_to_format(report: &Report, path: impl AsRef<Path>, format: OutputFormat) -> Result<()> {
    let mut rendered = to_format_string(report, format)?;
    rendered.push('\n');
    fs::write(path, rendered)?;
    Ok(())
}

// ============================================================================
// Plain text rendering
// ============================================================================

fn to_pretty(report: &Report) -> Result<String> {
    let value = serde_json::to_value(report)?;
    let mut out = String::new();
    if let Value::Object(fields) = &value {
        for (key, value) in fields {
            render_field(&mut out, key, value, 0);
        }
    }
    // Trailing newline is added by writers
    while out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

fn render_field(out: &mut String, key: &str, value: &Value, indent: usize) {
    let pad = " ".repeat(indent);
    match value {
        Value::Object(fields) => {
            out.push_str(&format!("{pad}{key}:\n"));
            for (key, value) in fields {
                render_field(out, key, value, indent + 2);
            }
        }
        Value::Array(items) if items.iter().any(Value::is_object) => {
            out.push_str(&format!("{pad}{key}:\n"));
            for item in items {
                out.push_str(&format!("{pad}  - {}\n", render_inline(item)));
            }
        }
        scalar => out.push_str(&format!("{pad}{key}: {}\n", render_inline(scalar))),
    }
}

fn render_inline(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() => format!("{f:.4}"),
            _ => n.to_string(),
        },
        Value::String(s) => s.replace('\n', "\\n"),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(render_inline).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| format!("{key}: {}", render_inline(value)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NumberMap, StatsConfig};
    use crate::parser::ChatParser;
    use crate::report::compute_report;
    use std::str::FromStr;

    fn report() -> Report {
        let grouped = ChatParser::new(NumberMap::new())
            .parse_str(
                "[01/01/2021, 10:00:00] Alice: great 🎉\n\
                 more\n\
                 [02/01/2021, 11:00:00] Bob: image omitted",
            )
            .unwrap();
        compute_report(&grouped, &StatsConfig::new().with_workers(1)).unwrap()
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("PRETTY").unwrap(), OutputFormat::Pretty);
        assert_eq!(OutputFormat::from_str("txt").unwrap(), OutputFormat::Pretty);
        assert!(OutputFormat::from_str("csv").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
        assert_eq!(OutputFormat::Pretty.to_string(), "Pretty");
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
        assert_eq!(OutputFormat::all().len(), 2);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path("report.json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path("/tmp/Report.TXT").unwrap(), OutputFormat::Pretty);
        assert_eq!(OutputFormat::from_path("out/report.text").unwrap(), OutputFormat::Pretty);
        assert!(OutputFormat::from_path("report.csv").is_err());
        assert!(OutputFormat::from_path("report").is_err());
    }

    #[test]
    fn test_json_output_key_order() {
        let json = to_format_string(&report(), OutputFormat::Json).unwrap();
        let group = json.find("\"group\"").unwrap();
        let users = json.find("\"users\"").unwrap();
        let alice = json.find("\"Alice\"").unwrap();
        let bob = json.find("\"Bob\"").unwrap();
        assert!(group < users && users < alice && alice < bob);
    }

    #[test]
    fn test_pretty_output() {
        let text = to_format_string(&report(), OutputFormat::Pretty).unwrap();
        assert!(text.starts_with("group:\n  start: 2021-01-01T10:00:00Z"));
        assert!(text.contains("\nusers:\n  Alice:\n"));
        assert!(text.contains("      - emoji: 🎉, count: 1"));
        assert!(text.contains("      Image: 1"));
        assert!(text.contains("most_positive:\n"));
        assert!(text.contains("score: 0.8000\n"));
        assert!(text.contains("text: [01/01/2021, 10:00:00] Alice: great 🎉\\nmore"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_write_to_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_to_format(&report(), &path, OutputFormat::Json).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["users"]["Bob"]["sharing"]["Image"], 1);
    }

    #[test]
    fn test_format_serde() {
        assert_eq!(serde_json::to_string(&OutputFormat::Pretty).unwrap(), "\"pretty\"");
        let parsed: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(parsed, OutputFormat::Json);
    }
}
