//! Parse command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use rectangle_parser::{Rectangle, SkippedRecord};

use super::common::{
    json_rectangles, load_file, with_xml_extension, write_json, write_rectangles, CliError,
    JsonRectangle, OutputFormat, OutputOptions,
};
use super::config::Config;

/// A record left out of the load, in JSON output format.
#[derive(Serialize)]
struct JsonSkipped {
    index: usize,
    reason: String,
}

impl From<&SkippedRecord> for JsonSkipped {
    fn from(skipped: &SkippedRecord) -> Self {
        Self {
            index: skipped.index,
            reason: skipped.reason.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsonParseReport<'a> {
    file: PathBuf,
    rectangles: Vec<JsonRectangle<'a>>,
    skipped: Vec<JsonSkipped>,
}

/// Execute the parse command: load a file and print every rectangle in it.
pub fn cmd_parse<W: Write + ?Sized>(
    file: Option<&Path>,
    config: &Config,
    options: &OutputOptions,
    out: &mut W,
) -> Result<(), CliError> {
    let path = match file {
        Some(path) => path.to_path_buf(),
        None => {
            info!(
                "Filename was not provided, using default: {}",
                config.default_file.display()
            );
            config.default_file.clone()
        }
    };

    let loaded = load_file(&path)?;
    let rectangles: Vec<&Rectangle> = loaded.rectangles.iter().collect();

    match options.format {
        OutputFormat::Text => write_rectangles(out, &rectangles, options.verbose)?,
        OutputFormat::Json => write_json(
            out,
            &JsonParseReport {
                file: with_xml_extension(&path),
                rectangles: json_rectangles(&rectangles, options.verbose),
                skipped: loaded.skipped.iter().map(JsonSkipped::from).collect(),
            },
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::fixture_path;

    fn run(file: Option<&Path>, config: &Config, format: OutputFormat) -> String {
        let options = OutputOptions { format, verbose: false };
        let mut out = Vec::new();
        cmd_parse(file, config, &options, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_lists_every_loaded_rectangle() {
        let text = run(Some(&fixture_path()), &Config::default(), OutputFormat::Text);
        assert_eq!(text.matches("RECTANGLE #").count(), 22);
        assert!(text.contains("RECTANGLE #1\nID: 1, WIDTH: 10, HEIGHT: 5 |"));
        assert!(text.contains("RECTANGLE #22\nID: 23,"));
    }

    #[test]
    fn default_file_comes_from_config() {
        let config = Config {
            default_file: fixture_path(),
            verbose: false,
        };
        let text = run(None, &config, OutputFormat::Text);
        assert_eq!(text.matches("RECTANGLE #").count(), 22);
    }

    #[test]
    fn extension_is_optional() {
        let path = fixture_path().with_extension("");
        let text = run(Some(&path), &Config::default(), OutputFormat::Text);
        assert!(text.contains("RECTANGLE #1\n"));
    }

    #[test]
    fn json_reports_skipped_records() {
        let json = run(Some(&fixture_path()), &Config::default(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rectangles"].as_array().unwrap().len(), 22);
        let skipped = value["skipped"].as_array().unwrap();
        assert_eq!(skipped.len(), 2);
        assert_eq!(skipped[0]["index"], 2);
        assert_eq!(skipped[1]["reason"], "id 10 has already been used");
    }
}
