//! Common utilities shared across CLI commands.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use log::info;
use serde::Serialize;
use thiserror::Error;

use rectangle_parser::{
    load_rectangles_from_path, LoadError, LoadedRectangles, LookupError, Point, Rectangle,
    RelationError, Side,
};

use super::config::ConfigError;

/// Divider printed between report blocks.
pub const SEPARATOR: &str = "--------------------";

/// Everything that can stop a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Relation(#[from] RelationError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// How a command should render its report.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Include every edge point of each rectangle.
    pub verbose: bool,
}

/// Positional arguments shared by the pairwise commands.
#[derive(Args, Debug, Clone)]
pub struct PairArgs {
    /// XML file to load (".xml" is appended when missing)
    pub file: PathBuf,

    /// Id of rectangle #1
    #[arg(allow_negative_numbers = true)]
    pub first: i64,

    /// Id of rectangle #2
    #[arg(allow_negative_numbers = true)]
    pub second: i64,
}

/// Append ".xml" unless the name already ends with it.
pub fn with_xml_extension(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "xml") {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".xml");
    PathBuf::from(name)
}

/// Resolve the filename and load it.
pub fn load_file(path: &Path) -> Result<LoadedRectangles, CliError> {
    let path = with_xml_extension(path);
    info!("Loading rectangles from {}", path.display());
    Ok(load_rectangles_from_path(&path)?)
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// `(x, y) | (x, y) | ...`
pub fn join_points(points: &[Point]) -> String {
    points
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Write the numbered rectangle blocks that open every text report.
pub fn write_rectangles<W: Write + ?Sized>(
    out: &mut W,
    rectangles: &[&Rectangle],
    verbose: bool,
) -> io::Result<()> {
    for (i, rect) in rectangles.iter().enumerate() {
        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out, "RECTANGLE #{}", i + 1)?;
        writeln!(out, "{}", rect)?;

        if verbose {
            for (side, points) in Side::ALL.iter().zip(rect.all_edge_points()) {
                writeln!(out, "{}", SEPARATOR)?;
                writeln!(out, "{} Coordinates:", side.name())?;
                writeln!(out, "{}", SEPARATOR)?;
                for p in points {
                    writeln!(out, "{}", p)?;
                }
            }
        }
    }
    Ok(())
}

/// Edge points in JSON output format.
#[derive(Serialize)]
pub struct JsonEdges {
    top: Vec<Point>,
    right: Vec<Point>,
    bottom: Vec<Point>,
    left: Vec<Point>,
}

/// A rectangle in JSON output format.
#[derive(Serialize)]
pub struct JsonRectangle<'a> {
    #[serde(flatten)]
    rectangle: &'a Rectangle,
    #[serde(skip_serializing_if = "Option::is_none")]
    edges: Option<JsonEdges>,
}

impl<'a> JsonRectangle<'a> {
    pub fn new(rectangle: &'a Rectangle, verbose: bool) -> Self {
        let edges = verbose.then(|| {
            let [top, right, bottom, left] = rectangle.all_edge_points();
            JsonEdges { top, right, bottom, left }
        });
        Self { rectangle, edges }
    }
}

pub fn json_rectangles<'a>(rectangles: &[&'a Rectangle], verbose: bool) -> Vec<JsonRectangle<'a>> {
    rectangles
        .iter()
        .map(|rect| JsonRectangle::new(rect, verbose))
        .collect()
}

/// Pretty JSON followed by a newline.
pub fn write_json<W: Write + ?Sized, T: Serialize>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Path to the shared fixture, for command tests.
#[cfg(test)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../test_assets/rectangles.xml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xml_extension_is_appended_once() {
        assert_eq!(with_xml_extension(Path::new("rects")), PathBuf::from("rects.xml"));
        assert_eq!(with_xml_extension(Path::new("rects.xml")), PathBuf::from("rects.xml"));
        assert_eq!(with_xml_extension(Path::new("dir/data.v2")), PathBuf::from("dir/data.v2.xml"));
    }

    #[test]
    fn points_are_joined_with_bars() {
        let points = [Point::new(5, 0), Point::new(10, -5)];
        assert_eq!(join_points(&points), "(5, 0) | (10, -5)");
        assert_eq!(join_points(&[]), "");
    }

    #[test]
    fn rectangle_block() {
        let rect = Rectangle::with_id(1, 5, 10, 0, 0);
        let mut out = Vec::new();
        write_rectangles(&mut out, &[&rect], false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "--------------------\nRECTANGLE #1\n\
             ID: 1, WIDTH: 10, HEIGHT: 5 | COORDINATES: TL: (0,0) / TR: (10,0) / BL: (0,-5) / BR: (10,-5)\n"
        );
    }

    #[test]
    fn verbose_block_lists_edges() {
        let rect = Rectangle::with_id(1, 1, 1, 0, 0);
        let mut out = Vec::new();
        write_rectangles(&mut out, &[&rect], true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Top Coordinates:\n--------------------\n(0, 0)\n(1, 0)\n"));
        assert!(text.contains("Left Coordinates:\n--------------------\n(0, -1)\n(0, 0)\n"));
    }

    #[test]
    fn json_rectangle_flattens_fields() {
        let rect = Rectangle::with_id(3, 1, 2, 0, 0);
        let value = serde_json::to_value(JsonRectangle::new(&rect, false)).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["width"], 2);
        assert_eq!(value["corners"][1]["x"], 2);
        assert!(value.get("edges").is_none());

        let value = serde_json::to_value(JsonRectangle::new(&rect, true)).unwrap();
        assert_eq!(value["edges"]["top"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let result = load_file(Path::new("no/such/file"));
        assert!(matches!(result, Err(CliError::Load(LoadError::Io { .. }))));
    }
}
