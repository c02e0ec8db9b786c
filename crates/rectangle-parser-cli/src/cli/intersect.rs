//! Intersect command implementation.

use std::io::Write;

use serde::Serialize;

use rectangle_parser::{intersection_points, intersection_vertices, select_pair, Intersection};

use super::common::{
    join_points, json_rectangles, load_file, write_json, write_rectangles, yes_no, CliError,
    JsonRectangle, OutputFormat, OutputOptions, PairArgs, SEPARATOR,
};

#[derive(Serialize)]
struct JsonIntersectReport<'a> {
    rectangles: Vec<JsonRectangle<'a>>,
    intersects: bool,
    mode: &'static str,
    intersection: &'a Intersection,
}

/// Execute the intersect command.
///
/// With `vertices_only` the report carries just the points where the two
/// outlines meet at a corner of the overlap; otherwise every shared
/// boundary point is listed.
pub fn cmd_intersect<W: Write + ?Sized>(
    args: &PairArgs,
    vertices_only: bool,
    options: &OutputOptions,
    out: &mut W,
) -> Result<(), CliError> {
    let loaded = load_file(&args.file)?;
    let (first, second) = select_pair(&loaded.rectangles, args.first, args.second)?;

    let intersection = if vertices_only {
        intersection_vertices(first, second)?
    } else {
        intersection_points(first, second)?
    };
    let pair = [first, second];

    match options.format {
        OutputFormat::Text => {
            write_rectangles(out, &pair, options.verbose)?;
            writeln!(out, "{}", SEPARATOR)?;
            writeln!(
                out,
                "DOES RECTANGLE #2 INTERSECT RECTANGLE #1: {}",
                yes_no(intersection.is_intersecting())
            )?;
            match &intersection {
                Intersection::Boundary(points) => {
                    writeln!(out, "INTERSECTING COORDINATES: {}", join_points(points))?;
                }
                Intersection::Nested => {
                    writeln!(
                        out,
                        "INTERSECTING COORDINATES: none, one rectangle lies inside the other"
                    )?;
                }
                Intersection::Disjoint => {}
            }
        }
        OutputFormat::Json => write_json(
            out,
            &JsonIntersectReport {
                rectangles: json_rectangles(&pair, options.verbose),
                intersects: intersection.is_intersecting(),
                mode: if vertices_only { "vertices" } else { "points" },
                intersection: &intersection,
            },
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::fixture_path;

    fn run(first: i64, second: i64, vertices_only: bool, format: OutputFormat) -> Result<String, CliError> {
        let args = PairArgs { file: fixture_path(), first, second };
        let options = OutputOptions { format, verbose: false };
        let mut out = Vec::new();
        cmd_intersect(&args, vertices_only, &options, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn intersecting_pair_lists_coordinates() {
        let text = run(4, 5, false, OutputFormat::Text).unwrap();
        assert!(text.contains("RECTANGLE #1\nID: 4,"));
        assert!(text.contains("RECTANGLE #2\nID: 5,"));
        assert!(text.contains("DOES RECTANGLE #2 INTERSECT RECTANGLE #1: Yes\n"));
        assert!(text.ends_with("INTERSECTING COORDINATES: (5, 0) | (10, -5)\n"));
    }

    #[test]
    fn vertices_mode_on_crossing_pair() {
        let text = run(4, 5, true, OutputFormat::Text).unwrap();
        assert!(text.ends_with("INTERSECTING COORDINATES: (5, 0) | (10, -5)\n"));
    }

    #[test]
    fn disjoint_pair_says_no() {
        let text = run(6, 7, false, OutputFormat::Text).unwrap();
        assert!(text.ends_with("DOES RECTANGLE #2 INTERSECT RECTANGLE #1: No\n"));
        assert!(!text.contains("INTERSECTING COORDINATES"));
    }

    #[test]
    fn nested_pair_is_explained() {
        let text = run(10, 11, false, OutputFormat::Text).unwrap();
        assert!(text.contains("INTERSECT RECTANGLE #1: Yes"));
        assert!(text.contains("one rectangle lies inside the other"));
    }

    #[test]
    fn perfect_overlap_vertices_are_corners() {
        let text = run(8, 9, true, OutputFormat::Text).unwrap();
        assert!(text.ends_with("INTERSECTING COORDINATES: (0, 0) | (10, 0) | (0, -10) | (10, -10)\n"));
    }

    #[test]
    fn json_report() {
        let json = run(4, 5, false, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["intersects"], true);
        assert_eq!(value["mode"], "points");
        assert_eq!(value["intersection"]["kind"], "boundary");
        assert_eq!(value["intersection"]["points"][0]["x"], 5);
        assert_eq!(value["rectangles"][1]["id"], 5);
    }

    #[test]
    fn unknown_id_is_a_lookup_error() {
        let err = run(4, 404, false, OutputFormat::Text).unwrap_err();
        assert!(matches!(err, CliError::Lookup(_)));
        assert_eq!(err.to_string(), "ID: 404 was not found among the rectangles");
    }
}
