//! Adjacent command implementation.

use std::io::Write;

use serde::Serialize;

use rectangle_parser::{is_adjacent, select_pair, Adjacency};

use super::common::{
    json_rectangles, load_file, write_json, write_rectangles, yes_no, CliError, JsonRectangle,
    OutputFormat, OutputOptions, PairArgs, SEPARATOR,
};

#[derive(Serialize)]
struct JsonAdjacentReport<'a> {
    rectangles: Vec<JsonRectangle<'a>>,
    adjacent: bool,
    adjacency: Adjacency,
}

/// Execute the adjacent command.
pub fn cmd_adjacent<W: Write + ?Sized>(
    args: &PairArgs,
    options: &OutputOptions,
    out: &mut W,
) -> Result<(), CliError> {
    let loaded = load_file(&args.file)?;
    let (first, second) = select_pair(&loaded.rectangles, args.first, args.second)?;
    let adjacency = is_adjacent(first, second);
    let pair = [first, second];

    match options.format {
        OutputFormat::Text => {
            write_rectangles(out, &pair, options.verbose)?;
            writeln!(out, "{}", SEPARATOR)?;
            writeln!(
                out,
                "IS RECTANGLE #1 & RECTANGLE #2 ADJACENT: {}",
                yes_no(adjacency.is_adjacent())
            )?;
            writeln!(out, "ADJACENT TYPE: {}", adjacency)?;
        }
        OutputFormat::Json => write_json(
            out,
            &JsonAdjacentReport {
                rectangles: json_rectangles(&pair, options.verbose),
                adjacent: adjacency.is_adjacent(),
                adjacency,
            },
        )?,
    }
    Ok(())
}
