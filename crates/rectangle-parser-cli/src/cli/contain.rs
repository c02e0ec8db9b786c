//! Contain command implementation.

use std::io::Write;

use serde::Serialize;

use rectangle_parser::{does_contain, select_pair};

use super::common::{
    json_rectangles, load_file, write_json, write_rectangles, yes_no, CliError, JsonRectangle,
    OutputFormat, OutputOptions, PairArgs, SEPARATOR,
};

#[derive(Serialize)]
struct JsonContainReport<'a> {
    rectangles: Vec<JsonRectangle<'a>>,
    contains: bool,
}

/// Execute the contain command: does rectangle #1 strictly contain rectangle #2?
pub fn cmd_contain<W: Write + ?Sized>(
    args: &PairArgs,
    options: &OutputOptions,
    out: &mut W,
) -> Result<(), CliError> {
    let loaded = load_file(&args.file)?;
    let (first, second) = select_pair(&loaded.rectangles, args.first, args.second)?;
    let contains = does_contain(first, second);
    let pair = [first, second];

    match options.format {
        OutputFormat::Text => {
            write_rectangles(out, &pair, options.verbose)?;
            writeln!(out, "{}", SEPARATOR)?;
            writeln!(out, "DOES RECTANGLE #1 CONTAIN RECTANGLE #2: {}", yes_no(contains))?;
        }
        OutputFormat::Json => write_json(
            out,
            &JsonContainReport {
                rectangles: json_rectangles(&pair, options.verbose),
                contains,
            },
        )?,
    }
    Ok(())
}
