//! rectangle-parser - query relationships between rectangles loaded from XML
//!
//! Usage:
//!   rectangle-parser parse [file]                        Print every rectangle
//!   rectangle-parser intersect <file> <id> <id>          Intersection and its coordinates
//!   rectangle-parser contain <file> <id> <id>            Does #1 contain #2?
//!   rectangle-parser adjacent <file> <id> <id>           Adjacency type
//!
//! Global flags: `-v/--verbose` lists edge points, `--json` switches to JSON,
//! `--config <file>` reads a YAML config. Set `RUST_LOG` for more logging.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::error;

mod cli;

use cli::{
    cmd_adjacent, cmd_contain, cmd_intersect, cmd_parse, CliError, Config, OutputFormat,
    OutputOptions, PairArgs,
};

#[derive(Parser)]
#[command(name = "rectangle-parser", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// List every edge point of each printed rectangle
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print a JSON report instead of text
    #[arg(long, global = true)]
    json: bool,

    /// YAML config file (default: ./rectangle-parser.yaml if present)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an XML file into rectangles and print them
    Parse {
        /// XML file to load; falls back to the configured default
        file: Option<PathBuf>,
    },
    /// Check whether rectangle #2 intersects rectangle #1 and list the shared points
    Intersect {
        #[command(flatten)]
        pair: PairArgs,

        /// Only report the corners of the overlap that lie on both outlines
        #[arg(long)]
        vertices: bool,
    },
    /// Check whether rectangle #1 contains rectangle #2
    Contain(PairArgs),
    /// Classify the adjacency of two rectangles
    Adjacent(PairArgs),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::load(cli.config.as_deref())?;
    let options = OutputOptions {
        format: if cli.json { OutputFormat::Json } else { OutputFormat::Text },
        verbose: cli.verbose || config.verbose,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Parse { file } => cmd_parse(file.as_deref(), &config, &options, &mut out)?,
        Commands::Intersect { pair, vertices } => cmd_intersect(pair, *vertices, &options, &mut out)?,
        Commands::Contain(pair) => cmd_contain(pair, &options, &mut out)?,
        Commands::Adjacent(pair) => cmd_adjacent(pair, &options, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
