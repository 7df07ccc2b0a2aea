//! Command-line solver and generator for square grid-logic puzzles.

use std::{
    fs::{self, File},
    io::{self, Write as _},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use gridlace_core::{Grid, GridSize, InvalidSizeError, ParseError};
use gridlace_generator::Generator;
use gridlace_solver::solve;

/// Solve or generate square grid-logic puzzles.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Puzzle file to solve.
    #[arg(value_name = "FILE", required_unless_present = "generate")]
    file: Option<PathBuf>,

    /// Write the result to FILE instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log solver progress (RUST_LOG overrides).
    #[arg(short, long)]
    verbose: bool,

    /// Generate a grid of the given side length (default: 9).
    #[arg(
        short,
        long,
        value_name = "SIZE",
        num_args = 0..=1,
        default_missing_value = "9",
        conflicts_with = "file"
    )]
    generate: Option<usize>,

    /// Only generate grids with exactly one solution.
    // requires alone does not reject this for a flag, so it also has to
    // conflict with the solve mode explicitly
    #[arg(short, long, requires = "generate", conflicts_with = "file")]
    strict: bool,

    /// Seed the generator for reproducible output.
    #[arg(long, value_name = "SEED", requires = "generate", conflicts_with = "file")]
    seed: Option<u64>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Io(io::Error),
    #[display("{_0}")]
    Parse(ParseError),
    #[display("{_0}")]
    Size(InvalidSizeError),
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut builder = env_logger::Builder::new();
    if args.verbose {
        builder.filter_level(log::LevelFilter::Trace);
    }
    builder.parse_default_env();
    builder.init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gridlace: error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut output: Box<dyn io::Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    if let Some(len) = args.generate {
        let size = GridSize::new(len)?;
        return generate(args, size, &mut output);
    }

    // clap guarantees a file when not generating
    let Some(file) = &args.file else {
        unreachable!();
    };
    let text = fs::read_to_string(file)?;
    let mut grid: Grid = text.parse()?;

    if solve(&mut grid) {
        println!("The grid has been solved!");
        write!(output, "{grid}")?;
    } else {
        println!("The grid hasn't been solved!");
        println!("The grid isn't consistent!");
        write!(output, "{}", grid.candidates_display())?;
    }
    Ok(())
}

fn generate(args: &Args, size: GridSize, output: &mut dyn io::Write) -> Result<(), CliError> {
    let mut generator = match args.seed {
        Some(seed) => Generator::from_seed(seed),
        None => Generator::new(),
    };
    let puzzle = generator.generate(size, args.strict);

    // A 1x1 puzzle's only cell is still a singleton, so the solved
    // rendering would spoil it
    if size.side_len() == 1 {
        writeln!(output, "_")?;
    } else {
        write!(output, "{puzzle}")?;
    }
    Ok(())
}
