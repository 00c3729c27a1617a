//! Bounded Life CLI - Run a simulation from a seed file or JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use log::info;

use bounded_life::{
    compute::{GenerationStats, Simulation},
    render::{FINISHED_MESSAGE, period_message, write_board},
    schema::{DEFAULT_MAX_PERIOD, Mode, Pattern, RunConfig, Seed},
};

/// Command-line parsing errors.
#[derive(Debug, thiserror::Error)]
enum ArgsError {
    #[error("Invalid arguments.")]
    InvalidArguments,
    #[error("Missing value after {0}.")]
    MissingValue(&'static str),
    #[error("Invalid {what} '{value}'. It must be a non-negative integer.")]
    InvalidNumber { what: &'static str, value: String },
}

/// Where the initial live cells come from.
enum SeedSource {
    /// Coordinate-list file.
    File(PathBuf),
    /// `Seed` JSON file.
    Json(PathBuf),
    Default,
}

enum Command {
    Run { config: RunConfig, seed: SeedSource },
    FromConfig(PathBuf),
    Example,
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &'static str) -> Result<T, ArgsError> {
    value.parse().map_err(|_| ArgsError::InvalidNumber {
        what,
        value: value.to_string(),
    })
}

fn parse_args(args: &[String]) -> Result<Command, ArgsError> {
    match args.first().map(String::as_str) {
        Some("--example") => return Ok(Command::Example),
        Some("--config") => {
            let path = args.get(1).ok_or(ArgsError::MissingValue("--config"))?;
            if args.len() > 2 {
                return Err(ArgsError::InvalidArguments);
            }
            return Ok(Command::FromConfig(PathBuf::from(path)));
        }
        _ => {}
    }

    let mut mode = Mode::Plain;
    let mut max_period = DEFAULT_MAX_PERIOD;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--aging" => mode = Mode::Aging,
            "--max-period" => {
                let value = iter.next().ok_or(ArgsError::MissingValue("--max-period"))?;
                max_period = parse_number(value, "maximum period")?;
            }
            _ => positional.push(arg.as_str()),
        }
    }

    let [file, width, height, generations] = positional[..] else {
        return Err(ArgsError::InvalidArguments);
    };

    let config = RunConfig {
        width: parse_number(width, "board width")?,
        height: parse_number(height, "board height")?,
        generations: parse_number(generations, "no. of generations to calculate")?,
        mode,
        max_period,
    };

    Ok(Command::Run {
        config,
        seed: SeedSource::File(PathBuf::from(file)),
    })
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {program} [--aging] [--max-period N] <seed file> <width> <height> <no. of generations>"
    );
    eprintln!("       {program} --config <run.json>");
    eprintln!("       {program} --example");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  seed file     Number of live cells, then one 'row column' pair per cell");
    eprintln!("  width         Board width, 1 to 78");
    eprintln!("  height        Board height, 1 to 50");
    eprintln!("  generations   Generations to calculate after the initial board");
    eprintln!("  --aging       Show cell ages and stop when a repeating pattern is found");
    eprintln!(
        "  --max-period  Longest repeat to look for in aging mode (default: {DEFAULT_MAX_PERIOD})"
    );
    eprintln!();
    eprintln!("With --config, the seed is read from <run>.seed.json next to the configuration");
    eprintln!("when present. --example prints both files.");
}

fn print_example_config() {
    let config = RunConfig {
        width: 40,
        height: 20,
        generations: 100,
        mode: Mode::Aging,
        max_period: DEFAULT_MAX_PERIOD,
    };
    let seed = Seed {
        pattern: Pattern::Glider { origin: (1, 1) },
    };
    match (
        serde_json::to_string_pretty(&config),
        serde_json::to_string_pretty(&seed),
    ) {
        (Ok(config), Ok(seed)) => {
            println!("// run.json");
            println!("{config}");
            println!("// run.seed.json");
            println!("{seed}");
        }
        (Err(e), _) | (_, Err(e)) => fail(format!("Error serializing example: {e}")),
    }
}

/// Text printed on a fatal error. An empty message prints only the notice.
fn failure_text(message: &str) -> String {
    const NOTICE: &str = "The program will now exit.";
    if message.is_empty() {
        format!("{NOTICE}\n")
    } else {
        format!("{message}\n{NOTICE}\n")
    }
}

/// Report a fatal error and exit.
fn fail(message: impl std::fmt::Display) -> ! {
    eprint!("{}", failure_text(&message.to_string()));
    process::exit(1);
}

fn load_config_file(path: &Path) -> (RunConfig, SeedSource) {
    let config_str = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("Error reading config file {}: {e}", path.display())));
    let config: RunConfig = serde_json::from_str(&config_str)
        .unwrap_or_else(|e| fail(format!("Error parsing config: {e}")));

    let seed_path = path.with_extension("seed.json");
    let seed = if seed_path.exists() {
        SeedSource::Json(seed_path)
    } else {
        SeedSource::Default
    };
    (config, seed)
}

fn load_seed(source: &SeedSource) -> Seed {
    match source {
        SeedSource::File(path) => Seed::load(path).unwrap_or_else(|e| fail(e)),
        SeedSource::Json(path) => {
            let seed_str = fs::read_to_string(path).unwrap_or_else(|e| {
                fail(format!("Error reading seed file {}: {e}", path.display()))
            });
            serde_json::from_str(&seed_str)
                .unwrap_or_else(|e| fail(format!("Error parsing seed: {e}")))
        }
        SeedSource::Default => Seed::default(),
    }
}

/// Print every frame, then the closing message. Returns the detected period.
fn print_run<W: Write>(
    simulation: Simulation,
    out: &mut W,
) -> io::Result<(Option<usize>, GenerationStats)> {
    let mut period = None;
    let mut stats = GenerationStats::from_grid(simulation.current());

    for frame in simulation.frames() {
        write_board(out, &frame.grid, frame.rule)?;
        stats = GenerationStats::from_grid(&frame.grid);
        period = frame.period;
    }

    match period {
        Some(p) => writeln!(out, "{}", period_message(p))?,
        None => writeln!(out, "{FINISHED_MESSAGE}")?,
    }
    out.flush()?;
    Ok((period, stats))
}

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("bounded-life");

    let (config, seed_source) = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(Command::Run { config, seed }) => (config, seed),
        Ok(Command::FromConfig(path)) => load_config_file(&path),
        Ok(Command::Example) => {
            print_example_config();
            return;
        }
        Err(e) => {
            print_usage(program);
            fail(e);
        }
    };

    // Configuration errors are reported before any seed file is opened.
    if let Err(e) = config.validate() {
        fail(e);
    }

    info!(
        "Board {}x{}, {} generations, {:?} mode, max period {}",
        config.width, config.height, config.generations, config.mode, config.max_period
    );

    let seed = load_seed(&seed_source);
    let simulation = Simulation::from_seed(&seed, &config).unwrap_or_else(|e| fail(e));
    info!("Loaded {} live cells", simulation.current().population());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match print_run(simulation, &mut out) {
        Ok((period, stats)) => {
            if let Some(p) = period {
                info!("Stopped early on period {p}");
            }
            info!(
                "Final board: population {}, oldest {:?}, saturated {}",
                stats.population, stats.oldest, stats.saturated
            );
        }
        Err(e) => fail(format!("Error writing output: {e}")),
    }
}
