//! Convert a Life Lexicon picture into a coordinate-list seed file.
//!
//! Usage: lextolife <input file> <output file> <blank columns> <blank rows>
//!
//! The blank columns and rows shift the pattern right and down, leaving room
//! for patterns that grow up or to the left.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use std::process;

use log::info;

use bounded_life::schema::parse_lexicon;

/// Text printed on a fatal error. An empty message prints only the notice.
fn failure_text(message: &str) -> String {
    const NOTICE: &str = "The program will now close.";
    if message.is_empty() {
        format!("{NOTICE}\n")
    } else {
        format!("{message}\n{NOTICE}\n")
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprint!("{}", failure_text(&message.to_string()));
    process::exit(1);
}

/// Ask on stderr/stdin until the user answers yes or no.
fn confirm_overwrite(path: &Path) -> io::Result<bool> {
    eprintln!(
        "WARNING, The file you are attempting to write to ({}) already exists.\n\
         It will be overwritten. Do you wish to continue?\n\
         [y]es/[n]o",
        path.display()
    );

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim_start().chars().next() {
            Some('y' | 'Y') => return Ok(true),
            Some('n' | 'N') => return Ok(false),
            _ => eprintln!("Invalid input."),
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 5 {
        eprintln!(
            "Usage: {} <input file> <output file> <number of blank columns> <number of blank rows>",
            args.first().map(String::as_str).unwrap_or("lextolife")
        );
        fail("Invalid arguments.");
    }

    let input = Path::new(&args[1]);
    let output = Path::new(&args[2]);

    let text = fs::read_to_string(input).unwrap_or_else(|e| {
        fail(format!(
            "Error opening input file ({}): {e}\nPlease ensure that the specified file exists.",
            input.display()
        ))
    });

    let blank_columns: usize = args[3]
        .parse()
        .unwrap_or_else(|_| fail("Invalid number of blank columns specified."));
    let blank_rows: usize = args[4]
        .parse()
        .unwrap_or_else(|_| fail("Invalid number of blank rows specified."));

    let seed = parse_lexicon(&text, blank_columns, blank_rows);
    info!("Read {} live cells from {}", seed.cells().len(), input.display());

    if output.exists() {
        match confirm_overwrite(output) {
            Ok(true) => {}
            Ok(false) => process::exit(1),
            Err(e) => fail(format!("Error reading answer: {e}")),
        }
    }

    if let Err(e) = seed.save(output) {
        fail(format!(
            "Error opening output file ({}) for writing: {e}",
            output.display()
        ));
    }
}
