use clap::Parser;
use std::{
    fs::File,
    io::{self, Read},
};

use rabin_karp_rs::finder::Finder;
use rabin_karp_rs::rolling_hash::{DEFAULT_BASE, DEFAULT_MOD_U64};

/// Substring search tool built on a Rabin-Karp rolling hash
#[derive(Parser, Debug)]
#[command(
    name = "rk-find",
    about = "Find the first occurrence of a pattern in a file or stdin",
    long_about = "Locates the first occurrence of PATTERN in the source text using a\nmodular rolling hash and prints its zero-based character offset.\nExits with status 1 when the pattern does not occur."
)]
struct Args {
    /// Path to the source text file
    #[arg(long, group = "input")]
    input_file: Option<String>,

    /// Read the source text from standard input
    #[arg(long, group = "input")]
    stdin: bool,

    /// Pattern to search for
    #[arg(short, long)]
    pattern: String,

    /// Hash base (a prime larger than the alphabet)
    #[arg(long, default_value_t = DEFAULT_BASE as u64)]
    base: u64,

    /// Hash modulus (a prime whose doubling fits in 64 bits)
    #[arg(long, default_value_t = DEFAULT_MOD_U64)]
    modulus: u64,

    /// Enable verbose output with timing details
    #[arg(short, long)]
    verbose: bool,
}

fn get_input(args: &Args) -> io::Result<Box<dyn Read>> {
    if args.stdin {
        Ok(Box::new(io::stdin()))
    } else if let Some(ref path) = args.input_file {
        Ok(Box::new(File::open(path)?))
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Must specify either --stdin or --input-file",
        ))
    }
}

fn invalid(err: impl ToString) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
}

fn run(args: Args) -> io::Result<bool> {
    let finder: Finder<u64> = Finder::new(args.base, args.modulus).map_err(invalid)?;

    let mut text = String::new();
    get_input(&args)?.read_to_string(&mut text)?;

    let source: Vec<char> = text.chars().collect();
    let target: Vec<char> = args.pattern.chars().collect();

    if args.verbose {
        eprintln!(
            "Searching {} characters for a {}-character pattern",
            source.len(),
            target.len()
        );
    }

    let started = std::time::Instant::now();
    let result = finder.find(&source, &target).map_err(invalid)?;

    if args.verbose {
        eprintln!("Search completed in {} ms", started.elapsed().as_millis());
    }

    match result {
        Some(offset) => {
            println!("{offset}");
            Ok(true)
        }
        None => {
            eprintln!("pattern not found");
            Ok(false)
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if run(args)? {
        Ok(())
    } else {
        std::process::exit(1)
    }
}
