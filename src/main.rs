use std::fs;

use clap::Parser;
use radica::evaluate;
use tracing_subscriber::EnvFilter;

/// radica evaluates arithmetic expressions, including powers with integer and
/// rational exponents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells radica to read expressions from a file, one per line, instead of
    /// evaluating the argument itself.
    #[arg(short, long)]
    file: bool,

    /// Logs each evaluation step to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "radica=debug" } else { "radica=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if !args.file {
        match evaluate(&args.contents) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               &args.contents);
                     std::process::exit(1);
                 });

    let mut failed = false;
    for (number, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match evaluate(line) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("line {}: {e}", number + 1);
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}
