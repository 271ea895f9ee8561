//! # chatstats CLI
//!
//! Command-line interface for the chatstats library. Progress goes to
//! stderr so the report can be piped from stdout.

use std::fs;
use std::io::{self, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatstats::ChatstatsError;
use chatstats::cli::Args;
use chatstats::config::NumberMap;
use chatstats::format::{to_format_string, write_to_format};
use chatstats::logging;
use chatstats::parser::ChatParser;
use chatstats::report::compute_report;

fn main() {
    let args = <Args as ClapParser>::parse();
    logging::init(args.verbose, args.quiet);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Prints a progress line unless `--quiet` was given.
macro_rules! progress {
    ($args:expr) => {
        if !$args.quiet {
            eprintln!();
        }
    };
    ($args:expr, $($arg:tt)*) => {
        if !$args.quiet {
            eprintln!($($arg)*);
        }
    };
}

fn run(args: &Args) -> Result<(), ChatstatsError> {
    let total_start = Instant::now();
    let format = args.output_format();

    // Print header
    progress!(args, "📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    progress!(args, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    progress!(args, "📂 Input:   {}", args.transcript.display());
    if let Some(ref numbers) = args.numbers {
        progress!(args, "📇 Numbers: {}", numbers.display());
    }
    match args.output {
        Some(ref output) => progress!(args, "💾 Output:  {}", output.display()),
        None => progress!(args, "💾 Output:  stdout"),
    }
    progress!(args, "📄 Format:  {}", format);
    progress!(args, "🧵 Workers: {}", args.workers);
    progress!(args);

    // Step 1: Read inputs
    progress!(args, "📖 Reading transcript...");
    let read_start = Instant::now();
    let numbers = match args.numbers {
        Some(ref path) => NumberMap::from_file(path)?,
        None => NumberMap::new(),
    };
    let content = fs::read_to_string(&args.transcript)?;
    progress!(
        args,
        "   {} bytes, {} mapped numbers ({:.2}s)",
        content.len(),
        numbers.len(),
        read_start.elapsed().as_secs_f64()
    );

    // Step 2: Parse
    progress!(args, "⏳ Parsing...");
    let parse_start = Instant::now();
    let grouped = ChatParser::new(numbers).parse_str(&content)?;
    let summary = grouped.summary();
    progress!(
        args,
        "   Found {} messages from {} users, {} lines dropped ({:.2}s)",
        grouped.total_messages(),
        grouped.len(),
        summary.dropped,
        parse_start.elapsed().as_secs_f64()
    );

    // Step 3: Stats
    progress!(args, "🧮 Computing stats...");
    let stats_start = Instant::now();
    let report = compute_report(&grouped, &args.stats_config())?;
    progress!(
        args,
        "   {} reports ({:.2}s)",
        report.users.len() + 1,
        stats_start.elapsed().as_secs_f64()
    );

    // Step 4: Write
    match args.output {
        Some(ref output) => {
            write_to_format(&report, output, format)?;
            progress!(args);
            progress!(args, "✅ Done! Report saved to {}", output.display());
        }
        None => {
            let rendered = to_format_string(&report, format)?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}")?;
            stdout.flush()?;
            progress!(args);
            progress!(args, "✅ Done!");
        }
    }

    // Performance stats
    let total_time = total_start.elapsed();
    progress!(args, "⚡ Total time: {:.2}s", total_time.as_secs_f64());

    Ok(())
}
