use anyhow::{Context, Result};
use flagset::{Flags, ParseOptions, Value};
use indexmap::IndexMap;
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

/// Exit code for invalid command-line usage.
const USAGE_ERROR: u8 = 2;

#[derive(Serialize)]
struct Report<'a> {
    longs: IndexMap<String, Option<Value>>,
    shorts: IndexMap<String, u64>,
    args: &'a [String],
}

fn main() -> Result<ExitCode> {
    init_tracing();

    let argv: Vec<String> = std::env::args().collect();
    let mut flags = Flags::new(argv.iter().cloned());

    flags.bool("foo", Some(false), "Enable the foo");
    flags.uint("bar", Some(10), "Number of bars");
    flags.string("baz", Some("default"), "What to name the baz");
    flags.short('v', "verbosity");
    // No default, so --qux is required.
    flags.bool("qux", None, "");
    let help = flags.bool("help", Some(false), "Shows this text");

    // --help has to work even when required flags are missing.
    flags.parse_with(&argv, ParseOptions::permissive())?;
    if flags.get(help) == Some(true) {
        print!("{flags}");
        return Ok(ExitCode::SUCCESS);
    }

    if let Err(err) = flags.parse() {
        tracing::debug!(kind = ?err.kind(), "rejected arguments");
        eprintln!("error: {err}\n");
        eprint!("{flags}");
        return Ok(ExitCode::from(USAGE_ERROR));
    }

    let report = Report {
        longs: flags.longs(),
        shorts: flags
            .shorts()
            .into_iter()
            .map(|(c, count)| (c.to_string(), count))
            .collect(),
        args: flags.args(),
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report).context("failed to write report")?;
    writeln!(stdout).context("failed to write report")?;

    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
