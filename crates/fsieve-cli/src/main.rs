use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use fsieve_core::{SegmentedSieve, SieveConfig, estimate_limit};
use fsieve_error::SieveError;
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, PartialEq, Eq)]
struct CliConfig {
    index: i64,
    max_chunk_size: Option<usize>,
    config_path: Option<PathBuf>,
    json: bool,
    list: bool,
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct NthPrimeReport {
    index: i64,
    prime: u64,
    limit: u64,
    chunk_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    primes: Option<Vec<u64>>,
}

fn print_help() {
    let help = "\
fsieve — N-th prime via a segmented Sieve of Eratosthenes

USAGE:
    fsieve [OPTIONS] <N>

ARGS:
    <N>                       Prime index, 0-indexed (0 -> 2)

OPTIONS:
    --max-chunk-size <N>      Sieve window size in slots (default 10000000)
    --config <PATH>           TOML config file (keys: max_chunk_size)
    --json                    Emit a JSON report instead of plain text
    --list                    Also print every prime up to and including the N-th
    -v, --verbose             Debug logging (RUST_LOG overrides)
    -h, --help                Show this help
";
    println!("{help}");
}

fn parse_args(args: &[String]) -> Result<CliConfig, String> {
    let mut index: Option<i64> = None;
    let mut max_chunk_size: Option<usize> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut json = false;
    let mut list = false;
    let mut verbose = false;

    let mut cursor = 0;
    while cursor < args.len() {
        match args[cursor].as_str() {
            "--max-chunk-size" => {
                cursor += 1;
                let Some(raw) = args.get(cursor) else {
                    return Err("--max-chunk-size requires a value".to_owned());
                };
                let parsed = raw
                    .parse::<usize>()
                    .map_err(|_| format!("invalid --max-chunk-size value: {raw}"))?;
                max_chunk_size = Some(parsed);
            }
            "--config" => {
                cursor += 1;
                let Some(raw) = args.get(cursor) else {
                    return Err("--config requires a value".to_owned());
                };
                config_path = Some(PathBuf::from(raw));
            }
            "--json" => json = true,
            "--list" => list = true,
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => {
                print_help();
                return Err(String::new());
            }
            other => {
                // Negative indices look like flags; try them as numbers first.
                let Ok(parsed) = other.parse::<i64>() else {
                    if other.starts_with('-') {
                        return Err(format!("unknown option: {other}"));
                    }
                    return Err(format!("invalid prime index: {other}"));
                };
                if index.is_some() {
                    return Err(format!("unexpected extra argument: {other}"));
                }
                index = Some(parsed);
            }
        }
        cursor += 1;
    }

    let Some(index) = index else {
        return Err("missing prime index <N>".to_owned());
    };

    Ok(CliConfig {
        index,
        max_chunk_size,
        config_path,
        json,
        list,
        verbose,
    })
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_sieve_config(cli: &CliConfig) -> Result<SieveConfig, SieveError> {
    let mut config = match &cli.config_path {
        Some(path) => SieveConfig::from_toml_file(path)?,
        None => SieveConfig::default(),
    };
    if let Some(max_chunk_size) = cli.max_chunk_size {
        config = config.with_max_chunk_size(max_chunk_size);
    }
    config.validate()?;
    debug!(max_chunk_size = config.max_chunk_size, "resolved sieve config");
    Ok(config)
}

fn build_report(cli: &CliConfig) -> Result<NthPrimeReport, SieveError> {
    let sieve = SegmentedSieve::new(resolve_sieve_config(cli)?)?;
    let prime = sieve.nth_prime(cli.index)?;

    // nth_prime rejected negatives, so the index converts.
    let index = u64::try_from(cli.index).map_err(|err| SieveError::internal(err.to_string()))?;
    let limit = estimate_limit(index);
    let primes = if cli.list {
        let take = usize::try_from(index)
            .map_err(|err| SieveError::internal(err.to_string()))?
            .saturating_add(1);
        Some(sieve.primes_below(limit).into_iter().take(take).collect())
    } else {
        None
    };

    Ok(NthPrimeReport {
        index: cli.index,
        prime,
        limit,
        chunk_size: sieve.config().chunk_size_for(limit),
        primes,
    })
}

fn render_report(report: &NthPrimeReport, json: bool) -> Result<String, String> {
    if json {
        return serde_json::to_string_pretty(report)
            .map_err(|err| format!("report_serialize_failed: {err}"));
    }
    Ok(match &report.primes {
        Some(primes) => primes
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        None => report.prime.to_string(),
    })
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) if message.is_empty() => return ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("ERROR fsieve: {message}");
            eprintln!("run `fsieve --help` for usage");
            return ExitCode::from(2);
        }
    };
    init_tracing(cli.verbose);

    let report = match build_report(&cli) {
        Ok(report) => report,
        Err(err) => {
            error!(index = cli.index, error = %err, "nth prime lookup failed");
            eprintln!("ERROR fsieve: {err}");
            return if err.is_user_error() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            };
        }
    };

    match render_report(&report, cli.json) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("ERROR fsieve: {message}");
            ExitCode::from(1)
        }
    }
}
