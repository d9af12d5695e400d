use std::fs;
use std::path::PathBuf;

use peaks_flags::harness::{SweepConfig, SweepOverrides, run_sweep};
use peaks_flags::telemetry::init_default_tracing;
use tracing::info;

#[derive(Debug)]
struct CliArgs {
    config: SweepConfig,
    json: bool,
    output: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    info!(
        min_len = args.config.min_len,
        max_len = args.config.max_len,
        growth_factor = args.config.growth_factor,
        "starting runtime sweep"
    );

    let report = run_sweep(&args.config).map_err(|err| err.to_string())?;
    info!(
        samples = report.samples.len(),
        total_seconds = report.total_seconds(),
        "runtime sweep finished"
    );

    let rendered = if args.json {
        let mut json = report.to_json_pretty().map_err(|err| err.to_string())?;
        json.push('\n');
        json
    } else {
        report.to_text()
    };

    match args.output {
        Some(path) => fs::write(&path, rendered)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut config = SweepConfig::default();
    let mut overrides = SweepOverrides::default();
    let mut json = false;
    let mut output: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = next_value(&mut args, "--config")?;
                config = SweepConfig::read(&value).map_err(|err| err.to_string())?;
            }
            "--min" => overrides.min_len = Some(parse_value(&mut args, "--min")?),
            "--max" => overrides.max_len = Some(parse_value(&mut args, "--max")?),
            "--growth" => overrides.growth_factor = Some(parse_value(&mut args, "--growth")?),
            "--seed" => overrides.seed = Some(parse_value(&mut args, "--seed")?),
            "--json" => json = true,
            "--output" => output = Some(PathBuf::from(next_value(&mut args, "--output")?)),
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --release --bin runtime_sweep -- [--config <path>] [--min <len>] [--max <len>] [--growth <factor>] [--seed <u64>] [--json] [--output <path>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    // Explicit flags override whatever the config file set, regardless of order.
    let config = overrides.apply(config);
    config.validate().map_err(|err| err.to_string())?;

    Ok(CliArgs {
        config,
        json,
        output,
    })
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next()
        .ok_or_else(|| format!("missing value for {flag}"))
}

fn parse_value<T>(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = next_value(args, flag)?;
    value
        .parse()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}
