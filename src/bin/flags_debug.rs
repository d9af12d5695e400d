use peaks_flags::diagnostics::{
    DebugReport, feasibility_trace, parse_sequence, render_feasibility_trace,
};
use peaks_flags::max_flags;
use peaks_flags::telemetry::init_default_tracing;

const DEMO_SEQUENCES: &[&[i64]] = &[
    &[0, 2, 3, 2, 4],
    &[1, 0, 1, 2, 2, 2, 0, 1, 0, 1, 0, 0, 1, 1, 0, 1],
    &[0],
    &[],
];

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let sequences = parse_args()?;
    if sequences.is_empty() {
        for values in DEMO_SEQUENCES {
            print_diagnostics(values);
        }
    } else {
        for values in &sequences {
            print_diagnostics(values);
        }
    }
    Ok(())
}

fn print_diagnostics(values: &[i64]) {
    println!("{}", DebugReport::new(values));
    println!("{}", render_feasibility_trace(&feasibility_trace(values)));
    println!("Max flags: {}", max_flags(values));
    println!();
}

fn parse_args() -> Result<Vec<Vec<i64>>, String> {
    let mut sequences = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sequence" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --sequence".to_owned())?;
                sequences.push(parse_sequence(&value).map_err(|err| err.to_string())?);
            }
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin flags_debug -- [--sequence <v0,v1,...>]...\n\nWithout --sequence, the built-in demo sequences are printed."
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(sequences)
}
