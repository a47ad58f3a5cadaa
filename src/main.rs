use std::io::{self, BufRead};

use clap::{ArgAction, Parser};
use exprwalk::{RunOptions, get_result, interpreter::evaluator::sample::SampleRange};
use tracing_subscriber::EnvFilter;

/// exprwalk parses an arithmetic expression in `x`, prints its prefix-form
/// tree and its value, and samples it over a range of `x`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to parse. Read as one line from stdin when omitted.
    expression: Option<String>,

    /// Value of `x` for the printed evaluation.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    at: f64,

    /// First sampled value of `x`.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    start: f64,

    /// Last sampled value of `x`.
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    end: f64,

    /// Distance between sampled values of `x`.
    #[arg(long, default_value_t = 0.01)]
    step: f64,

    /// Print every sample as `x<TAB>y`. Samples are computed either way.
    #[arg(long)]
    print_samples: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                 EnvFilter::new(directive_for_verbosity(args.verbose))
                             }))
                             .with_writer(io::stderr)
                             .init();

    let source = match args.expression {
        Some(expression) => expression,
        None => read_line().unwrap_or_else(|e| {
                               eprintln!("Failed to read an expression from stdin: {e}");
                               std::process::exit(1);
                           }),
    };

    let options = RunOptions { at:    args.at,
                               range: SampleRange { start: args.start,
                                                    end:   args.end,
                                                    step:  args.step, }, };

    match get_result(&source, options) {
        Ok(report) => {
            println!("{}", report.rendered);
            println!("{}", report.value);
            if args.print_samples {
                for s in &report.samples {
                    println!("{}\t{}", s.x, s.y);
                }
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

const fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "exprwalk=warn",
        1 => "exprwalk=debug",
        _ => "exprwalk=trace",
    }
}
