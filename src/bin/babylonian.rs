//! Square roots by the Babylonian method.

use anyhow::Result;
use clap::Parser;

use crazy_eights::babylonian::{sqrt_approx, DEFAULT_PRECISION};

#[derive(Parser, Debug)]
#[command(name = "babylonian", about = "Approximate a square root")]
struct Args {
    /// The number to take the square root of.
    number: f64,

    /// Convergence threshold for the approximation.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let result = sqrt_approx(args.number, args.precision);
    println!(
        "The square root of {} is approximately {}",
        args.number, result
    );
    Ok(())
}
