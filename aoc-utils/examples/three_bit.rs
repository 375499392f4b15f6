//! Example running a three-register 3-bit program from a listing
//!
//! Pass a listing file as the first argument, or the built-in listing is
//! run. Set `RUST_LOG=aoc_utils=debug` to see run summaries.
//!
//! Run with: cargo run --example three_bit -- listing.txt

use aoc_utils::vm::{Processor, ThreeBitComputer};
use tracing_subscriber::EnvFilter;

const LISTING: &str = "\
Register A: 729
Register B: 0
Register C: 0

Program: 0,1,5,4,3,0
";

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let listing = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => LISTING.to_string(),
    };

    let mut computer: ThreeBitComputer = listing.parse()?;
    computer.run()?;
    println!("{}", computer.output_string());
    println!("steps: {}", computer.counter());
    Ok(())
}
