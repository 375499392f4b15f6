//! Example parsing and evaluating arithmetic with the calculator grammar
//!
//! Expressions are read from the command line arguments, or a few built-in
//! ones are used. Set `RUST_LOG=aoc_utils=trace` to watch the parser.
//!
//! Run with: cargo run --example calculator -- "2 * (3 + 4)"

use aoc_utils::grammar::{calculator_grammar, char_tokens, evaluate};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), aoc_utils::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = vec![
            "1 + 2 * 3".to_string(),
            "(1 + 2) * 3".to_string(),
            "100 / 7 / 2".to_string(),
            "8 - 3 - 2".to_string(),
        ];
    }

    let grammar = calculator_grammar();
    for input in &inputs {
        let tree = grammar.parse(&char_tokens(input))?;
        println!("{input} = {}", evaluate(&tree)?);
    }

    println!("\nParse tree of {:?}:", inputs[0]);
    print!("{}", grammar.parse(&char_tokens(&inputs[0]))?);
    Ok(())
}
