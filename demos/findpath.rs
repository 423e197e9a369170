//! Runs the demo scenarios and prints each route over an ASCII map.
//!
//! Run: cargo run --bin findpath [seed]
//! Set `GRIDSTAR_LOG=debug` (or `trace`) to follow the searches.

use gridstar_demos::{Scenario, init_logging, random_scenario, render, scenarios};
use gridstar_search::{SearchError, Topology};

fn show(s: &Scenario) -> Result<(), SearchError> {
    println!("== {}", s.name);
    match s.run() {
        Ok((engine, route)) => {
            println!("{} steps: {route}", route.steps());
            print!("{}", render(&engine, s.start, s.goal, Some(&route)));
        }
        Err(SearchError::NoPathFound { start, goal }) => {
            log::warn!("{}: goal unreachable", s.name);
            println!("no path from {start} to {goal}");
            print!("{}", render(&s.engine()?, s.start, s.goal, None));
        }
        Err(e) => return Err(e),
    }
    println!();
    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("logging disabled: {e}");
    }

    let seed = std::env::args()
        .nth(1)
        .and_then(|a| a.parse::<u64>().ok())
        .unwrap_or(42);

    let mut all = scenarios();
    all.push(random_scenario(seed, Topology::Square, 16, 8, 28));
    all.push(random_scenario(seed, Topology::Hex, 16, 8, 28));

    for s in &all {
        if let Err(e) = show(s) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
