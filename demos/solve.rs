//! Solve Example
//!
//! Works out the packs for a single order and prints a packing slip, or runs every
//! scenario in a fixture set and reports which ones match.
//!
//! Use `-q` to set the ordered quantity
//! Use `-p` to set the pack sizes, comma separated
//! Use `-f` to run a scenario set from `fixtures/scenarios` instead
//!
//! Run with: `cargo run --example solve -- -q 12001 -p 250,500,1000,2000,5000`

use std::{io, time::Instant};

use anyhow::{Result, bail};
use clap::Parser;

use packcalc::{
    fixtures::ScenarioSet,
    slip::PackingSlip,
    solve,
    utils::{ExampleArgs, format_solve_duration},
};

/// Solve Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ExampleArgs::parse();

    if let Some(set) = args.fixture.as_deref() {
        return run_set(set);
    }

    let start = Instant::now();

    let packs = solve(args.quantity, &args.pack_sizes)?;

    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    PackingSlip::new(args.quantity, &packs).write_to(&mut handle)?;

    println!("Solution: {}", format_solve_duration(elapsed));

    Ok(())
}

#[expect(clippy::print_stdout, reason = "Example code")]
fn run_set(name: &str) -> Result<()> {
    let set = ScenarioSet::load(name)?;
    let mut failures = 0_usize;

    for scenario in set.scenarios() {
        let start = Instant::now();
        let outcome = scenario.run();
        let elapsed = format_solve_duration(start.elapsed());

        let shown = match &outcome {
            Ok(packs) => packs.to_string(),
            Err(error) => error.to_string(),
        };

        if scenario.matches(&outcome) {
            println!("ok    {} ({elapsed}): {shown}", scenario.name);
        } else {
            failures += 1;
            println!(
                "FAIL  {} ({elapsed}): expected {:?}, got {shown}",
                scenario.name, scenario.expected
            );
        }
    }

    if failures > 0 {
        bail!("{failures} of {} scenarios in {} failed", set.scenarios().len(), set.name());
    }

    Ok(())
}
