//! Packcalc
//!
//! Packcalc works out which whole packs to ship for an order: never fewer items than
//! requested, as few surplus items as possible, and then as few packs as possible.
//!
//! ```
//! use packcalc::solve;
//!
//! let packs = solve(501, &[250, 500, 1000, 2000, 5000])?;
//!
//! assert_eq!(packs.get(250), 1);
//! assert_eq!(packs.get(500), 1);
//! # Ok::<(), packcalc::solvers::SolverError>(())
//! ```

pub mod config;
pub mod fixtures;
pub mod graph;
pub mod packs;
pub mod slip;
pub mod solvers;
pub mod utils;

pub use solvers::{solve, solve_with_config};
