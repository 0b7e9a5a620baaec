//! Fixtures

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    config::SolverConfig,
    packs::{Quantity, RequiredPacks},
    solvers::{SolverError, solve_with_config},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// No scenario file for the requested set
    #[error("Unknown scenario set: {0}")]
    UnknownSet(String),
}

/// Wrapper for scenarios in YAML
#[derive(Debug, Deserialize)]
struct ScenariosFixture {
    scenarios: Vec<Scenario>,
}

/// Expected outcome of a scenario
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Expected {
    /// Packs per pack size
    Packs(RequiredPacks),

    /// The solve must fail
    Error(ExpectedError),
}

/// Failures a scenario can expect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpectedError {
    /// Pack sizes or solver configuration are rejected
    InvalidConfiguration,
}

/// A single order with its expected packs
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Scenario {
    /// Scenario name
    pub name: String,

    /// Raw pack sizes, validated when the scenario runs
    pub pack_sizes: Vec<i64>,

    /// Ordered quantity
    pub quantity: Quantity,

    /// Expected outcome
    pub expected: Expected,

    /// Solver configuration, defaults when omitted
    #[serde(default)]
    pub config: SolverConfig,
}

impl Scenario {
    /// Solve the scenario's order.
    ///
    /// # Errors
    ///
    /// Returns the [`SolverError`] produced by the solver.
    pub fn run(&self) -> Result<RequiredPacks, SolverError> {
        solve_with_config(self.quantity, &self.pack_sizes, &self.config)
    }

    /// Whether `outcome` is what the scenario expects.
    pub fn matches(&self, outcome: &Result<RequiredPacks, SolverError>) -> bool {
        match (&self.expected, outcome) {
            (Expected::Packs(expected), Ok(packs)) => expected == packs,
            (
                Expected::Error(ExpectedError::InvalidConfiguration),
                Err(SolverError::InvalidConfiguration(_)),
            ) => true,
            _ => false,
        }
    }
}

/// Named set of scenarios loaded from `scenarios/<name>.yml`
#[derive(Debug, Clone)]
pub struct ScenarioSet {
    name: String,
    scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    /// Load a scenario set from the default `./fixtures` directory
    ///
    /// # Errors
    ///
    /// Returns an error if the set does not exist or cannot be read or parsed.
    pub fn load(name: &str) -> Result<Self, FixtureError> {
        Self::with_base_path("./fixtures", name)
    }

    /// Load a scenario set from a custom fixtures directory
    ///
    /// # Errors
    ///
    /// Returns an error if the set does not exist or cannot be read or parsed.
    pub fn with_base_path(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let file_path = base_path
            .into()
            .join("scenarios")
            .join(format!("{name}.yml"));

        let contents = read_set(&file_path, name)?;
        let fixture: ScenariosFixture = serde_norway::from_str(&contents)?;

        Ok(Self {
            name: name.to_string(),
            scenarios: fixture.scenarios,
        })
    }

    /// Set name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All scenarios in file order
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Look up a scenario by name
    pub fn get(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.name == name)
    }
}

fn read_set(path: &Path, name: &str) -> Result<String, FixtureError> {
    fs::read_to_string(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => FixtureError::UnknownSet(name.to_string()),
        _ => FixtureError::Io(error),
    })
}
