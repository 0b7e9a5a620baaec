//! Solver configuration

use serde::Deserialize;

use crate::solvers::ConfigurationError;

/// Default multiple of the summed pack sizes above which the headroom clamp kicks in.
pub const DEFAULT_HEADROOM_FACTOR: u32 = 50;

/// Tunables for the multi-size solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SolverConfig {
    /// Orders larger than `headroom_factor × sum(pack sizes)` have whole multiples of the
    /// largest pack removed before the graph is built.
    pub headroom_factor: u32,
}

impl SolverConfig {
    /// Replace the headroom factor.
    #[must_use]
    pub fn with_headroom_factor(mut self, headroom_factor: u32) -> Self {
        self.headroom_factor = headroom_factor;
        self
    }

    /// Check the configuration can be used by a solver.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ZeroHeadroomFactor`] if the headroom factor is zero.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.headroom_factor == 0 {
            return Err(ConfigurationError::ZeroHeadroomFactor);
        }

        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            headroom_factor: DEFAULT_HEADROOM_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_uses_fifty_times_headroom() {
        assert_eq!(
            SolverConfig::default().headroom_factor,
            50,
            "default headroom factor"
        );
    }

    #[test]
    fn zero_headroom_is_rejected() {
        let config = SolverConfig::default().with_headroom_factor(0);

        assert_eq!(
            config.validate(),
            Err(ConfigurationError::ZeroHeadroomFactor),
            "a zero factor would clamp every order"
        );
    }

    #[test]
    fn deserializes_from_yaml_with_defaults() -> TestResult {
        let config: SolverConfig = serde_norway::from_str("headroom-factor: 20")?;
        let empty: SolverConfig = serde_norway::from_str("{}")?;

        assert_eq!(config.headroom_factor, 20, "explicit factor is read");
        assert_eq!(empty, SolverConfig::default(), "missing fields use defaults");

        Ok(())
    }
}
