//! Single pack size solver

use crate::{
    packs::{PackSize, Quantity, RequiredPacks},
    solvers::{Solver, SolverError},
};

/// Solver for a single pack size: as many packs as it takes to cover the quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleSizeSolver {
    size: PackSize,
}

impl SingleSizeSolver {
    /// Create a solver for `size`.
    pub fn new(size: PackSize) -> Self {
        Self { size }
    }
}

impl Solver for SingleSizeSolver {
    fn solve(&self, quantity: Quantity) -> Result<RequiredPacks, SolverError> {
        let mut packs = RequiredPacks::default();

        if quantity <= 0 {
            return Ok(packs);
        }

        let size = self.size.get();
        let count = quantity / size + i64::from(quantity % size != 0);

        packs.add(self.size, count.unsigned_abs());

        Ok(packs)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn solver(size: i64) -> Result<SingleSizeSolver, SolverError> {
        Ok(SingleSizeSolver::new(PackSize::new(size)?))
    }

    #[test]
    fn non_positive_quantity_needs_no_packs() -> TestResult {
        let solver = solver(250)?;

        assert!(solver.solve(0)?.is_empty(), "zero quantity");
        assert!(solver.solve(-250)?.is_empty(), "negative quantity");

        Ok(())
    }

    #[test]
    fn exact_multiple() -> TestResult {
        assert_eq!(
            solver(250)?.solve(250)?,
            RequiredPacks::from([(250, 1)]),
            "single pack"
        );
        assert_eq!(
            solver(50)?.solve(500)?,
            RequiredPacks::from([(50, 10)]),
            "divisible"
        );

        Ok(())
    }

    #[test]
    fn rounds_up_remainder() -> TestResult {
        assert_eq!(
            solver(33)?.solve(500)?,
            RequiredPacks::from([(33, 16)]),
            "15 packs leave 5 items short"
        );
        assert_eq!(
            solver(250)?.solve(1)?,
            RequiredPacks::from([(250, 1)]),
            "one item still needs a pack"
        );

        Ok(())
    }

    #[test]
    fn largest_quantity_does_not_overflow() -> TestResult {
        let packs = solver(2)?.solve(i64::MAX)?;

        assert_eq!(packs.get(2), 1 << 62, "(2^63 - 1) / 2 rounded up");

        Ok(())
    }
}
