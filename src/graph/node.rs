//! Graph node weights

use crate::packs::Quantity;

/// A node in the quantity graph: the number of items still to be covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantityNode {
    /// Remaining quantity. Zero or below means the order is covered.
    pub quantity: Quantity,
}

impl QuantityNode {
    /// True when the packs on the way here cover the order.
    pub fn is_candidate(self) -> bool {
        self.quantity <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covered_quantities_are_candidates() {
        for (quantity, expected) in [(1, false), (0, true), (-249, true)] {
            assert_eq!(
                QuantityNode { quantity }.is_candidate(),
                expected,
                "candidate status of {quantity}"
            );
        }
    }
}
