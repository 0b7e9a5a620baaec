//! Graph edge weights

use crate::packs::PackSize;

/// Edge weight in a quantity graph: one pack of this size was subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackEdge {
    /// Size of the pack taken along this edge.
    pub size: PackSize,
}
