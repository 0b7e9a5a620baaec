//! Headroom clamp

use crate::packs::{PackSize, PackSizes, Quantity};

/// Quantity left for the graph after whole largest packs were taken off the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Headroom {
    /// Quantity still to be solved.
    pub(crate) remainder: Quantity,

    /// Packs of `size` already assigned.
    pub(crate) preassigned: u64,

    /// The largest pack size.
    pub(crate) size: PackSize,
}

/// Take whole largest packs off quantities above `factor × sum(pack sizes)`.
///
/// The remainder is always above the margin, so the graph still sees every pack size
/// combination that could matter for the last stretch of the order.
pub(crate) fn clamp(quantity: Quantity, pack_sizes: &PackSizes, factor: u32) -> Headroom {
    let size = pack_sizes.largest();

    let untouched = Headroom {
        remainder: quantity,
        preassigned: 0,
        size,
    };

    let Some(margin) = pack_sizes
        .total()
        .and_then(|total| total.checked_mul(i64::from(factor)))
    else {
        return untouched;
    };

    if quantity <= margin {
        return untouched;
    }

    let count = (quantity - margin) / size.get();

    Headroom {
        remainder: quantity - count * size.get(),
        preassigned: count.unsigned_abs(),
        size,
    }
}
