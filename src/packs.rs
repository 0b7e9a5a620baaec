//! Pack sizes and required pack counts

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::solvers::ConfigurationError;

/// A number of items. Negative values are meaningful inside the solver, where they
/// measure how far a combination of packs overshoots the order.
pub type Quantity = i64;

/// A strictly positive number of items sold as one indivisible pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PackSize(i64);

impl PackSize {
    /// Validate a raw pack size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NonPositivePackSize`] if `size` is zero or negative.
    pub fn new(size: i64) -> Result<Self, ConfigurationError> {
        if size <= 0 {
            return Err(ConfigurationError::NonPositivePackSize(size));
        }

        Ok(Self(size))
    }

    /// Number of items in one pack.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The validated set of pack sizes available for an order.
///
/// Always non-empty, sorted ascending and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSizes {
    sizes: SmallVec<[PackSize; 8]>,
    largest: PackSize,
}

impl PackSizes {
    /// Validate, sort and de-duplicate raw pack sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NoPackSizes`] if `sizes` is empty, or
    /// [`ConfigurationError::NonPositivePackSize`] for the first size that is not positive.
    pub fn new(sizes: &[i64]) -> Result<Self, ConfigurationError> {
        let mut validated = sizes
            .iter()
            .copied()
            .map(PackSize::new)
            .collect::<Result<SmallVec<[PackSize; 8]>, _>>()?;

        validated.sort_unstable();
        validated.dedup();

        let Some(&largest) = validated.last() else {
            return Err(ConfigurationError::NoPackSizes);
        };

        Ok(Self {
            sizes: validated,
            largest,
        })
    }

    /// Number of distinct pack sizes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// True when no pack sizes are held, which validation rules out.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Pack sizes in ascending order.
    pub fn as_slice(&self) -> &[PackSize] {
        &self.sizes
    }

    /// Iterate pack sizes in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = PackSize> + '_ {
        self.sizes.iter().copied()
    }

    /// The largest pack size.
    pub fn largest(&self) -> PackSize {
        self.largest
    }

    /// The only pack size, if exactly one is available.
    pub fn single(&self) -> Option<PackSize> {
        match self.sizes.as_slice() {
            [size] => Some(*size),
            _ => None,
        }
    }

    /// Sum of all pack sizes, or `None` if it does not fit in a [`Quantity`].
    pub fn total(&self) -> Option<Quantity> {
        self.iter()
            .try_fold(0_i64, |total, size| total.checked_add(size.get()))
    }
}

/// Number of packs required per pack size.
///
/// Ordered by pack size. Serializes as a map from pack size to count, e.g. `{"250":1,"500":1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredPacks(BTreeMap<i64, u64>);

impl RequiredPacks {
    /// Add `count` packs of `size`.
    pub fn add(&mut self, size: PackSize, count: u64) {
        let entry = self.0.entry(size.get()).or_default();
        *entry = entry.saturating_add(count);
    }

    /// Number of packs of the given size (zero if unused).
    pub fn get(&self, size: i64) -> u64 {
        self.0.get(&size).copied().unwrap_or_default()
    }

    /// Iterate `(pack size, count)` pairs in ascending pack size order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, u64)> + '_ {
        self.0.iter().map(|(&size, &count)| (size, count))
    }

    /// Number of distinct pack sizes used.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no packs are required.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of items shipped.
    pub fn total_items(&self) -> i128 {
        self.iter()
            .map(|(size, count)| i128::from(size) * i128::from(count))
            .sum()
    }

    /// Total number of packs shipped.
    pub fn total_packs(&self) -> u64 {
        self.iter()
            .fold(0_u64, |total, (_, count)| total.saturating_add(count))
    }

    /// Items shipped beyond the ordered quantity.
    pub fn overshoot(&self, quantity: Quantity) -> i128 {
        self.total_items() - i128::from(quantity)
    }
}

impl FromIterator<(i64, u64)> for RequiredPacks {
    fn from_iter<T: IntoIterator<Item = (i64, u64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(i64, u64); N]> for RequiredPacks {
    fn from(packs: [(i64, u64); N]) -> Self {
        packs.into_iter().collect()
    }
}

impl fmt::Display for RequiredPacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;

        for (idx, (size, count)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{size}: {count}")?;
        }

        f.write_str("}")
    }
}
