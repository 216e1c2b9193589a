//! Percentage allocation across cost-center departments.
//!
//! An entry's amount can be split across departments. Automatic splits
//! always sum to exactly 100.00: the even share is rounded to two
//! decimals and the rounding remainder lands on the last selected
//! department. Manual edits replace a single share verbatim and are
//! never rebalanced; validation reports the broken sum instead.

use crate::amount::{format_amount, parse_decimal, round2};
use crate::department::DepartmentId;
use serde::{Deserialize, Serialize};

/// Total every non-empty allocation set must reach.
pub const ALLOCATION_TOTAL: f64 = 100.0;

/// Tolerance applied when comparing a share sum against the total.
pub const SUM_TOLERANCE: f64 = 0.001;

/// Split the total evenly across `n` slots as two-decimal strings.
///
/// The remainder left over by rounding goes to the last slot, so
/// `distribute(3)` yields `33.33, 33.33, 33.34`.
pub fn distribute(n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    let base = round2(ALLOCATION_TOTAL / n as f64);
    let remainder = round2(ALLOCATION_TOTAL - base * n as f64);
    let mut shares = vec![base; n];
    if let Some(last) = shares.last_mut() {
        *last = round2(*last + remainder);
    }
    shares.into_iter().map(format_amount).collect()
}

/// Replace one share verbatim. Out-of-range indices are ignored.
pub fn set_share(shares: &mut [String], index: usize, value: impl Into<String>) {
    if let Some(slot) = shares.get_mut(index) {
        *slot = value.into();
    }
}

/// Sum of all shares, rounded to two decimals. Shares that do not parse
/// count as zero here; [`is_valid`] rejects them separately.
pub fn sum_shares(shares: &[String]) -> f64 {
    round2(shares.iter().map(|s| parse_decimal(s).unwrap_or(0.0)).sum())
}

/// A set is submittable when it is empty, or every share is a positive
/// finite number and the sum lands within tolerance of the total.
pub fn is_valid(shares: &[String]) -> bool {
    if shares.is_empty() {
        return true;
    }
    let all_positive = shares
        .iter()
        .all(|share| matches!(parse_decimal(share), Some(v) if v > 0.0));
    all_positive && (sum_shares(shares) - ALLOCATION_TOTAL).abs() <= SUM_TOLERANCE
}

/// One department's percentage share of an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub department_id: DepartmentId,
    pub percent_share: String,
}

/// Ordered department/share pairs attached to a cash-flow entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationSet {
    allocations: Vec<Allocation>,
}

impl AllocationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the set for a new target selection, discarding any manual
    /// edits made against the previous selection.
    pub fn reset_for_targets(targets: &[DepartmentId]) -> Self {
        let allocations = targets
            .iter()
            .zip(distribute(targets.len()))
            .map(|(&department_id, percent_share)| Allocation {
                department_id,
                percent_share,
            })
            .collect();
        Self { allocations }
    }

    pub fn set_share(&mut self, index: usize, value: impl Into<String>) {
        if let Some(allocation) = self.allocations.get_mut(index) {
            allocation.percent_share = value.into();
        }
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn shares(&self) -> Vec<String> {
        self.allocations
            .iter()
            .map(|a| a.percent_share.clone())
            .collect()
    }

    pub fn sum(&self) -> f64 {
        sum_shares(&self.shares())
    }

    pub fn is_valid(&self) -> bool {
        is_valid(&self.shares())
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.allocations.len()
    }
}
