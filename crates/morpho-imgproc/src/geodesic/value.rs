use num_traits::{Bounded, Zero};

/// Numeric domain of a chamfer distance map.
///
/// The relaxation kernel is written once and instantiated over this trait,
/// so adding a numeric sibling (or a different neighborhood topology) does
/// not duplicate the scan logic. The background sentinel for unreached
/// pixels defaults to `Bounded::max_value()`.
pub trait ChamferValue: Copy + PartialOrd + Zero + Bounded + Send + Sync {
    /// Add a step cost to a distance value.
    ///
    /// Must not overflow: integer implementations saturate, float
    /// implementations rely on IEEE rounding keeping `MAX + w == MAX`.
    fn add_cost(self, cost: Self) -> Self;

    /// Divide a distance value by a weight, for map normalization.
    fn div_by(self, denom: Self) -> Self;
}

impl ChamferValue for f32 {
    fn add_cost(self, cost: Self) -> Self {
        self + cost
    }

    fn div_by(self, denom: Self) -> Self {
        self / denom
    }
}

impl ChamferValue for u16 {
    fn add_cost(self, cost: Self) -> Self {
        self.saturating_add(cost)
    }

    fn div_by(self, denom: Self) -> Self {
        self / denom
    }
}

#[cfg(test)]
mod tests {
    use super::ChamferValue;

    #[test]
    fn f32_sentinel_is_absorbing() {
        // the unreached sentinel must not wrap or grow when a weight is added
        let sentinel = f32::MAX;
        assert_eq!(sentinel.add_cost(1.0), sentinel);
        assert!(sentinel.add_cost(1.4142).is_finite());
    }

    #[test]
    fn u16_sentinel_saturates() {
        let sentinel = u16::MAX;
        assert_eq!(sentinel.add_cost(3), sentinel);
        assert_eq!(5u16.add_cost(4), 9);
    }

    #[test]
    fn normalization_division() {
        assert_eq!(6.0f32.div_by(3.0), 2.0);
        assert_eq!(7u16.div_by(3), 2);
    }
}
