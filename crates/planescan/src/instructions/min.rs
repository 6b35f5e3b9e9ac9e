use num_traits::Bounded;

use super::ScanInstruction;

/// Minimum; the identity is the type's maximum value.
pub struct Min;

impl<N: Bounded + PartialOrd> ScanInstruction<N> for Min {
    fn null_value() -> N {
        N::max_value()
    }

    fn apply(lhs: N, rhs: N) -> N {
        if rhs < lhs { rhs } else { lhs }
    }
}
