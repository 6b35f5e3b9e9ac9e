use num_traits::Bounded;

use super::ScanInstruction;

/// Maximum; the identity is the type's minimum value.
pub struct Max;

impl<N: Bounded + PartialOrd> ScanInstruction<N> for Max {
    fn null_value() -> N {
        N::min_value()
    }

    fn apply(lhs: N, rhs: N) -> N {
        if rhs > lhs { rhs } else { lhs }
    }
}
