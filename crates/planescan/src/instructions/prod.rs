use num_traits::{One, WrappingMul};

use super::ScanInstruction;

/// Wrapping multiplication.
pub struct Prod;

impl<N: WrappingMul + One> ScanInstruction<N> for Prod {
    fn null_value() -> N {
        N::one()
    }

    fn apply(lhs: N, rhs: N) -> N {
        lhs.wrapping_mul(&rhs)
    }
}
