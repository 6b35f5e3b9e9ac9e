use num_traits::{WrappingAdd, Zero};

use super::ScanInstruction;

/// Wrapping addition.
pub struct Sum;

impl<N: WrappingAdd + Zero> ScanInstruction<N> for Sum {
    fn null_value() -> N {
        N::zero()
    }

    fn apply(lhs: N, rhs: N) -> N {
        lhs.wrapping_add(&rhs)
    }
}
