//! Stock operator instructions.
//!
//! Instructions name an associative operator together with a left identity,
//! so callers of the runtime-width entry points don't have to supply a seed.
//! Associativity is never validated; it is the instruction's contract, as
//! operator correctness in general is the caller's.

mod max;
mod min;
mod prod;
mod sum;

pub use max::*;
pub use min::*;
pub use prod::*;
pub use sum::*;

/// A named, associative binary operator usable as a scan operator.
pub trait ScanInstruction<N> {
    /// Left identity of the operator: `apply(null_value(), x) == x`.
    fn null_value() -> N;

    /// Apply the operator. `lhs` always folds the earlier positions.
    fn apply(lhs: N, rhs: N) -> N;
}
