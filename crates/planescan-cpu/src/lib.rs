#![warn(missing_docs)]

//! CPU lockstep execution substrate for the `planescan` primitives.
//!
//! One OS thread per unit; a [`std::sync::Barrier`] stands in for the round
//! synchronization that true lockstep hardware provides implicitly. On top of
//! the [`CpuPlane`] launcher, the crate offers runtime-width entry points for
//! callers whose plane dimension is only known at run time:
//!
//! ```
//! let inclusive = planescan_cpu::inclusive_scan(&[1u32, 2, 3, 4], |a, b| a + b).unwrap();
//! assert_eq!(inclusive, vec![1, 3, 6, 10]);
//! ```

#[macro_use]
extern crate derive_new;

mod error;
mod launch;
mod plane;

pub use error::*;
pub use launch::*;
pub use plane::*;
