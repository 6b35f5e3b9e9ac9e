//! Runtime-width entry points.
//!
//! Convenience layer over the const-generic primitive for callers whose
//! plane dimension is only known at run time: the input length picks the
//! dimension, one [`CpuPlane`](crate::CpuPlane) launch per call, a fresh
//! exchange storage each time. Widths outside [`SUPPORTED_PLANE_DIMS`] are
//! the only failure.

use planescan::{
    PlaneLaunch, ScanStorage, plane_exclusive_scan, plane_exclusive_scan_reduce,
    plane_inclusive_scan, plane_inclusive_scan_reduce, plane_scan, plane_scan_reduce,
};

use crate::error::PlaneError;
use crate::plane::CpuPlane;

/// Plane dimensions the runtime-width entry points dispatch over.
pub const SUPPORTED_PLANE_DIMS: [usize; 7] = [1, 2, 4, 8, 16, 32, 64];

macro_rules! for_each_plane_dim {
    ($len:expr, $run:ident) => {
        match $len {
            1 => Ok($run!(1)),
            2 => Ok($run!(2)),
            4 => Ok($run!(4)),
            8 => Ok($run!(8)),
            16 => Ok($run!(16)),
            32 => Ok($run!(32)),
            64 => Ok($run!(64)),
            n => Err(PlaneError::UnsupportedPlaneDim { plane_dim: n }),
        }
    };
}

/// Inclusive scan of `inputs`: element `i` of the result is the
/// left-to-right fold of `inputs[0..=i]`.
pub fn inclusive_scan<T, F>(inputs: &[T], scan_op: F) -> Result<Vec<T>, PlaneError>
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Sync,
{
    macro_rules! run {
        ($dim:literal) => {{
            let storage = ScanStorage::<T, $dim>::new();
            <CpuPlane as PlaneLaunch<$dim>>::launch(|unit| {
                plane_inclusive_scan(unit, inputs[unit.unit_pos() as usize], &storage, &scan_op)
            })
            .to_vec()
        }};
    }
    for_each_plane_dim!(inputs.len(), run)
}

/// [`inclusive_scan`], also returning the reduction over all of `inputs`.
pub fn inclusive_scan_reduce<T, F>(inputs: &[T], scan_op: F) -> Result<(Vec<T>, T), PlaneError>
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Sync,
{
    macro_rules! run {
        ($dim:literal) => {{
            let storage = ScanStorage::<T, $dim>::new();
            let outputs = <CpuPlane as PlaneLaunch<$dim>>::launch(|unit| {
                plane_inclusive_scan_reduce(
                    unit,
                    inputs[unit.unit_pos() as usize],
                    &storage,
                    &scan_op,
                )
            });
            let reduction = outputs[$dim - 1].1;
            (outputs.iter().map(|(output, _)| *output).collect(), reduction)
        }};
    }
    for_each_plane_dim!(inputs.len(), run)
}

/// Exclusive scan of `inputs`, seeded with `init`: element 0 is `init`,
/// element `i > 0` is `op(init, inclusive[i - 1])`. `init` need not be the
/// operator's identity and always folds from the left.
pub fn exclusive_scan<T, F>(inputs: &[T], init: T, scan_op: F) -> Result<Vec<T>, PlaneError>
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Sync,
{
    macro_rules! run {
        ($dim:literal) => {{
            let storage = ScanStorage::<T, $dim>::new();
            <CpuPlane as PlaneLaunch<$dim>>::launch(|unit| {
                plane_exclusive_scan(
                    unit,
                    inputs[unit.unit_pos() as usize],
                    init,
                    &storage,
                    &scan_op,
                )
            })
            .to_vec()
        }};
    }
    for_each_plane_dim!(inputs.len(), run)
}

/// [`exclusive_scan`], also returning the reduction over all of `inputs`.
pub fn exclusive_scan_reduce<T, F>(
    inputs: &[T],
    init: T,
    scan_op: F,
) -> Result<(Vec<T>, T), PlaneError>
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Sync,
{
    macro_rules! run {
        ($dim:literal) => {{
            let storage = ScanStorage::<T, $dim>::new();
            let outputs = <CpuPlane as PlaneLaunch<$dim>>::launch(|unit| {
                plane_exclusive_scan_reduce(
                    unit,
                    inputs[unit.unit_pos() as usize],
                    init,
                    &storage,
                    &scan_op,
                )
            });
            let reduction = outputs[$dim - 1].1;
            (outputs.iter().map(|(output, _)| *output).collect(), reduction)
        }};
    }
    for_each_plane_dim!(inputs.len(), run)
}

/// Combined scan: the inclusive and exclusive results of a single pass.
pub fn scan<T, F>(inputs: &[T], init: T, scan_op: F) -> Result<(Vec<T>, Vec<T>), PlaneError>
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Sync,
{
    macro_rules! run {
        ($dim:literal) => {{
            let outputs = {
                let storage = ScanStorage::<T, $dim>::new();
                <CpuPlane as PlaneLaunch<$dim>>::launch(|unit| {
                    plane_scan(
                        unit,
                        inputs[unit.unit_pos() as usize],
                        init,
                        &storage,
                        &scan_op,
                    )
                })
            };
            (
                outputs.iter().map(|(inclusive, _)| *inclusive).collect(),
                outputs.iter().map(|(_, exclusive)| *exclusive).collect(),
            )
        }};
    }
    for_each_plane_dim!(inputs.len(), run)
}

/// [`scan`], also returning the reduction over all of `inputs`.
pub fn scan_reduce<T, F>(
    inputs: &[T],
    init: T,
    scan_op: F,
) -> Result<(Vec<T>, Vec<T>, T), PlaneError>
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Sync,
{
    macro_rules! run {
        ($dim:literal) => {{
            let outputs = {
                let storage = ScanStorage::<T, $dim>::new();
                <CpuPlane as PlaneLaunch<$dim>>::launch(|unit| {
                    plane_scan_reduce(
                        unit,
                        inputs[unit.unit_pos() as usize],
                        init,
                        &storage,
                        &scan_op,
                    )
                })
            };
            let reduction = outputs[$dim - 1].2;
            (
                outputs.iter().map(|(inclusive, _, _)| *inclusive).collect(),
                outputs.iter().map(|(_, exclusive, _)| *exclusive).collect(),
                reduction,
            )
        }};
    }
    for_each_plane_dim!(inputs.len(), run)
}
