use crate::unit::PlaneUnit;

/// Executes one plane of `PLANE_DIM` lockstep units.
///
/// `launch` runs `task` once per unit, concurrently enough that
/// [`PlaneUnit::sync_units`] can rendezvous, and returns the per-unit results
/// indexed by [`PlaneUnit::unit_pos`]. All units of one launch observe the
/// same shared state captured by `task`; a task that skips a cooperative
/// operation some of its peers entered leaves the plane's behavior undefined,
/// and that contract violation is not detected or reported.
pub trait PlaneLaunch<const PLANE_DIM: usize> {
    /// Run `task` on every unit of a fresh plane and collect the results.
    fn launch<R, F>(task: F) -> [R; PLANE_DIM]
    where
        R: Send,
        F: Fn(&dyn PlaneUnit) -> R + Sync;
}
