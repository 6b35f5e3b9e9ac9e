use std::sync::Barrier;
use std::thread;

use planescan::{PlaneLaunch, PlaneUnit};

/// One unit of a CPU plane: its position plus the shared round barrier.
#[derive(new)]
pub struct CpuUnit<'a> {
    unit_pos: u32,
    barrier: &'a Barrier,
}

impl PlaneUnit for CpuUnit<'_> {
    fn unit_pos(&self) -> u32 {
        self.unit_pos
    }

    fn sync_units(&self) {
        self.barrier.wait();
    }
}

/// Lockstep plane execution on OS threads.
///
/// `launch` spawns one scoped thread per unit and joins them in position
/// order. The shared [`Barrier`] implements [`PlaneUnit::sync_units`]; OS
/// threads provide no intra-round instruction ordering, so the scan engine's
/// extra read/write rendezvous inside each round carries the weight here.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuPlane;

impl<const PLANE_DIM: usize> PlaneLaunch<PLANE_DIM> for CpuPlane {
    fn launch<R, F>(task: F) -> [R; PLANE_DIM]
    where
        R: Send,
        F: Fn(&dyn PlaneUnit) -> R + Sync,
    {
        log::trace!("launching a plane of {PLANE_DIM} units");
        let barrier = Barrier::new(PLANE_DIM);
        let results = thread::scope(|scope| {
            let handles: Vec<_> = (0..PLANE_DIM)
                .map(|pos| {
                    let barrier = &barrier;
                    let task = &task;
                    scope.spawn(move || {
                        let unit = CpuUnit::new(pos as u32, barrier);
                        task(&unit)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("plane unit panicked"))
                .collect::<Vec<_>>()
        });
        let mut results = results.into_iter();
        core::array::from_fn(|_| results.next().expect("one result per unit"))
    }
}
