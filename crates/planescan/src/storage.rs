use core::cell::UnsafeCell;
use core::mem::MaybeUninit;

/// Shared exchange buffer for one plane: exactly `PLANE_DIM` slots, one per
/// unit, overwritten in place by each round of the scan engine.
///
/// The storage is the only channel of communication between units and holds
/// no history. It is group-scoped and transient: allocate one per scan call,
/// let the derivations read it, then discard it. Reusing a storage for a
/// second call, or sharing it between two planes, is undefined: a unit
/// starting the next call would overwrite slots its peers are still reading.
///
/// The plane dimension must be a power of two; this is checked once, at
/// compile time, when the storage is allocated.
pub struct ScanStorage<T, const PLANE_DIM: usize> {
    slots: [UnsafeCell<MaybeUninit<T>>; PLANE_DIM],
}

impl<T: Copy, const PLANE_DIM: usize> ScanStorage<T, PLANE_DIM> {
    const DIM_IS_POW2: () = assert!(
        PLANE_DIM.is_power_of_two(),
        "plane dimension must be a power of two",
    );

    /// A fresh buffer with every slot uninitialized.
    ///
    /// The scan engine writes every slot before any slot is read, so no
    /// initial value is needed.
    pub fn new() -> Self {
        let () = Self::DIM_IS_POW2;
        Self {
            slots: core::array::from_fn(|_| UnsafeCell::new(MaybeUninit::uninit())),
        }
    }

    /// Store `value` into slot `pos`.
    ///
    /// # Safety
    ///
    /// `pos` must be the calling unit's own position: within one round each
    /// slot has exactly one writer, and cross-unit reads of the slot are
    /// separated from this write by the plane barrier.
    pub(crate) unsafe fn write(&self, pos: usize, value: T) {
        unsafe { (*self.slots[pos].get()).write(value) };
    }

    /// Load the value in slot `pos`.
    ///
    /// # Safety
    ///
    /// The slot must have been written during the current call, and that
    /// write must be ordered before this read, by the plane barrier for a
    /// peer's slot or by program order for the unit's own.
    pub(crate) unsafe fn read(&self, pos: usize) -> T {
        unsafe { (*self.slots[pos].get()).assume_init_read() }
    }
}

impl<T: Copy, const PLANE_DIM: usize> Default for ScanStorage<T, PLANE_DIM> {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: every slot has a single writer per round, and all cross-unit
// accesses are separated by the plane barrier, which provides the required
// happens-before edges. No `&mut` to a slot is ever formed.
unsafe impl<T: Send, const PLANE_DIM: usize> Sync for ScanStorage<T, PLANE_DIM> {}
