/// Capability handed to every unit of a plane by its execution substrate.
///
/// Bundles the two things the scan primitive needs from the outside world:
/// the unit's logical position and the plane-wide round barrier. The trait is
/// object safe so launchers can pass `&dyn PlaneUnit` into generic tasks.
pub trait PlaneUnit {
    /// Logical position of this unit within its plane, in `0..PLANE_DIM`.
    ///
    /// How positions map to underlying execution contexts is the substrate's
    /// policy; the primitive only requires that positions are unique and
    /// stable for the duration of one call.
    fn unit_pos(&self) -> u32;

    /// Plane-wide barrier: returns once every unit of the plane has entered.
    ///
    /// Writes to the shared storage made before a unit enters the barrier
    /// must be visible to every unit after it returns. Substrates with true
    /// lockstep execution may implement this as a no-op.
    fn sync_units(&self);
}

/// The single unit of a plane of one.
///
/// Having no peers to wait for, its barrier is a no-op. Useful for the
/// degenerate width and for exercising the primitive without a substrate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoloUnit;

impl PlaneUnit for SoloUnit {
    fn unit_pos(&self) -> u32 {
        0
    }

    fn sync_units(&self) {}
}
