//! Strongly typed identifier wrappers and the per-run entity allocator.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and kept
//! in ordered collections without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identifier of a queued entity (e.g. a patient).  Never reused within a run.
    pub struct EntityId(u64);
}

typed_id! {
    /// Zero-based index of a simulated period (week).
    pub struct PeriodIndex(u32);
}

typed_id! {
    /// Index of a process registered with the scheduler, in registration order.
    pub struct ProcessId(u32);
}

// ── EntityAllocator ───────────────────────────────────────────────────────────

/// Issues unique, strictly increasing [`EntityId`]s for one scenario run.
///
/// The first id handed out is `EntityId(1)`.  Each run constructs its own
/// allocator, so ids never leak between scenarios.
#[derive(Debug, Default, Clone)]
pub struct EntityAllocator {
    last: u64,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a fresh id strictly greater than every id returned before.
    #[inline]
    pub fn next_id(&mut self) -> EntityId {
        self.last += 1;
        EntityId(self.last)
    }
}
