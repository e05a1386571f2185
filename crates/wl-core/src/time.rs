//! Simulation time model.
//!
//! # Design
//!
//! Time is an integer `Tick` counter; one tick is one simulated day.  Both
//! arrivals and service are evaluated on period boundaries, and a period is
//! a fixed [`PERIOD_LENGTH_TICKS`] ticks (one week):
//!
//!   period k starts at tick k * PERIOD_LENGTH_TICKS
//!
//! Waiting times are therefore exact integer tick differences, always
//! multiples of the period length.

use std::fmt;

/// Length of one period in ticks.  Not reconfigurable within a run.
pub const PERIOD_LENGTH_TICKS: u64 = 7;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick (simulated day since the start of the run).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The single global clock of one scenario run.
///
/// Holds the current logical time.  The scheduler moves it forward in jumps
/// to the next pending event; it never moves backwards.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump forward to `tick`.
    ///
    /// Requests to move backwards are ignored so the clock stays monotonic.
    #[inline]
    pub fn advance_to(&mut self, tick: Tick) {
        debug_assert!(tick >= self.current_tick, "clock moved backwards: {tick} < {}", self.current_tick);
        if tick > self.current_tick {
            self.current_tick = tick;
        }
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.current_tick;
        write!(f, "{} (week {} day {})", t, t.0 / PERIOD_LENGTH_TICKS, t.0 % PERIOD_LENGTH_TICKS)
    }
}
