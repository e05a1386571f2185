//! Scenario configuration.

use crate::{PERIOD_LENGTH_TICKS, SimClock, Tick, WlError, WlResult};

/// How each period's arrival batch size is chosen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrivalPattern {
    /// Exactly `arrivals_per_period` entities every period.
    #[default]
    Fixed,

    /// Batch size drawn from a Poisson distribution with mean
    /// `arrivals_per_period`.  The same seed always yields the same batches.
    Poisson { seed: u64 },
}

/// Parameters of one scenario run.
///
/// Typically built by the application crate from CLI arguments and passed to
/// the scenario runner.  `label` is display-only and never affects results.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    /// Human-readable scenario name, e.g. `"Baseline (12 slots/week)"`.
    pub label: String,

    /// New entities per period (mean, for `ArrivalPattern::Poisson`).
    pub arrivals_per_period: u32,

    /// Entities already waiting at tick 0.
    pub initial_backlog: u32,

    /// Maximum entities served per period.
    pub capacity_per_period: u32,

    /// Number of periods to simulate.  Must be positive.
    pub horizon_periods: u32,

    /// Arrival batch model.  Default: `Fixed`.
    pub arrivals: ArrivalPattern,
}

impl ScenarioConfig {
    pub fn new(
        label:               impl Into<String>,
        arrivals_per_period: u32,
        initial_backlog:     u32,
        capacity_per_period: u32,
        horizon_periods:     u32,
    ) -> Self {
        Self {
            label: label.into(),
            arrivals_per_period,
            initial_backlog,
            capacity_per_period,
            horizon_periods,
            arrivals: ArrivalPattern::Fixed,
        }
    }

    /// Same scenario with a different service capacity (and label).
    ///
    /// Handy for deriving the intervention from the baseline.
    pub fn with_capacity(&self, capacity_per_period: u32, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            capacity_per_period,
            ..self.clone()
        }
    }

    pub fn with_arrivals(mut self, pattern: ArrivalPattern) -> Self {
        self.arrivals = pattern;
        self
    }

    /// Reject configurations that cannot be run.
    ///
    /// Only a zero horizon is invalid; zero arrivals, backlog, or capacity
    /// are legal degenerate scenarios.
    pub fn validate(&self) -> WlResult<()> {
        if self.horizon_periods == 0 {
            return Err(WlError::Config(format!(
                "scenario '{}': horizon_periods must be positive",
                self.label
            )));
        }
        Ok(())
    }

    /// The tick at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.horizon_periods as u64 * PERIOD_LENGTH_TICKS)
    }

    /// Construct a `SimClock` for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new()
    }
}
