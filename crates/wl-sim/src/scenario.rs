//! Scenario runner: one isolated run per call, and baseline/intervention
//! comparison.

use std::fmt;

use log::info;

use wl_core::{ArrivalPattern, ScenarioConfig};
use wl_process::PeriodRecord;

use crate::{NoopObserver, Sim, SimBuilder, SimObserver, SimResult};

// ── ScenarioResult ────────────────────────────────────────────────────────────

/// Aggregated outcome of one scenario run.  Immutable once produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioResult {
    /// The parameters this result was produced from, including its label.
    pub config: ScenarioConfig,

    /// Mean wait over all served entities, in ticks; `0.0` if none served.
    pub mean_wait_time: f64,

    /// Queue length after the last period.
    pub final_queue_length: u64,

    /// Entities served over the whole run.
    pub total_served: u64,

    /// Queue length at the end of each period.
    pub per_period_queue_length: Vec<u64>,

    /// Entities served in each period.
    pub per_period_served: Vec<u64>,

    /// Every recorded wait, in dequeue order.
    pub all_wait_times: Vec<u64>,

    /// Full period records.
    pub periods: Vec<PeriodRecord>,
}

impl ScenarioResult {
    /// Package a finished run.
    pub fn from_sim(sim: Sim) -> Self {
        let metrics = sim.metrics;
        let periods = metrics.periods().to_vec();
        Self {
            mean_wait_time:          metrics.mean_wait_time(),
            final_queue_length:      metrics.final_queue_length(),
            total_served:            metrics.total_served(),
            per_period_queue_length: periods.iter().map(|r| r.queue_length).collect(),
            per_period_served:       periods.iter().map(|r| r.served).collect(),
            all_wait_times:          metrics.wait_times().to_vec(),
            periods,
            config:                  sim.config,
        }
    }

    /// Display label of the scenario.
    pub fn label(&self) -> &str {
        &self.config.label
    }

    /// Running total of served entities, one entry per period.
    pub fn cumulative_served(&self) -> Vec<u64> {
        self.per_period_served
            .iter()
            .scan(0u64, |acc, &s| {
                *acc += s;
                Some(*acc)
            })
            .collect()
    }

    /// Longest recorded wait, or `None` if nothing was served.
    pub fn max_wait_time(&self) -> Option<u64> {
        self.all_wait_times.iter().copied().max()
    }

    /// Whether capacity keeps up with arrivals in this scenario.
    pub fn outlook(&self) -> CapacityOutlook {
        CapacityOutlook::assess(self.config.arrivals_per_period, self.config.capacity_per_period)
    }
}

// ── Running ───────────────────────────────────────────────────────────────────

/// Run one scenario from fresh state to its horizon.
pub fn run_scenario(config: &ScenarioConfig) -> SimResult<ScenarioResult> {
    run_scenario_with(config, &mut NoopObserver)
}

/// Like [`run_scenario`], reporting progress to `observer`.
pub fn run_scenario_with<O: SimObserver>(
    config:   &ScenarioConfig,
    observer: &mut O,
) -> SimResult<ScenarioResult> {
    let mut sim = SimBuilder::new(config.clone()).build()?;
    info!(
        "scenario '{}': {} arrivals/period, backlog {}, capacity {}/period, {} periods",
        config.label,
        config.arrivals_per_period,
        config.initial_backlog,
        config.capacity_per_period,
        config.horizon_periods,
    );
    sim.run(observer)?;

    let result = ScenarioResult::from_sim(sim);
    info!(
        "scenario '{}': served {}, final queue {}, mean wait {:.1} ticks",
        result.label(), result.total_served, result.final_queue_length, result.mean_wait_time,
    );
    Ok(result)
}

/// Positional entry point for running scenarios.
///
/// Holds only the arrival model; each [`run`][Self::run] builds a brand-new
/// simulation, so calling it repeatedly (baseline, then intervention) never
/// carries state from one call into the next.
#[derive(Clone, Debug, Default)]
pub struct ScenarioRunner {
    arrivals: ArrivalPattern,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_arrivals(mut self, pattern: ArrivalPattern) -> Self {
        self.arrivals = pattern;
        self
    }

    pub fn run(
        &self,
        arrivals_per_period: u32,
        initial_backlog:     u32,
        capacity_per_period: u32,
        horizon_periods:     u32,
        label:               impl Into<String>,
    ) -> SimResult<ScenarioResult> {
        let config = ScenarioConfig::new(
            label,
            arrivals_per_period,
            initial_backlog,
            capacity_per_period,
            horizon_periods,
        )
        .with_arrivals(self.arrivals);
        run_scenario(&config)
    }
}

// ── Comparison ────────────────────────────────────────────────────────────────

/// Baseline and intervention results side by side.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioComparison {
    pub baseline:     ScenarioResult,
    pub intervention: ScenarioResult,
}

/// `(from - to) / from * 100`, or 0 when `from` is zero.
fn pct_change(from: f64, to: f64) -> f64 {
    if from > 0.0 { (from - to) / from * 100.0 } else { 0.0 }
}

impl ScenarioComparison {
    pub fn new(baseline: ScenarioResult, intervention: ScenarioResult) -> Self {
        Self { baseline, intervention }
    }

    /// Percentage reduction in mean wait.  Negative if the intervention
    /// waits longer; 0 if the baseline mean is 0.
    pub fn wait_reduction_pct(&self) -> f64 {
        pct_change(self.baseline.mean_wait_time, self.intervention.mean_wait_time)
    }

    /// Percentage reduction in final queue length; 0 if the baseline ends
    /// with an empty queue.
    pub fn queue_reduction_pct(&self) -> f64 {
        pct_change(
            self.baseline.final_queue_length as f64,
            self.intervention.final_queue_length as f64,
        )
    }

    /// Percentage increase in total served; 0 if the baseline served nobody.
    pub fn throughput_increase_pct(&self) -> f64 {
        let base = self.baseline.total_served as f64;
        if base > 0.0 {
            (self.intervention.total_served as f64 - base) / base * 100.0
        } else {
            0.0
        }
    }
}

/// Run `baseline` and `intervention` as two independent scenarios.
///
/// With the `parallel` feature both run at once on Rayon's pool; results are
/// identical either way because runs share no state.
pub fn compare(
    baseline:     &ScenarioConfig,
    intervention: &ScenarioConfig,
) -> SimResult<ScenarioComparison> {
    #[cfg(not(feature = "parallel"))]
    let (base, int) = (run_scenario(baseline), run_scenario(intervention));

    #[cfg(feature = "parallel")]
    let (base, int) = rayon::join(|| run_scenario(baseline), || run_scenario(intervention));

    Ok(ScenarioComparison::new(base?, int?))
}

// ── CapacityOutlook ───────────────────────────────────────────────────────────

/// Long-run trend of the queue given arrivals and capacity per period.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapacityOutlook {
    /// Arrivals exceed capacity: the queue keeps growing.
    Growing,
    /// Capacity exactly matches arrivals: new arrivals are absorbed but the
    /// backlog never shrinks.
    Steady,
    /// Capacity exceeds arrivals: the backlog is worked down.
    Shrinking,
}

impl CapacityOutlook {
    pub fn assess(arrivals_per_period: u32, capacity_per_period: u32) -> Self {
        use std::cmp::Ordering::*;
        match arrivals_per_period.cmp(&capacity_per_period) {
            Greater => CapacityOutlook::Growing,
            Equal => CapacityOutlook::Steady,
            Less => CapacityOutlook::Shrinking,
        }
    }
}

impl fmt::Display for CapacityOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CapacityOutlook::Growing => "capacity below arrivals; queue keeps growing",
            CapacityOutlook::Steady => "capacity matches arrivals; queue does not shrink",
            CapacityOutlook::Shrinking => "capacity above arrivals; backlog is worked down",
        };
        f.write_str(s)
    }
}
