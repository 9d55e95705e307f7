/*!
 * CFS Engine
 * Simulates the Completely Fair Scheduler discipline over a red-black
 * ready-queue keyed by virtual runtime
 */

use crate::core::types::Nice;
use crate::rbtree::RbTree;

mod config;
mod engine;
pub mod report;

pub use config::SchedulerConfig;
pub use report::SimReport;

/// Map a nice value to a virtual-runtime weight.
///
/// Linear over the conventional range: -20 maps to ~0.01 and 19 to ~1.94, so
/// lower nice values accrue virtual runtime more slowly and are rescheduled
/// sooner - a straight-line stand-in for the kernel's nice weight table.
pub fn weight(nice: Nice) -> f64 {
    99.0 * f64::from(nice) / 2000.0 + 1.0
}

/// Discrete-event CFS simulator
///
/// Owns the simulated clock and the ready-queue; borrows the process table
/// mutably for the duration of a run. Strictly single-threaded: every tick
/// runs to completion before the next begins.
#[derive(Debug)]
pub struct CfsScheduler {
    config: SchedulerConfig,
    queue: RbTree,
    clock: f64,
}

impl CfsScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            queue: RbTree::new(),
            clock: 0.0,
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Current simulated time
    pub fn clock(&self) -> f64 {
        self.clock
    }
}

impl Default for CfsScheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}
