/*!
 * Scheduler Configuration
 * Validated timing parameters for the simulation loop
 */

use crate::core::errors::ConfigError;

/// CFS simulation parameters
///
/// `quantum` is the total CPU time notionally divided among all contenders
/// per round; `granularity` is the floor under any single timeslice;
/// `idle_step` bounds how fast simulated time passes while the ready-queue
/// is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchedulerConfig {
    pub quantum: f64,
    pub granularity: f64,
    pub idle_step: f64,
    pub verbose: bool,
}

impl SchedulerConfig {
    /// Create a config, rejecting non-positive or non-finite parameters.
    pub fn new(quantum: f64, granularity: f64, idle_step: f64) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("quantum", quantum),
            ("granularity", granularity),
            ("idle_step", idle_step),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(Self {
            quantum,
            granularity,
            idle_step,
            verbose: false,
        })
    }

    /// Enable or disable the per-tick operator trace.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            quantum: 10.0,
            granularity: 0.5,
            idle_step: 0.05,
            verbose: false,
        }
    }
}
