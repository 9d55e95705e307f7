/*!
 * Process Record
 * Mutable per-process state updated by the scheduling loop each tick
 */

use crate::core::types::Nice;

/// One synthetic process
///
/// Created once at load time and never destroyed; completion is signalled by
/// the `finished` flag, not by removal from the table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    /// Identifier from the input file (unique within a table)
    pub name: String,
    /// Nice value; lower accrues virtual runtime more slowly
    pub nice: Nice,
    /// Remaining CPU demand
    pub burst: f64,
    /// Simulated arrival time
    pub arrival: f64,

    // Lifecycle flags
    pub admitted: bool,
    pub started: bool,
    pub finished: bool,

    // Accumulators
    pub waiting: f64,
    pub response: f64,
    pub preemptions: u32,
}

impl ProcessRecord {
    pub fn new(name: impl Into<String>, nice: Nice, burst: f64, arrival: f64) -> Self {
        Self {
            name: name.into(),
            nice,
            burst,
            arrival,
            admitted: false,
            started: false,
            finished: false,
            waiting: 0.0,
            response: 0.0,
            preemptions: 0,
        }
    }
}
