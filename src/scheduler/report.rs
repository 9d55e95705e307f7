/*!
 * Simulation Report
 * Per-process outcomes and aggregate means over a finished table
 */

use crate::process::ProcessTable;
use serde::Serialize;
use std::fmt;

/// Outcome for a single process
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessRow {
    pub name: String,
    pub response: f64,
    pub waiting: f64,
    pub preemptions: u32,
}

/// Full simulation report, rows in table load order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub processes: Vec<ProcessRow>,
    pub avg_waiting: f64,
    pub avg_response: f64,
}

impl SimReport {
    /// Build a report from a (finished) process table.
    pub fn from_table(table: &ProcessTable) -> Self {
        let processes: Vec<ProcessRow> = table
            .iter()
            .map(|(_, rec)| ProcessRow {
                name: rec.name.clone(),
                response: rec.response,
                waiting: rec.waiting,
                preemptions: rec.preemptions,
            })
            .collect();

        let n = processes.len() as f64;
        let (avg_waiting, avg_response) = if processes.is_empty() {
            (0.0, 0.0)
        } else {
            (
                processes.iter().map(|p| p.waiting).sum::<f64>() / n,
                processes.iter().map(|p| p.response).sum::<f64>() / n,
            )
        };

        Self {
            processes,
            avg_waiting,
            avg_response,
        }
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================== RESULTS ==================")?;
        for p in &self.processes {
            writeln!(f)?;
            writeln!(f, "Process {}:", p.name)?;
            writeln!(f, "  response time: {:.2}", p.response)?;
            writeln!(f, "  waiting time:  {:.2}", p.waiting)?;
            writeln!(f, "  preemptions:   {}", p.preemptions)?;
        }
        writeln!(f)?;
        writeln!(f, "Average waiting time:  {:.2}", self.avg_waiting)?;
        writeln!(f, "Average response time: {:.2}", self.avg_response)
    }
}
