/*!
 * CFS Simulator Library
 * Discrete-event simulation of the Completely Fair Scheduler over a
 * red-black ready-queue keyed by virtual runtime
 */

pub mod core;
pub mod process;
pub mod rbtree;
pub mod scheduler;

// Re-exports
pub use crate::core::{ConfigError, LoadError, Nice, Pid};
pub use process::{load_path, parse_records, ProcessRecord, ProcessTable};
pub use rbtree::{NodeId, RbTree};
pub use scheduler::{weight, CfsScheduler, SchedulerConfig, SimReport};
