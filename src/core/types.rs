/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
///
/// Dense index assigned by the process table at load time; the string
/// identifier from the input file stays on the record itself.
pub type Pid = u32;

/// Nice value (scheduling priority), conventionally -20..=19, lower runs more
pub type Nice = i32;
