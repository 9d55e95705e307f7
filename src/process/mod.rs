/*!
 * Process Store
 * Per-process records, the Pid-indexed table, and the input loader
 */

mod loader;
mod record;
mod table;

pub use loader::{load_path, parse_records};
pub use record::ProcessRecord;
pub use table::ProcessTable;
