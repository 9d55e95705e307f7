/*!
 * Scheduling Loop
 * Admission, timeslice sizing, dispatch, accounting, and completion
 */

use super::{weight, CfsScheduler};
use crate::process::ProcessTable;
use log::info;

impl CfsScheduler {
    /// Run the simulation to completion.
    ///
    /// Advances the simulated clock tick by tick until every record in the
    /// table is finished, populating response, waiting, and preemption
    /// accounting along the way. A table with no unfinished records returns
    /// immediately.
    pub fn run(&mut self, table: &mut ProcessTable) {
        let mut remaining = table.iter().filter(|(_, r)| !r.finished).count();

        while remaining > 0 {
            self.admit(table);

            // Idle: nothing runnable yet, so step time forward without
            // charging waiting time to anyone.
            if self.queue.is_empty() {
                if self.config.verbose {
                    info!("time {:.2}: CPU is idle", self.clock);
                }
                self.clock += self.config.idle_step;
                continue;
            }

            if self.tick(table) {
                remaining -= 1;
            }
        }

        if self.config.verbose {
            info!(
                "simulation complete: {} processes finished at time {:.2}",
                table.len(),
                self.clock
            );
        }
    }

    /// Admit every record that has arrived and is not yet queued.
    ///
    /// New arrivals enter at the current root's key (0 on an empty queue),
    /// not the minimum: landing near the queue's center avoids both a long
    /// wait before a far-right insertion is scheduled and starvation of
    /// processes already queued on the right.
    fn admit(&mut self, table: &mut ProcessTable) {
        for (pid, rec) in table.iter_mut() {
            if rec.admitted || rec.finished || rec.arrival > self.clock {
                continue;
            }
            rec.admitted = true;
            let key = self.queue.root_key().unwrap_or(0.0);
            self.queue.insert(key, pid);
            if self.config.verbose {
                info!(
                    "time {:.2}: process {} admitted (vruntime {:.2})",
                    self.clock, rec.name, key
                );
            }
        }
    }

    /// One scheduling tick over a non-empty queue. Returns true when the
    /// dispatched process finished.
    fn tick(&mut self, table: &mut ProcessTable) -> bool {
        let verbose = self.config.verbose;

        // Timeslice: an equal share of the quantum, floored at the
        // granularity so switching overhead stays bounded as contention
        // grows.
        let contenders = self.queue.len();
        let share = self.config.quantum / contenders as f64;
        let timeslice = if share > self.config.granularity {
            share
        } else {
            self.config.granularity
        };
        if verbose {
            info!(
                "time {:.2}: {} contenders, timeslice {:.2}",
                self.clock, contenders, timeslice
            );
        }

        // Dispatch the least virtual runtime.
        let min = match self.queue.minimum() {
            Some(min) => min,
            None => return false,
        };
        let current = self.queue.pid(min);
        let vruntime = self.queue.key(min);
        self.queue.remove(min);

        let mut new_key = vruntime;
        let mut finished = false;
        if let Some(rec) = table.get_mut(current) {
            if !rec.started {
                rec.started = true;
                rec.response = self.clock - rec.arrival;
                if verbose {
                    info!(
                        "time {:.2}: process {} started (response {:.2})",
                        self.clock, rec.name, rec.response
                    );
                }
            }
            if verbose {
                info!("time {:.2}: process {} running", self.clock, rec.name);
            }

            new_key = vruntime + timeslice * weight(rec.nice);
            rec.burst -= timeslice;
            finished = rec.burst <= 0.0;
        }

        // Everyone else admitted and unfinished waited out this slice.
        for (pid, rec) in table.iter_mut() {
            if pid != current && rec.admitted && !rec.finished {
                rec.waiting += timeslice;
            }
        }

        if finished {
            if let Some(rec) = table.get_mut(current) {
                rec.finished = true;
                if verbose {
                    info!("time {:.2}: process {} finished", self.clock, rec.name);
                }
            }
        } else {
            self.queue.insert(new_key, current);

            // Bookkeeping signal only: the process already yielded this tick
            // regardless of whether something overtook it.
            if let Some(next) = self.queue.minimum() {
                if self.queue.pid(next) != current {
                    if let Some(rec) = table.get_mut(current) {
                        rec.preemptions += 1;
                        if verbose {
                            info!("time {:.2}: process {} preempted", self.clock, rec.name);
                        }
                    }
                }
            }
        }

        self.clock += timeslice;
        finished
    }
}
