/*!
 * Process Table
 * Owned collection of records, indexed by dense Pid with a name lookup
 */

use super::record::ProcessRecord;
use crate::core::types::Pid;
use log::warn;
use std::collections::HashMap;

/// Pid-indexed process store
///
/// Records keep their load order, which fixes the admission order for
/// simultaneously arriving processes. The scheduling loop borrows the table
/// mutably for the duration of a run and hands it back with every record
/// finished.
#[derive(Debug, Clone, Default)]
pub struct ProcessTable {
    records: Vec<ProcessRecord>,
    by_name: HashMap<String, Pid>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning its Pid.
    ///
    /// A duplicate identifier replaces the existing record in place (last
    /// record wins, keeping the original Pid and load order).
    pub fn insert(&mut self, record: ProcessRecord) -> Pid {
        match self.by_name.get(&record.name) {
            Some(&pid) => {
                warn!(
                    "duplicate process '{}': later record overwrites the earlier one",
                    record.name
                );
                self.records[pid as usize] = record;
                pid
            }
            None => {
                let pid = self.records.len() as Pid;
                self.by_name.insert(record.name.clone(), pid);
                self.records.push(record);
                pid
            }
        }
    }

    pub fn get(&self, pid: Pid) -> Option<&ProcessRecord> {
        self.records.get(pid as usize)
    }

    pub fn get_mut(&mut self, pid: Pid) -> Option<&mut ProcessRecord> {
        self.records.get_mut(pid as usize)
    }

    pub fn pid_of(&self, name: &str) -> Option<Pid> {
        self.by_name.get(name).copied()
    }

    /// All Pids in load order
    pub fn pids(&self) -> impl Iterator<Item = Pid> + '_ {
        0..self.records.len() as Pid
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pid, &ProcessRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (i as Pid, r))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Pid, &mut ProcessRecord)> {
        self.records
            .iter_mut()
            .enumerate()
            .map(|(i, r)| (i as Pid, r))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
