/*!
 * Scheduler Tests
 * End-to-end simulation scenarios and accounting properties
 */

use cfs_sim::{
    parse_records, CfsScheduler, ProcessRecord, ProcessTable, SchedulerConfig, SimReport,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config() -> SchedulerConfig {
    SchedulerConfig::new(10.0, 0.5, 0.05).expect("valid config")
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

#[test]
fn test_single_process_runs_full_burst() {
    // One process, nice 0, burst 10, arrival 0: a single tick with
    // timeslice max(10/1, 0.5) = 10 consumes the whole burst.
    let mut table = ProcessTable::new();
    let pid = table.insert(ProcessRecord::new("p1", 0, 10.0, 0.0));

    let mut scheduler = CfsScheduler::new(config());
    scheduler.run(&mut table);

    let p = table.get(pid).expect("record exists");
    assert!(p.finished);
    assert!(p.burst <= 0.0);
    approx(p.response, 0.0);
    approx(p.waiting, 0.0);
    assert_eq!(p.preemptions, 0);
    approx(scheduler.clock(), 10.0);
}

#[test]
fn test_two_equal_processes_alternate() {
    // Both arrive at 0 with burst 10, nice 0: ticks of 5 alternate between
    // them, each waits exactly while the other runs.
    let mut table = ProcessTable::new();
    let a = table.insert(ProcessRecord::new("a", 0, 10.0, 0.0));
    let b = table.insert(ProcessRecord::new("b", 0, 10.0, 0.0));

    let mut scheduler = CfsScheduler::new(config());
    scheduler.run(&mut table);

    let pa = table.get(a).expect("record exists");
    let pb = table.get(b).expect("record exists");

    assert!(pa.finished && pb.finished);

    // First-inserted runs first (ties go right on admission).
    approx(pa.response, 0.0);
    approx(pb.response, 5.0);

    // "a" is charged only "b"'s first slice: it finishes on its second
    // dispatch, so "b"'s final slice accrues to nobody. "b" waits out both
    // of "a"'s slices.
    approx(pa.waiting, 5.0);
    approx(pb.waiting, 10.0);

    // Each lost the minimum once, right after its first requeue.
    assert_eq!(pa.preemptions, 1);
    assert_eq!(pb.preemptions, 1);
}

#[test]
fn test_idle_ticks_advance_clock_without_waiting() {
    let mut table = ProcessTable::new();
    let pid = table.insert(ProcessRecord::new("late", 0, 10.0, 1.0));

    let config = SchedulerConfig::new(10.0, 0.5, 0.5).expect("valid config");
    let mut scheduler = CfsScheduler::new(config);
    scheduler.run(&mut table);

    let p = table.get(pid).expect("record exists");
    // Two idle steps of 0.5 reach the arrival, then one full-burst tick.
    approx(scheduler.clock(), 11.0);
    approx(p.response, 0.0);
    approx(p.waiting, 0.0);
}

#[test]
fn test_low_nice_finishes_with_less_waiting() {
    let mut table = ProcessTable::new();
    let fast = table.insert(ProcessRecord::new("fast", -20, 10.0, 0.0));
    let slow = table.insert(ProcessRecord::new("slow", 19, 10.0, 0.0));

    let mut scheduler = CfsScheduler::new(config());
    scheduler.run(&mut table);

    let pf = table.get(fast).expect("record exists");
    let ps = table.get(slow).expect("record exists");
    assert!(pf.finished && ps.finished);

    // The low-nice process accrues virtual runtime more slowly, so it is
    // rescheduled sooner and spends less time waiting.
    assert!(pf.waiting < ps.waiting);
}

#[test]
fn test_granularity_floors_the_timeslice() {
    // 30 contenders would share 10/30 = 0.33 each; the 0.5 floor must apply,
    // so every burst of 0.5 completes in exactly one slice and nothing is
    // ever requeued. Without the floor each process would need two slices
    // and record a preemption.
    let mut table = ProcessTable::new();
    for i in 0..30 {
        table.insert(ProcessRecord::new(format!("p{i}"), 0, 0.5, 0.0));
    }

    let mut scheduler = CfsScheduler::new(config());
    scheduler.run(&mut table);

    for (_, rec) in table.iter() {
        assert!(rec.finished);
        assert_eq!(rec.preemptions, 0);
    }

    // One slice per process, but the field shrinks as bursts finish: the
    // floor holds only while 10/contenders <= 0.5, after which the equal
    // share takes over.
    let mut expected_clock = 0.0;
    for contenders in (1..=30u32).rev() {
        let share = 10.0 / f64::from(contenders);
        expected_clock += if share > 0.5 { share } else { 0.5 };
    }
    approx(scheduler.clock(), expected_clock);
}

#[test]
fn test_empty_table_returns_immediately() {
    let mut table = ProcessTable::new();
    let mut scheduler = CfsScheduler::new(config());
    scheduler.run(&mut table);

    approx(scheduler.clock(), 0.0);
    assert!(SimReport::from_table(&table).processes.is_empty());
}

#[test]
fn test_accounting_invariants_on_random_workload() {
    let mut rng = StdRng::seed_from_u64(99);
    let input: String = (0..40).map(|i| format!("p{i}\n")).collect();
    let mut table = parse_records(&input, &mut rng).expect("valid input");

    let mut scheduler = CfsScheduler::new(config());
    scheduler.run(&mut table);

    for (_, rec) in table.iter() {
        assert!(rec.finished, "{} must finish", rec.name);
        assert!(rec.burst <= 0.0);
        assert!(rec.response >= 0.0);
        assert!(rec.waiting >= 0.0);
        // A process can never wait longer than the whole simulation.
        assert!(rec.waiting <= scheduler.clock());
        assert!(rec.response + rec.arrival <= scheduler.clock());
    }
}

#[test]
fn test_later_arrival_waits_from_admission_only() {
    let mut table = ProcessTable::new();
    let a = table.insert(ProcessRecord::new("a", 0, 10.0, 0.0));
    let b = table.insert(ProcessRecord::new("b", 0, 10.0, 100.0));

    let mut scheduler = CfsScheduler::new(config());
    scheduler.run(&mut table);

    // "a" finishes long before "b" arrives; neither ever contends.
    let pa = table.get(a).expect("record exists");
    let pb = table.get(b).expect("record exists");
    approx(pa.waiting, 0.0);
    approx(pb.waiting, 0.0);
    // Idle steps quantize the dispatch time, so the response is only
    // bounded by the idle step, not exactly zero.
    assert!(pb.response >= 0.0 && pb.response < 0.05 + 1e-9);
    assert_eq!(pa.preemptions, 0);
    assert_eq!(pb.preemptions, 0);
}

#[test]
fn test_report_matches_table() {
    let mut table = ProcessTable::new();
    table.insert(ProcessRecord::new("a", 0, 10.0, 0.0));
    table.insert(ProcessRecord::new("b", 0, 10.0, 0.0));

    let mut scheduler = CfsScheduler::new(config());
    scheduler.run(&mut table);

    let report = SimReport::from_table(&table);
    assert_eq!(report.processes.len(), 2);
    // Waiting 5.0 and 10.0 (the first finisher misses the last slice),
    // responses 0.0 and 5.0.
    approx(report.avg_waiting, 7.5);
    approx(report.avg_response, 2.5);

    let text = report.to_string();
    assert!(text.contains("Process a:"));
    assert!(text.contains("Average response time: 2.50"));
}
