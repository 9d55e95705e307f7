/*!
 * Input Loader
 * Parses flat-file process records, defaulting missing fields from seeded
 * randomized ranges
 */

use super::record::ProcessRecord;
use super::table::ProcessTable;
use crate::core::errors::LoadError;
use crate::core::types::Nice;
use log::debug;
use rand::Rng;
use std::fs;
use std::path::Path;

// Defaulting ranges for omitted fields (inclusive)
const NICE_RANGE: (Nice, Nice) = (-20, 19);
const BURST_RANGE: (i64, i64) = (1, 30);
const ARRIVAL_RANGE: (i64, i64) = (0, 20);

/// Parse process records from input text.
///
/// Each non-blank line is `id [nice burst arrival]`, whitespace-separated.
/// Missing trailing fields are drawn uniformly from the conventional ranges;
/// tokens past the fourth are ignored. A non-numeric provided field is fatal.
///
/// The random source is injected so runs are reproducible under a fixed seed.
pub fn parse_records<R: Rng>(input: &str, rng: &mut R) -> Result<ProcessTable, LoadError> {
    let mut table = ProcessTable::new();

    for (idx, line) in input.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let name = match tokens.next() {
            Some(name) => name,
            None => continue,
        };
        let line_no = idx + 1;

        let nice = match tokens.next() {
            Some(tok) => tok.parse::<Nice>().map_err(|_| LoadError::InvalidField {
                line: line_no,
                field: "nice",
                token: tok.to_string(),
            })?,
            None => rng.gen_range(NICE_RANGE.0..=NICE_RANGE.1),
        };

        let burst = match tokens.next() {
            Some(tok) => tok.parse::<f64>().map_err(|_| LoadError::InvalidField {
                line: line_no,
                field: "burst",
                token: tok.to_string(),
            })?,
            None => rng.gen_range(BURST_RANGE.0..=BURST_RANGE.1) as f64,
        };

        let arrival = match tokens.next() {
            Some(tok) => tok.parse::<f64>().map_err(|_| LoadError::InvalidField {
                line: line_no,
                field: "arrival",
                token: tok.to_string(),
            })?,
            None => rng.gen_range(ARRIVAL_RANGE.0..=ARRIVAL_RANGE.1) as f64,
        };

        table.insert(ProcessRecord::new(name, nice, burst, arrival));
    }

    debug!("loaded {} process records", table.len());
    Ok(table)
}

/// Read and parse a process file from disk.
pub fn load_path<R: Rng>(path: impl AsRef<Path>, rng: &mut R) -> Result<ProcessTable, LoadError> {
    let input = fs::read_to_string(path)?;
    parse_records(&input, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn full_lines_parse_verbatim() {
        let table = parse_records("p1 0 10 0\np2 -5 3.5 2\n", &mut rng()).unwrap();
        assert_eq!(table.len(), 2);

        let p2 = table.get(table.pid_of("p2").unwrap()).unwrap();
        assert_eq!(p2.nice, -5);
        assert_eq!(p2.burst, 3.5);
        assert_eq!(p2.arrival, 2.0);
        assert!(!p2.admitted && !p2.started && !p2.finished);
        assert_eq!(p2.waiting, 0.0);
        assert_eq!(p2.preemptions, 0);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = parse_records("\np1 0 10 0\n   \n", &mut rng()).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_fields_default_within_ranges() {
        let table = parse_records("lone\n", &mut rng()).unwrap();
        let p = table.get(0).unwrap();
        assert!((-20..=19).contains(&p.nice));
        assert!((1.0..=30.0).contains(&p.burst));
        assert!((0.0..=20.0).contains(&p.arrival));
        assert_eq!(p.burst.fract(), 0.0);
        assert_eq!(p.arrival.fract(), 0.0);
    }

    #[test]
    fn defaulting_is_deterministic_under_a_seed() {
        let a = parse_records("p1\np2\np3\n", &mut rng()).unwrap();
        let b = parse_records("p1\np2\np3\n", &mut rng()).unwrap();
        for pid in a.pids() {
            assert_eq!(a.get(pid), b.get(pid));
        }
    }

    #[test]
    fn partial_lines_default_only_the_tail() {
        let table = parse_records("p1 3\n", &mut rng()).unwrap();
        let p = table.get(0).unwrap();
        assert_eq!(p.nice, 3);
        assert!((1.0..=30.0).contains(&p.burst));
    }

    #[test]
    fn non_numeric_field_is_fatal() {
        let err = parse_records("p1 zero 10 0\n", &mut rng()).unwrap_err();
        match err {
            LoadError::InvalidField { line, field, token } => {
                assert_eq!(line, 1);
                assert_eq!(field, "nice");
                assert_eq!(token, "zero");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_id_last_record_wins() {
        let table = parse_records("p1 0 10 0\np1 5 20 1\n", &mut rng()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0).unwrap().nice, 5);
    }

    #[test]
    fn surplus_tokens_are_ignored() {
        let table = parse_records("p1 0 10 0 extra junk\n", &mut rng()).unwrap();
        assert_eq!(table.get(0).unwrap().arrival, 0.0);
    }
}
