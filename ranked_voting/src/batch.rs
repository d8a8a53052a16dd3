//! Batch elimination: eliminate every candidate whose accumulated tally, in
//! ascending order, still falls short of the next candidate's tally — they
//! cannot mathematically catch up even if every other continuing candidate's
//! votes transferred to them.
//!
//! Grounded on the teacher's `find_eliminated_candidates_batch`, which
//! already implements this ascending-cumulative-sum algorithm and already
//! takes the *last* qualifying gap rather than the first — that is exactly
//! the "iteration continues past a successful batch" behavior this spec
//! calls for, so the core algorithm carries over unchanged. What's added
//! here is per-candidate bookkeeping (running total, next-highest tally) and
//! the degenerate single-candidate edge case.

use crate::ballot::CandidateId;
use crate::decimal::Decimal;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct BatchEliminationRecord {
    pub candidate: CandidateId,
    pub running_total: Decimal,
    pub next_highest_tally: Decimal,
}

/// Returns the set of candidates to batch-eliminate this round, or `None`
/// if batch elimination does not apply (including the degenerate case where
/// it would eliminate only a single candidate, which is left to regular
/// elimination instead).
pub fn find_batch_elimination(
    tally: &HashMap<CandidateId, Decimal>,
) -> Option<Vec<BatchEliminationRecord>> {
    let mut sorted: Vec<(CandidateId, Decimal)> = tally.iter().map(|(&c, &v)| (c, v)).collect();
    sorted.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));

    let scale = sorted.first()?.1.scale();
    let mut running = Decimal::zero(crate::decimal::Scale::new(scale).unwrap());
    let mut cumulative: Vec<(CandidateId, Decimal, Decimal)> = Vec::new(); // (id, tally, running-before)
    for &(cid, v) in sorted.iter() {
        cumulative.push((cid, v, running));
        running = running.add(v);
    }

    // The last position where the running total so far (excluding this
    // candidate) is still strictly less than this candidate's own tally:
    // nothing accumulated below this point can ever catch up to it.
    let large_gap_idx = cumulative
        .iter()
        .enumerate()
        .filter(|(_, (_, v, running_before))| running_before < v)
        .map(|(idx, _)| idx)
        .last();

    let idx = large_gap_idx?;
    if idx <= 1 {
        // idx == 0: nothing accumulated yet, not a real gap.
        // idx == 1: only one candidate would be batch-eliminated; leave it
        // to regular (tie-break-eligible) elimination instead.
        return None;
    }

    let next_highest_tally = cumulative[idx].1;
    let mut records = Vec::with_capacity(idx);
    for &(cid, _, running_before) in cumulative.iter().take(idx) {
        records.push(BatchEliminationRecord {
            candidate: cid,
            running_total: running_before,
            next_highest_tally,
        });
    }
    Some(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Scale;

    fn cid(n: u32) -> CandidateId {
        CandidateId::for_test(n)
    }

    #[test]
    fn batch_eliminates_s4_scenario() {
        let scale = Scale::new(4).unwrap();
        let mut tally = HashMap::new();
        tally.insert(cid(0), Decimal::from_integer(scale, 100)); // A
        tally.insert(cid(1), Decimal::from_integer(scale, 1)); // B
        tally.insert(cid(2), Decimal::from_integer(scale, 2)); // C
        tally.insert(cid(3), Decimal::from_integer(scale, 3)); // D

        let batch = find_batch_elimination(&tally).expect("expected a batch");
        let eliminated: std::collections::HashSet<CandidateId> =
            batch.iter().map(|r| r.candidate).collect();
        assert_eq!(eliminated.len(), 3);
        assert!(eliminated.contains(&cid(1)));
        assert!(eliminated.contains(&cid(2)));
        assert!(eliminated.contains(&cid(3)));
        assert!(!eliminated.contains(&cid(0)));
    }

    #[test]
    fn single_candidate_gap_degenerates_to_none() {
        let scale = Scale::new(4).unwrap();
        let mut tally = HashMap::new();
        tally.insert(cid(0), Decimal::from_integer(scale, 100));
        tally.insert(cid(1), Decimal::from_integer(scale, 1));
        assert!(find_batch_elimination(&tally).is_none());
    }
}
