//! Candidate identity and per-ballot interpretation: turning a ranked ballot
//! plus the current round's candidate statuses into either "stays put",
//! "transfers to candidate C", or "exhausts with reason R".
//!
//! Grounded on `RankedChoice::filtered_candidate` / `advance_voting` /
//! `check_advance_rules` from the teacher's original single-winner-only
//! `lib.rs`, generalized to rank *sets* (a rank may carry more than one
//! mark), to the five-rule overvote table, and to a continuing-for-selection
//! predicate that accounts for multi-seat winner plateaus.

use crate::config::{Ballot, BallotChoice, MaxSkippedRank, OverVoteRule, VoteRules};
use crate::decimal::{Decimal, Scale};
use std::collections::{HashMap, HashSet};

/// An index into the candidate registry. Two reserved ids exist per
/// registry: the undeclared-write-in pseudo-candidate and the explicit
/// overvote sentinel, both allocated alongside the declared candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(pub(crate) u32);

#[cfg(test)]
impl CandidateId {
    pub(crate) fn for_test(n: u32) -> CandidateId {
        CandidateId(n)
    }
}

/// Maps declared candidate names (plus the UWI and overvote labels) to
/// dense `CandidateId`s, and back.
#[derive(Debug, Clone)]
pub struct CandidateRegistry {
    names: Vec<String>,
    ids_by_name: HashMap<String, CandidateId>,
    excluded: HashSet<CandidateId>,
    uwi: CandidateId,
    overvote_sentinel: CandidateId,
}

impl CandidateRegistry {
    pub fn build(candidates: &[crate::config::Candidate], rules: &VoteRules) -> CandidateRegistry {
        let mut names = Vec::new();
        let mut ids_by_name = HashMap::new();
        let mut excluded = HashSet::new();

        let mut push = |name: &str, names: &mut Vec<String>, ids_by_name: &mut HashMap<String, CandidateId>| -> CandidateId {
            let id = CandidateId(names.len() as u32);
            names.push(name.to_string());
            ids_by_name.insert(name.to_string(), id);
            id
        };

        for c in candidates {
            let id = push(&c.name, &mut names, &mut ids_by_name);
            if c.excluded {
                excluded.insert(id);
            }
        }
        let uwi = push(
            &rules.undeclared_write_in_label,
            &mut names,
            &mut ids_by_name,
        );
        let overvote_sentinel = push(
            &rules.explicit_overvote_label,
            &mut names,
            &mut ids_by_name,
        );

        CandidateRegistry {
            names,
            ids_by_name,
            excluded,
            uwi,
            overvote_sentinel,
        }
    }

    pub fn name(&self, id: CandidateId) -> &str {
        &self.names[id.0 as usize]
    }

    pub fn id_of(&self, name: &str) -> Option<CandidateId> {
        self.ids_by_name.get(name).copied()
    }

    pub fn uwi(&self) -> CandidateId {
        self.uwi
    }

    pub fn overvote_sentinel(&self) -> CandidateId {
        self.overvote_sentinel
    }

    pub fn is_excluded(&self, id: CandidateId) -> bool {
        self.excluded.contains(&id)
    }

    /// Every candidate that can ever accrue votes: declared candidates plus
    /// the UWI pseudo-candidate, excluding the overvote sentinel and any
    /// configured-out candidates.
    pub fn tabulatable_candidates(&self) -> Vec<CandidateId> {
        (0..self.names.len() as u32)
            .map(CandidateId)
            .filter(|&id| id != self.overvote_sentinel && !self.is_excluded(id))
            .collect()
    }
}

/// One ranked ballot, converted from the public `Ballot`/`BallotChoice`
/// representation into dense rank sets of `CandidateId`. Immutable for the
/// lifetime of one tabulation run.
#[derive(Debug, Clone)]
pub struct RankedBallot {
    pub ranks: Vec<HashSet<CandidateId>>,
    pub count: u64,
    pub precinct: Option<String>,
}

/// Resolves a `Ballot`'s `BallotChoice` marks against a candidate registry.
/// Returns `None` if a mark names a candidate absent from the registry
/// (a collaborator-level validation error, reported by the caller as
/// `VotingErrors::ConfigInvalid`).
pub fn resolve_ballot(ballot: &Ballot, registry: &CandidateRegistry) -> Option<RankedBallot> {
    let mut ranks = Vec::with_capacity(ballot.ranks.len());
    for rank in &ballot.ranks {
        let mut set = HashSet::new();
        for choice in rank {
            let id = match choice {
                BallotChoice::Candidate(name) => registry.id_of(name)?,
                BallotChoice::UndeclaredWriteIn => registry.uwi(),
                BallotChoice::Overvote => registry.overvote_sentinel(),
                BallotChoice::Undervote => continue,
            };
            set.insert(id);
        }
        ranks.push(set);
    }
    Some(RankedBallot {
        ranks,
        count: ballot.count,
        precinct: ballot.precinct.clone(),
    })
}

/// The status of a candidate as of a given round, derived from tabulation
/// history rather than stored directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateStatus {
    Continuing,
    Winner,
    Eliminated,
    Excluded,
    /// The synthetic overvote sentinel: never continuing, never eliminated.
    Invalid,
}

/// Per-ballot mutable tabulation state, reset at the start of each
/// tabulation run (a fresh `SequentialDriver` pass gets a fresh array of
/// these rather than mutating in place).
#[derive(Debug, Clone)]
pub struct BallotState {
    /// Rank index (0-based) from which the next rescan should start: the
    /// rank that produced `current_recipient`, re-included on rescan so
    /// duplicate-candidate detection can see it again.
    window_start: usize,
    pub current_recipient: Option<CandidateId>,
    pub fractional_value: Decimal,
    pub exhausted: bool,
    pub exhaustion_reason: Option<String>,
    pub winner_shares: HashMap<CandidateId, Decimal>,
}

impl BallotState {
    pub fn new(scale: Scale) -> BallotState {
        BallotState {
            window_start: 0,
            current_recipient: None,
            fractional_value: Decimal::one(scale),
            exhausted: false,
            exhaustion_reason: None,
            winner_shares: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Stay,
    /// Transfers to the given candidate, found at the given rank index
    /// (0-based); that index becomes the new scan window start.
    TransferTo(CandidateId, usize),
    Exhaust(String),
}

enum OvervoteDecision {
    None,
    Exhaust,
    SkipToNextRank,
}

fn overvote_decision(
    s: &HashSet<CandidateId>,
    rules: &VoteRules,
    registry: &CandidateRegistry,
    is_continuing_for_selection: &dyn Fn(CandidateId) -> bool,
) -> OvervoteDecision {
    let is_sole_explicit_overvote = s.len() == 1 && s.contains(&registry.overvote_sentinel());
    if is_sole_explicit_overvote {
        return match rules.overvote_rule {
            OverVoteRule::ExhaustImmediately => OvervoteDecision::Exhaust,
            OverVoteRule::AlwaysSkipToNextRank => OvervoteDecision::SkipToNextRank,
            // Config loading guarantees the explicit overvote label only
            // coexists with the two rules above.
            OverVoteRule::ExhaustIfMultipleContinuing => OvervoteDecision::Exhaust,
        };
    }
    if s.len() <= 1 {
        return OvervoteDecision::None;
    }
    match rules.overvote_rule {
        OverVoteRule::ExhaustImmediately => OvervoteDecision::Exhaust,
        OverVoteRule::AlwaysSkipToNextRank => OvervoteDecision::SkipToNextRank,
        OverVoteRule::ExhaustIfMultipleContinuing => {
            let continuing_count = s
                .iter()
                .filter(|&&c| is_continuing_for_selection(c))
                .count();
            if continuing_count >= 2 {
                OvervoteDecision::Exhaust
            } else {
                OvervoteDecision::None
            }
        }
    }
}

/// Decides what happens to one non-exhausted ballot this round: stays with
/// its current recipient, transfers to a new one, or exhausts.
///
/// `is_continuing_for_selection` must already fold in the multi-seat
/// "Winner AND continueUntilTwoCandidatesRemain" extension from spec §4.2.
pub fn interpret(
    ballot: &RankedBallot,
    state: &BallotState,
    registry: &CandidateRegistry,
    rules: &VoteRules,
    is_continuing_for_selection: &dyn Fn(CandidateId) -> bool,
) -> Decision {
    if let Some(c) = state.current_recipient {
        if is_continuing_for_selection(c) {
            return Decision::Stay;
        }
    }

    if ballot.ranks.is_empty() || ballot.ranks.iter().all(|s| s.is_empty()) {
        return Decision::Exhaust("undervote".to_string());
    }

    let max_rank = match rules.max_rankings_allowed {
        Some(m) => (m as usize).min(ballot.ranks.len()),
        None => ballot.ranks.len(),
    };

    let mut seen: HashSet<CandidateId> = HashSet::new();
    let mut skip_run: u32 = 0;

    let mut idx = state.window_start;
    while idx < max_rank {
        let s = &ballot.ranks[idx];
        if s.is_empty() {
            skip_run += 1;
            if let MaxSkippedRank::MaxAllowed(k) = rules.max_skipped_rank_allowed {
                if skip_run > k {
                    return Decision::Exhaust("undervote".to_string());
                }
            }
            idx += 1;
            continue;
        }
        skip_run = 0;

        if rules.exhaust_on_duplicate_candidate {
            for &cid in s.iter() {
                if seen.contains(&cid) {
                    return Decision::Exhaust(format!(
                        "duplicate candidate: {}",
                        registry.name(cid)
                    ));
                }
            }
        }
        for &cid in s.iter() {
            seen.insert(cid);
        }

        match overvote_decision(s, rules, registry, is_continuing_for_selection) {
            OvervoteDecision::Exhaust => return Decision::Exhaust("overvote".to_string()),
            OvervoteDecision::SkipToNextRank => {
                if idx + 1 >= max_rank {
                    return Decision::Exhaust("no continuing candidates".to_string());
                }
                idx += 1;
                continue;
            }
            OvervoteDecision::None => {
                let chosen = s.iter().find(|&&c| is_continuing_for_selection(c));
                match chosen {
                    Some(&c) => return Decision::TransferTo(c, idx),
                    None => {
                        idx += 1;
                        continue;
                    }
                }
            }
        }
    }
    Decision::Exhaust("no continuing candidates".to_string())
}

/// Applies a `Decision` to a ballot's mutable state.
pub fn apply_decision(state: &mut BallotState, decision: Decision) {
    match decision {
        Decision::Stay => {}
        Decision::TransferTo(c, idx) => {
            state.current_recipient = Some(c);
            state.window_start = idx;
        }
        Decision::Exhaust(reason) => {
            state.exhausted = true;
            state.exhaustion_reason = Some(reason);
            state.current_recipient = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Candidate;

    fn registry() -> (CandidateRegistry, VoteRules) {
        let rules = VoteRules::default();
        let candidates = vec![
            Candidate {
                name: "A".to_string(),
                code: None,
                excluded: false,
            },
            Candidate {
                name: "B".to_string(),
                code: None,
                excluded: false,
            },
        ];
        (CandidateRegistry::build(&candidates, &rules), rules)
    }

    #[test]
    fn blank_ballot_exhausts_as_undervote() {
        let (registry, rules) = registry();
        let ballot = RankedBallot {
            ranks: vec![HashSet::new(), HashSet::new()],
            count: 1,
            precinct: None,
        };
        let state = BallotState::new(rules.scale());
        let decision = interpret(&ballot, &state, &registry, &rules, &|_| true);
        assert_eq!(decision, Decision::Exhaust("undervote".to_string()));
    }

    #[test]
    fn overvote_exhaust_immediately() {
        let (registry, rules) = registry();
        let a = registry.id_of("A").unwrap();
        let b = registry.id_of("B").unwrap();
        let ballot = RankedBallot {
            ranks: vec![[a, b].into_iter().collect()],
            count: 1,
            precinct: None,
        };
        let state = BallotState::new(rules.scale());
        let decision = interpret(&ballot, &state, &registry, &rules, &|_| true);
        assert_eq!(decision, Decision::Exhaust("overvote".to_string()));
    }

    #[test]
    fn single_mark_transfers() {
        let (registry, rules) = registry();
        let a = registry.id_of("A").unwrap();
        let ballot = RankedBallot {
            ranks: vec![[a].into_iter().collect()],
            count: 1,
            precinct: None,
        };
        let state = BallotState::new(rules.scale());
        let decision = interpret(&ballot, &state, &registry, &rules, &|_| true);
        assert_eq!(decision, Decision::TransferTo(a, 0));
    }
}
