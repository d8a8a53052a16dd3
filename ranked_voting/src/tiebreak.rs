//! Deterministic tie-break resolution among a set of candidates tied at the
//! same tally, for both elimination (pick a loser) and winner selection
//! (pick a winner) — the rules are the same set of strategies, applied with
//! the selection direction flipped.
//!
//! `Random`/`GeneratePermutation` are grounded on the teacher's
//! `candidate_permutation_crypto`, which builds a sort key out of the
//! configured seed, round number, and candidate name. The teacher declared a
//! `sha256` dependency for this (with a comment about resilience to
//! collisions) but never actually hashed anything — it sorted the formatted
//! strings directly. Here the key is actually hashed, so the crate earns its
//! place in `Cargo.toml`. The remaining four modes
//! (`previousRoundCountsThenRandom/Interactive`, `usePermutationInConfig`,
//! `interactive`) have no teacher counterpart and are grounded on
//! `AndrewConway-ConcreteSTV`'s `tie_resolution.rs`
//! (`resolve_ties_require_all_different` / `TieResolutionsMadeByEC`).

use crate::ballot::CandidateId;
use crate::config::{TieBreakMode, VotingErrors};
use crate::decimal::Decimal;
use std::collections::HashMap;

/// Direction of the tie-break: losing ties pick the candidate to eliminate,
/// winning ties pick (one of) the candidates to declare a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    PickLoser,
    PickWinner,
}

pub struct TieBreakContext<'a> {
    pub round: u32,
    pub tied: &'a [CandidateId],
    pub direction: Direction,
    pub name_of: &'a dyn Fn(CandidateId) -> String,
    /// Tallies for rounds `1..=round-1`, indexed `[0]` = round 1.
    pub round_history: &'a [HashMap<CandidateId, Decimal>],
}

pub struct TieBreakResult {
    pub chosen: CandidateId,
    pub explanation: String,
}

fn crypto_permutation(
    tied: &[CandidateId],
    name_of: &dyn Fn(CandidateId) -> String,
    seed: u32,
    round: u32,
) -> Vec<CandidateId> {
    let mut keyed: Vec<(CandidateId, String)> = tied
        .iter()
        .map(|&c| {
            let raw = format!("{:08}{:08}{}", seed, round, name_of(c));
            (c, sha256::digest(raw))
        })
        .collect();
    keyed.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
    keyed.into_iter().map(|(c, _)| c).collect()
}

/// Scans `round_history` from the most recent round backward, restricted to
/// the tied candidate set; the first round where not all tied candidates
/// have the same tally separates them (lowest loses / highest wins). `None`
/// if no round ever separates them.
fn resolve_by_previous_rounds(
    tied: &[CandidateId],
    direction: Direction,
    round_history: &[HashMap<CandidateId, Decimal>],
) -> Option<CandidateId> {
    for tallies in round_history.iter().rev() {
        let mut values: Vec<(CandidateId, Decimal)> = tied
            .iter()
            .filter_map(|&c| tallies.get(&c).map(|&v| (c, v)))
            .collect();
        if values.len() != tied.len() {
            continue;
        }
        let all_equal = values.windows(2).all(|w| w[0].1 == w[1].1);
        if all_equal {
            continue;
        }
        values.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        return Some(match direction {
            Direction::PickLoser => values.first().unwrap().0,
            Direction::PickWinner => values.last().unwrap().0,
        });
    }
    None
}

fn resolve_by_permutation(
    tied: &[CandidateId],
    direction: Direction,
    permutation: &[String],
    name_of: &dyn Fn(CandidateId) -> String,
) -> CandidateId {
    let rank_of: HashMap<String, usize> = permutation
        .iter()
        .enumerate()
        .map(|(idx, n)| (n.clone(), idx))
        .collect();
    let mut scored: Vec<(CandidateId, usize)> = tied
        .iter()
        .map(|&c| {
            let name = name_of(c);
            let rank = rank_of.get(&name).copied().unwrap_or(usize::MAX);
            (c, rank)
        })
        .collect();
    scored.sort_by_key(|(_, r)| *r);
    match direction {
        // Lowest-ranked-in-list loses: that is the candidate appearing
        // *last* in the configured order.
        Direction::PickLoser => scored.last().unwrap().0,
        Direction::PickWinner => scored.first().unwrap().0,
    }
}

/// Resolves a tie among `ctx.tied` according to `mode`. Returns
/// `VotingErrors::TieBreakInputRequired` for `Interactive` modes, since this
/// engine has no interactive collaborator of its own — a caller embedding an
/// interactive resolver should catch that variant and resume with its own
/// choice instead of treating it as fatal.
pub fn resolve_tie(
    mode: &TieBreakMode,
    ctx: &TieBreakContext,
) -> Result<TieBreakResult, VotingErrors> {
    assert!(!ctx.tied.is_empty());
    if ctx.tied.len() == 1 {
        return Ok(TieBreakResult {
            chosen: ctx.tied[0],
            explanation: "only one candidate tied".to_string(),
        });
    }

    match mode {
        TieBreakMode::Random(seed) => {
            let order = crypto_permutation(ctx.tied, ctx.name_of, *seed, ctx.round);
            let chosen = match ctx.direction {
                Direction::PickLoser => *order.first().unwrap(),
                Direction::PickWinner => *order.last().unwrap(),
            };
            Ok(TieBreakResult {
                chosen,
                explanation: format!(
                    "tie among {} candidates broken by random seed {} in round {}",
                    ctx.tied.len(),
                    seed,
                    ctx.round
                ),
            })
        }
        TieBreakMode::Interactive => Err(VotingErrors::TieBreakInputRequired {
            candidates: ctx.tied.iter().map(|&c| (ctx.name_of)(c)).collect(),
            context: format!("round {} tie, interactive resolution required", ctx.round),
        }),
        TieBreakMode::PreviousRoundCountsThenRandom(seed) => {
            if let Some(chosen) =
                resolve_by_previous_rounds(ctx.tied, ctx.direction, ctx.round_history)
            {
                Ok(TieBreakResult {
                    chosen,
                    explanation: "tie broken by earliest differing previous round tally"
                        .to_string(),
                })
            } else {
                let order = crypto_permutation(ctx.tied, ctx.name_of, *seed, ctx.round);
                let chosen = match ctx.direction {
                    Direction::PickLoser => *order.first().unwrap(),
                    Direction::PickWinner => *order.last().unwrap(),
                };
                Ok(TieBreakResult {
                    chosen,
                    explanation: "previous rounds never separated the tie; fell back to random"
                        .to_string(),
                })
            }
        }
        TieBreakMode::PreviousRoundCountsThenInteractive => {
            if let Some(chosen) =
                resolve_by_previous_rounds(ctx.tied, ctx.direction, ctx.round_history)
            {
                Ok(TieBreakResult {
                    chosen,
                    explanation: "tie broken by earliest differing previous round tally"
                        .to_string(),
                })
            } else {
                Err(VotingErrors::TieBreakInputRequired {
                    candidates: ctx.tied.iter().map(|&c| (ctx.name_of)(c)).collect(),
                    context: format!(
                        "round {} tie never separated by previous rounds, interactive resolution required",
                        ctx.round
                    ),
                })
            }
        }
        TieBreakMode::UsePermutationInConfig(permutation) => Ok(TieBreakResult {
            chosen: resolve_by_permutation(ctx.tied, ctx.direction, permutation, ctx.name_of),
            explanation: "tie broken by configured candidate permutation".to_string(),
        }),
        TieBreakMode::GeneratePermutation(seed) => {
            let order = crypto_permutation(ctx.tied, ctx.name_of, *seed, 0);
            let permutation: Vec<String> = order.iter().map(|&c| (ctx.name_of)(c)).collect();
            Ok(TieBreakResult {
                chosen: resolve_by_permutation(ctx.tied, ctx.direction, &permutation, ctx.name_of),
                explanation: format!(
                    "tie broken by permutation generated from seed {} at config load",
                    seed
                ),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(n: u32) -> CandidateId {
        CandidateId::for_test(n)
    }

    #[test]
    fn previous_round_counts_separate_before_random() {
        let scale = crate::decimal::Scale::new(4).unwrap();
        let mut round2 = HashMap::new();
        round2.insert(c(0), Decimal::from_integer(scale, 9));
        round2.insert(c(1), Decimal::from_integer(scale, 11));
        let history = vec![round2];
        let tied = vec![c(0), c(1)];
        let names: HashMap<u32, &str> = [(0, "A"), (1, "B")].into_iter().collect();
        let name_of = |id: CandidateId| names[&id.0].to_string();
        let ctx = TieBreakContext {
            round: 3,
            tied: &tied,
            direction: Direction::PickLoser,
            name_of: &name_of,
            round_history: &history,
        };
        let result = resolve_tie(&TieBreakMode::PreviousRoundCountsThenRandom(7), &ctx).unwrap();
        assert_eq!(result.chosen, c(0));
    }
}
