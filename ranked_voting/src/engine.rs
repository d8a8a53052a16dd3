//! The round-by-round tabulation loop: tally, threshold, winner
//! identification, surplus transfer, elimination selection, and the
//! bookkeeping that turns all of that into a [`VotingResult`].
//!
//! Grounded on the teacher's `run_voting_stats`/`run_one_round`, which drove
//! a single-winner-only loop capped at 10000 rounds. The control flow here is
//! the same shape (interpret ballots, tally, decide, record, repeat) but
//! generalized to multi-seat surplus transfer and to the five winner-election
//! modes, with the ballot-interpretation and tie-break steps delegated to
//! [`crate::ballot`] and [`crate::tiebreak`] rather than inlined.

use crate::ballot::{
    apply_decision, interpret, BallotState, CandidateId, CandidateRegistry, CandidateStatus,
    RankedBallot,
};
use crate::batch::find_batch_elimination;
use crate::config::{
    BallotAuditRecord, BallotRoundEvent, EliminationStats, RoundStats, SurplusStats, VoteRules,
    VotingErrors, VotingResult, WinnerElectionMode,
};
use crate::decimal::{Decimal, Scale};
use crate::observer::{CancellationSignal, TabulationEvent, TabulationObserver};
use crate::threshold::compute_threshold;
use crate::tiebreak::{resolve_tie, Direction, TieBreakContext};
use std::collections::{HashMap, HashSet};

/// Runs one complete tabulation over `ballots` and returns the full
/// round-by-round result, or the first error that stops the count.
///
/// `extra_excluded` lets [`crate::sequential::run_sequential`] mark
/// previously-elected candidates as excluded on each subsequent pass,
/// without needing a mutable registry.
pub fn tabulate(
    ballots: &[RankedBallot],
    registry: &CandidateRegistry,
    rules: &VoteRules,
    extra_excluded: &HashSet<CandidateId>,
    observer: &mut dyn TabulationObserver,
    cancel: &dyn CancellationSignal,
) -> Result<VotingResult, VotingErrors> {
    if ballots.is_empty() {
        return Err(VotingErrors::EmptyElection);
    }
    let scale = rules.scale();
    let tabulatable = registry.tabulatable_candidates();

    let mut status: HashMap<CandidateId, CandidateStatus> = HashMap::new();
    for &c in &tabulatable {
        if registry.is_excluded(c) || extra_excluded.contains(&c) {
            status.insert(c, CandidateStatus::Excluded);
        } else {
            status.insert(c, CandidateStatus::Continuing);
        }
    }
    let eligible_count = status
        .values()
        .filter(|&&s| s != CandidateStatus::Excluded)
        .count();
    if eligible_count == 0 {
        return Err(VotingErrors::ConfigInvalid(
            "no non-excluded candidates remain".to_string(),
        ));
    }

    let mut states: Vec<BallotState> = ballots.iter().map(|_| BallotState::new(scale)).collect();

    let mut winning_round: Vec<(CandidateId, u32)> = Vec::new();
    let mut elimination_round: Vec<(CandidateId, u32)> = Vec::new();
    let mut round_stats: Vec<RoundStats> = Vec::new();
    let mut round_history: Vec<HashMap<CandidateId, Decimal>> = Vec::new();
    let mut precinct_round_stats: HashMap<String, Vec<RoundStats>> = HashMap::new();
    let mut precinct_history: HashMap<String, Vec<HashMap<CandidateId, Decimal>>> = HashMap::new();
    let mut audit: Vec<Vec<BallotRoundEvent>> = vec![Vec::new(); ballots.len()];

    let mut threshold = Decimal::zero(scale);
    let mut residual_surplus_total = Decimal::zero(scale);
    let mut winner_surplus_fraction: HashMap<CandidateId, Decimal> = HashMap::new();
    let mut elimination_source_round: HashMap<CandidateId, u32> = HashMap::new();
    let mut surplus_source_round: HashMap<CandidateId, u32> = HashMap::new();

    let max_rounds = (eligible_count as u32) * 4 + 10;
    let mut round: u32 = 0;

    loop {
        if cancel.is_cancelled() {
            return Err(VotingErrors::Cancelled);
        }
        round += 1;
        if round > max_rounds {
            return Err(VotingErrors::NoConvergence);
        }
        observer.on_event(&TabulationEvent::RoundStart { round });

        let is_continuing_for_selection = |c: CandidateId| -> bool {
            match status.get(&c) {
                Some(CandidateStatus::Continuing) => true,
                Some(CandidateStatus::Winner) => rules.continue_until_two_candidates_remain,
                _ => false,
            }
        };

        // Re-route every non-exhausted ballot whose current recipient is no
        // longer continuing-for-selection: fresh assignment in round 1,
        // onward movement for last round's eliminated candidates, and the
        // deferred onward movement (at a reduced value) for a winner whose
        // surplus was split in a previous round.
        let mut raw_transfers: HashMap<(Option<CandidateId>, Option<CandidateId>), Decimal> =
            HashMap::new();
        for (ballot, state) in ballots.iter().zip(states.iter_mut()) {
            if state.exhausted {
                continue;
            }
            let old_recipient = state.current_recipient;
            let decision = interpret(ballot, state, registry, rules, &is_continuing_for_selection);
            apply_decision(state, decision);
            let new_recipient = if state.exhausted {
                None
            } else {
                state.current_recipient
            };
            if new_recipient != old_recipient {
                let weight = state.fractional_value.mul_by_integer(ballot.count);
                let entry = raw_transfers
                    .entry((old_recipient, new_recipient))
                    .or_insert_with(|| Decimal::zero(scale));
                *entry = entry.add(weight);
            }
        }

        // Regular tally: every continuing-for-selection candidate's current
        // recipients, summed (plus a precinct-scoped shadow of the same).
        let mut tally: HashMap<CandidateId, Decimal> = HashMap::new();
        for &c in &tabulatable {
            if is_continuing_for_selection(c) {
                tally.insert(c, Decimal::zero(scale));
            }
        }
        let mut precinct_tally: HashMap<String, HashMap<CandidateId, Decimal>> = HashMap::new();
        for (ballot, state) in ballots.iter().zip(states.iter()) {
            if state.exhausted {
                continue;
            }
            if let Some(c) = state.current_recipient {
                if let Some(slot) = tally.get_mut(&c) {
                    let weight = state.fractional_value.mul_by_integer(ballot.count);
                    *slot = slot.add(weight);
                    if rules.tabulate_by_precinct {
                        if let Some(p) = &ballot.precinct {
                            let slot = precinct_tally
                                .entry(p.clone())
                                .or_default()
                                .entry(c)
                                .or_insert_with(|| Decimal::zero(scale));
                            *slot = slot.add(weight);
                        }
                    }
                }
            }
        }

        let is_multi_seat = rules.number_of_winners > 1;
        let mut residual_this_round = Decimal::zero(scale);
        if is_multi_seat {
            insert_past_winner_plateaus(
                round,
                &status,
                &winning_round,
                ballots,
                &states,
                &round_history,
                threshold,
                scale,
                &is_continuing_for_selection,
                &mut tally,
                &mut residual_this_round,
            );
            if rules.tabulate_by_precinct {
                for (precinct, history) in precinct_history.iter() {
                    let slot = precinct_tally.entry(precinct.clone()).or_default();
                    insert_past_winner_plateaus_precinct(
                        &status,
                        &winning_round,
                        round,
                        ballots,
                        &states,
                        history,
                        precinct,
                        slot,
                    );
                }
            }
        }
        residual_surplus_total = residual_surplus_total.add(residual_this_round);

        // Threshold: recomputed in round 1 or whenever there is exactly one
        // seat left to fill this pass; frozen otherwise.
        if round == 1 || rules.number_of_winners == 1 {
            let continuing_sum: Decimal = tabulatable
                .iter()
                .filter(|&&c| status[&c] == CandidateStatus::Continuing)
                .map(|&c| tally.get(&c).copied().unwrap_or_else(|| Decimal::zero(scale)))
                .fold(Decimal::zero(scale), |acc, v| acc.add(v));
            threshold = compute_threshold(rules, continuing_sum);
            observer.on_event(&TabulationEvent::ThresholdSet { round, threshold });
        }

        for (&c, &v) in tally.iter() {
            observer.on_event(&TabulationEvent::Tally {
                round,
                candidate: registry.name(c),
                value: v,
            });
        }

        let winners_so_far = winning_round.len();
        let new_winners = identify_winners(
            round,
            &tally,
            rules,
            threshold,
            &status,
            winners_so_far,
            registry,
            &round_history,
            observer,
        )?;

        let mut new_eliminations: Vec<CandidateId> = Vec::new();
        if !new_winners.is_empty() {
            let do_surplus = rules.number_of_winners > 1 && !rules.winner_election_mode.is_bottoms_up();
            for &w in &new_winners {
                status.insert(w, CandidateStatus::Winner);
                winning_round.push((w, round));
                observer.on_event(&TabulationEvent::Winner {
                    round,
                    candidate: registry.name(w),
                });
                if do_surplus {
                    let winner_tally = tally.get(&w).copied().unwrap_or_else(|| Decimal::zero(scale));
                    let surplus_fraction = if winner_tally.is_zero() {
                        Decimal::zero(scale)
                    } else {
                        winner_tally
                            .checked_sub(threshold)
                            .unwrap_or_else(|| Decimal::zero(scale))
                            .div(winner_tally)
                    };
                    winner_surplus_fraction.insert(w, surplus_fraction);
                    surplus_source_round.insert(w, round);
                    for state in states.iter_mut() {
                        if state.exhausted || state.current_recipient != Some(w) {
                            continue;
                        }
                        let full = state.fractional_value;
                        let carry = full.mul(surplus_fraction);
                        let retained = full.sub(carry);
                        let shares = state
                            .winner_shares
                            .entry(w)
                            .or_insert_with(|| Decimal::zero(scale));
                        *shares = shares.add(retained);
                        state.fractional_value = carry;
                    }
                }
            }
        } else {
            let still_need_winners = winners_so_far < rules.number_of_winners as usize;
            let continue_flag = rules.continue_until_two_candidates_remain
                && elimination_round.len() + winning_round.len() + 1 < eligible_count;
            if still_need_winners || continue_flag {
                new_eliminations = select_eliminations(round, &tally, rules, registry, &round_history, observer)?;
                if new_eliminations.is_empty() {
                    return Err(VotingErrors::NoCandidateToEliminate);
                }
                for &e in &new_eliminations {
                    status.insert(e, CandidateStatus::Eliminated);
                    elimination_round.push((e, round));
                    elimination_source_round.insert(e, round);
                    observer.on_event(&TabulationEvent::Eliminated {
                        round,
                        candidate: registry.name(e),
                    });
                }
            }
        }

        // Classify this round's re-routing against the sources declared one
        // round ago: that is exactly the round in which their onward
        // movement becomes visible in ballot state.
        let elim_stats = build_elimination_stats(
            round,
            scale,
            &raw_transfers,
            &elimination_source_round,
            registry,
            observer,
        );
        let surplus_stats = build_surplus_stats(
            round,
            scale,
            &raw_transfers,
            &surplus_source_round,
            &winner_surplus_fraction,
            registry,
            observer,
        );

        let mut tally_display: Vec<(String, Decimal)> = tally
            .iter()
            .map(|(&c, &v)| (registry.name(c).to_string(), v))
            .collect();
        tally_display.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        round_stats.push(RoundStats {
            round,
            tally: tally_display,
            tally_results_elected: new_winners.iter().map(|&c| registry.name(c).to_string()).collect(),
            tally_result_eliminated: elim_stats,
            tally_result_surplus: surplus_stats,
            residual_surplus: residual_surplus_total,
        });

        if rules.tabulate_by_precinct {
            for (precinct, ptally) in precinct_tally.iter() {
                let mut display: Vec<(String, Decimal)> = ptally
                    .iter()
                    .map(|(&c, &v)| (registry.name(c).to_string(), v))
                    .collect();
                display.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
                precinct_round_stats
                    .entry(precinct.clone())
                    .or_default()
                    .push(RoundStats {
                        round,
                        tally: display,
                        tally_results_elected: new_winners
                            .iter()
                            .map(|&c| registry.name(c).to_string())
                            .collect(),
                        tally_result_eliminated: Vec::new(),
                        tally_result_surplus: Vec::new(),
                        residual_surplus: Decimal::zero(scale),
                    });
                precinct_history
                    .entry(precinct.clone())
                    .or_default()
                    .push(ptally.clone());
            }
        }

        for (idx, state) in states.iter().enumerate() {
            let event = if state.exhausted {
                BallotRoundEvent::Exhausted {
                    reason: state
                        .exhaustion_reason
                        .clone()
                        .unwrap_or_else(|| "unknown".to_string()),
                }
            } else {
                match state.current_recipient {
                    Some(c) => BallotRoundEvent::Counted {
                        candidate: registry.name(c).to_string(),
                        value: state.fractional_value,
                    },
                    None => BallotRoundEvent::Exhausted {
                        reason: "unassigned".to_string(),
                    },
                }
            };
            audit[idx].push(event);
        }

        round_history.push(tally);

        let just_had_event = !new_winners.is_empty() || !new_eliminations.is_empty();
        let should_continue = if rules.continue_until_two_candidates_remain {
            elimination_round.len() + winning_round.len() + 1 < eligible_count || just_had_event
        } else if rules.winner_election_mode
            == WinnerElectionMode::MultiSeatBottomsUpUsingPercentageThreshold
        {
            new_winners.is_empty() && winning_round.is_empty()
        } else {
            winning_round.len() < rules.number_of_winners as usize
                || (rules.number_of_winners > 1
                    && just_had_event
                    && !rules.winner_election_mode.is_bottoms_up())
        };
        if !should_continue {
            break;
        }
    }

    let winners: Vec<String> = winning_round
        .iter()
        .map(|&(c, _)| registry.name(c).to_string())
        .collect();
    let winning_round_names: Vec<(String, u32)> = winning_round
        .iter()
        .map(|&(c, r)| (registry.name(c).to_string(), r))
        .collect();
    let elimination_round_names: Vec<(String, u32)> = elimination_round
        .iter()
        .map(|&(c, r)| (registry.name(c).to_string(), r))
        .collect();
    let ballot_audit_trail = audit
        .into_iter()
        .enumerate()
        .map(|(ballot_index, per_round)| BallotAuditRecord {
            ballot_index,
            per_round,
        })
        .collect();

    Ok(VotingResult {
        winners,
        winning_threshold: threshold,
        round_stats,
        elimination_round: elimination_round_names,
        winning_round: winning_round_names,
        precinct_round_stats,
        ballot_audit_trail,
    })
}

#[allow(clippy::too_many_arguments)]
fn insert_past_winner_plateaus(
    round: u32,
    status: &HashMap<CandidateId, CandidateStatus>,
    winning_round: &[(CandidateId, u32)],
    ballots: &[RankedBallot],
    states: &[BallotState],
    round_history: &[HashMap<CandidateId, Decimal>],
    threshold: Decimal,
    scale: Scale,
    is_continuing_for_selection: &dyn Fn(CandidateId) -> bool,
    tally: &mut HashMap<CandidateId, Decimal>,
    residual_this_round: &mut Decimal,
) {
    for &(w, declared_round) in winning_round {
        if is_continuing_for_selection(w) || tally.contains_key(&w) {
            continue;
        }
        let value = if declared_round == round - 1 {
            let mut sum = Decimal::zero(scale);
            for (ballot, state) in ballots.iter().zip(states.iter()) {
                if let Some(&retained) = state.winner_shares.get(&w) {
                    sum = sum.add(retained.mul_by_integer(ballot.count));
                }
            }
            if let Some(excess) = sum.checked_sub(threshold) {
                if excess.is_positive() {
                    *residual_this_round = residual_this_round.add(excess);
                }
                threshold
            } else {
                sum
            }
        } else {
            round_history
                .last()
                .and_then(|h| h.get(&w))
                .copied()
                .unwrap_or(threshold)
        };
        tally.insert(w, value);
    }
}

#[allow(clippy::too_many_arguments)]
fn insert_past_winner_plateaus_precinct(
    status: &HashMap<CandidateId, CandidateStatus>,
    winning_round: &[(CandidateId, u32)],
    round: u32,
    ballots: &[RankedBallot],
    states: &[BallotState],
    history: &[HashMap<CandidateId, Decimal>],
    precinct: &str,
    slot: &mut HashMap<CandidateId, Decimal>,
) {
    let _ = status;
    for &(w, declared_round) in winning_round {
        if slot.contains_key(&w) {
            continue;
        }
        let value = if declared_round == round - 1 {
            let mut sum: Option<Decimal> = None;
            for (ballot, state) in ballots.iter().zip(states.iter()) {
                if ballot.precinct.as_deref() != Some(precinct) {
                    continue;
                }
                if let Some(&retained) = state.winner_shares.get(&w) {
                    let weighted = retained.mul_by_integer(ballot.count);
                    sum = Some(match sum {
                        Some(acc) => acc.add(weighted),
                        None => weighted,
                    });
                }
            }
            sum
        } else {
            history.last().and_then(|h| h.get(&w)).copied()
        };
        if let Some(v) = value {
            slot.insert(w, v);
        }
    }
}

fn build_elimination_stats(
    round: u32,
    scale: Scale,
    raw_transfers: &HashMap<(Option<CandidateId>, Option<CandidateId>), Decimal>,
    elimination_source_round: &HashMap<CandidateId, u32>,
    registry: &CandidateRegistry,
    observer: &mut dyn TabulationObserver,
) -> Vec<EliminationStats> {
    let mut by_source: HashMap<CandidateId, (Vec<(String, Decimal)>, Decimal)> = HashMap::new();
    for (&(from, to), &value) in raw_transfers.iter() {
        let from = match from {
            Some(c) => c,
            None => continue,
        };
        if elimination_source_round.get(&from) != Some(&(round - 1)) {
            continue;
        }
        let entry = by_source
            .entry(from)
            .or_insert_with(|| (Vec::new(), Decimal::zero(scale)));
        match to {
            Some(dest) => entry.0.push((registry.name(dest).to_string(), value)),
            None => entry.1 = entry.1.add(value),
        }
        observer.on_event(&TabulationEvent::Transfer {
            round,
            from: registry.name(from),
            to: to.map(|d| registry.name(d)).unwrap_or("exhausted"),
            value,
        });
        if to.is_none() {
            observer.on_event(&TabulationEvent::Exhausted {
                round,
                count: value,
                reason: "eliminated candidate with no continuing next choice",
            });
        }
    }
    by_source
        .into_iter()
        .map(|(c, (transfers, exhausted))| EliminationStats {
            name: registry.name(c).to_string(),
            transfers,
            exhausted,
        })
        .collect()
}

fn build_surplus_stats(
    round: u32,
    scale: Scale,
    raw_transfers: &HashMap<(Option<CandidateId>, Option<CandidateId>), Decimal>,
    surplus_source_round: &HashMap<CandidateId, u32>,
    winner_surplus_fraction: &HashMap<CandidateId, Decimal>,
    registry: &CandidateRegistry,
    observer: &mut dyn TabulationObserver,
) -> Vec<SurplusStats> {
    let mut by_source: HashMap<CandidateId, Vec<(String, Decimal)>> = HashMap::new();
    for (&(from, to), &value) in raw_transfers.iter() {
        let from = match from {
            Some(c) => c,
            None => continue,
        };
        if surplus_source_round.get(&from) != Some(&(round - 1)) {
            continue;
        }
        by_source
            .entry(from)
            .or_default()
            .push((to.map(|d| registry.name(d).to_string()).unwrap_or_else(|| "exhausted".to_string()), value));
        observer.on_event(&TabulationEvent::Transfer {
            round,
            from: registry.name(from),
            to: to.map(|d| registry.name(d)).unwrap_or("exhausted"),
            value,
        });
    }
    by_source
        .into_iter()
        .map(|(c, transfers)| SurplusStats {
            name: registry.name(c).to_string(),
            surplus_fraction: winner_surplus_fraction
                .get(&c)
                .copied()
                .unwrap_or_else(|| Decimal::zero(scale)),
            transfers,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn identify_winners(
    round: u32,
    tally: &HashMap<CandidateId, Decimal>,
    rules: &VoteRules,
    threshold: Decimal,
    status: &HashMap<CandidateId, CandidateStatus>,
    winners_so_far: usize,
    registry: &CandidateRegistry,
    round_history: &[HashMap<CandidateId, Decimal>],
    observer: &mut dyn TabulationObserver,
) -> Result<Vec<CandidateId>, VotingErrors> {
    let n = rules.number_of_winners as usize;
    let continuing: Vec<CandidateId> = status
        .iter()
        .filter(|&(_, &s)| s == CandidateStatus::Continuing)
        .map(|(&c, _)| c)
        .collect();

    if n > winners_so_far && continuing.len() == n - winners_so_far && !continuing.is_empty() {
        return Ok(continuing);
    }

    let bottoms_up_percentage =
        rules.winner_election_mode == WinnerElectionMode::MultiSeatBottomsUpUsingPercentageThreshold;
    if !bottoms_up_percentage && winners_so_far >= n {
        return Ok(vec![]);
    }

    match rules.winner_election_mode {
        WinnerElectionMode::MultiSeatBottomsUpUntilNWinners => Ok(vec![]),
        WinnerElectionMode::MultiSeatBottomsUpUsingPercentageThreshold => Ok(continuing
            .iter()
            .copied()
            .filter(|c| tally.get(c).copied().map(|v| v >= threshold).unwrap_or(false))
            .collect()),
        WinnerElectionMode::MultiSeatAllowMultipleWinnersPerRound => Ok(continuing
            .iter()
            .copied()
            .filter(|c| tally.get(c).copied().map(|v| v >= threshold).unwrap_or(false))
            .collect()),
        WinnerElectionMode::SingleWinnerMajority
        | WinnerElectionMode::MultiSeatAllowOnlyOneWinnerPerRound
        | WinnerElectionMode::MultiSeatSequentialWinnerTakesAll => {
            let crossing: Vec<CandidateId> = continuing
                .iter()
                .copied()
                .filter(|c| tally.get(c).copied().map(|v| v >= threshold).unwrap_or(false))
                .collect();
            if crossing.is_empty() {
                return Ok(vec![]);
            }
            let max_tally = crossing.iter().map(|&c| tally[&c]).max().unwrap();
            let top: Vec<CandidateId> = crossing
                .iter()
                .copied()
                .filter(|&c| tally[&c] == max_tally)
                .collect();
            if top.len() == 1 {
                return Ok(top);
            }
            let name_of = |id: CandidateId| registry.name(id).to_string();
            let ctx = TieBreakContext {
                round,
                tied: &top,
                direction: Direction::PickWinner,
                name_of: &name_of,
                round_history,
            };
            let result = resolve_tie(&rules.tiebreak_mode, &ctx)?;
            observer.on_event(&TabulationEvent::TieBreakResolved {
                round,
                explanation: &result.explanation,
            });
            Ok(vec![result.chosen])
        }
    }
}

fn select_eliminations(
    round: u32,
    tally: &HashMap<CandidateId, Decimal>,
    rules: &VoteRules,
    registry: &CandidateRegistry,
    round_history: &[HashMap<CandidateId, Decimal>],
    observer: &mut dyn TabulationObserver,
) -> Result<Vec<CandidateId>, VotingErrors> {
    if round == 1 {
        let uwi = registry.uwi();
        if let Some(&v) = tally.get(&uwi) {
            if v.is_positive() {
                return Ok(vec![uwi]);
            }
        }
    }

    if rules.minimum_vote_threshold.is_positive() {
        let below: Vec<CandidateId> = tally
            .iter()
            .filter(|&(_, &v)| v < rules.minimum_vote_threshold)
            .map(|(&c, _)| c)
            .collect();
        if !below.is_empty() && below.len() < tally.len() {
            return Ok(below);
        }
    }

    if rules.batch_elimination {
        if let Some(batch) = find_batch_elimination(tally) {
            return Ok(batch.into_iter().map(|r| r.candidate).collect());
        }
    }

    let min_tally = match tally.values().min() {
        Some(&v) => v,
        None => return Ok(vec![]),
    };
    let tied: Vec<CandidateId> = tally
        .iter()
        .filter(|&(_, &v)| v == min_tally)
        .map(|(&c, _)| c)
        .collect();
    if tied.len() == 1 {
        return Ok(tied);
    }
    let name_of = |id: CandidateId| registry.name(id).to_string();
    let ctx = TieBreakContext {
        round,
        tied: &tied,
        direction: Direction::PickLoser,
        name_of: &name_of,
        round_history,
    };
    let result = resolve_tie(&rules.tiebreak_mode, &ctx)?;
    observer.on_event(&TabulationEvent::TieBreakResolved {
        round,
        explanation: &result.explanation,
    });
    Ok(vec![result.chosen])
}
