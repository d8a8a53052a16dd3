//! Sequential multi-seat tabulation: `multiSeatSequentialWinnerTakesAll` runs
//! a complete single-winner-majority tabulation, removes the winner from
//! contention, and repeats for the next seat.
//!
//! The teacher has no multi-seat mode of any kind; this is grounded on
//! `AndrewConway-ConcreteSTV`'s treatment of running STV as a sequence of
//! independent single-winner contests, adapted to reuse this crate's own
//! [`crate::engine::tabulate`] for each pass rather than a second algorithm.

use crate::ballot::{CandidateId, CandidateRegistry, RankedBallot};
use crate::config::{VoteRules, VotingErrors, VotingResult, WinnerElectionMode};
use crate::observer::{CancellationSignal, TabulationObserver};
use std::collections::HashSet;

/// Runs `rules.number_of_winners` independent single-winner passes, excluding
/// each pass's winner from every subsequent one. Returns the last pass's full
/// `VotingResult`, with `winners`/`winning_round` amended to cover every
/// pass: `winning_round` reports the 1-based *pass number* a candidate won
/// in, not a round number local to any single pass, since passes are
/// independent tabulations with their own round numbering.
pub fn run_sequential(
    ballots: &[RankedBallot],
    registry: &CandidateRegistry,
    rules: &VoteRules,
    observer: &mut dyn TabulationObserver,
    cancel: &dyn CancellationSignal,
) -> Result<VotingResult, VotingErrors> {
    assert_eq!(
        rules.winner_election_mode,
        WinnerElectionMode::MultiSeatSequentialWinnerTakesAll
    );
    let mut pass_rules = rules.clone();
    pass_rules.number_of_winners = 1;
    pass_rules.winner_election_mode = WinnerElectionMode::SingleWinnerMajority;

    let mut excluded: HashSet<CandidateId> = HashSet::new();
    let mut winners = Vec::new();
    let mut winning_round = Vec::new();
    let mut last_result: Option<VotingResult> = None;

    for pass in 1..=rules.number_of_winners {
        let result = crate::engine::tabulate(
            ballots,
            registry,
            &pass_rules,
            &excluded,
            observer,
            cancel,
        )?;
        let winner_name = result
            .winners
            .first()
            .cloned()
            .ok_or(VotingErrors::NoCandidateToEliminate)?;
        let winner_id = registry
            .id_of(&winner_name)
            .expect("pass winner must be a registered candidate");
        excluded.insert(winner_id);
        winners.push(winner_name.clone());
        winning_round.push((winner_name, pass));
        last_result = Some(result);
    }

    let mut result = last_result.expect("numberOfWinners validated to be at least 1");
    result.winners = winners;
    result.winning_round = winning_round;
    Ok(result)
}
