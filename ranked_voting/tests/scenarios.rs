//! End-to-end tabulations for the half-dozen canonical situations an
//! instant-runoff engine has to get right: plain elimination-then-majority,
//! exhaustion on an overvote, tolerance for a skipped rank, batch
//! elimination of several trailing candidates at once, surplus transfer in
//! a multi-seat contest, and a tie broken by looking at an earlier round's
//! counts. Each test builds its ballots directly with [`Builder`] rather
//! than going through a CVR reader, and checks both the declared winner(s)
//! and the round-by-round bookkeeping that explains how they got there.

use ranked_voting::{
    Ballot, BallotChoice, Builder, Decimal, MaxSkippedRank, Scale, TieBreakMode, VoteRules,
    WinnerElectionMode,
};

fn scale4() -> Scale {
    Scale::new(4).unwrap()
}

fn d(n: i64) -> Decimal {
    Decimal::from_integer(scale4(), n)
}

fn names(ranks: &[&str]) -> Vec<Vec<String>> {
    ranks
        .iter()
        .map(|name| {
            if name.is_empty() {
                vec![]
            } else {
                vec![name.to_string()]
            }
        })
        .collect()
}

/// S1: nobody has a majority of first choices, the trailing candidate is
/// eliminated, and its votes carry the majority over the threshold.
#[test]
fn single_winner_majority_after_one_elimination() {
    let mut builder = Builder::new(&VoteRules::default())
        .unwrap()
        .candidates(&["A".to_string(), "B".to_string(), "C".to_string()])
        .unwrap();
    for _ in 0..5 {
        builder.add_vote(&names(&["A"]), 1).unwrap();
    }
    for _ in 0..3 {
        builder.add_vote(&names(&["B"]), 1).unwrap();
    }
    builder.add_vote(&names(&["C", "A"]), 2).unwrap();

    let results = ranked_voting::run_election(&builder).unwrap();

    assert_eq!(results.winners, vec!["A".to_string()]);
    assert_eq!(results.winning_threshold, d(6));
    // Round 1 clears the unused write-in slot (zero tally, so it is the
    // unique minimum) before C, the real trailing candidate, falls in round 2.
    assert_eq!(results.round_stats.len(), 3);
    assert_eq!(
        results.elimination_round,
        vec![("Undeclared Write-ins".to_string(), 1), ("C".to_string(), 2)]
    );
    assert_eq!(results.winning_round, vec![("A".to_string(), 3)]);

    // C is eliminated in round 2, but (matching the surplus-transfer lag
    // exercised below in S5) its ballots are only rerouted at the top of
    // round 3, so the transfer is visible in round_stats[2], not [1].
    let round2_elim = &results.round_stats[2].tally_result_eliminated;
    assert_eq!(round2_elim.len(), 1);
    assert_eq!(round2_elim[0].name, "C");
    assert_eq!(round2_elim[0].transfers, vec![("A".to_string(), d(2))]);
    assert_eq!(round2_elim[0].exhausted, d(0));
}

/// S2: a ballot that overvotes its first rank exhausts immediately rather
/// than counting toward either overvoted candidate.
#[test]
fn overvote_exhausts_immediately_and_does_not_block_a_majority() {
    let rules = VoteRules::default();
    let mut builder = Builder::new(&rules)
        .unwrap()
        .candidates(&["A".to_string(), "B".to_string()])
        .unwrap();
    for _ in 0..4 {
        builder.add_vote(&names(&["A"]), 1).unwrap();
    }
    for _ in 0..3 {
        builder.add_vote(&names(&["B"]), 1).unwrap();
    }
    builder
        .add_vote(&[vec!["A".to_string(), "B".to_string()]], 2)
        .unwrap();

    let results = ranked_voting::run_election(&builder).unwrap();

    assert_eq!(results.winners, vec!["A".to_string()]);
    assert_eq!(results.round_stats.len(), 1);

    let overvoted_ballot = &results.ballot_audit_trail.last().unwrap();
    assert_eq!(overvoted_ballot.per_round.len(), 1);
    match &overvoted_ballot.per_round[0] {
        ranked_voting::BallotRoundEvent::Exhausted { reason } => assert_eq!(reason, "overvote"),
        other => panic!("expected an overvote exhaustion, got {:?}", other),
    }
}

/// S3: a single skipped rank is tolerated and the ballot keeps counting for
/// its next marked choice; two skipped ranks in a row exceed the configured
/// tolerance and the ballot exhausts as an undervote instead.
#[test]
fn skipped_rank_within_tolerance_survives_past_an_elimination() {
    let mut rules = VoteRules::default();
    rules.max_skipped_rank_allowed = MaxSkippedRank::MaxAllowed(1);
    let mut builder = Builder::new(&rules)
        .unwrap()
        .candidates(&["A".to_string(), "B".to_string(), "C".to_string()])
        .unwrap();
    // One skipped rank: tolerated, reaches C once A is gone.
    builder
        .add_vote(&[vec!["A".to_string()], vec![], vec!["C".to_string()]], 1)
        .unwrap();
    // Two skipped ranks: exceeds the tolerance, exhausts once A is gone.
    builder
        .add_vote(
            &[
                vec!["A".to_string()],
                vec![],
                vec![],
                vec!["C".to_string()],
            ],
            1,
        )
        .unwrap();
    for _ in 0..5 {
        builder.add_vote(&names(&["B"]), 1).unwrap();
    }
    for _ in 0..5 {
        builder.add_vote(&names(&["C"]), 1).unwrap();
    }

    let results = ranked_voting::run_election(&builder).unwrap();

    assert_eq!(results.winners, vec!["C".to_string()]);
    // Round 1 clears the unused write-in slot; A, the real trailing
    // candidate, only falls in round 2, and the gap ballots' fates resolve
    // in round 3.
    assert_eq!(results.round_stats.len(), 3);
    assert_eq!(
        results.elimination_round,
        vec![("Undeclared Write-ins".to_string(), 1), ("A".to_string(), 2)]
    );

    // Ballot 0 is the one-gap ballot, ballot 1 the two-gap one.
    let gap_one = &results.ballot_audit_trail[0];
    let gap_two = &results.ballot_audit_trail[1];
    match &gap_one.per_round[2] {
        ranked_voting::BallotRoundEvent::Counted { candidate, .. } => {
            assert_eq!(candidate, "C")
        }
        other => panic!("expected the one-gap ballot to reach C, got {:?}", other),
    }
    match &gap_two.per_round[2] {
        ranked_voting::BallotRoundEvent::Exhausted { reason } => assert_eq!(reason, "undervote"),
        other => panic!("expected the two-gap ballot to exhaust, got {:?}", other),
    }
}

/// S4: three trailing candidates whose combined tally can never catch the
/// next one up are eliminated together in a single round.
#[test]
fn batch_elimination_removes_three_trailing_candidates_at_once() {
    let mut rules = VoteRules::default();
    rules.batch_elimination = true;
    let mut builder = Builder::new(&rules)
        .unwrap()
        .candidates(&[
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
            "X".to_string(),
        ])
        .unwrap();
    for _ in 0..40 {
        builder.add_vote(&names(&["A"]), 1).unwrap();
    }
    builder.add_vote(&names(&["B"]), 1).unwrap();
    for _ in 0..2 {
        builder.add_vote(&names(&["C"]), 1).unwrap();
    }
    for _ in 0..3 {
        builder.add_vote(&names(&["D"]), 1).unwrap();
    }
    for _ in 0..45 {
        builder.add_vote(&names(&["X"]), 1).unwrap();
    }

    let results = ranked_voting::run_election(&builder).unwrap();

    assert_eq!(results.winners, vec!["X".to_string()]);
    assert_eq!(results.round_stats.len(), 2);

    // The unused write-in slot (zero tally) falls into the very same batch
    // as B, C and D: it sorts below all of them in the ascending cumulative
    // scan, so it is swept up alongside them rather than needing its own
    // round-1 special case.
    let mut eliminated_in_round1: Vec<String> = results.round_stats[0]
        .tally_result_eliminated
        .iter()
        .map(|e| e.name.clone())
        .collect();
    eliminated_in_round1.sort();
    assert_eq!(
        eliminated_in_round1,
        vec![
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
            "Undeclared Write-ins".to_string(),
        ]
    );
    assert_eq!(
        results
            .elimination_round
            .iter()
            .map(|(_, r)| *r)
            .collect::<Vec<_>>(),
        vec![1, 1, 1, 1]
    );
}

/// S5: in a two-seat contest the first candidate crosses the quota with
/// votes to spare; the surplus above the quota carries on, at a fractional
/// value, to its ballots' next choice, and decides the second seat.
#[test]
fn multi_seat_surplus_transfer_decides_the_second_seat() {
    let mut rules = VoteRules::default();
    rules.number_of_winners = 2;
    rules.winner_election_mode = WinnerElectionMode::MultiSeatAllowOnlyOneWinnerPerRound;
    let mut builder = Builder::new(&rules)
        .unwrap()
        .candidates(&["A".to_string(), "B".to_string(), "C".to_string()])
        .unwrap();
    for _ in 0..10 {
        builder.add_vote(&names(&["A", "C"]), 1).unwrap();
    }
    for _ in 0..7 {
        builder.add_vote(&names(&["B"]), 1).unwrap();
    }
    for _ in 0..3 {
        builder.add_vote(&names(&["C"]), 1).unwrap();
    }

    let results = ranked_voting::run_election(&builder).unwrap();

    assert_eq!(results.winners, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(results.winning_threshold, d(7));
    // A third, event-free round follows: once both seats are filled the loop
    // still takes one more pass to let B's own (zero) surplus finish routing.
    assert_eq!(results.round_stats.len(), 3);
    assert_eq!(results.winning_round[0], ("A".to_string(), 1));
    assert_eq!(results.winning_round[1], ("B".to_string(), 2));

    let round1_surplus = &results.round_stats[0].tally_result_surplus;
    assert!(round1_surplus.is_empty());

    let round2_surplus = &results.round_stats[1].tally_result_surplus;
    assert_eq!(round2_surplus.len(), 1);
    assert_eq!(round2_surplus[0].name, "A");
    assert_eq!(round2_surplus[0].surplus_fraction, Decimal::from_str(scale4(), "0.3").unwrap());
    assert_eq!(round2_surplus[0].transfers, vec![("C".to_string(), d(3))]);
}

/// S6: two candidates land on the same tally in the round they are tied,
/// but an earlier round already showed one of them behind the other — that
/// earlier round decides the tie instead of falling back to randomness.
#[test]
fn tie_is_broken_by_an_earlier_rounds_counts() {
    let mut rules = VoteRules::default();
    rules.tiebreak_mode = TieBreakMode::PreviousRoundCountsThenRandom(42);
    let mut builder = Builder::new(&rules)
        .unwrap()
        .candidates(&[
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
        ])
        .unwrap();
    for _ in 0..6 {
        builder.add_vote(&names(&["A"]), 1).unwrap();
    }
    for _ in 0..4 {
        builder.add_vote(&names(&["B"]), 1).unwrap();
    }
    for _ in 0..7 {
        builder.add_vote(&names(&["D"]), 1).unwrap();
    }
    builder.add_vote(&names(&["C", "B"]), 2).unwrap();
    builder.add_vote(&names(&["C"]), 1).unwrap();

    let results = ranked_voting::run_election(&builder).unwrap();

    assert_eq!(results.winners, vec!["D".to_string()]);
    // Round 1 clears the unused write-in slot first; C (uniquely lowest
    // among the real candidates) falls in round 2, and the A/B tie that
    // round 3 has to break is resolved by round 2's counts.
    assert_eq!(results.round_stats.len(), 4);
    assert_eq!(
        results.elimination_round,
        vec![
            ("Undeclared Write-ins".to_string(), 1),
            ("C".to_string(), 2),
            ("B".to_string(), 3),
        ]
    );
}

#[test]
fn builder_rejects_a_ballot_naming_an_undeclared_candidate_when_resolution_is_strict() {
    let rules = VoteRules::default();
    let mut builder = Builder::new(&rules)
        .unwrap()
        .candidates(&["A".to_string(), "B".to_string()])
        .unwrap();
    builder
        .add_ballot(Ballot::new(
            vec![vec![BallotChoice::Candidate("Ghost".to_string())]],
            1,
        ))
        .unwrap();
    let err = ranked_voting::run_election(&builder).unwrap_err();
    assert!(matches!(err, ranked_voting::VotingErrors::ConfigInvalid(_)));
}
