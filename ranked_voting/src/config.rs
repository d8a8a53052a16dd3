//! Public configuration and data-model types for the tabulation engine:
//! candidates, ballots, the rule set, and the result/error types the engine
//! produces. This is the vendor-agnostic contract between a CVR-reading
//! collaborator (see `timrcv`'s `src/rcv/io_*` modules) and the engine.
//!
//! Field names follow the configuration vocabulary defined here:
//! https://github.com/BrightSpots/rcv/blob/develop/config_file_documentation.txt

use crate::decimal::{Decimal, Scale};
use std::collections::HashMap;

/// A candidate as declared in the contest configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub code: Option<String>,
    pub excluded: bool,
}

/// One ranking mark, as read off a CVR before it is resolved into the
/// engine's internal candidate-id rank sets. `Candidate` values are matched
/// by name against the configured candidate list (or the undeclared-write-in
/// / overvote labels); an unmatched name is a `ConfigInvalid` error at ballot
/// validation time (a collaborator's concern, not the engine's).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BallotChoice {
    Candidate(String),
    /// Explicit undeclared write-in mark, distinct from a candidate
    /// literally named after the configured UWI label.
    UndeclaredWriteIn,
    /// An explicit overvote mark.
    Overvote,
    /// A blank rank: no mark present.
    Undervote,
}

/// One rank, already resolved to its set of marks. Most ranks carry zero or
/// one mark; more than one models a voter marking multiple candidates at the
/// same rank (an overvote).
pub type RankMarks = Vec<BallotChoice>;

/// An (aggregated) ranked ballot: a sequence of ranks, each a set of marks,
/// plus the number of identical real ballots this record represents and the
/// precinct they were cast in, if known. Ranks may be sparse: an empty
/// `RankMarks` at position `i` means rank `i+1` carried no mark at all
/// (an undervote at that rank), indistinguishable from a rank absent from
/// the source CVR entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ballot {
    pub id: Option<String>,
    pub ranks: Vec<RankMarks>,
    pub count: u64,
    pub precinct: Option<String>,
}

impl Ballot {
    pub fn new(ranks: Vec<RankMarks>, count: u64) -> Ballot {
        Ballot {
            id: None,
            ranks,
            count,
            precinct: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverVoteRule {
    ExhaustImmediately,
    AlwaysSkipToNextRank,
    ExhaustIfMultipleContinuing,
}

/// How many consecutively skipped ranks a ballot tolerates before it is
/// treated as exhausted for undervote. `MaxAllowed(0)` exhausts a ballot on
/// its very first skipped rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxSkippedRank {
    Unlimited,
    MaxAllowed(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinnerElectionMode {
    SingleWinnerMajority,
    MultiSeatAllowOnlyOneWinnerPerRound,
    MultiSeatAllowMultipleWinnersPerRound,
    MultiSeatBottomsUpUntilNWinners,
    MultiSeatBottomsUpUsingPercentageThreshold,
    MultiSeatSequentialWinnerTakesAll,
}

impl WinnerElectionMode {
    pub fn is_bottoms_up(self) -> bool {
        matches!(
            self,
            WinnerElectionMode::MultiSeatBottomsUpUntilNWinners
                | WinnerElectionMode::MultiSeatBottomsUpUsingPercentageThreshold
        )
    }
}

/// Deterministic tie-break strategy. `Random`/`GeneratePermutation` carry the
/// configured seed; `UsePermutationInConfig` carries the configured ordering
/// directly (the lowest-ranked name in the list loses a losing tie-break,
/// wins a winning tie-break).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TieBreakMode {
    Random(u32),
    Interactive,
    PreviousRoundCountsThenRandom(u32),
    PreviousRoundCountsThenInteractive,
    UsePermutationInConfig(Vec<String>),
    GeneratePermutation(u32),
}

/// The full rule set governing one contest's tabulation.
#[derive(Debug, Clone)]
pub struct VoteRules {
    pub number_of_winners: u32,
    pub winner_election_mode: WinnerElectionMode,
    pub multi_seat_bottoms_up_percentage_threshold: Option<Decimal>,
    pub overvote_rule: OverVoteRule,
    pub tiebreak_mode: TieBreakMode,
    pub max_rankings_allowed: Option<u32>,
    pub max_skipped_rank_allowed: MaxSkippedRank,
    pub minimum_vote_threshold: Decimal,
    pub decimal_places_for_vote_arithmetic: u32,
    pub batch_elimination: bool,
    pub continue_until_two_candidates_remain: bool,
    pub exhaust_on_duplicate_candidate: bool,
    pub non_integer_winning_threshold: bool,
    pub hare_quota: bool,
    pub tabulate_by_precinct: bool,
    pub explicit_overvote_label: String,
    pub undeclared_write_in_label: String,
}

pub const DEFAULT_EXPLICIT_OVERVOTE_LABEL: &str = "overvote";
pub const DEFAULT_UNDECLARED_WRITE_IN_LABEL: &str = "Undeclared Write-ins";

impl VoteRules {
    pub fn scale(&self) -> Scale {
        Scale::new(self.decimal_places_for_vote_arithmetic)
            .expect("decimal_places_for_vote_arithmetic validated at config load")
    }
}

impl Default for VoteRules {
    fn default() -> Self {
        let scale = Scale::new(4).unwrap();
        VoteRules {
            number_of_winners: 1,
            winner_election_mode: WinnerElectionMode::SingleWinnerMajority,
            multi_seat_bottoms_up_percentage_threshold: None,
            overvote_rule: OverVoteRule::ExhaustImmediately,
            tiebreak_mode: TieBreakMode::Random(0),
            max_rankings_allowed: None,
            max_skipped_rank_allowed: MaxSkippedRank::Unlimited,
            minimum_vote_threshold: Decimal::zero(scale),
            decimal_places_for_vote_arithmetic: 4,
            batch_elimination: false,
            continue_until_two_candidates_remain: false,
            exhaust_on_duplicate_candidate: false,
            non_integer_winning_threshold: false,
            hare_quota: false,
            tabulate_by_precinct: false,
            explicit_overvote_label: DEFAULT_EXPLICIT_OVERVOTE_LABEL.to_string(),
            undeclared_write_in_label: DEFAULT_UNDECLARED_WRITE_IN_LABEL.to_string(),
        }
    }
}

/// Validates cross-field constraints that cannot be expressed in the type
/// system alone. Called once at the start of `run_election`; any failure is
/// `VotingErrors::ConfigInvalid` and the engine never starts a round.
pub fn validate_rules(rules: &VoteRules, candidates: &[Candidate]) -> Result<(), VotingErrors> {
    if Scale::new(rules.decimal_places_for_vote_arithmetic).is_none() {
        return Err(VotingErrors::ConfigInvalid(format!(
            "decimalPlacesForVoteArithmetic must be in [1,20], got {}",
            rules.decimal_places_for_vote_arithmetic
        )));
    }
    if rules.number_of_winners == 0 {
        return Err(VotingErrors::ConfigInvalid(
            "numberOfWinners must be at least 1".to_string(),
        ));
    }
    if rules.winner_election_mode == WinnerElectionMode::MultiSeatBottomsUpUsingPercentageThreshold
    {
        match &rules.multi_seat_bottoms_up_percentage_threshold {
            None => {
                return Err(VotingErrors::ConfigInvalid(
                    "multiSeatBottomsUpPercentageThreshold is required for multiSeatBottomsUpUsingPercentageThreshold"
                        .to_string(),
                ));
            }
            Some(d) => {
                if !d.is_positive() {
                    return Err(VotingErrors::ConfigInvalid(
                        "multiSeatBottomsUpPercentageThreshold must be in (0,1]".to_string(),
                    ));
                }
            }
        }
    }
    if candidates.is_empty() {
        return Err(VotingErrors::ConfigInvalid(
            "no candidates declared".to_string(),
        ));
    }
    Ok(())
}

/// Per-round tally snapshot, as published in `VotingResult::round_stats`.
#[derive(Debug, Clone)]
pub struct RoundStats {
    pub round: u32,
    pub tally: Vec<(String, Decimal)>,
    pub tally_results_elected: Vec<String>,
    pub tally_result_eliminated: Vec<EliminationStats>,
    pub tally_result_surplus: Vec<SurplusStats>,
    pub residual_surplus: Decimal,
}

/// How one eliminated candidate's votes redistributed this round.
#[derive(Debug, Clone)]
pub struct EliminationStats {
    pub name: String,
    pub transfers: Vec<(String, Decimal)>,
    pub exhausted: Decimal,
}

/// How much of a winner's surplus (above threshold) redistributed this round.
#[derive(Debug, Clone)]
pub struct SurplusStats {
    pub name: String,
    pub surplus_fraction: Decimal,
    pub transfers: Vec<(String, Decimal)>,
}

/// One ballot's disposition in one round, as recorded in the audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BallotRoundEvent {
    Counted { candidate: String, value: Decimal },
    Exhausted { reason: String },
}

#[derive(Debug, Clone)]
pub struct BallotAuditRecord {
    pub ballot_index: usize,
    pub per_round: Vec<BallotRoundEvent>,
}

/// The full result of tabulating one contest.
#[derive(Debug, Clone)]
pub struct VotingResult {
    /// Winners in the order they were declared; ties within a round are
    /// broken by the configured tie-break mode before insertion.
    pub winners: Vec<String>,
    pub winning_threshold: Decimal,
    pub round_stats: Vec<RoundStats>,
    pub elimination_round: Vec<(String, u32)>,
    pub winning_round: Vec<(String, u32)>,
    pub precinct_round_stats: HashMap<String, Vec<RoundStats>>,
    pub ballot_audit_trail: Vec<BallotAuditRecord>,
}

/// Errors that prevent the algorithm from completing successfully. This is
/// a taxonomy of failure kinds, not a stack of wrapped causes: each variant
/// is something a caller can act on directly.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum VotingErrors {
    /// No ballots were provided.
    EmptyElection,
    /// The round loop exceeded its safety cap without converging; this is
    /// always a bug, since a valid configuration converges within
    /// `number of candidates` rounds.
    NoConvergence,
    /// An elimination branch was entered but found nothing to eliminate.
    NoCandidateToEliminate,
    /// The configuration is internally inconsistent; the engine refuses to
    /// run a single round.
    ConfigInvalid(String),
    /// The caller's cooperative cancellation signal fired; the round loop
    /// exited immediately and no results were produced.
    Cancelled,
    /// A tally or accounting invariant was violated. Always a bug in the
    /// engine or a malformed caller-supplied collaborator decision.
    InternalInvariantViolation(String),
    /// An interactive tie-break was required but the caller provided no
    /// resolution for it.
    TieBreakInputRequired {
        candidates: Vec<String>,
        context: String,
    },
}
