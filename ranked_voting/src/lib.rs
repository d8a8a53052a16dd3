/*!
The `ranked_voting` crate provides a thoroughly tested implementation of the
[Instant-Runoff Voting algorithm](https://en.wikipedia.org/wiki/Instant-runoff_voting),
which is also called ranked-choice voting in the United States, preferential voting
in Australia or alternative vote in the United Kingdom. Beyond the single-winner
case it also implements the multi-seat variants used for at-large and
proportional contests: bottoms-up elimination, sequential winner-takes-all, and
surplus transfer for the modes that allow more than one winner per round.

This library can be used in multiple flavours:
- as a simple library for most cases (see the [run_election1] function)

- as a command-line utility that provides fast and easy election results that can then
be displayed or exported. The section [timrcv](#timrcv) provides a manual.

- as a more complex library that can handle all the diversity of implementations. It provides
for example multiple ways to deal with blank or absentee ballots, undeclared candidates, etc.
If you are attempting to replicate the results of a specific elections, you should
carefully check the voting rules and use the configuration accordingly. If you are doing so,
you should check [run_election] and [VoteRules]

# timrcv

`timrcv` is a command-line program to run an instant runoff election. It can accomodate all common formats from vendors
or public offices. This document presents a tutorial on how to use it.

## Installation

Download the latest release from the [releases page](https://github.com/tjhunter/timrcv/releases).
 Pre-compiled versions are available for Windows, MacOS and Linux.


## Quick start with existing data

If you are running a poll and are collecting data using Microsoft Forms,
Google Form, Qualtrics, look at the [quick start using Google Forms](quick_start/index.html).

If you have very simple needs and you can collect data in a
small text file, `timrcv` accepts a simple format of
comma-separated values.


To get started, let us say that you have a file with the following records of votes ([example.csv](https://github.com/tjhunter/timrcv/raw/main/tests/csv_simple_2/example.csv)). Each line corresponds to a vote, and A,B,C and D are the candidates:

```text
A,B,,D
A,C,B,
B,A,D,C
B,C,A,D
C,A,B,D
D,B,A,C
```
Each line is a recorded vote. The first line `A,B,,D` says that this voter preferred candidate A over everyone else (his/her first choice), followed by B as a second choice and finally D as a last choice.

Running a vote with the default options is simply:

```bash
timrcv --input example.csv
```

Output:

```text
[ INFO  ranked_voting] round 1: starting
[ INFO  ranked_voting] round 1: winning threshold is 4
[ INFO  ranked_voting] round 1: D eliminated
[ INFO  ranked_voting] round 2: starting
[ INFO  ranked_voting] round 2: C eliminated
[ INFO  ranked_voting] round 3: starting
[ INFO  ranked_voting] round 3: B eliminated
[ INFO  ranked_voting] round 4: starting
[ INFO  ranked_voting] round 4: A elected
```

`timrcv` supports many options (input and output formats, validation of the candidates, configuration of the tabulating process, ...).
 Look at the [configuration section](manual/index.html#configuration) of the manual for more details.




 */

mod ballot;
mod batch;
mod builder;
mod config;
mod decimal;
mod engine;
mod observer;
mod sequential;
mod threshold;
mod tiebreak;

pub mod manual;
pub mod quick_start;

pub use builder::Builder;
pub use config::*;
pub use decimal::{Decimal, Scale};
pub use observer::{CancellationSignal, LoggingObserver, SilentObserver, TabulationEvent, TabulationObserver};

use ballot::CandidateRegistry;
use log::{debug, info};
use std::collections::{HashMap, HashSet};

fn candidates_from_ballots(ballots: &[Ballot]) -> Vec<Candidate> {
    let mut names: HashMap<String, ()> = HashMap::new();
    for ballot in ballots {
        for rank in &ballot.ranks {
            for choice in rank {
                if let BallotChoice::Candidate(name) = choice {
                    names.insert(name.clone(), ());
                }
            }
        }
    }
    let mut names: Vec<String> = names.into_keys().collect();
    names.sort();
    names
        .into_iter()
        .map(|name| Candidate {
            name,
            code: None,
            excluded: false,
        })
        .collect()
}

/// Runs an election using the instant-runoff voting algorithm, dispatching to
/// the sequential multi-pass driver for `multiSeatSequentialWinnerTakesAll`
/// and to the regular round loop otherwise. Events are logged through the
/// `log` facade (see [`LoggingObserver`]); use [`run_election_with_observer`]
/// to capture them yourself, or to supply a cooperative cancellation signal.
///
/// This interface is potentially faster and less memory intensive than [`run_election1`].
/// It also allows fine-grained error control when validating each vote. If you want a simpler
/// interface, consider using [`run_election1`].
///
/// Here is a short example of running an election:
///
/// ```
/// use ranked_voting::VoteRules;
/// use ranked_voting::Builder;
/// # use ranked_voting::VotingErrors;
/// # let _ = env_logger::try_init();
///
/// let mut builder = Builder::new(&VoteRules::default())?;
/// // If candidates are known in advance:
/// builder = builder.candidates(&["Alice".to_string(), "Bob".to_string(), "Charlie".to_string()])?;
///
/// builder.add_vote_simple(&["Alice".to_string(), "Bob".to_string(), "Charlie".to_string()])?;
/// builder.add_vote_simple(&["Alice".to_string()])?;
/// builder.add_vote_simple(&["Charlie".to_string(), "Bob".to_string()])?;
///
/// let results = ranked_voting::run_election(&builder)?;
///
/// assert_eq!(results.winners, vec!["Alice".to_string()]);
///
/// # Ok::<(), VotingErrors>(())
/// ```
pub fn run_election(builder: &Builder) -> Result<VotingResult, VotingErrors> {
    let mut observer = LoggingObserver;
    run_election_with_observer(builder, &mut observer, &())
}

/// Runs an election exactly like [`run_election`], but lets the caller supply
/// its own [`TabulationObserver`] (to capture or reformat events instead of
/// logging them) and [`CancellationSignal`] (to abort a long-running
/// tabulation cooperatively between rounds).
pub fn run_election_with_observer(
    builder: &Builder,
    observer: &mut dyn TabulationObserver,
    cancel: &dyn CancellationSignal,
) -> Result<VotingResult, VotingErrors> {
    let rules = builder.rules().clone();
    let candidates = builder
        .built_candidates()
        .map(|c| c.to_vec())
        .unwrap_or_else(|| candidates_from_ballots(builder.ballots()));

    info!(
        "run_election: processing {:?} ballots, {:?} candidates",
        builder.ballots().len(),
        candidates.len()
    );
    validate_rules(&rules, &candidates)?;
    if builder.ballots().is_empty() {
        return Err(VotingErrors::EmptyElection);
    }

    let registry = CandidateRegistry::build(&candidates, &rules);
    let mut ranked_ballots = Vec::with_capacity(builder.ballots().len());
    for ballot in builder.ballots() {
        let resolved = ballot::resolve_ballot(ballot, &registry).ok_or_else(|| {
            VotingErrors::ConfigInvalid(format!(
                "ballot {:?} names a candidate absent from the declared candidate list",
                ballot.id
            ))
        })?;
        ranked_ballots.push(resolved);
    }
    debug!(
        "run_election: resolved {:?} ballots against {:?} candidates",
        ranked_ballots.len(),
        registry.tabulatable_candidates().len()
    );

    let extra_excluded: HashSet<ballot::CandidateId> = HashSet::new();
    if rules.winner_election_mode == WinnerElectionMode::MultiSeatSequentialWinnerTakesAll {
        sequential::run_sequential(&ranked_ballots, &registry, &rules, observer, cancel)
    } else {
        engine::tabulate(
            &ranked_ballots,
            &registry,
            &rules,
            &extra_excluded,
            observer,
            cancel,
        )
    }
}

/// Runs an election (simple interface) using the instant-runoff voting algorithm.
///
/// This is a convenience interface for cases that do not need more complex ballots.
/// If you need to handle more complex ballots that have weights, identifiers, over- and undervotes,
/// use the [`run_election`] function instead.
///
/// All the candidates names encountered (except empty names) are considered valid candidates.
///
/// Here is a short example of running an election:
///
/// ```
/// use ranked_voting::VoteRules;
/// # use ranked_voting::VotingErrors;
/// # let _ = env_logger::try_init();
///
/// let results = ranked_voting::run_election1(&vec![
///   vec!["Alice", "Bob", "Charlie"],
///   vec!["Alice"],
///   vec!["Bob","Alice", "Charlie"],
/// ], &VoteRules::default())?;
///
/// assert_eq!(results.winners, vec!["Alice".to_string()]);
///
/// # Ok::<(), VotingErrors>(())
/// ```
pub fn run_election1(
    votes: &[Vec<&str>],
    rules: &VoteRules,
) -> Result<VotingResult, VotingErrors> {
    let mut builder = Builder::new(rules)?;

    let mut cand_set: HashMap<String, ()> = HashMap::new();
    for ballot in votes.iter() {
        for choice in ballot.iter() {
            cand_set.insert(choice.to_string(), ());
        }
    }
    let cand_vec: Vec<String> = cand_set.into_keys().collect();
    builder = builder.candidates(&cand_vec)?;

    for choices in votes.iter() {
        let cands: Vec<Vec<String>> = choices.iter().map(|c| vec![c.to_string()]).collect();
        builder.add_vote(&cands, 1)?;
    }
    run_election(&builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn majority_in_round_one_declares_winner_without_elimination() {
        let results = run_election1(
            &[
                vec!["Alice", "Bob"],
                vec!["Alice", "Bob"],
                vec!["Alice"],
                vec!["Bob"],
            ],
            &VoteRules::default(),
        )
        .unwrap();
        assert_eq!(results.winners, vec!["Alice".to_string()]);
        assert_eq!(results.round_stats.len(), 1);
    }

    #[test]
    fn elimination_transfers_votes_to_next_choice() {
        let results = run_election1(
            &[
                vec!["A", "B"],
                vec!["A", "B"],
                vec!["B"],
                vec!["C", "A"],
                vec!["C", "A"],
            ],
            &VoteRules::default(),
        )
        .unwrap();
        assert_eq!(results.winners, vec!["A".to_string()]);
        assert!(results.round_stats.len() >= 2);
    }

    #[test]
    fn empty_election_is_rejected() {
        let rules = VoteRules::default();
        let builder = Builder::new(&rules)
            .unwrap()
            .candidates(&["A".to_string(), "B".to_string()])
            .unwrap();
        let err = run_election(&builder).unwrap_err();
        assert_eq!(err, VotingErrors::EmptyElection);
    }

    #[test]
    fn unknown_candidate_name_is_config_invalid() {
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
        let err = run_election(&builder).unwrap_err();
        assert!(matches!(err, VotingErrors::ConfigInvalid(_)));
    }
}
