pub use crate::config::*;

/// A builder for assembling ballots in-process, without going through a CVR
/// reader. Useful for embedding the engine directly or for tests.
///
/// ```
/// use ranked_voting::Builder;
/// use ranked_voting::VoteRules;
/// # use ranked_voting::VotingErrors;
///
/// let mut builder = Builder::new(&VoteRules::default())?
///     .candidates(&["Anna".to_string(), "Bob".to_string()])?;
///
/// builder.add_vote_simple(&["Anna".to_string(), "Clara".to_string()])?;
///
/// # Ok::<(), VotingErrors>(())
/// ```
pub struct Builder {
    pub(crate) rules: VoteRules,
    pub(crate) candidates: Option<Vec<Candidate>>,
    pub(crate) ballots: Vec<Ballot>,
}

impl Builder {
    pub fn new(rules: &VoteRules) -> Result<Builder, VotingErrors> {
        Ok(Builder {
            rules: rules.clone(),
            candidates: None,
            ballots: Vec::new(),
        })
    }

    pub fn candidates(self, cands: &[String]) -> Result<Builder, VotingErrors> {
        Ok(Builder {
            rules: self.rules,
            candidates: Some(
                cands
                    .iter()
                    .map(|name| Candidate {
                        name: name.clone(),
                        code: None,
                        excluded: false,
                    })
                    .collect(),
            ),
            ballots: Vec::new(),
        })
    }

    /// Adds a ballot with exactly one candidate per rank, weight 1: the
    /// common case for hand-written tests.
    pub fn add_vote_simple(&mut self, candidates: &[String]) -> Result<(), VotingErrors> {
        let ranks: Vec<Vec<String>> = candidates.iter().map(|c| vec![c.clone()]).collect();
        self.add_vote(&ranks, 1)
    }

    /// Adds a ballot, with a potential weight attached to it.
    ///
    /// `ranks`: one entry per rank, in order. A rank names zero candidates
    /// (an undervote, or use an empty string), one candidate, or more than
    /// one (an overvote at that rank). A name not present in the candidate
    /// list passed to `candidates` is recorded as an undeclared write-in.
    pub fn add_vote(&mut self, ranks: &[Vec<String>], count: u32) -> Result<(), VotingErrors> {
        let mut rank_marks: Vec<RankMarks> = Vec::with_capacity(ranks.len());
        for rank in ranks {
            let mut marks = Vec::new();
            for name in rank {
                if name.is_empty() {
                    continue;
                }
                let choice = match self.candidates.as_deref() {
                    Some(declared) if declared.iter().any(|c| c.name == *name) => {
                        BallotChoice::Candidate(name.clone())
                    }
                    Some(_) => BallotChoice::UndeclaredWriteIn,
                    None => BallotChoice::Candidate(name.clone()),
                };
                marks.push(choice);
            }
            rank_marks.push(marks);
        }
        self.add_ballot(Ballot::new(rank_marks, count as u64))
    }

    /// Adds an already-assembled ballot directly, bypassing name resolution.
    pub fn add_ballot(&mut self, ballot: Ballot) -> Result<(), VotingErrors> {
        self.ballots.push(ballot);
        Ok(())
    }

    pub fn rules(&self) -> &VoteRules {
        &self.rules
    }

    pub fn built_candidates(&self) -> Option<&[Candidate]> {
        self.candidates.as_deref()
    }

    pub fn ballots(&self) -> &[Ballot] {
        &self.ballots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_vote_resolves_one_mark_per_rank() {
        let mut builder = Builder::new(&VoteRules::default())
            .unwrap()
            .candidates(&["Anna".to_string(), "Bob".to_string()])
            .unwrap();
        builder
            .add_vote_simple(&["Anna".to_string(), "Bob".to_string()])
            .unwrap();
        assert_eq!(builder.ballots().len(), 1);
        assert_eq!(builder.ballots()[0].ranks.len(), 2);
        assert_eq!(
            builder.ballots()[0].ranks[0],
            vec![BallotChoice::Candidate("Anna".to_string())]
        );
    }

    #[test]
    fn unknown_name_becomes_undeclared_write_in() {
        let mut builder = Builder::new(&VoteRules::default())
            .unwrap()
            .candidates(&["Anna".to_string()])
            .unwrap();
        builder
            .add_vote(&[vec!["Someone Else".to_string()]], 3)
            .unwrap();
        assert_eq!(
            builder.ballots()[0].ranks[0],
            vec![BallotChoice::UndeclaredWriteIn]
        );
        assert_eq!(builder.ballots()[0].count, 3);
    }

    #[test]
    fn empty_name_is_an_undervote() {
        let mut builder = Builder::new(&VoteRules::default())
            .unwrap()
            .candidates(&["Anna".to_string()])
            .unwrap();
        builder
            .add_vote(&[vec!["".to_string()], vec!["Anna".to_string()]], 1)
            .unwrap();
        assert!(builder.ballots()[0].ranks[0].is_empty());
    }
}
