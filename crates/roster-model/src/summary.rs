#![deny(unsafe_code)]

/// Row counts at every filtering stage of a partition run.
///
/// These are the diagnostics the operator sees; an empty list is an
/// informational outcome here, never an error.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub struct PartitionSummary {
    /// Rows in the loaded table.
    pub total_rows: usize,
    /// Rows whose student-flag cell matched.
    pub student_rows: usize,
    /// Rows whose group cell is a valid group code.
    pub valid_group_rows: usize,
    /// Student rows with a valid group, before deduplication.
    pub principal_candidates: usize,
    /// Principal list size after deduplication.
    pub principal_rows: usize,
    /// Student rows without a valid group, before exclusion.
    pub secondary_candidates: usize,
    /// Secondary candidates surviving exclusion of principal identities.
    pub secondary_after_exclusion: usize,
    /// Secondary list size after deduplication.
    pub secondary_rows: usize,
}

/// The three distinct ways the secondary list can come out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SecondaryOutcome {
    /// No student row lacked a valid group.
    NoCandidates,
    /// Candidates existed, but every one was already in the principal list.
    AllExcluded,
    /// A non-empty secondary list was produced.
    Listed,
}

impl PartitionSummary {
    pub fn secondary_outcome(&self) -> SecondaryOutcome {
        if self.secondary_candidates == 0 {
            SecondaryOutcome::NoCandidates
        } else if self.secondary_rows == 0 {
            SecondaryOutcome::AllExcluded
        } else {
            SecondaryOutcome::Listed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_distinguishes_the_empty_states() {
        let mut summary = PartitionSummary::default();
        assert_eq!(summary.secondary_outcome(), SecondaryOutcome::NoCandidates);

        summary.secondary_candidates = 4;
        assert_eq!(summary.secondary_outcome(), SecondaryOutcome::AllExcluded);

        summary.secondary_after_exclusion = 2;
        summary.secondary_rows = 2;
        assert_eq!(summary.secondary_outcome(), SecondaryOutcome::Listed);
    }
}
