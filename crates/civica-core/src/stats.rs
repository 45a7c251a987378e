//! Status counts for the stats bar

use civica_domain::{Issue, IssueStatus};

/// Derived issue counts by workflow status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IssueStats {
    pub reported: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl IssueStats {
    /// Tally a snapshot of issues.
    pub fn collect(issues: &[Issue]) -> Self {
        let mut stats = Self::default();
        for issue in issues {
            match issue.status {
                IssueStatus::Reported => stats.reported += 1,
                IssueStatus::InProgress => stats.in_progress += 1,
                IssueStatus::Completed => stats.completed += 1,
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.reported + self.in_progress + self.completed
    }

    /// Completed issues as a whole percentage of the total; 0 when there
    /// are no issues.
    pub fn completion_rate(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.completed * 100 / total) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civica_domain::seed::seed_issues;

    #[test]
    fn counts_seed_dataset() {
        let stats = IssueStats::collect(&seed_issues());
        assert_eq!(stats.reported, 2);
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.total(), 6);
        assert_eq!(stats.completion_rate(), 33);
    }

    #[test]
    fn empty_snapshot_has_zero_rate() {
        let stats = IssueStats::collect(&[]);
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.completion_rate(), 0);
    }
}
