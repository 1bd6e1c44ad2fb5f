//! Verdicts
//!
//! Metric verdicts and scenario verdicts are separate types: MIXED only
//! exists at scenario granularity.

use serde::{Deserialize, Serialize};

/// Outcome of one metric against its ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricVerdict {
    /// Average at or below the ceiling
    Pass,
    /// Average above the ceiling
    Fail,
    /// No ceiling, no data, or no average
    Skip,
}

/// Outcome of a whole scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScenarioVerdict {
    /// Every metric passed
    Pass,
    /// At least one metric failed
    Fail,
    /// Nothing could be evaluated
    Skip,
    /// Some metrics passed, some were skipped, none failed
    Mixed,
}

impl MetricVerdict {
    /// Upper-case label as printed in reports
    pub fn as_str(self) -> &'static str {
        match self {
            MetricVerdict::Pass => "PASS",
            MetricVerdict::Fail => "FAIL",
            MetricVerdict::Skip => "SKIP",
        }
    }
}

impl ScenarioVerdict {
    /// Upper-case label as printed in reports
    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioVerdict::Pass => "PASS",
            ScenarioVerdict::Fail => "FAIL",
            ScenarioVerdict::Skip => "SKIP",
            ScenarioVerdict::Mixed => "MIXED",
        }
    }

    /// Whether this verdict should fail a run
    pub fn is_failure(self) -> bool {
        matches!(self, ScenarioVerdict::Fail)
    }
}

impl std::fmt::Display for MetricVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for ScenarioVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts of metric verdicts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictTally {
    /// Metrics that passed
    pub pass: usize,
    /// Metrics that failed
    pub fail: usize,
    /// Metrics that were skipped
    pub skip: usize,
}

impl VerdictTally {
    /// Count one more verdict
    pub fn record(&mut self, verdict: MetricVerdict) {
        match verdict {
            MetricVerdict::Pass => self.pass += 1,
            MetricVerdict::Fail => self.fail += 1,
            MetricVerdict::Skip => self.skip += 1,
        }
    }

    /// Merge another tally into this one
    pub fn merge(&mut self, other: &VerdictTally) {
        self.pass += other.pass;
        self.fail += other.fail;
        self.skip += other.skip;
    }

    /// Total verdicts counted
    pub fn total(&self) -> usize {
        self.pass + self.fail + self.skip
    }

    /// Scenario verdict for these counts.
    ///
    /// Strict precedence, first matching row wins:
    ///
    /// | FAIL | PASS | SKIP | verdict |
    /// |------|------|------|---------|
    /// | ≥1   | any  | any  | FAIL    |
    /// | 0    | ≥1   | ≥1   | MIXED   |
    /// | 0    | ≥1   | 0    | PASS    |
    /// | 0    | 0    | any  | SKIP    |
    pub fn verdict(&self) -> ScenarioVerdict {
        if self.fail > 0 {
            ScenarioVerdict::Fail
        } else if self.pass > 0 && self.skip > 0 {
            ScenarioVerdict::Mixed
        } else if self.pass > 0 {
            ScenarioVerdict::Pass
        } else {
            ScenarioVerdict::Skip
        }
    }
}

impl FromIterator<MetricVerdict> for VerdictTally {
    fn from_iter<I: IntoIterator<Item = MetricVerdict>>(iter: I) -> Self {
        let mut tally = VerdictTally::default();
        for verdict in iter {
            tally.record(verdict);
        }
        tally
    }
}

/// Roll metric verdicts up into one scenario verdict
pub fn aggregate_verdicts<I>(verdicts: I) -> ScenarioVerdict
where
    I: IntoIterator<Item = MetricVerdict>,
{
    verdicts.into_iter().collect::<VerdictTally>().verdict()
}
