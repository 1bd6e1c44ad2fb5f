//! Security Analyzer
//!
//! Tallies failed authentication events and breach flags. Neither needs a
//! timestamp.

use crate::event::{AUTH_FAILED_EVENT, BREACH_DETECTED, Event, SECURITY_STATE_KEY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of security finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityFinding {
    /// An "Authentication Failed" event
    FailedAuthAttempt,
    /// A reading flagging `security_state = BREACH_DETECTED`
    BreachDetection,
}

impl SecurityFinding {
    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            SecurityFinding::FailedAuthAttempt => "Failed Auth Attempts",
            SecurityFinding::BreachDetection => "Security Breach Detections",
        }
    }
}

/// Non-zero security finding counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityFindings {
    counts: BTreeMap<SecurityFinding, usize>,
}

impl SecurityFindings {
    /// Count for a finding kind (0 when absent)
    pub fn get(&self, finding: SecurityFinding) -> usize {
        self.counts.get(&finding).copied().unwrap_or(0)
    }

    /// Iterate over the recorded findings in a stable order
    pub fn iter(&self) -> impl Iterator<Item = (SecurityFinding, usize)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }

    /// Number of finding kinds recorded
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn record(&mut self, finding: SecurityFinding, count: usize) {
        if count > 0 {
            self.counts.insert(finding, count);
        }
    }
}

/// Count security findings. Returns `None` when there are none.
pub fn analyze_security<'a, I>(events: I) -> Option<SecurityFindings>
where
    I: IntoIterator<Item = &'a Event>,
{
    let (failed_auth, breaches) = events.into_iter().fold((0, 0), |(auth, breach), event| {
        (
            auth + usize::from(event.name == AUTH_FAILED_EVENT),
            breach + usize::from(event.reads(SECURITY_STATE_KEY, BREACH_DETECTED)),
        )
    });

    let mut findings = SecurityFindings::default();
    findings.record(SecurityFinding::FailedAuthAttempt, failed_auth);
    findings.record(SecurityFinding::BreachDetection, breaches);

    if findings.is_empty() {
        None
    } else {
        tracing::debug!(failed_auth, breaches, "security findings recorded");
        Some(findings)
    }
}
