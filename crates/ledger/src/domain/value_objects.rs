//! Domain Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ledger entry identifier - storage-assigned, monotonic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status tag on a ledger entry
///
/// A classification label, not a workflow state machine: the owner may
/// set any tag at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    #[default]
    Sent,
    Received,
    Paid,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Sent => "sent",
            EntryStatus::Received => "received",
            EntryStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error parsing a status tag from storage
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown entry status: {0}")]
pub struct ParseEntryStatusError(pub String);

impl FromStr for EntryStatus {
    type Err = ParseEntryStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sent" => Ok(EntryStatus::Sent),
            "received" => Ok(EntryStatus::Received),
            "paid" => Ok(EntryStatus::Paid),
            other => Err(ParseEntryStatusError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        for status in [EntryStatus::Sent, EntryStatus::Received, EntryStatus::Paid] {
            assert_eq!(status.as_str().parse::<EntryStatus>().unwrap(), status);
        }
        assert!("settled".parse::<EntryStatus>().is_err());
    }

    #[test]
    fn test_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&EntryStatus::Paid).unwrap(),
            "\"paid\""
        );
        assert_eq!(
            serde_json::from_str::<EntryStatus>("\"received\"").unwrap(),
            EntryStatus::Received
        );
    }

    #[test]
    fn test_default_status_is_sent() {
        assert_eq!(EntryStatus::default(), EntryStatus::Sent);
    }

    #[test]
    fn test_entry_id_ordering_follows_value() {
        assert!(EntryId::new(1) < EntryId::new(2));
        assert_eq!(EntryId::new(7).value(), 7);
    }
}
