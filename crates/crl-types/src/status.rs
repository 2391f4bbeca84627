use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Review workflow status of a census record on the ledger.
///
/// `PendingReview` is the initial status and is reachable only through
/// record creation; every other variant is a review outcome. Re-review
/// between outcomes is permitted and simply appends another version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    /// Awaiting a first review decision. Set at creation, never re-entered.
    PendingReview,
    /// Record content accepted by a reviewer.
    Approved,
    /// Record content rejected by a reviewer.
    Rejected,
    /// Reviewer requested field-level re-verification.
    NeedsVerification,
    /// Escalated for priority handling.
    Priority,
}

impl RecordStatus {
    /// The wire/display form (SCREAMING_SNAKE, matching the ledger contract).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingReview => "PENDING_REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::NeedsVerification => "NEEDS_VERIFICATION",
            Self::Priority => "PRIORITY",
        }
    }

    /// Returns `true` if this status is a valid review decision.
    ///
    /// `PendingReview` is excluded: it is the creation-only initial status
    /// and can never be the outcome of a review.
    pub fn is_review_decision(&self) -> bool {
        match self {
            Self::PendingReview => false,
            Self::Approved | Self::Rejected | Self::NeedsVerification | Self::Priority => true,
        }
    }
}

impl FromStr for RecordStatus {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING_REVIEW" => Ok(Self::PendingReview),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "NEEDS_VERIFICATION" => Ok(Self::NeedsVerification),
            "PRIORITY" => Ok(Self::Priority),
            other => Err(TypeError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triage priority tag carried by a census record, distinct from the
/// review decision status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagStatus {
    /// No special handling.
    Normal,
    /// Flagged for closer review.
    Review,
    /// Flagged for priority handling.
    Priority,
}

impl FlagStatus {
    /// The wire/display form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Review => "REVIEW",
            Self::Priority => "PRIORITY",
        }
    }
}

impl FromStr for FlagStatus {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORMAL" => Ok(Self::Normal),
            "REVIEW" => Ok(Self::Review),
            "PRIORITY" => Ok(Self::Priority),
            other => Err(TypeError::UnknownFlag(other.to_string())),
        }
    }
}

impl fmt::Display for FlagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of audited action recorded in the trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    /// Record anchored onto the ledger.
    Initialize,
    /// Review decision committed.
    Review,
    /// Integrity verification performed (pass or fail).
    Verify,
    /// Record accessed by a collaborator.
    Access,
}

impl ActionType {
    /// The wire/display form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initialize => "INITIALIZE",
            Self::Review => "REVIEW",
            Self::Verify => "VERIFY",
            Self::Access => "ACCESS",
        }
    }
}

impl FromStr for ActionType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INITIALIZE" => Ok(Self::Initialize),
            "REVIEW" => Ok(Self::Review),
            "VERIFY" => Ok(Self::Verify),
            "ACCESS" => Ok(Self::Access),
            other => Err(TypeError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrip_through_str() {
        for status in [
            RecordStatus::PendingReview,
            RecordStatus::Approved,
            RecordStatus::Rejected,
            RecordStatus::NeedsVerification,
            RecordStatus::Priority,
        ] {
            assert_eq!(status.as_str().parse::<RecordStatus>().unwrap(), status);
        }
    }

    #[test]
    fn pending_review_is_not_a_decision() {
        assert!(!RecordStatus::PendingReview.is_review_decision());
        assert!(RecordStatus::Approved.is_review_decision());
        assert!(RecordStatus::Rejected.is_review_decision());
        assert!(RecordStatus::NeedsVerification.is_review_decision());
        assert!(RecordStatus::Priority.is_review_decision());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "CLOSED".parse::<RecordStatus>().unwrap_err();
        assert_eq!(err, TypeError::UnknownStatus("CLOSED".to_string()));
    }

    #[test]
    fn flag_roundtrip_through_str() {
        for flag in [FlagStatus::Normal, FlagStatus::Review, FlagStatus::Priority] {
            assert_eq!(flag.as_str().parse::<FlagStatus>().unwrap(), flag);
        }
    }

    #[test]
    fn action_roundtrip_through_str() {
        for action in [
            ActionType::Initialize,
            ActionType::Review,
            ActionType::Verify,
            ActionType::Access,
        ] {
            assert_eq!(action.as_str().parse::<ActionType>().unwrap(), action);
        }
    }

    #[test]
    fn serde_uses_wire_form() {
        let json = serde_json::to_string(&RecordStatus::NeedsVerification).unwrap();
        assert_eq!(json, "\"NEEDS_VERIFICATION\"");
        let parsed: RecordStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, RecordStatus::NeedsVerification);
    }
}
