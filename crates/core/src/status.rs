//! Text-valued enums for interview types and placement statuses.
//!
//! Both are stored as `TEXT` columns guarded by `CHECK` constraints. The
//! string form (`as_str`) is the exact value written to the database and
//! exchanged over JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default status for a student newly assigned to an interview.
pub const DEFAULT_ASSIGNMENT_STATUS: &str = "Scheduled";

// ---------------------------------------------------------------------------
// InterviewType
// ---------------------------------------------------------------------------

/// Round of the recruitment process an interview belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterviewType {
    Technical,
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "Group Discussion")]
    GroupDiscussion,
    Aptitude,
    Final,
}

impl InterviewType {
    pub const ALL: [InterviewType; 5] = [
        InterviewType::Technical,
        InterviewType::Hr,
        InterviewType::GroupDiscussion,
        InterviewType::Aptitude,
        InterviewType::Final,
    ];

    /// String representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Technical => "Technical",
            InterviewType::Hr => "HR",
            InterviewType::GroupDiscussion => "Group Discussion",
            InterviewType::Aptitude => "Aptitude",
            InterviewType::Final => "Final",
        }
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InterviewType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown interview type '{s}'")))
    }
}

impl TryFrom<String> for InterviewType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// PlacementStatus
// ---------------------------------------------------------------------------

/// Outcome of a placement offer. Only `Confirmed` counts toward statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlacementStatus {
    #[default]
    Confirmed,
    Pending,
    Rejected,
}

impl PlacementStatus {
    pub const ALL: [PlacementStatus; 3] = [
        PlacementStatus::Confirmed,
        PlacementStatus::Pending,
        PlacementStatus::Rejected,
    ];

    /// String representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementStatus::Confirmed => "Confirmed",
            PlacementStatus::Pending => "Pending",
            PlacementStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for PlacementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlacementStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlacementStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown placement status '{s}'")))
    }
}

impl TryFrom<String> for PlacementStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn interview_type_round_trips_through_str() {
        for t in InterviewType::ALL {
            assert_eq!(t.as_str().parse::<InterviewType>().unwrap(), t);
        }
    }

    #[test]
    fn interview_type_json_uses_display_names() {
        let json = serde_json::to_string(&InterviewType::GroupDiscussion).unwrap();
        assert_eq!(json, "\"Group Discussion\"");
        let parsed: InterviewType = serde_json::from_str("\"HR\"").unwrap();
        assert_eq!(parsed, InterviewType::Hr);
    }

    #[test]
    fn unknown_interview_type_is_validation_error() {
        assert_matches!(
            "Coding".parse::<InterviewType>(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn placement_status_defaults_to_confirmed() {
        assert_eq!(PlacementStatus::default(), PlacementStatus::Confirmed);
    }

    #[test]
    fn placement_status_parsing_is_case_sensitive() {
        assert_eq!(
            "Pending".parse::<PlacementStatus>().unwrap(),
            PlacementStatus::Pending
        );
        assert!("confirmed".parse::<PlacementStatus>().is_err());
    }
}
