use serde::{Deserialize, Serialize};
use std::fmt;

/// severity level for issues detected during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// error-level issue that should cause validation to fail
    Error,
    /// warning-level issue that is informational only
    #[serde(alias = "warn")]
    Warning,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueSeverity::Error => write!(f, "ERROR"),
            IssueSeverity::Warning => write!(f, "WARN"),
        }
    }
}

impl std::str::FromStr for IssueSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(IssueSeverity::Error),
            "warning" | "warn" => Ok(IssueSeverity::Warning),
            _ => Err(format!("invalid severity: {}, use 'error' or 'warning'", s)),
        }
    }
}

/// type of data-shape issue found in a changelog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// version string is empty
    EmptyVersion,
    /// version appears more than once
    DuplicateVersion,
    /// version is not a semantic version
    InvalidVersion,
    /// version is not lower than the one listed before it
    OutOfOrder,
    /// date is not in "Month D, YYYY" form
    UnparsableDate,
    /// date is later than the one listed before it
    DateOutOfOrder,
    /// release has nothing to show
    EmptyRelease,
    /// a list item is blank
    BlankItem,
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueType::EmptyVersion => write!(f, "empty_version"),
            IssueType::DuplicateVersion => write!(f, "duplicate_version"),
            IssueType::InvalidVersion => write!(f, "invalid_version"),
            IssueType::OutOfOrder => write!(f, "out_of_order"),
            IssueType::UnparsableDate => write!(f, "unparsable_date"),
            IssueType::DateOutOfOrder => write!(f, "date_out_of_order"),
            IssueType::EmptyRelease => write!(f, "empty_release"),
            IssueType::BlankItem => write!(f, "blank_item"),
        }
    }
}

/// structured issue with severity, type, and message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// severity level of the issue
    pub severity: IssueSeverity,
    /// type of the issue
    pub issue_type: IssueType,
    /// position of the offending release in the changelog
    pub index: usize,
    /// human-readable message describing the issue
    pub message: String,
}

impl Issue {
    pub fn new(
        severity: IssueSeverity,
        issue_type: IssueType,
        index: usize,
        message: String,
    ) -> Self {
        Self {
            severity,
            issue_type,
            index,
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == IssueSeverity::Warning
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] release #{}: {} ({})",
            self.severity,
            self.index + 1,
            self.message,
            self.issue_type
        )
    }
}
