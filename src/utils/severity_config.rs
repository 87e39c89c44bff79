use super::severity::{IssueSeverity, IssueType};
use serde::{Deserialize, Serialize};

/// configuration for issue severity levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityConfig {
    pub empty_version: IssueSeverity,
    pub duplicate_version: IssueSeverity,
    pub invalid_version: IssueSeverity,
    pub out_of_order: IssueSeverity,
    pub unparsable_date: IssueSeverity,
    pub date_out_of_order: IssueSeverity,
    pub empty_release: IssueSeverity,
    pub blank_item: IssueSeverity,
}

impl SeverityConfig {
    /// get severity for a specific issue type
    pub fn get_severity(&self, issue_type: IssueType) -> IssueSeverity {
        match issue_type {
            IssueType::EmptyVersion => self.empty_version,
            IssueType::DuplicateVersion => self.duplicate_version,
            IssueType::InvalidVersion => self.invalid_version,
            IssueType::OutOfOrder => self.out_of_order,
            IssueType::UnparsableDate => self.unparsable_date,
            IssueType::DateOutOfOrder => self.date_out_of_order,
            IssueType::EmptyRelease => self.empty_release,
            IssueType::BlankItem => self.blank_item,
        }
    }

    /// strict profile: every issue type is an error
    pub fn strict() -> Self {
        Self {
            empty_version: IssueSeverity::Error,
            duplicate_version: IssueSeverity::Error,
            invalid_version: IssueSeverity::Error,
            out_of_order: IssueSeverity::Error,
            unparsable_date: IssueSeverity::Error,
            date_out_of_order: IssueSeverity::Error,
            empty_release: IssueSeverity::Error,
            blank_item: IssueSeverity::Error,
        }
    }
}

impl Default for SeverityConfig {
    /// defaults:
    /// - error: empty version, duplicate version
    /// - warning: everything else
    fn default() -> Self {
        Self {
            empty_version: IssueSeverity::Error,
            duplicate_version: IssueSeverity::Error,
            invalid_version: IssueSeverity::Warning,
            out_of_order: IssueSeverity::Warning,
            unparsable_date: IssueSeverity::Warning,
            date_out_of_order: IssueSeverity::Warning,
            empty_release: IssueSeverity::Warning,
            blank_item: IssueSeverity::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SeverityConfig::default();
        assert_eq!(
            config.get_severity(IssueType::DuplicateVersion),
            IssueSeverity::Error
        );
        assert_eq!(
            config.get_severity(IssueType::OutOfOrder),
            IssueSeverity::Warning
        );
    }

    #[test]
    fn test_toml_override() {
        let config: SeverityConfig = toml::from_str(r#"out_of_order = "error""#).unwrap();
        assert_eq!(
            config.get_severity(IssueType::OutOfOrder),
            IssueSeverity::Error
        );
        assert_eq!(
            config.get_severity(IssueType::BlankItem),
            IssueSeverity::Warning
        );
    }
}
