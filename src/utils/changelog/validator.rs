// changelog validator

use super::types::{Changelog, ReleaseEntry, SectionKind};
use crate::error::{Error, Result};
use crate::utils::severity::{Issue, IssueType};
use crate::utils::severity_config::SeverityConfig;
use chrono::NaiveDate;
use semver::Version;
use std::collections::HashSet;

/// date layout used by release entries, e.g. "January 15, 2025"
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// parse a release date; `None` when it does not follow `DATE_FORMAT`
pub fn parse_release_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

/// validate a changelog's data shape
///
/// rendering never calls this; it backs the `check` command and strict rendering
pub fn validate_changelog(changelog: &Changelog, config: &SeverityConfig) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut previous_version: Option<Version> = None;
    let mut previous_date: Option<NaiveDate> = None;

    let mut report = |issue_type: IssueType, index: usize, message: String| {
        issues.push(Issue::new(
            config.get_severity(issue_type),
            issue_type,
            index,
            message,
        ));
    };

    for (index, entry) in changelog.iter().enumerate() {
        let version = entry.version().trim();

        if version.is_empty() {
            report(IssueType::EmptyVersion, index, "version is empty".to_string());
        } else if !seen.insert(version) {
            report(
                IssueType::DuplicateVersion,
                index,
                format!("version {} is already listed", version),
            );
        } else {
            match Version::parse(version.trim_start_matches('v')) {
                Ok(parsed) => {
                    if let Some(previous) = &previous_version
                        && parsed >= *previous
                    {
                        report(
                            IssueType::OutOfOrder,
                            index,
                            format!("version {} is not lower than {}", parsed, previous),
                        );
                    }
                    previous_version = Some(parsed);
                }
                Err(e) => report(
                    IssueType::InvalidVersion,
                    index,
                    format!("version '{}' is not a semantic version ({})", version, e),
                ),
            }
        }

        match parse_release_date(entry.date()) {
            Some(date) => {
                if let Some(previous) = previous_date
                    && date > previous
                {
                    report(
                        IssueType::DateOutOfOrder,
                        index,
                        format!("date {} is later than the previous release ({})", date, previous),
                    );
                }
                previous_date = Some(date);
            }
            None => report(
                IssueType::UnparsableDate,
                index,
                format!("date '{}' does not look like 'Month D, YYYY'", entry.date()),
            ),
        }

        if !entry.has_content() {
            report(
                IssueType::EmptyRelease,
                index,
                format!("release {} has no features, improvements or bug fixes", label(entry)),
            );
        }

        for kind in SectionKind::ALL {
            let blanks = entry
                .raw_section(kind)
                .unwrap_or_default()
                .iter()
                .filter(|item| item.trim().is_empty())
                .count();
            if blanks > 0 {
                report(
                    IssueType::BlankItem,
                    index,
                    format!("release {} has {} blank {} item(s)", label(entry), blanks, kind),
                );
            }
        }
    }

    tracing::debug!(
        releases = changelog.len(),
        issues = issues.len(),
        "validated changelog"
    );
    issues
}

/// validate and fail when any error-level issue is found
///
/// on success the warnings (if any) are returned
pub fn ensure_valid(changelog: &Changelog, config: &SeverityConfig) -> Result<Vec<Issue>> {
    let issues = validate_changelog(changelog, config);
    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        return Err(Error::ValidationFailed {
            errors,
            warnings: issues.len() - errors,
        });
    }
    Ok(issues)
}

fn label(entry: &ReleaseEntry) -> String {
    if entry.version().trim().is_empty() {
        "(unversioned)".to_string()
    } else {
        entry.version().to_string()
    }
}

/// check if a version is listed
pub fn has_version_entry(changelog: &Changelog, version: &str) -> bool {
    changelog.get(version).is_some()
}

/// check if a version is listed and has at least one visible section
pub fn version_has_content(changelog: &Changelog, version: &str) -> bool {
    changelog.get(version).is_some_and(|e| e.has_content())
}
