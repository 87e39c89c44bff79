// pre-defined changelog scenarios

use super::fixture_builder::{TestFixture, TestFixtureBuilder};
use crate::utils::changelog::{Changelog, ReleaseEntry, builtin_changelog};

/// pre-defined test scenarios
pub enum TestScenario {
    /// the built-in release history: 2.0.0, 1.5.0, 1.0.0
    Builtin,
    /// one release with bug fixes present but empty, one with bug fixes absent
    EmptyAndAbsentLists,
    /// the same version listed twice, plus an unversioned entry
    DuplicateVersions,
    /// versions listed oldest first
    Ascending,
}

impl TestScenario {
    pub fn changelog(&self) -> Changelog {
        match self {
            TestScenario::Builtin => builtin_changelog().clone(),
            TestScenario::EmptyAndAbsentLists => Changelog::new(vec![
                ReleaseEntry::new("1.1.0", "February 2, 2025")
                    .with_features(["Pinned notes"])
                    .with_bug_fixes(Vec::<String>::new()),
                ReleaseEntry::new("1.0.0", "November 1, 2024").with_features(["Pinned notes"]),
            ]),
            TestScenario::DuplicateVersions => Changelog::new(vec![
                ReleaseEntry::new("1.0.0", "November 1, 2024").with_features(["first"]),
                ReleaseEntry::new("1.0.0", "November 1, 2024").with_features(["second"]),
                ReleaseEntry::new("", "November 1, 2024").with_features(["third"]),
            ]),
            TestScenario::Ascending => Changelog::new(vec![
                ReleaseEntry::new("1.0.0", "November 1, 2024").with_features(["first"]),
                ReleaseEntry::new("1.5.0", "December 20, 2024").with_improvements(["faster"]),
            ]),
        }
    }

    /// write the scenario to a temporary toml file
    pub fn build(self) -> Result<TestFixture, Box<dyn std::error::Error>> {
        TestFixtureBuilder::new(self.changelog()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::changelog::{ChangelogSource, FileSource, SectionKind};

    #[test]
    fn test_empty_and_absent_lists_survive_toml() {
        let fixture = TestScenario::EmptyAndAbsentLists.build().unwrap();
        let loaded = FileSource::new(fixture.changelog_path()).load().unwrap();

        let present_empty = loaded.get("1.1.0").unwrap();
        assert_eq!(
            present_empty.raw_section(SectionKind::BugFixes).map(|s| s.len()),
            Some(0)
        );
        let absent = loaded.get("1.0.0").unwrap();
        assert!(absent.raw_section(SectionKind::BugFixes).is_none());
    }

    #[test]
    fn test_duplicate_scenario_shape() {
        let changelog = TestScenario::DuplicateVersions.changelog();
        assert_eq!(changelog.versions(), vec!["1.0.0", "1.0.0", ""]);
    }
}
