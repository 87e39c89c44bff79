// changelog data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// the three categorized lists a release can carry, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Features,
    Improvements,
    BugFixes,
}

impl SectionKind {
    /// fixed display order: features, then improvements, then bug fixes
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Features,
        SectionKind::Improvements,
        SectionKind::BugFixes,
    ];

    pub fn default_heading(&self) -> &'static str {
        match self {
            SectionKind::Features => "New Features",
            SectionKind::Improvements => "Improvements",
            SectionKind::BugFixes => "Bug Fixes",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SectionKind::Features => "✨",
            SectionKind::Improvements => "🚀",
            SectionKind::BugFixes => "🐛",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Features => write!(f, "features"),
            SectionKind::Improvements => write!(f, "improvements"),
            SectionKind::BugFixes => write!(f, "bug_fixes"),
        }
    }
}

/// presence rule: a list is shown only if it exists and has at least one item
pub fn is_present(items: Option<&[String]>) -> bool {
    items.is_some_and(|items| !items.is_empty())
}

/// one published version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseEntry {
    version: String,
    date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    improvements: Option<Vec<String>>,
    #[serde(
        default,
        rename = "bugFixes",
        alias = "bug_fixes",
        skip_serializing_if = "Option::is_none"
    )]
    bug_fixes: Option<Vec<String>>,
}

impl ReleaseEntry {
    pub fn new(version: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: date.into(),
            features: None,
            improvements: None,
            bug_fixes: None,
        }
    }

    pub fn with_features<I, S>(self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_section(SectionKind::Features, items)
    }

    pub fn with_improvements<I, S>(self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_section(SectionKind::Improvements, items)
    }

    pub fn with_bug_fixes<I, S>(self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_section(SectionKind::BugFixes, items)
    }

    /// set a list explicitly; an empty iterator yields a present-but-empty list
    pub fn with_section<I, S>(mut self, kind: SectionKind, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = Some(items.into_iter().map(Into::into).collect());
        match kind {
            SectionKind::Features => self.features = items,
            SectionKind::Improvements => self.improvements = items,
            SectionKind::BugFixes => self.bug_fixes = items,
        }
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// the backing list as stored, without applying the presence rule
    pub fn raw_section(&self, kind: SectionKind) -> Option<&[String]> {
        match kind {
            SectionKind::Features => self.features.as_deref(),
            SectionKind::Improvements => self.improvements.as_deref(),
            SectionKind::BugFixes => self.bug_fixes.as_deref(),
        }
    }

    /// the list for `kind` if it passes the presence rule
    pub fn section(&self, kind: SectionKind) -> Option<&[String]> {
        let items = self.raw_section(kind);
        if is_present(items) { items } else { None }
    }

    /// visible sections in fixed display order
    pub fn visible_sections(&self) -> impl Iterator<Item = (SectionKind, &[String])> + '_ {
        SectionKind::ALL
            .into_iter()
            .filter_map(|kind| self.section(kind).map(|items| (kind, items)))
    }

    pub fn has_content(&self) -> bool {
        self.visible_sections().next().is_some()
    }
}

/// ordered sequence of releases; display order is storage order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Changelog {
    #[serde(rename = "release", alias = "releases", default)]
    entries: Vec<ReleaseEntry>,
}

impl Changelog {
    pub fn new(entries: Vec<ReleaseEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ReleaseEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReleaseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn versions(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.version()).collect()
    }

    /// first entry with the given version
    pub fn get(&self, version: &str) -> Option<&ReleaseEntry> {
        self.entries.iter().find(|e| e.version() == version)
    }

    pub fn latest(&self) -> Option<&ReleaseEntry> {
        self.entries.first()
    }
}

impl FromIterator<ReleaseEntry> for Changelog {
    fn from_iter<T: IntoIterator<Item = ReleaseEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Changelog {
    type Item = &'a ReleaseEntry;
    type IntoIter = std::slice::Iter<'a, ReleaseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_rule() {
        let empty: Vec<String> = Vec::new();
        let one = vec!["item".to_string()];
        assert!(!is_present(None));
        assert!(!is_present(Some(empty.as_slice())));
        assert!(is_present(Some(one.as_slice())));
    }

    #[test]
    fn test_section_hides_absent_and_empty() {
        let entry = ReleaseEntry::new("1.0.0", "November 1, 2024")
            .with_features(["Initial release"])
            .with_bug_fixes(Vec::<String>::new());

        assert_eq!(
            entry.section(SectionKind::Features),
            Some(&["Initial release".to_string()][..])
        );
        assert_eq!(entry.section(SectionKind::Improvements), None);
        assert_eq!(entry.section(SectionKind::BugFixes), None);
        assert_eq!(entry.raw_section(SectionKind::BugFixes), Some(&[] as &[String]));
    }

    #[test]
    fn test_visible_sections_fixed_order() {
        let entry = ReleaseEntry::new("1.5.0", "December 20, 2024")
            .with_bug_fixes(["fix"])
            .with_features(["feat"])
            .with_improvements(["improve"]);

        let kinds: Vec<SectionKind> = entry.visible_sections().map(|(k, _)| k).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
    }

    #[test]
    fn test_has_content() {
        assert!(!ReleaseEntry::new("0.1.0", "today").has_content());
        assert!(
            ReleaseEntry::new("0.1.0", "today")
                .with_improvements(["faster"])
                .has_content()
        );
    }

    #[test]
    fn test_changelog_preserves_order() {
        let changelog: Changelog = ["1.0.0", "3.0.0", "2.0.0"]
            .into_iter()
            .map(|v| ReleaseEntry::new(v, "date"))
            .collect();
        assert_eq!(changelog.versions(), vec!["1.0.0", "3.0.0", "2.0.0"]);
        assert_eq!(changelog.latest().map(|e| e.version()), Some("1.0.0"));
    }

    #[test]
    fn test_bug_fixes_serde_names() {
        let json = r#"{"version":"1.0.0","date":"d","bugFixes":["a"]}"#;
        let entry: ReleaseEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.section(SectionKind::BugFixes).map(|s| s.len()), Some(1));

        let json = r#"{"version":"1.0.0","date":"d","bug_fixes":["a","b"]}"#;
        let entry: ReleaseEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.section(SectionKind::BugFixes).map(|s| s.len()), Some(2));

        let out = serde_json::to_string(&entry).unwrap();
        assert!(out.contains("\"bugFixes\""));
        assert!(!out.contains("features"));
    }
}
