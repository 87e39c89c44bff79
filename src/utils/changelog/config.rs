// page presentation configuration

use super::types::SectionKind;
use serde::{Deserialize, Serialize};

/// static text and labels that surround the release cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// top-level page title (default: "Changelog")
    pub title: String,

    /// line shown under the title
    pub subtitle: String,

    /// note shown after the last card
    pub footer: String,

    /// prefix section headings with their icon
    pub show_icons: bool,

    pub features_heading: String,
    pub improvements_heading: String,
    pub bug_fixes_heading: String,
}

impl PageConfig {
    /// create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    pub fn show_icons(mut self, show: bool) -> Self {
        self.show_icons = show;
        self
    }

    pub fn heading(mut self, kind: SectionKind, heading: impl Into<String>) -> Self {
        let heading = heading.into();
        match kind {
            SectionKind::Features => self.features_heading = heading,
            SectionKind::Improvements => self.improvements_heading = heading,
            SectionKind::BugFixes => self.bug_fixes_heading = heading,
        }
        self
    }

    /// configured heading text for a section kind
    pub fn heading_for(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Features => &self.features_heading,
            SectionKind::Improvements => &self.improvements_heading,
            SectionKind::BugFixes => &self.bug_fixes_heading,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Changelog".to_string(),
            subtitle: "Stay up to date with the latest features and improvements".to_string(),
            footer: "For more information about each release, visit our documentation or contact support."
                .to_string(),
            show_icons: true,
            features_heading: SectionKind::Features.default_heading().to_string(),
            improvements_heading: SectionKind::Improvements.default_heading().to_string(),
            bug_fixes_heading: SectionKind::BugFixes.default_heading().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headings() {
        let config = PageConfig::default();
        assert_eq!(config.heading_for(SectionKind::Features), "New Features");
        assert_eq!(config.heading_for(SectionKind::Improvements), "Improvements");
        assert_eq!(config.heading_for(SectionKind::BugFixes), "Bug Fixes");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: PageConfig = toml::from_str(
            r#"
            title = "Release Notes"
            show_icons = false
        "#,
        )
        .unwrap();

        assert_eq!(config.title, "Release Notes");
        assert!(!config.show_icons);
        assert_eq!(config.footer, PageConfig::default().footer);
    }

    #[test]
    fn test_builder_overrides_heading() {
        let config = PageConfig::new().heading(SectionKind::BugFixes, "Fixes");
        assert_eq!(config.heading_for(SectionKind::BugFixes), "Fixes");
    }
}
