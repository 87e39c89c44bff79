// changelog renderer

use super::document::{Badge, Card, Document, Footer, Header, Section};
use crate::utils::changelog::{Changelog, PageConfig, ReleaseEntry};

/// turns an ordered release list into a page document
///
/// rendering is a pure function of the changelog and the page config: no
/// validation, no I/O, and the same input always yields an equal document
#[derive(Debug, Clone, Default)]
pub struct ChangelogRenderer {
    config: PageConfig,
}

impl ChangelogRenderer {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn render(&self, changelog: &Changelog) -> Document {
        let cards: Vec<Card> = changelog.iter().map(|e| self.render_card(e)).collect();

        tracing::debug!(
            cards = cards.len(),
            sections = cards.iter().map(|c| c.sections.len()).sum::<usize>(),
            "rendered changelog"
        );

        Document {
            header: Header {
                title: self.config.title.clone(),
                subtitle: self.config.subtitle.clone(),
            },
            cards,
            footer: Footer {
                note: self.config.footer.clone(),
            },
        }
    }

    pub fn render_card(&self, entry: &ReleaseEntry) -> Card {
        let sections = entry
            .visible_sections()
            .map(|(kind, items)| Section {
                kind,
                heading: self.config.heading_for(kind).to_string(),
                icon: self.config.show_icons.then(|| kind.icon().to_string()),
                items: items.to_vec(),
            })
            .collect();

        Card {
            key: entry.version().to_string(),
            badge: Badge {
                label: format!("v{}", entry.version()),
            },
            date: entry.date().to_string(),
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::changelog::{SectionKind, builtin_changelog};

    #[test]
    fn test_header_and_footer_defaults() {
        let doc = ChangelogRenderer::default().render(&Changelog::default());
        assert_eq!(doc.header.title, "Changelog");
        assert_eq!(
            doc.header.subtitle,
            "Stay up to date with the latest features and improvements"
        );
        assert!(doc.cards.is_empty());
        assert!(doc.footer.note.starts_with("For more information"));
    }

    #[test]
    fn test_card_contents() {
        let entry = ReleaseEntry::new("1.5.0", "December 20, 2024")
            .with_features(["a", "b"])
            .with_bug_fixes(["c"]);
        let card = ChangelogRenderer::default().render_card(&entry);

        assert_eq!(card.key, "1.5.0");
        assert_eq!(card.badge.label, "v1.5.0");
        assert_eq!(card.date, "December 20, 2024");

        let kinds: Vec<SectionKind> = card.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SectionKind::Features, SectionKind::BugFixes]);
        assert_eq!(card.sections[0].items, vec!["a", "b"]);
        assert_eq!(card.sections[1].heading, "Bug Fixes");
        assert_eq!(card.sections[1].icon.as_deref(), Some("🐛"));
    }

    #[test]
    fn test_config_flows_into_document() {
        let config = PageConfig::new()
            .title("Release Notes")
            .show_icons(false)
            .heading(SectionKind::Features, "What's new");
        let doc = ChangelogRenderer::new(config).render(builtin_changelog());

        assert_eq!(doc.header.title, "Release Notes");
        let section = doc.cards[0].section(SectionKind::Features).unwrap();
        assert_eq!(section.heading, "What's new");
        assert!(section.icon.is_none());
    }

    #[test]
    fn test_no_validation_at_render_time() {
        let changelog = Changelog::new(vec![
            ReleaseEntry::new("1.0.0", "a"),
            ReleaseEntry::new("1.0.0", "b"),
        ]);
        let doc = ChangelogRenderer::default().render(&changelog);
        assert_eq!(doc.cards.len(), 2);
        assert_eq!(doc.duplicate_keys(), vec!["1.0.0"]);
        assert!(doc.cards.iter().all(|c| c.sections.is_empty()));
    }
}
