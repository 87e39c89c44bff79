use shipnotes::utils::testing::TestScenario;
use shipnotes::{
    Changelog, ChangelogRenderer, HtmlOptions, OutputFormat, ReleaseEntry, SectionKind,
    builtin_changelog, write_document,
};

fn render(changelog: &Changelog) -> shipnotes::Document {
    ChangelogRenderer::default().render(changelog)
}

#[test]
fn test_features_heading_followed_by_items_in_order() {
    let changelog = builtin_changelog();
    let doc = render(changelog);

    for (entry, card) in changelog.iter().zip(&doc.cards) {
        if let Some(features) = entry.section(SectionKind::Features) {
            let section = card.section(SectionKind::Features).unwrap();
            assert_eq!(section.heading, "New Features");
            assert_eq!(section.items.len(), features.len());
            assert_eq!(section.items.as_slice(), features);
        }
    }
}

#[test]
fn test_absent_or_empty_improvements_hide_heading() {
    let changelog = Changelog::new(vec![
        ReleaseEntry::new("2.0.0", "January 15, 2025")
            .with_features(["a"])
            .with_improvements(Vec::<String>::new()),
        ReleaseEntry::new("1.0.0", "November 1, 2024").with_features(["b"]),
    ]);
    let doc = render(&changelog);

    for card in &doc.cards {
        assert!(card.section(SectionKind::Improvements).is_none());
    }
    let markdown = write_document(&doc, OutputFormat::Markdown, &HtmlOptions::default()).unwrap();
    assert!(!markdown.contains("Improvements"));
}

#[test]
fn test_badges_follow_input_order() {
    let changelog: Changelog = ["0.1.0", "3.2.1", "1.0.0"]
        .into_iter()
        .map(|v| ReleaseEntry::new(v, "June 1, 2025"))
        .collect();
    let doc = render(&changelog);

    assert_eq!(doc.badges(), vec!["v0.1.0", "v3.2.1", "v1.0.0"]);
    let keys: Vec<&str> = doc.cards.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, changelog.versions());
}

#[test]
fn test_rendering_is_deterministic() {
    let renderer = ChangelogRenderer::default();
    let first = renderer.render(builtin_changelog());
    let second = renderer.render(builtin_changelog());

    assert_eq!(first, second);
    assert_eq!(first.fingerprint(), second.fingerprint());

    for format in [
        OutputFormat::Html,
        OutputFormat::Markdown,
        OutputFormat::Text,
        OutputFormat::Json,
    ] {
        let a = write_document(&first, format, &HtmlOptions::default()).unwrap();
        let b = write_document(&second, format, &HtmlOptions::default()).unwrap();
        assert_eq!(a, b, "{} output differs between renders", format);
    }
}

#[test]
fn test_initial_release_card() {
    let entry = ReleaseEntry::new("1.0.0", "November 1, 2024").with_features([
        "Initial release of SeaNotes",
        "User authentication with email/password",
    ]);
    let doc = render(&Changelog::new(vec![entry]));
    let card = &doc.cards[0];

    assert_eq!(card.badge.label, "v1.0.0");
    assert_eq!(card.date, "November 1, 2024");
    assert_eq!(card.sections.len(), 1);
    assert_eq!(
        card.section(SectionKind::Features).unwrap().items,
        vec![
            "Initial release of SeaNotes",
            "User authentication with email/password"
        ]
    );
    assert!(card.section(SectionKind::Improvements).is_none());
    assert!(card.section(SectionKind::BugFixes).is_none());
}

#[test]
fn test_empty_and_absent_bug_fixes_render_identically() {
    let present_empty = ReleaseEntry::new("1.0.0", "November 1, 2024")
        .with_features(["x"])
        .with_bug_fixes(Vec::<String>::new());
    let absent = ReleaseEntry::new("1.0.0", "November 1, 2024").with_features(["x"]);

    let a = render(&Changelog::new(vec![present_empty]));
    let b = render(&Changelog::new(vec![absent]));

    assert_eq!(a, b);
    assert!(a.cards[0].section(SectionKind::BugFixes).is_none());
}

#[test]
fn test_scenario_with_empty_list_round_trips_through_file() {
    use shipnotes::{ChangelogSource, FileSource};

    let fixture = TestScenario::EmptyAndAbsentLists.build().unwrap();
    let changelog = FileSource::new(fixture.changelog_path()).load().unwrap();
    let doc = render(&changelog);

    assert_eq!(doc.badges(), vec!["v1.1.0", "v1.0.0"]);
    assert!(doc.cards.iter().all(|c| c.sections.len() == 1));
}
