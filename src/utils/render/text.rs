// plain terminal output

use super::document::Document;

const MIN_RULE_WIDTH: usize = 10;

/// render the document as plain text for a terminal
pub fn to_text(document: &Document) -> String {
    let mut output = String::new();

    let width = document
        .header
        .title
        .chars()
        .count()
        .max(document.header.subtitle.chars().count())
        .max(MIN_RULE_WIDTH);

    output.push_str(&format!("{:^width$}\n", document.header.title, width = width));
    output.push_str(&format!("{:^width$}\n", document.header.subtitle, width = width));
    output.push_str(&format!("{}\n", "=".repeat(width)));

    for card in &document.cards {
        output.push('\n');
        output.push_str(&format!("[{}]  {}\n", card.badge.label, card.date));

        for section in &card.sections {
            output.push_str(&format!("\n  {}\n", section.display_heading()));
            for item in &section.items {
                output.push_str(&format!("    * {}\n", item));
            }
        }
    }

    output.push('\n');
    output.push_str(&format!("{}\n", "-".repeat(width)));
    output.push_str(&format!("{}\n", document.footer.note));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::changelog::{PageConfig, builtin_changelog};
    use crate::utils::render::ChangelogRenderer;

    #[test]
    fn test_text_layout() {
        let doc = ChangelogRenderer::new(PageConfig::new().show_icons(false))
            .render(builtin_changelog());
        let text = to_text(&doc);

        assert!(text.contains("[v2.0.0]  January 15, 2025\n"));
        assert!(text.contains("\n  New Features\n    * AI-powered content generation for notes\n"));
        assert!(text.trim_end().ends_with("contact support."));

        let first = text.find("[v2.0.0]").unwrap();
        let second = text.find("[v1.5.0]").unwrap();
        let third = text.find("[v1.0.0]").unwrap();
        assert!(first < second && second < third);
    }
}
