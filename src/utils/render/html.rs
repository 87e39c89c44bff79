// html output; all text is escaped, the stylesheet mirrors the hosted card layout

use super::document::{Card, Document, Section};
use html_escape::encode_safe;

const STYLESHEET: &str = r#"
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif; color: rgba(0, 0, 0, 0.87); background: #fafafa; }
.changelog { max-width: 800px; margin: 0 auto; padding: 48px 16px; }
.changelog h1 { text-align: center; margin: 0 0 8px; font-size: 3rem; font-weight: 300; }
.changelog .subtitle { text-align: center; margin: 0 0 48px; color: rgba(0, 0, 0, 0.6); }
.card { background: #fff; border-radius: 4px; margin-bottom: 32px; padding: 16px; box-shadow: 0 3px 1px -2px rgba(0,0,0,0.2), 0 2px 2px 0 rgba(0,0,0,0.14), 0 1px 5px 0 rgba(0,0,0,0.12); }
.card .meta { display: flex; align-items: center; margin-bottom: 16px; }
.badge { display: inline-flex; align-items: center; height: 24px; padding: 0 8px; margin-right: 16px; border-radius: 16px; background: #1976d2; color: #fff; font-size: 0.8125rem; }
.date { font-size: 0.875rem; color: rgba(0, 0, 0, 0.6); }
.card h2 { font-size: 1.25rem; font-weight: 600; margin: 24px 0 8px; }
.card .meta + section h2 { margin-top: 16px; }
.card ul { margin: 0; padding-left: 24px; }
.card li { margin-bottom: 4px; }
.changelog footer { margin-top: 48px; text-align: center; font-size: 0.875rem; color: rgba(0, 0, 0, 0.6); }
"#;

/// options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// emit a full page (doctype, head, stylesheet); otherwise only `<main>`
    pub standalone: bool,
    /// add a `changelog-digest` meta tag carrying the document fingerprint
    pub include_digest: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            standalone: true,
            include_digest: true,
        }
    }
}

impl HtmlOptions {
    pub fn fragment() -> Self {
        Self {
            standalone: false,
            include_digest: false,
        }
    }
}

/// render the document as HTML
pub fn to_html(document: &Document, options: &HtmlOptions) -> String {
    let mut output = String::new();

    if options.standalone {
        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n");
        output.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        if options.include_digest {
            output.push_str(&format!(
                "<meta name=\"changelog-digest\" content=\"{}\">\n",
                document.fingerprint()
            ));
        }
        output.push_str(&format!(
            "<title>{}</title>\n",
            encode_safe(&document.header.title)
        ));
        output.push_str(&format!("<style>{}</style>\n", STYLESHEET));
        output.push_str("</head>\n<body>\n");
    }

    output.push_str("<main class=\"changelog\">\n");
    output.push_str(&format!(
        "<h1>{}</h1>\n<p class=\"subtitle\">{}</p>\n",
        encode_safe(&document.header.title),
        encode_safe(&document.header.subtitle)
    ));

    for card in &document.cards {
        write_card(&mut output, card);
    }

    output.push_str(&format!(
        "<footer><p>{}</p></footer>\n",
        encode_safe(&document.footer.note)
    ));
    output.push_str("</main>\n");

    if options.standalone {
        output.push_str("</body>\n</html>\n");
    }

    output
}

fn write_card(output: &mut String, card: &Card) {
    output.push_str(&format!(
        "<article class=\"card\" id=\"{}\" data-version=\"{}\">\n",
        encode_safe(&card.anchor()),
        encode_safe(&card.key)
    ));
    output.push_str(&format!(
        "<div class=\"meta\"><span class=\"badge\">{}</span><span class=\"date\">{}</span></div>\n",
        encode_safe(&card.badge.label),
        encode_safe(&card.date)
    ));
    for section in &card.sections {
        write_section(output, section);
    }
    output.push_str("</article>\n");
}

fn write_section(output: &mut String, section: &Section) {
    output.push_str(&format!("<section class=\"{}\">\n", section.kind));
    output.push_str(&format!(
        "<h2>{}</h2>\n<ul>\n",
        encode_safe(&section.display_heading())
    ));
    for item in &section.items {
        output.push_str(&format!("<li>{}</li>\n", encode_safe(item)));
    }
    output.push_str("</ul>\n</section>\n");
}
