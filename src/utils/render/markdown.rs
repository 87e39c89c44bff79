// markdown output

use super::document::Document;

/// characters that would change meaning at the start of, or inside, a list item
fn escape_inline(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '|') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escape_block_marker(escaped)
}

// a leading "-", "+" or "1." / "1)" would open a nested list
fn escape_block_marker(text: String) -> String {
    let digits = text.chars().take_while(|c| c.is_ascii_digit()).count();
    if text.starts_with(['-', '+']) {
        format!("\\{}", text)
    } else if digits > 0 && text[digits..].starts_with(['.', ')']) {
        format!("{}\\{}", &text[..digits], &text[digits..])
    } else {
        text
    }
}

/// wrap text in a code span whose fence is longer than any backtick run inside
fn code_span(text: &str) -> String {
    let longest_run = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or_default();
    let fence = "`".repeat(longest_run + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{} {} {}", fence, text, fence)
    } else {
        format!("{}{}{}", fence, text, fence)
    }
}

/// render the document as CommonMark
pub fn to_markdown(document: &Document) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", escape_inline(&document.header.title)));
    if !document.header.subtitle.is_empty() {
        output.push_str(&format!("_{}_\n\n", escape_inline(&document.header.subtitle)));
    }

    for card in &document.cards {
        output.push_str(&format!(
            "## {} {}\n",
            code_span(&card.badge.label),
            escape_inline(&card.date)
        ));

        for section in &card.sections {
            output.push_str(&format!(
                "\n### {}\n\n",
                escape_inline(&section.display_heading())
            ));
            for item in &section.items {
                output.push_str(&format!("- {}\n", escape_inline(item)));
            }
        }
        output.push_str("\n---\n\n");
    }

    if !document.footer.note.is_empty() {
        output.push_str(&format!("{}\n", escape_inline(&document.footer.note)));
    }

    output
}
