// page rendering: document tree and output writers

pub mod document;
pub mod html;
pub mod markdown;
pub mod renderer;
pub mod text;

pub use document::{Badge, Card, Document, Footer, Header, Section};
pub use html::{HtmlOptions, to_html};
pub use markdown::to_markdown;
pub use renderer::ChangelogRenderer;
pub use text::to_text;

use crate::error::{Error, Result};
use std::fmt;
use std::io::Write;
use std::path::Path;

/// output encodings for a rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Markdown,
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "invalid output format: {}, use 'html', 'markdown', 'text' or 'json'",
                s
            )),
        }
    }
}

/// render the document in the requested format
pub fn write_document(
    document: &Document,
    format: OutputFormat,
    html_options: &HtmlOptions,
) -> Result<String> {
    let output = match format {
        OutputFormat::Html => to_html(document, html_options),
        OutputFormat::Markdown => to_markdown(document),
        OutputFormat::Text => to_text(document),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(document)
                .map_err(|e| Error::SerializeError { source: e })?;
            json.push('\n');
            json
        }
    };
    Ok(output)
}

/// render the document and write it to `writer`
pub fn write_to<W: Write>(
    writer: &mut W,
    document: &Document,
    format: OutputFormat,
    html_options: &HtmlOptions,
) -> Result<()> {
    let output = write_document(document, format, html_options)?;
    writer.write_all(output.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// render the document and write it to a file
pub fn write_file(
    path: &Path,
    document: &Document,
    format: OutputFormat,
    html_options: &HtmlOptions,
) -> Result<()> {
    let output = write_document(document, format, html_options)?;
    std::fs::write(path, output).map_err(|e| Error::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), format = %format, "wrote changelog page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::changelog::builtin_changelog;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("MD".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!("html".parse::<OutputFormat>(), Ok(OutputFormat::Html));
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_json_round_trips_document() {
        let doc = ChangelogRenderer::default().render(builtin_changelog());
        let json = write_document(&doc, OutputFormat::Json, &HtmlOptions::default()).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_write_to_buffer() {
        let doc = ChangelogRenderer::default().render(builtin_changelog());
        let mut buffer = Vec::new();
        write_to(&mut buffer, &doc, OutputFormat::Text, &HtmlOptions::default()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, to_text(&doc));
    }
}
