pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    BuiltinSource, Changelog, ChangelogSource, FileSource, PageConfig, ReleaseEntry, SectionKind,
    SourceFormat, StrSource, builtin_changelog, ensure_valid, has_version_entry, is_present,
    parse_changelog, parse_release_date, validate_changelog, version_has_content,
};
pub use utils::config::{CONFIG_FILE_NAME, ShipnotesConfig, SourceConfig};
pub use utils::render::{
    Badge, Card, ChangelogRenderer, Document, Footer, Header, HtmlOptions, OutputFormat, Section,
    to_html, to_markdown, to_text, write_document, write_file, write_to,
};
pub use utils::severity::{Issue, IssueSeverity, IssueType};
pub use utils::severity_config::SeverityConfig;
