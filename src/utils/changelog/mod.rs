// changelog data, content sources and validation

pub mod builtin;
pub mod config;
pub mod source;
pub mod types;
pub mod validator;

pub use builtin::builtin_changelog;
pub use config::PageConfig;
pub use source::{
    BuiltinSource, ChangelogSource, FileSource, SourceFormat, StrSource, parse_changelog,
};
pub use types::{Changelog, ReleaseEntry, SectionKind, is_present};
pub use validator::{
    DATE_FORMAT, ensure_valid, has_version_entry, parse_release_date, validate_changelog,
    version_has_content,
};
