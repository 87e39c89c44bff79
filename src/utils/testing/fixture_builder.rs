// builder for on-disk changelog fixtures

use crate::utils::changelog::{Changelog, PageConfig, SourceFormat};
use crate::utils::config::CONFIG_FILE_NAME;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

enum FixtureContent {
    Changelog(Changelog),
    Raw(String),
}

/// builder for a temporary directory holding a changelog file and, optionally, a config
pub struct TestFixtureBuilder {
    content: FixtureContent,
    format: SourceFormat,
    file_name: Option<String>,
    page: Option<PageConfig>,
    extra_config: Vec<String>,
}

impl TestFixtureBuilder {
    pub fn new(changelog: Changelog) -> Self {
        Self {
            content: FixtureContent::Changelog(changelog),
            format: SourceFormat::Toml,
            file_name: None,
            page: None,
            extra_config: Vec::new(),
        }
    }

    /// use literal file content instead of a serialized changelog
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: FixtureContent::Raw(content.into()),
            ..Self::new(Changelog::default())
        }
    }

    pub fn format(mut self, format: SourceFormat) -> Self {
        self.format = format;
        self
    }

    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// write a `shipnotes.toml` with this page config and a `[source]` pointing at the fixture
    pub fn with_config(mut self, page: PageConfig) -> Self {
        self.page = Some(page);
        self
    }

    /// extra raw toml appended to the generated config
    pub fn config_section(mut self, toml: impl Into<String>) -> Self {
        self.extra_config.push(toml.into());
        self
    }

    pub fn build(self) -> Result<TestFixture, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;

        let file_name = self.file_name.unwrap_or_else(|| match self.format {
            SourceFormat::Toml => "changelog.toml".to_string(),
            SourceFormat::Json => "changelog.json".to_string(),
        });
        let changelog_path = temp_dir.path().join(&file_name);

        let content = match self.content {
            FixtureContent::Raw(raw) => raw,
            FixtureContent::Changelog(changelog) => match self.format {
                SourceFormat::Toml => toml::to_string(&changelog)?,
                SourceFormat::Json => serde_json::to_string_pretty(&changelog)?,
            },
        };
        fs::write(&changelog_path, content)?;

        let config_path = match self.page {
            Some(page) => {
                let mut config = String::new();
                config.push_str("[page]\n");
                config.push_str(&toml::to_string(&page)?);
                config.push_str(&format!("\n[source]\npath = {:?}\n", file_name));
                for section in &self.extra_config {
                    config.push('\n');
                    config.push_str(section);
                    config.push('\n');
                }
                let path = temp_dir.path().join(CONFIG_FILE_NAME);
                fs::write(&path, config)?;
                Some(path)
            }
            None => None,
        };

        Ok(TestFixture {
            temp_dir,
            changelog_path,
            config_path,
        })
    }
}

/// a built fixture; the directory is removed when this is dropped
pub struct TestFixture {
    temp_dir: TempDir,
    changelog_path: PathBuf,
    config_path: Option<PathBuf>,
}

impl TestFixture {
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn changelog_path(&self) -> &Path {
        &self.changelog_path
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::changelog::{ChangelogSource, FileSource, builtin_changelog};
    use crate::utils::config::ShipnotesConfig;

    #[test]
    fn test_toml_fixture_round_trip() {
        let fixture = TestFixtureBuilder::new(builtin_changelog().clone())
            .build()
            .unwrap();
        let loaded = FileSource::new(fixture.changelog_path()).load().unwrap();
        assert_eq!(&loaded, builtin_changelog());
        assert!(fixture.config_path().is_none());
    }

    #[test]
    fn test_json_fixture_round_trip() {
        let fixture = TestFixtureBuilder::new(builtin_changelog().clone())
            .format(SourceFormat::Json)
            .build()
            .unwrap();
        assert!(fixture.changelog_path().ends_with("changelog.json"));
        let loaded = FileSource::new(fixture.changelog_path()).load().unwrap();
        assert_eq!(&loaded, builtin_changelog());
    }

    #[test]
    fn test_config_points_at_fixture() {
        let fixture = TestFixtureBuilder::new(builtin_changelog().clone())
            .with_config(PageConfig::new().title("Updates"))
            .config_section("[validation]\nout_of_order = \"error\"")
            .build()
            .unwrap();

        let config = ShipnotesConfig::load_or_default(fixture.dir());
        assert_eq!(config.page.title, "Updates");
        assert_eq!(
            config.source.path.as_deref(),
            Some(fixture.changelog_path())
        );
    }
}
