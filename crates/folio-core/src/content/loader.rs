use std::path::Path;

use tracing::debug;

use super::models::Portfolio;
use crate::{Error, Result};

/// Portfolio shipped with the binary, used when no content file is configured
const BUNDLED_PORTFOLIO: &str = include_str!("default_portfolio.toml");

impl Portfolio {
    /// Parse and validate portfolio content from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let portfolio: Portfolio =
            toml::from_str(content).map_err(|e| Error::Content(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Load portfolio content from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading portfolio content");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The bundled sample portfolio
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_PORTFOLIO)
    }

    /// Raw TOML of the bundled portfolio, for `folio init`
    pub fn bundled_source() -> &'static str {
        BUNDLED_PORTFOLIO
    }

    fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(Error::Content("profile.name must not be empty".to_string()));
        }
        for category in &self.skills {
            if let Some(skill) = category.skills.iter().find(|s| s.level > 100) {
                return Err(Error::Content(format!(
                    "skill '{}' in '{}' has level {} (max 100)",
                    skill.name, category.name, skill.level
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Section;

    #[test]
    fn test_bundled_portfolio_parses() {
        let portfolio = Portfolio::bundled().unwrap();
        assert_eq!(portfolio.item_count(Section::Blog), Some(7));
        assert_eq!(portfolio.item_count(Section::Skills), Some(4));
        assert_eq!(portfolio.item_count(Section::About), None);
        assert!(!portfolio.leadership.is_empty());
    }

    #[test]
    fn test_minimal_portfolio() {
        let portfolio = Portfolio::from_toml_str(
            r#"
            [profile]
            name = "Dana"
            headline = "Engineer"
            "#,
        )
        .unwrap();
        assert!(portfolio.blog.is_empty());
        assert_eq!(portfolio.item_count(Section::Projects), Some(0));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Portfolio::from_toml_str(
            r#"
            [profile]
            name = "  "
            headline = "Engineer"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn test_skill_level_over_100_rejected() {
        let err = Portfolio::from_toml_str(
            r#"
            [profile]
            name = "Dana"
            headline = "Engineer"

            [[skills]]
            name = "Languages"
            skills = [{ name = "Rust", level = 120 }]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Rust"));
    }

    #[test]
    fn test_bad_url_rejected() {
        let result = Portfolio::from_toml_str(
            r#"
            [profile]
            name = "Dana"
            headline = "Engineer"

            [[blog]]
            title = "Post"
            summary = "Summary"
            published = "2024-01-01"
            url = "not a url"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.toml");
        std::fs::write(&path, Portfolio::bundled_source()).unwrap();

        let portfolio = Portfolio::load(&path).unwrap();
        assert_eq!(portfolio.profile.name, "Alex Morgan");
        assert_eq!(
            portfolio.link_at(Section::Blog, 0).map(|u| u.as_str()),
            Some("https://blog.example.com/backpressure")
        );
        assert_eq!(portfolio.link_at(Section::Blog, 2), None);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Portfolio::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
