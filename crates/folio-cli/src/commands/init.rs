use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use folio_core::{content::Portfolio, AppConfig};

/// Write a default config and a copy of the bundled portfolio next to it,
/// with the config pointing at the copy
pub fn run(config_path: &Path, force: bool) -> Result<()> {
    // The saved content_path must not depend on the working directory
    let config_path = std::path::absolute(config_path)
        .with_context(|| format!("Failed to resolve {}", config_path.display()))?;
    let config_path = config_path.as_path();
    let dir = config_path.parent().unwrap_or_else(|| Path::new("/"));
    let portfolio_path = dir.join("portfolio.toml");

    for path in [config_path, portfolio_path.as_path()] {
        if path.exists() && !force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    std::fs::write(&portfolio_path, Portfolio::bundled_source())
        .with_context(|| format!("Failed to write {}", portfolio_path.display()))?;

    let mut config = AppConfig::default();
    config.general.content_path = Some(portfolio_path.clone());
    config.save_to(config_path)?;

    info!("Initialized config at {}", config_path.display());
    println!("Wrote {}", config_path.display());
    println!("Wrote {}", portfolio_path.display());
    println!("\nEdit the portfolio file, then run `folio`.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_files() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        run(&config_path, false).unwrap();

        let config = AppConfig::load_from(&config_path).unwrap();
        let content_path = config.content_path().unwrap();
        assert_eq!(content_path, dir.path().join("portfolio.toml"));
        assert!(Portfolio::load(&content_path).is_ok());
    }

    #[test]
    fn test_init_relative_config_saves_absolute_content_path() {
        let dir = tempfile::tempdir().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        let result = run(Path::new("config.toml"), false);
        std::env::set_current_dir(previous).unwrap();
        result.unwrap();

        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        let content_path = config.content_path().unwrap();
        assert!(content_path.is_absolute());
        assert!(Portfolio::load(&content_path).is_ok());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "").unwrap();

        assert!(run(&config_path, false).is_err());
        assert!(run(&config_path, true).is_ok());
    }
}
