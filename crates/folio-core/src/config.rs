use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::carousel::Breakpoints;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub carousel: Breakpoints,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Portfolio content file; the bundled sample is used when unset
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            content_path: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Pixel width assumed per terminal column when mapping the terminal
    /// onto the carousel breakpoints
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u32,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Carousel slide animation
    #[serde(default)]
    pub transition: TransitionConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            cell_width_px: default_cell_width_px(),
            theme: ThemeConfig::default(),
            transition: TransitionConfig::default(),
        }
    }
}

/// Easing curve for carousel slides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the target
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

/// Slide animation applied to the carousel track offset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_transition_duration")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Redraw rate while a slide is in flight
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_transition_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a bare theme name or a table with 'name' and 'colors'
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Primary background
    pub bg0: Option<String>,
    /// Card background
    pub bg1: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Dimmed foreground
    pub muted: Option<String>,
    /// Accent color (focused borders, active dot)
    pub accent: Option<String>,
    /// Selection background
    pub selection: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub info: Option<String>,
}

/// Transactional email relay used by the contact form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Relay send endpoint
    #[serde(default = "default_contact_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    /// Public key / user id issued by the relay
    #[serde(default)]
    pub public_key: Option<String>,
    /// Recipient display name passed to the template
    #[serde(default)]
    pub to_name: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_contact_endpoint(),
            service_id: None,
            template_id: None,
            public_key: None,
            to_name: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl ContactConfig {
    /// Whether enough credentials are present to send mail
    pub fn is_configured(&self) -> bool {
        self.service_id.is_some() && self.template_id.is_some() && self.public_key.is_some()
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "<C-j>" (Ctrl+j), "<S-Tab>" (Shift+Tab), "<CR>" (Enter), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Switch to the next section
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Switch to the previous section
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,
    /// Slide the carousel forward one item
    #[serde(default = "default_key_carousel_next")]
    pub carousel_next: String,
    /// Slide the carousel back one item
    #[serde(default = "default_key_carousel_prev")]
    pub carousel_prev: String,
    /// Jump to the first position
    #[serde(default = "default_key_jump_to_first")]
    pub jump_to_first: String,
    /// Jump to the last position
    #[serde(default = "default_key_jump_to_last")]
    pub jump_to_last: String,
    /// Open the first visible item's link in the browser
    #[serde(default = "default_key_open_link")]
    pub open_link: String,
    /// Jump to the contact form
    #[serde(default = "default_key_contact")]
    pub contact: String,
    /// Show the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            carousel_next: default_key_carousel_next(),
            carousel_prev: default_key_carousel_prev(),
            jump_to_first: default_key_jump_to_first(),
            jump_to_last: default_key_jump_to_last(),
            open_link: default_key_open_link(),
            contact: default_key_contact(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_section() -> String { "<Tab>".to_string() }
fn default_key_prev_section() -> String { "<S-Tab>".to_string() }
fn default_key_carousel_next() -> String { "l".to_string() }
fn default_key_carousel_prev() -> String { "h".to_string() }
fn default_key_jump_to_first() -> String { "gg".to_string() }
fn default_key_jump_to_last() -> String { "G".to_string() }
fn default_key_open_link() -> String { "o".to_string() }
fn default_key_contact() -> String { "c".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_cell_width_px() -> u32 {
    8 // 96 columns reach the 768px tablet breakpoint
}

fn default_transition_duration() -> u64 {
    250
}

fn default_animation_fps() -> u32 {
    60
}

fn default_contact_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, falling back to defaults if it
    /// does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let config: Self = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Reject settings that cannot drive the UI
    pub fn validate(&self) -> crate::Result<()> {
        self.carousel.validate()?;
        if self.ui.cell_width_px == 0 {
            return Err(crate::Error::Config("ui.cell_width_px must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file written while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }

    /// Configured portfolio content file (with tilde expansion)
    pub fn content_path(&self) -> Option<PathBuf> {
        self.general.content_path.as_deref().map(expand_tilde)
    }

    /// Viewport width in pixels for a terminal `columns` wide
    pub fn viewport_width_px(&self, columns: u16) -> u32 {
        u32::from(columns).saturating_mul(self.ui.cell_width_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ui.cell_width_px, 8);
        assert_eq!(config.carousel, Breakpoints::default());
        assert_eq!(config.ui.transition.easing, EasingType::Cubic);
        assert!(!config.contact.is_configured());
        assert_eq!(config.keymap.jump_to_first, "gg");
    }

    #[test]
    fn test_partial_file() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "nord"

            [carousel]
            desktop_items = 4

            [contact]
            service_id = "svc"
            template_id = "tpl"
            public_key = "pk"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "nord");
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.carousel.desktop_items, 4);
        assert_eq!(config.carousel.tablet_min_width, 768);
        assert!(config.contact.is_configured());
    }

    #[test]
    fn test_theme_table_form() {
        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "dracula"
            colors = { accent = "#ff79c6" }
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff79c6"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.ui.cell_width_px = 10;
        config.keymap.carousel_next = "<Right>".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.ui.cell_width_px, 10);
        assert_eq!(loaded.keymap.carousel_next, "<Right>");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_invalid_breakpoints_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[carousel]\ntablet_items = 0\n").unwrap();
        assert!(matches!(AppConfig::load_from(&path), Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_viewport_width_mapping() {
        let config = AppConfig::default();
        assert_eq!(config.viewport_width_px(80), 640);
        assert_eq!(config.viewport_width_px(96), 768);
        assert_eq!(config.viewport_width_px(128), 1024);
    }
}
