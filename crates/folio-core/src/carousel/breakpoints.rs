//! Viewport breakpoints that decide how many carousel items fit on screen.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Three-tier breakpoint table mapping a viewport width (px) to items per view.
///
/// Widths below `tablet_min_width` use `mobile_items`, widths below
/// `desktop_min_width` use `tablet_items`, everything wider uses
/// `desktop_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// First width (inclusive) treated as tablet
    #[serde(default = "default_tablet_min_width")]
    pub tablet_min_width: u32,
    /// First width (inclusive) treated as desktop
    #[serde(default = "default_desktop_min_width")]
    pub desktop_min_width: u32,
    /// Items visible below the tablet breakpoint
    #[serde(default = "default_mobile_items")]
    pub mobile_items: usize,
    /// Items visible between the tablet and desktop breakpoints
    #[serde(default = "default_tablet_items")]
    pub tablet_items: usize,
    /// Items visible at or above the desktop breakpoint
    #[serde(default = "default_desktop_items")]
    pub desktop_items: usize,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet_min_width: default_tablet_min_width(),
            desktop_min_width: default_desktop_min_width(),
            mobile_items: default_mobile_items(),
            tablet_items: default_tablet_items(),
            desktop_items: default_desktop_items(),
        }
    }
}

impl Breakpoints {
    /// Items visible at once for the given viewport width.
    ///
    /// Never returns 0, even for a table that skipped validation.
    pub fn items_per_view(&self, width: u32) -> usize {
        let items = if width < self.tablet_min_width {
            self.mobile_items
        } else if width < self.desktop_min_width {
            self.tablet_items
        } else {
            self.desktop_items
        };
        items.max(1)
    }

    /// Check that thresholds ascend and every tier shows at least one item.
    pub fn validate(&self) -> Result<()> {
        if self.tablet_min_width > self.desktop_min_width {
            return Err(Error::Config(format!(
                "carousel.tablet_min_width ({}) must not exceed carousel.desktop_min_width ({})",
                self.tablet_min_width, self.desktop_min_width
            )));
        }
        for (name, items) in [
            ("mobile_items", self.mobile_items),
            ("tablet_items", self.tablet_items),
            ("desktop_items", self.desktop_items),
        ] {
            if items == 0 {
                return Err(Error::Config(format!("carousel.{name} must be at least 1")));
            }
        }
        Ok(())
    }
}

fn default_tablet_min_width() -> u32 {
    768
}

fn default_desktop_min_width() -> u32 {
    1024
}

fn default_mobile_items() -> usize {
    1
}

fn default_tablet_items() -> usize {
    2
}

fn default_desktop_items() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_boundaries() {
        let bp = Breakpoints::default();
        assert_eq!(bp.items_per_view(0), 1);
        assert_eq!(bp.items_per_view(767), 1);
        assert_eq!(bp.items_per_view(768), 2);
        assert_eq!(bp.items_per_view(1023), 2);
        assert_eq!(bp.items_per_view(1024), 3);
        assert_eq!(bp.items_per_view(4096), 3);
    }

    #[test]
    fn test_custom_table() {
        let bp = Breakpoints {
            tablet_min_width: 60,
            desktop_min_width: 120,
            mobile_items: 1,
            tablet_items: 3,
            desktop_items: 5,
        };
        assert_eq!(bp.items_per_view(59), 1);
        assert_eq!(bp.items_per_view(60), 3);
        assert_eq!(bp.items_per_view(120), 5);
        assert!(bp.validate().is_ok());
    }

    #[test]
    fn test_zero_items_never_leaks() {
        let bp = Breakpoints {
            mobile_items: 0,
            ..Default::default()
        };
        assert_eq!(bp.items_per_view(10), 1);
        assert!(bp.validate().is_err());
    }

    #[test]
    fn test_descending_thresholds_rejected() {
        let bp = Breakpoints {
            tablet_min_width: 1200,
            desktop_min_width: 1024,
            ..Default::default()
        };
        assert!(matches!(bp.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let bp: Breakpoints = toml::from_str("desktop_items = 4").unwrap();
        assert_eq!(bp.desktop_items, 4);
        assert_eq!(bp.tablet_min_width, 768);
        assert_eq!(bp.mobile_items, 1);
    }
}
