//! Shell configuration: animation timings, gallery settings and an optional
//! menu template override. Every field has a default, so an empty JSON
//! object is a valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::NavResult;
use crate::menu::MenuTemplate;

/// Timings for the side menu animations (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Panel slide in/out
    pub panel_slide_ms: u64,
    /// Height animation of a single sub-item
    pub item_duration_ms: u64,
    /// Delay between successive sub-items
    pub item_stagger_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            panel_slide_ms: 500,
            item_duration_ms: 300,
            item_stagger_ms: 100,
        }
    }
}

impl AnimationConfig {
    pub fn panel_slide(&self) -> Duration {
        Duration::from_millis(self.panel_slide_ms)
    }

    pub fn item_duration(&self) -> Duration {
        Duration::from_millis(self.item_duration_ms)
    }

    pub fn item_stagger(&self) -> Duration {
        Duration::from_millis(self.item_stagger_ms)
    }

    /// Zero-length timings, handy for tests that only care about end state
    pub fn instant() -> Self {
        Self {
            panel_slide_ms: 0,
            item_duration_ms: 0,
            item_stagger_ms: 0,
        }
    }
}

/// Image gallery settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Number of images in the gallery
    pub image_count: usize,
    /// Fade-out of the outgoing image (milliseconds)
    pub fade_ms: u64,
    /// Directory images are served from
    pub image_dir: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            image_count: 8,
            fade_ms: 300,
            image_dir: "/images".to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    /// Full-size image for zero-based `index`
    pub fn image_src(&self, index: usize) -> String {
        format!("{}/photo{}.jpg", self.image_dir, index + 1)
    }

    /// Thumbnail for zero-based `index`
    pub fn thumbnail_src(&self, index: usize) -> String {
        format!("{}/photo{}_thum.jpg", self.image_dir, index + 1)
    }
}

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub animation: AnimationConfig,
    pub gallery: GalleryConfig,
    /// Replaces the stock site menu when present
    pub menu: Option<MenuTemplate>,
}

impl ShellConfig {
    /// Parse a JSON configuration document
    pub fn from_json_str(json: &str) -> NavResult<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Menu template to mount: the override, or the stock site menu
    pub fn menu_template(&self) -> MenuTemplate {
        self.menu.clone().unwrap_or_default()
    }
}
