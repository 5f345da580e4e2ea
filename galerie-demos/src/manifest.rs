//! Declarative gallery description for the storyboard-style demo: page
//! geometry, content fit, and the image list live in a JSON file instead of
//! code.

use std::path::{Path, PathBuf};

use anyhow::Context;
use galerie::GalleryConfig;
use iced::ContentFit;
use serde::{Deserialize, Serialize};

/// Serializable spelling of [`ContentFit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    #[default]
    Contain,
    Cover,
    Fill,
    ScaleDown,
    None,
}

impl From<FitMode> for ContentFit {
    fn from(mode: FitMode) -> Self {
        match mode {
            FitMode::Contain => ContentFit::Contain,
            FitMode::Cover => ContentFit::Cover,
            FitMode::Fill => ContentFit::Fill,
            FitMode::ScaleDown => ContentFit::ScaleDown,
            FitMode::None => ContentFit::None,
        }
    }
}

/// A gallery described on disk. Image entries are either file paths or
/// http(s) URLs; [`is_remote`] tells them apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default = "defaults::title")]
    pub title: String,
    #[serde(default = "defaults::page_width")]
    pub page_width: f32,
    #[serde(default = "defaults::page_height")]
    pub page_height: f32,
    #[serde(default)]
    pub fit: FitMode,
    pub images: Vec<String>,
}

mod defaults {
    pub fn title() -> String {
        "Galerie".to_string()
    }

    pub fn page_width() -> f32 {
        440.0
    }

    pub fn page_height() -> f32 {
        300.0
    }
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading manifest at {}", path.display()))?;
        let manifest: Self = serde_json::from_str(&content)
            .with_context(|| format!("parsing manifest at {}", path.display()))?;
        Ok(manifest)
    }

    /// Locate a manifest: an explicit argument wins, then `manifest.json`
    /// in the working directory, then the user configuration directory.
    pub fn discover(argument: Option<String>) -> Option<PathBuf> {
        if let Some(argument) = argument {
            return Some(PathBuf::from(argument));
        }
        let local = PathBuf::from("manifest.json");
        if local.exists() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|dir| dir.join("galerie").join("manifest.json"))
            .filter(|path| path.exists())
    }

    /// Gallery configuration described by this manifest.
    pub fn gallery_config(&self) -> GalleryConfig {
        GalleryConfig::new(self.page_width, self.page_height).content_fit(self.fit.into())
    }
}

/// Whether a manifest entry points at a remote resource.
pub fn is_remote(entry: &str) -> bool {
    entry.starts_with("http://") || entry.starts_with("https://")
}
