//! `manifest.json` data model
//!
//! Every run records the assets it wrote, with their documented pixel
//! dimensions, next to the PNG files. The `verify-assets` binary reads it back
//! to check the output contract.

use crate::asset::AssetSpec;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MANIFEST_FILE: &str = "manifest.json";

/// Root structure of a manifest.json file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Manifest {
    /// One entry per generated PNG, in write order
    pub images: Vec<ManifestEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// A single generated asset
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ManifestEntry {
    /// File name relative to the manifest's directory
    pub filename: String,

    pub width: u32,

    pub height: u32,

    /// What the asset is used for (e.g. "Web favicon")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Info {
    /// Manifest format version (currently 1)
    pub version: u8,

    /// The tool that wrote the manifest
    pub author: String,

    /// The asset style that was generated (e.g. "creative", "expo")
    pub style: String,
}

impl Manifest {
    /// Creates an empty manifest for the given style
    pub fn new(style: &str) -> Self {
        Self {
            images: Vec::new(),
            info: Info {
                version: 1,
                author: env!("CARGO_PKG_NAME").to_string(),
                style: style.to_string(),
            },
        }
    }

    pub fn add_image(&mut self, entry: ManifestEntry) {
        self.images.push(entry);
    }
}

impl From<&AssetSpec> for ManifestEntry {
    fn from(spec: &AssetSpec) -> Self {
        Self {
            filename: spec.file_name.to_string(),
            width: spec.width,
            height: spec.height,
            purpose: Some(spec.purpose.to_string()),
        }
    }
}

/// Writes `manifest.json` into `dir`
pub fn write_manifest(dir: &Path, manifest: &Manifest) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest).context("Failed to serialize manifest")?;
    std::fs::write(dir.join(MANIFEST_FILE), json).context("Failed to write manifest.json")
}

/// Reads `manifest.json` from `dir`
pub fn read_manifest(dir: &Path) -> Result<Manifest> {
    let path = dir.join(MANIFEST_FILE);
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid manifest: {}", path.display()))
}
