//! Checks a generated asset directory against its manifest.

use crate::manifest::{read_manifest, ManifestEntry};
use anyhow::Result;
use image::{io::Reader as ImageReader, ImageFormat};
use std::path::Path;
use thiserror::Error;

/// Ways a generated file can break its documented contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("{file} does not exist")]
    Missing { file: String },

    #[error("{file} is not a PNG image")]
    NotPng { file: String },

    #[error("{file} could not be decoded: {reason}")]
    Undecodable { file: String, reason: String },

    #[error("{file} is {actual_width}x{actual_height}, expected {width}x{height}")]
    WrongSize {
        file: String,
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

/// Result of checking one manifest entry.
#[derive(Debug)]
pub struct Check {
    pub entry: ManifestEntry,
    pub outcome: Result<(), VerifyError>,
}

impl Check {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Check that `entry` exists in `dir`, is a decodable PNG and has the
/// documented dimensions.
pub fn verify_entry(dir: &Path, entry: &ManifestEntry) -> Result<(), VerifyError> {
    let file = entry.filename.clone();
    let path = dir.join(&entry.filename);
    if !path.is_file() {
        return Err(VerifyError::Missing { file });
    }

    let undecodable = |reason: String| VerifyError::Undecodable {
        file: entry.filename.clone(),
        reason,
    };

    let reader = ImageReader::open(&path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| undecodable(err.to_string()))?;
    if reader.format() != Some(ImageFormat::Png) {
        return Err(VerifyError::NotPng { file });
    }

    let img = reader.decode().map_err(|err| undecodable(err.to_string()))?;
    if (img.width(), img.height()) != (entry.width, entry.height) {
        return Err(VerifyError::WrongSize {
            file,
            width: entry.width,
            height: entry.height,
            actual_width: img.width(),
            actual_height: img.height(),
        });
    }

    Ok(())
}

/// Check every entry of `dir/manifest.json`.
pub fn verify_dir(dir: &Path) -> Result<Vec<Check>> {
    let manifest = read_manifest(dir)?;
    Ok(manifest
        .images
        .into_iter()
        .map(|entry| {
            let outcome = verify_entry(dir, &entry);
            Check { entry, outcome }
        })
        .collect())
}
