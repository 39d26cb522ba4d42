// SPDX-License-Identifier: GPL-3.0-only

//! Shot filename codec and the per-shot value type
//!
//! Shot images are named `IMG_NNNN.HEIC` where `NNNN` is the shot id
//! zero-padded to four digits (wider ids print at full width). Encoding
//! and parsing are pure inverse functions: for every id,
//! `parse_shot_id(&shot_image_path(dir, id)) == id`. Parsing enforces no
//! fixed width, so `IMG_7.HEIC` and `IMG_0007.HEIC` both decode to 7.

use crate::constants::{SHOT_FILE_PREFIX, SHOT_ID_PAD_WIDTH, SHOT_IMAGE_EXTENSION};
use crate::errors::ShotError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Details about a single captured shot file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotFileInfo {
    /// Location of the image file
    pub path: PathBuf,
    /// Numeric shot identifier parsed from the filename
    pub id: u32,
}

impl ShotFileInfo {
    /// Builds the record by parsing `path` against the shot naming scheme.
    pub fn new(path: PathBuf) -> Result<Self, ShotError> {
        let id = parse_shot_id(&path)?;
        Ok(Self { path, id })
    }
}

/// Encode `id` as a shot file basename, without the extension.
pub fn shot_basename(id: u32) -> String {
    format!("{}{:0width$}", SHOT_FILE_PREFIX, id, width = SHOT_ID_PAD_WIDTH)
}

/// Path of the image file for shot `id` inside `images_dir`.
pub fn shot_image_path(images_dir: &Path, id: u32) -> PathBuf {
    images_dir
        .join(shot_basename(id))
        .with_extension(SHOT_IMAGE_EXTENSION)
}

/// Pull the shot id back out of an encoded image path.
///
/// The basename (extension stripped) is split at its LAST separator; the
/// part up to and including the separator must equal the shot prefix and
/// the remainder must parse as `u32`. Each failure is reported distinctly.
pub fn parse_shot_id(path: &Path) -> Result<u32, ShotError> {
    let basename = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug!(basename = %basename, "Parsing shot id");

    let Some(separator) = basename.rfind('_') else {
        return Err(ShotError::MissingSeparator(basename));
    };
    if basename[..=separator] != *SHOT_FILE_PREFIX {
        return Err(ShotError::PrefixMismatch(basename));
    }
    match basename[separator + 1..].parse::<u32>() {
        Ok(id) => Ok(id),
        Err(_) => Err(ShotError::InvalidIndex(basename)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for id in [0u32, 1, 7, 9999, 10_000, 123_456, u32::MAX] {
            let path = shot_image_path(Path::new("/captures/Images"), id);
            assert_eq!(parse_shot_id(&path).unwrap(), id);
        }
    }

    #[test]
    fn test_basename_zero_padding() {
        assert_eq!(shot_basename(7), "IMG_0007");
        assert_eq!(shot_basename(9999), "IMG_9999");
        assert_eq!(shot_basename(10_000), "IMG_10000");
    }

    #[test]
    fn test_image_path() {
        assert_eq!(
            shot_image_path(Path::new("/captures/Images"), 7),
            Path::new("/captures/Images/IMG_0007.HEIC")
        );
    }

    #[test]
    fn test_parse_without_fixed_width() {
        assert_eq!(parse_shot_id(Path::new("IMG_07.HEIC")).unwrap(), 7);
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert!(matches!(
            parse_shot_id(Path::new("IMG0007.HEIC")),
            Err(ShotError::MissingSeparator(_))
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_prefix() {
        assert!(matches!(
            parse_shot_id(Path::new("SCAN_0007.HEIC")),
            Err(ShotError::PrefixMismatch(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric_index() {
        assert!(matches!(
            parse_shot_id(Path::new("IMG_00x7.HEIC")),
            Err(ShotError::InvalidIndex(_))
        ));
        assert!(matches!(
            parse_shot_id(Path::new("IMG_.HEIC")),
            Err(ShotError::InvalidIndex(_))
        ));
    }

    #[test]
    fn test_parse_splits_at_last_separator() {
        // "IMG_A_0007" has prefix "IMG_A_" at its last underscore
        assert!(matches!(
            parse_shot_id(Path::new("IMG_A_0007.HEIC")),
            Err(ShotError::PrefixMismatch(_))
        ));
    }
}
