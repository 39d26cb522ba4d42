// SPDX-License-Identifier: GPL-3.0-only

//! Capture session folder management
//!
//! Each capture run gets its own timestamped directory under the capture
//! root (the user documents directory unless configured otherwise):
//!
//! ```text
//! <root>/<ISO-8601 timestamp>/
//!   Images/        shot images named IMG_NNNN.HEIC
//!   Checkpoint/    reconstruction checkpoint data
//!   Models/        output model files
//! ```
//!
//! [`CaptureFolderManager`] creates that layout once at construction and
//! keeps a published, sorted list of the shots found in `Images/`. The
//! list is only ever replaced wholesale by [`rescan`], never mutated in
//! place, so observers cannot see a half-built or half-sorted view.
//!
//! [`rescan`]: CaptureFolderManager::rescan

use crate::config::CaptureConfig;
use crate::constants::{
    CHECKPOINT_FOLDER_NAME, IMAGES_FOLDER_NAME, MODELS_FOLDER_NAME, SHOT_IMAGE_EXTENSION,
};
use crate::errors::{CaptureResult, FolderError};
use crate::shot::ShotFileInfo;
use std::path::{Path, PathBuf};
use tokio::sync::watch;
use tracing::{debug, error, info};

/// Creates and owns the folder tree of one capture session
#[derive(Debug)]
pub struct CaptureFolderManager {
    /// Top-level session directory, named with the creation timestamp
    capture_folder: PathBuf,
    /// Subdirectory of `capture_folder` for shot images
    images_folder: PathBuf,
    /// Subdirectory of `capture_folder` for reconstruction checkpoints
    checkpoint_folder: PathBuf,
    /// Subdirectory of `capture_folder` for output model files
    models_folder: PathBuf,
    /// Published shot list, replaced atomically on every rescan
    shots_tx: watch::Sender<Vec<ShotFileInfo>>,
}

impl CaptureFolderManager {
    /// Creates a new session folder tree under the user documents directory.
    pub fn new() -> CaptureResult<Self> {
        let root = dirs::document_dir().ok_or_else(|| {
            FolderError::NotFileLocation("no documents directory for this user".to_string())
        })?;
        Self::with_root(&root)
    }

    /// Creates a new session folder tree under an explicit capture root.
    pub fn with_root(root: &Path) -> CaptureResult<Self> {
        if !root.is_absolute() {
            return Err(FolderError::NotFileLocation(root.display().to_string()).into());
        }

        let capture_folder = create_capture_directory(root)?;

        let images_folder = capture_folder.join(IMAGES_FOLDER_NAME);
        create_directory_recursively(&images_folder)?;

        let checkpoint_folder = capture_folder.join(CHECKPOINT_FOLDER_NAME);
        create_directory_recursively(&checkpoint_folder)?;

        let models_folder = capture_folder.join(MODELS_FOLDER_NAME);
        create_directory_recursively(&models_folder)?;

        let (shots_tx, _) = watch::channel(Vec::new());

        Ok(Self {
            capture_folder,
            images_folder,
            checkpoint_folder,
            models_folder,
            shots_tx,
        })
    }

    /// Creates a new session folder tree at the configured capture root.
    pub fn from_config(config: &CaptureConfig) -> CaptureResult<Self> {
        match &config.capture_root {
            Some(root) => Self::with_root(root),
            None => Self::new(),
        }
    }

    /// Top-level directory of this capture session
    pub fn capture_folder(&self) -> &Path {
        &self.capture_folder
    }

    /// Subdirectory holding the shot images
    pub fn images_folder(&self) -> &Path {
        &self.images_folder
    }

    /// Subdirectory holding reconstruction checkpoints
    pub fn checkpoint_folder(&self) -> &Path {
        &self.checkpoint_folder
    }

    /// Subdirectory receiving output model files
    pub fn models_folder(&self) -> &Path {
        &self.models_folder
    }

    /// Current shot list, sorted by ascending id
    pub fn shots(&self) -> Vec<ShotFileInfo> {
        self.shots_tx.borrow().clone()
    }

    /// Subscribe to shot list updates.
    ///
    /// The receiver observes each published list as a whole; partial
    /// updates are never sent.
    pub fn subscribe(&self) -> watch::Receiver<Vec<ShotFileInfo>> {
        self.shots_tx.subscribe()
    }

    /// Rebuilds the shot list from a full scan of the images folder.
    ///
    /// Entries that do not carry a parseable shot id are logged and
    /// dropped from the result; they never abort the scan. The new list
    /// is sorted before it replaces the published one, in a single
    /// update.
    pub async fn rescan(&self) -> CaptureResult<()> {
        debug!(path = %self.images_folder.display(), "Rescanning images folder");

        let images_folder = self.images_folder.clone();
        let mut new_shots = tokio::task::spawn_blocking(move || {
            let mut shots = Vec::new();
            for entry in std::fs::read_dir(&images_folder)? {
                let path = entry?.path();
                if path
                    .file_name()
                    .is_some_and(|name| name.to_string_lossy().starts_with('.'))
                {
                    continue;
                }
                if path.extension().and_then(|ext| ext.to_str()) != Some(SHOT_IMAGE_EXTENSION) {
                    continue;
                }
                match ShotFileInfo::new(path.clone()) {
                    Ok(shot) => shots.push(shot),
                    Err(err) => {
                        error!(
                            path = %path.display(),
                            error = %err,
                            "Skipping image without a parseable shot id"
                        );
                        continue;
                    }
                }
            }
            Ok::<_, FolderError>(shots)
        })
        .await
        .map_err(|e| FolderError::Io(e.to_string()))??;

        // Sort before publishing; the published list is replaced in one
        // step and is never visible mid-build.
        new_shots.sort_by_key(|shot| shot.id);
        let count = new_shots.len();
        self.shots_tx.send_replace(new_shots);

        info!(count, "Shot list rebuilt");
        Ok(())
    }
}

/// Creates the timestamped session directory under `root`.
fn create_capture_directory(root: &Path) -> Result<PathBuf, FolderError> {
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let capture_folder = root.join(timestamp);

    info!(path = %capture_folder.display(), "Creating capture folder");
    std::fs::create_dir_all(&capture_folder).map_err(|e| {
        error!(path = %capture_folder.display(), error = %e, "Failed to create capture folder");
        FolderError::Io(e.to_string())
    })?;

    if !capture_folder.is_dir() {
        return Err(FolderError::CreationFailed(
            capture_folder.display().to_string(),
        ));
    }
    Ok(capture_folder)
}

/// Creates `dir` along with any missing parents.
///
/// Fails when `dir` is not an absolute path, when anything already exists
/// at `dir`, or when the directory is absent after creation. Pre-existing
/// content is never touched.
pub fn create_directory_recursively(dir: &Path) -> Result<(), FolderError> {
    if !dir.is_absolute() {
        return Err(FolderError::NotFileLocation(dir.display().to_string()));
    }
    if dir.exists() {
        error!(path = %dir.display(), "Target already exists");
        return Err(FolderError::AlreadyExists(dir.display().to_string()));
    }

    debug!(path = %dir.display(), "Creating directory recursively");
    std::fs::create_dir_all(dir)?;

    if !dir.is_dir() {
        error!(path = %dir.display(), "Directory absent after creation");
        return Err(FolderError::CreationFailed(dir.display().to_string()));
    }
    Ok(())
}
