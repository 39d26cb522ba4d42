// SPDX-License-Identifier: GPL-3.0-only

//! Error types for capture session management

use std::fmt;

/// Result type alias using CaptureError
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Main error type for the crate
#[derive(Debug, Clone)]
pub enum CaptureError {
    /// Session folder errors
    Folder(FolderError),
    /// Shot filename errors
    Shot(ShotError),
    /// Configuration errors
    Config(String),
}

/// Session folder errors
#[derive(Debug, Clone)]
pub enum FolderError {
    /// The capture root does not name a concrete filesystem location
    NotFileLocation(String),
    /// Something already exists at the target path
    AlreadyExists(String),
    /// The directory was absent after creation
    CreationFailed(String),
    /// Underlying I/O failure
    Io(String),
}

/// Shot filename errors
///
/// All three variants mean the filename does not follow the shot naming
/// scheme; they keep the failing stage distinct.
#[derive(Debug, Clone)]
pub enum ShotError {
    /// The basename has no separator character
    MissingSeparator(String),
    /// The basename prefix up to the separator does not match
    PrefixMismatch(String),
    /// The suffix after the separator is not an unsigned integer
    InvalidIndex(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Folder(e) => write!(f, "Folder error: {}", e),
            CaptureError::Shot(e) => write!(f, "Shot error: {}", e),
            CaptureError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl fmt::Display for FolderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderError::NotFileLocation(path) => {
                write!(f, "Not a concrete file location: {}", path)
            }
            FolderError::AlreadyExists(path) => write!(f, "Already exists: {}", path),
            FolderError::CreationFailed(path) => {
                write!(f, "Directory absent after creation: {}", path)
            }
            FolderError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::MissingSeparator(name) => {
                write!(f, "No separator in shot filename: {}", name)
            }
            ShotError::PrefixMismatch(name) => {
                write!(f, "Shot filename prefix does not match: {}", name)
            }
            ShotError::InvalidIndex(name) => {
                write!(f, "Shot filename index is not an unsigned integer: {}", name)
            }
        }
    }
}

impl std::error::Error for CaptureError {}
impl std::error::Error for FolderError {}
impl std::error::Error for ShotError {}

// Conversions from sub-errors to CaptureError
impl From<FolderError> for CaptureError {
    fn from(err: FolderError) -> Self {
        CaptureError::Folder(err)
    }
}

impl From<ShotError> for CaptureError {
    fn from(err: ShotError) -> Self {
        CaptureError::Shot(err)
    }
}

// Conversion for I/O errors surfaced while touching session folders
impl From<std::io::Error> for FolderError {
    fn from(err: std::io::Error) -> Self {
        FolderError::Io(err.to_string())
    }
}
