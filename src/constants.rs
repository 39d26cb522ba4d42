// SPDX-License-Identifier: GPL-3.0-only

//! Names of the on-disk capture session convention

/// Subdirectory of the session folder that holds the shot images
pub const IMAGES_FOLDER_NAME: &str = "Images";

/// Subdirectory of the session folder that holds reconstruction checkpoints
pub const CHECKPOINT_FOLDER_NAME: &str = "Checkpoint";

/// Subdirectory of the session folder that receives output model files
pub const MODELS_FOLDER_NAME: &str = "Models";

/// Prefix in front of the shot id in an image basename
pub const SHOT_FILE_PREFIX: &str = "IMG_";

/// Shot ids are zero-padded to this many digits when encoded
pub const SHOT_ID_PAD_WIDTH: usize = 4;

/// File extension of shot images
pub const SHOT_IMAGE_EXTENSION: &str = "HEIC";
