//! Station logo resolution

use std::path::PathBuf;
use tracing::warn;

/// Resolves station logo file names against the skill's asset directory
///
/// Logos live in `{root}/ui/station-logos/`. Missing logos fall back to
/// `{root}/images/generic.png`.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path to a station logo, or the generic image if it is missing
    pub fn logo_path(&self, image_file: &str) -> PathBuf {
        let path = self.root.join("ui").join("station-logos").join(image_file);
        if path.exists() {
            path
        } else {
            warn!("{} could not be found, using default image", image_file);
            self.generic_image()
        }
    }

    pub fn generic_image(&self) -> PathBuf {
        self.root.join("images").join("generic.png")
    }
}
