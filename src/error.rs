//! Errors that can stop either program before or during its frame loop.
//!
//! SDL reports failures as plain strings; they are carried verbatim.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("SDL could not initialize: {0}")]
    SubsystemInit(String),

    #[error("window could not be created: {0}")]
    WindowCreation(String),

    #[error("unable to load image {}: {reason}", path.display())]
    AssetLoad { path: PathBuf, reason: String },

    #[error("unable to optimize image {}: {reason}", path.display())]
    AssetConversion { path: PathBuf, reason: String },

    #[error("frame could not be presented: {0}")]
    FramePresentation(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_errors_name_the_file() {
        let err = AppError::AssetLoad {
            path: PathBuf::from("rocket.bmp"),
            reason: "Couldn't open rocket.bmp".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unable to load image rocket.bmp: Couldn't open rocket.bmp"
        );

        let err = AppError::AssetConversion {
            path: PathBuf::from("plane1.bmp"),
            reason: "bad format".to_string(),
        };
        assert!(err.to_string().contains("plane1.bmp"));
    }

    #[test]
    fn init_errors_carry_sdl_message() {
        let err = AppError::SubsystemInit("No available video device".to_string());
        assert_eq!(err.to_string(), "SDL could not initialize: No available video device");
    }
}
