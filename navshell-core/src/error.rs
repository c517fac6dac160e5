//! Error types for the navigation shell

use thiserror::Error;

/// Main error type for menu and carousel operations
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Menu entry {0} does not exist in the template")]
    InvalidEntryIndex(usize),

    #[error("'{0}' is not a navigable pathname")]
    InvalidLeafTarget(String),

    #[error("Image {index} is out of range (gallery holds {len} images)")]
    InvalidImageIndex { index: usize, len: usize },

    #[error("Invalid menu template: {0}")]
    InvalidTemplate(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for navigation shell operations
pub type NavResult<T> = Result<T, NavError>;
