use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NupError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid configuration: {parameter}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to compose")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, NupError>;

/// Size of a page in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Height divided by width
    pub fn aspect_ratio(self) -> f32 {
        self.height / self.width
    }
}

impl From<(f32, f32)> for PageSize {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// Statistics about a 4-up composition
#[derive(Debug, Clone, PartialEq)]
pub struct NupStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Source pages placed into quadrants (excludes the title page)
    pub placed_pages: usize,
    /// Title page plus the blank page following it (0 or 2)
    pub title_pages: usize,
    /// Number of composed 4-up sheets
    pub sheets: usize,
    /// Output page count
    pub output_pages: usize,
    /// Quadrants filled with a blank page on the last sheet
    pub blank_slots: usize,
}
