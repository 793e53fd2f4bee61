use thiserror::Error;

/// Error types for the controller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// Page numbers start at 1
    #[error("Invalid page number: {0}")]
    InvalidPage(u32),

    /// Page size outside the selectable set
    #[error("Invalid page size: {0}")]
    InvalidPerPage(String),

    /// Upload triggered without a file in the input
    #[error("select a CSV file")]
    NoFileSelected,

    /// Chart labels and values must pair up one to one
    #[error("Chart shape mismatch: {labels} labels for {values} values")]
    ChartShape { labels: usize, values: usize },
}

/// Type alias for Result with ControllerError
pub type Result<T> = std::result::Result<T, ControllerError>;
